//! sbgrader - standards-based grading engine and report generator
//!
//! This library computes course grades from per-learning-target score
//! histories (percent met, piecewise curving, tier resolution) and
//! generates scenario-specific study advisories and grade reports.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod advice;
pub mod error;
pub mod gradebook;
pub mod grading;
pub mod models;
pub mod output;
pub mod prefs;
pub mod report;
pub mod storage;
