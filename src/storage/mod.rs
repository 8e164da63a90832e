//! Flat-text persistence for catalogs, students, and class periods
//!
//! Three line-oriented formats, kept human-editable:
//! - catalog: one `label:::brief:::description` line per learning target
//! - student: comma-separated `key: value` identity fields plus a
//!   `scores: {...}` map literal
//! - class period: an index file naming the catalog file and one student
//!   file per student
//!
//! Writers validate reserved substrings before writing so that every
//! written record parses back to an equal value.

mod catalog;
mod class_period;
mod student;

pub use catalog::{load_catalog, parse_catalog, render_catalog, save_catalog};
pub use class_period::{load_class_period, save_class_period};
pub use student::{load_student, parse_student, render_student, save_student};
