//! Command implementations

mod grade;
mod prefs;
mod report;
mod roster;
mod score;
mod target;

pub use grade::grade;
pub use prefs::prefs_cmd;
pub use report::report;
pub use roster::roster;
pub use score::score;
pub use target::target_cmd;
