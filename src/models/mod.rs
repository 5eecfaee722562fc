//! Data models module
//!
//! Date ranges and the per-date checklists built from the configuration.

pub mod checklist;
pub mod dates;

pub use checklist::{Checklist, DayChecklist};
pub use dates::{DateRange, DateSpec};
