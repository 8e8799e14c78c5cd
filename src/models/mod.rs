//! Data models module
//!
//! Defines the timecard document and its shift records.
//! Includes TimeRecord, Timecard, and DurationParts.

pub mod duration;
pub mod record;
pub mod timecard;

pub use duration::DurationParts;
pub use record::TimeRecord;
pub use timecard::Timecard;
