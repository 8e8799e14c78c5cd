//! Command-line interface module
//!
//! One function per command, each running a single engine operation and
//! printing the rendered result:
//! - new: Set up a blank timecard
//! - clockin / clockout: Start and end a shift
//! - print: Summarize logged hours
pub mod clock;
pub mod new;
pub mod print;
