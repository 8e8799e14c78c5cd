//! Terminal display module
//!
//! Handles rich terminal output with automatic TTY detection.

mod formatter;
mod terminal;

pub use formatter::{eprint_markdown, print_markdown};
