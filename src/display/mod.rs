//! Terminal display module
//!
//! Prints the checklist preview, styled when stdout is a colour TTY.

mod formatter;
mod terminal;

pub use formatter::print_preview;
