//! Command-line interface module
//!
//! - config: dump the loaded configuration
//! - gen: preview, confirm, save and print a checklist
//! - confirm: the yes/no prompt between preview and output
pub mod config;
pub mod confirm;
pub mod gen;
