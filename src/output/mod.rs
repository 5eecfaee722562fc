//! Output module
//!
//! Saves the rendered document and hands it to the system print handler.

mod printer;

pub use printer::print_and_remove;

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Write the document, replacing any existing file
pub fn save(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document)?;
    log::debug!("wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}
