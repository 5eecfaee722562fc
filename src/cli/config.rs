use crate::config::{self, Config};
use crate::error::Result;

/// Print the loaded configuration as indented JSON
pub fn dump(config: &Config) -> Result<()> {
    println!("{}", config::dump(config)?);
    Ok(())
}
