//! Configuration module
//!
//! Loads the checklist configuration (JSON, or TOML by extension) and dumps
//! it back out for inspection.

mod types;

#[allow(unused_imports)]
pub use types::{Config, PrintSettings, WeeklyTasks, MONTH_NAMES, WEEKDAY_NAMES};

use crate::error::{ChecklistError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Default config location: `config.json` next to the executable
pub fn default_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok())
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILENAME)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// Load and validate configuration from a JSON or TOML file
pub fn load(path: &Path) -> Result<Config> {
    if !path.is_file() {
        return Err(ChecklistError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ChecklistError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config = parse(&content, path)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Parse config text; the path picks the format and names the file in errors
fn parse(content: &str, path: &Path) -> Result<Config> {
    let invalid = |e: &dyn std::fmt::Display| {
        ChecklistError::Config(format!("Invalid config '{}': {}", path.display(), e))
    };

    let config: Config = if is_toml(path) {
        toml::from_str(content).map_err(|e| invalid(&e))?
    } else {
        serde_json::from_str(content).map_err(|e| invalid(&e))?
    };

    let missing = config.missing_translations();
    if !missing.is_empty() {
        return Err(ChecklistError::Config(format!(
            "Missing translations for: {}",
            missing.join(", ")
        )));
    }

    Ok(config)
}

/// Serialize configuration as tab-indented JSON
pub fn dump(config: &Config) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut serializer)?;

    String::from_utf8(buf)
        .map_err(|e| ChecklistError::Config(format!("Failed to dump config: {}", e)))
}

/// Norwegian sample configuration shared by unit tests
#[cfg(test)]
pub fn sample_config() -> Config {
    parse(SAMPLE_JSON, Path::new(CONFIG_FILENAME)).unwrap()
}

#[cfg(test)]
pub const SAMPLE_JSON: &str = r#"{
    "translations": {
        "Monday": "Mandag", "Tuesday": "Tirsdag", "Wednesday": "Onsdag",
        "Thursday": "Torsdag", "Friday": "Fredag", "Saturday": "Lørdag",
        "Sunday": "Søndag",
        "January": "januar", "February": "februar", "March": "mars",
        "April": "april", "May": "mai", "June": "juni", "July": "juli",
        "August": "august", "September": "september", "October": "oktober",
        "November": "november", "December": "desember"
    },
    "heading": "DAY DATE. MONTH",
    "daily": ["Water plants", "Feed the cat"],
    "specific": {
        "1": null, "2": null, "3": ["Gå tur"], "4": null,
        "5": null, "6": ["Take out trash"], "7": null
    }
}"#;
