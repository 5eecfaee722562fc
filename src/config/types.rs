use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// English weekday names, as produced by `%A`, that must be translated
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English month names, as produced by `%B`, that must be translated
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DEFAULT_GRACE_SECONDS: u64 = 5;

/// Checklist configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// English weekday/month name to localized name
    pub translations: BTreeMap<String, String>,

    /// Heading template with `DAY`, `MONTH` and `DATE` placeholders
    pub heading: String,

    /// Tasks applied to every date
    pub daily: Vec<String>,

    /// Extra tasks per weekday
    pub specific: WeeklyTasks,

    /// Print handler settings
    #[serde(default, skip_serializing_if = "PrintSettings::is_default")]
    pub print: PrintSettings,
}

/// Weekday-specific task lists, one slot per weekday starting at Monday.
///
/// On disk this is an object keyed by ISO weekday number (`"1"` is Monday,
/// `"7"` is Sunday). Every key must be present; a `null` value means the
/// weekday has no extra tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Option<Vec<String>>>",
    into = "BTreeMap<String, Option<Vec<String>>>"
)]
pub struct WeeklyTasks([Option<Vec<String>>; 7]);

impl WeeklyTasks {
    /// Tasks configured for a weekday, `None` when the weekday has none
    pub fn get(&self, weekday: Weekday) -> Option<&[String]> {
        self.0[weekday.num_days_from_monday() as usize].as_deref()
    }

    #[cfg(test)]
    pub fn set(&mut self, weekday: Weekday, tasks: Option<Vec<String>>) {
        self.0[weekday.num_days_from_monday() as usize] = tasks;
    }
}

impl TryFrom<BTreeMap<String, Option<Vec<String>>>> for WeeklyTasks {
    type Error = String;

    fn try_from(mut map: BTreeMap<String, Option<Vec<String>>>) -> Result<Self, Self::Error> {
        let mut slots: [Option<Vec<String>>; 7] = Default::default();

        for (index, slot) in slots.iter_mut().enumerate() {
            let key = (index + 1).to_string();
            match map.remove(&key) {
                Some(tasks) => *slot = tasks,
                None => return Err(format!("missing weekday \"{}\" in `specific`", key)),
            }
        }

        if let Some(key) = map.keys().next() {
            return Err(format!(
                "unknown weekday \"{}\" in `specific` (expected 1-7)",
                key
            ));
        }

        Ok(Self(slots))
    }
}

impl From<WeeklyTasks> for BTreeMap<String, Option<Vec<String>>> {
    fn from(tasks: WeeklyTasks) -> Self {
        tasks
            .0
            .into_iter()
            .enumerate()
            .map(|(index, slot)| ((index + 1).to_string(), slot))
            .collect()
    }
}

/// Print handler settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PrintSettings {
    /// Program and arguments used to print; `{file}` is replaced with the
    /// document path. Uses the platform default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,

    /// Seconds to wait for the print job before deleting the document
    pub grace_seconds: u64,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            command: None,
            grace_seconds: DEFAULT_GRACE_SECONDS,
        }
    }
}

impl PrintSettings {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Config {
    /// Names that have no entry in `translations`
    pub fn missing_translations(&self) -> Vec<&'static str> {
        WEEKDAY_NAMES
            .iter()
            .chain(MONTH_NAMES.iter())
            .filter(|name| !self.translations.contains_key(**name))
            .copied()
            .collect()
    }
}
