use chrono::{Datelike, NaiveDate};

use super::dates::DateRange;
use crate::config::Config;

/// Tasks to tick off on a single date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayChecklist {
    pub date: NaiveDate,
    /// Daily tasks followed by the weekday's specific tasks
    pub tasks: Vec<String>,
}

impl DayChecklist {
    pub fn build(config: &Config, date: NaiveDate) -> Self {
        let mut tasks = config.daily.clone();
        if let Some(specific) = config.specific.get(date.weekday()) {
            tasks.extend(specific.iter().cloned());
        }

        Self { date, tasks }
    }
}

/// Checklists for every date in a range
#[derive(Debug, Clone)]
pub struct Checklist {
    pub range: DateRange,
    pub days: Vec<DayChecklist>,
}

impl Checklist {
    pub fn build(config: &Config, range: DateRange) -> Self {
        let days = range
            .dates()
            .map(|date| DayChecklist::build(config, date))
            .collect();

        Self { range, days }
    }

    /// Whether a page break follows this day's block
    pub fn breaks_after(&self, day: &DayChecklist) -> bool {
        !self.range.is_last(day.date)
    }

    pub fn task_count(&self) -> usize {
        self.days.iter().map(|d| d.tasks.len()).sum()
    }
}
