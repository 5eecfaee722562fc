use chrono::{Datelike, Duration, NaiveDate};
use std::str::FromStr;

use crate::error::{ChecklistError, Result};

const TOMORROW: &str = "tomorrow";
const WEEKEND: &str = "weekend";

/// A date argument: an explicit date or one of the relative sentinels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpec {
    /// The day after today
    Tomorrow,
    /// The upcoming Sunday
    Weekend,
    /// An explicit `YYYY-MM-DD` date
    Date(NaiveDate),
}

impl FromStr for DateSpec {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            TOMORROW => Ok(Self::Tomorrow),
            WEEKEND => Ok(Self::Weekend),
            _ => NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self::Date),
        }
    }
}

impl DateSpec {
    /// Parse a CLI date argument, labelling failures with the flag they came from
    pub fn parse_arg(value: &str, label: &str) -> Result<Self> {
        value.parse::<Self>().map_err(|e| {
            ChecklistError::InvalidDate(format!("Invalid {} date: '{}': {}", label, value, e))
        })
    }

    /// Resolve as a start date
    pub fn resolve_start(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Tomorrow => today + Duration::days(1),
            Self::Weekend => upcoming_sunday(today),
            Self::Date(date) => date,
        }
    }

    /// Resolve as an end date; `Weekend` counts from the resolved start
    pub fn resolve_end(self, start: NaiveDate, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Tomorrow => today + Duration::days(1),
            Self::Weekend => upcoming_sunday(start),
            Self::Date(date) => date,
        }
    }
}

/// First Sunday strictly after `from` when `from` is a Sunday, otherwise
/// the first Sunday on or after it
pub fn upcoming_sunday(from: NaiveDate) -> NaiveDate {
    let offset = 6 - i64::from(from.weekday().num_days_from_monday());
    let offset = if offset == 0 { 7 } else { offset };
    from + Duration::days(offset)
}

/// Inclusive, non-empty range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ChecklistError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of dates in the range, both endpoints included
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Every date from start to end, one day at a time
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.len())
    }

    pub fn is_last(&self, date: NaiveDate) -> bool {
        date == self.end
    }
}
