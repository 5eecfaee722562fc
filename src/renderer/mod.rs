//! Checklist renderer module
//!
//! Renders checklists as a plain-text console preview and as an RTF
//! document ready for printing.

mod heading;
mod rtf;

pub use heading::{escape_rtf, format_heading};

use chrono::NaiveDate;

use crate::config::Config;
use crate::error::Result;
use crate::models::{Checklist, DayChecklist};
use rtf::RtfDocument;

/// Unchecked ballot box used in the preview
pub const CHECKBOX: char = '☐';

/// Renderer for checklists
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Unescaped heading for a date
    pub fn heading(&self, date: NaiveDate) -> Result<String> {
        format_heading(self.config, date)
    }

    /// Render one day's preview block: heading, checkbox lines, blank line
    pub fn render_preview(&self, day: &DayChecklist) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.heading(day.date)?);
        output.push('\n');

        for task in &day.tasks {
            output.push_str(&format!("{}  {}\n", CHECKBOX, task));
        }

        output.push('\n');
        Ok(output)
    }

    /// Render the full RTF document
    pub fn render_document(&self, checklist: &Checklist) -> Result<String> {
        let mut doc = RtfDocument::new();

        for day in &checklist.days {
            doc.heading(&escape_rtf(&self.heading(day.date)?));

            let page_break = checklist.breaks_after(day);
            let last = day.tasks.len().saturating_sub(1);
            for (i, task) in day.tasks.iter().enumerate() {
                doc.task(&escape_rtf(task), page_break && i == last);
            }
        }

        Ok(doc.finish())
    }
}
