use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use crate::cli::confirm;
use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::models::{Checklist, DateRange, DateSpec};
use crate::output;
use crate::renderer::Renderer;

/// Options for generating a checklist
#[derive(Debug, Clone)]
pub struct GenOptions {
    /// Start date argument (`YYYY-MM-DD` or `tomorrow`)
    pub start_date: String,
    /// End date argument (`YYYY-MM-DD` or `weekend`)
    pub end_date: String,
    /// Where the RTF document is written
    pub out_file: PathBuf,
    /// Save the document but do not print it
    pub no_print: bool,
}

/// Generate, preview, confirm, save and print a checklist
pub fn run(config: &Config, options: &GenOptions) -> Result<()> {
    let today = Local::now().date_naive();
    let range = resolve_range(&options.start_date, &options.end_date, today)?;
    log::debug!(
        "checklist range {} to {} ({} days)",
        range.start(),
        range.end(),
        range.len()
    );

    let checklist = Checklist::build(config, range);
    let renderer = Renderer::new(config);

    // Preview
    for day in &checklist.days {
        display::print_preview(&renderer.render_preview(day)?);
    }

    if !confirm::confirm_stdin("Looks good?")? {
        return Ok(());
    }

    let document = renderer.render_document(&checklist)?;
    output::save(&options.out_file, &document)?;
    log::debug!("rendered {} tasks", checklist.task_count());

    println!("Saved to {}", options.out_file.display());

    if !options.no_print {
        println!("Printing...");
        output::print_and_remove(&config.print, &options.out_file)?;
    }

    Ok(())
}

/// Resolve the start/end arguments against today's date
pub fn resolve_range(start: &str, end: &str, today: NaiveDate) -> Result<DateRange> {
    let start = DateSpec::parse_arg(start, "start")?.resolve_start(today);
    let end = DateSpec::parse_arg(end, "end")?.resolve_end(start, today);
    DateRange::new(start, end)
}
