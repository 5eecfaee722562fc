mod cli;
mod config;
mod display;
mod error;
mod models;
mod output;
mod renderer;

use clap::Parser;
use std::path::PathBuf;

use crate::cli::gen::GenOptions;
use crate::error::Result;

#[derive(Parser)]
#[command(name = "checklist", version)]
#[command(
    about = "Generate a printable checklist of daily and weekday tasks",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to config.json next to the executable)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config_file: Option<PathBuf>,

    /// Start date, format: YYYY-MM-DD (defaults to the next day)
    #[arg(short, long, value_name = "STARTDATE", default_value = "tomorrow")]
    start_date: String,

    /// End date, format: YYYY-MM-DD (defaults to the first Sunday, or the
    /// next Sunday if the start date is a Sunday)
    #[arg(short, long, value_name = "ENDDATE", default_value = "weekend")]
    end_date: String,

    /// RTF file to generate
    #[arg(short, long, value_name = "OUT_FILE", default_value = "checklist.rtf")]
    out_file: PathBuf,

    /// Dump the current config and exit
    #[arg(short, long)]
    dump_config: bool,

    /// Generate the document, but don't print it
    #[arg(short, long)]
    no_print: bool,
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_file.unwrap_or_else(config::default_path);
    let config = config::load(&config_path)?;

    if cli.dump_config {
        return cli::config::dump(&config);
    }

    let options = GenOptions {
        start_date: cli.start_date,
        end_date: cli.end_date,
        out_file: cli.out_file,
        no_print: cli.no_print,
    };
    cli::gen::run(&config, &options)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
