use std::io::{self, Write};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use wordstat::cli::Args;
use wordstat::config::{self, OutputFormat};
use wordstat::stats::WordStats;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    wordstat::logging::init(args.verbose);

    let config = config::load_config(args.config.as_deref())?;
    let path = args.resolve_path(&config);

    // Fails before any report is written when the path is unusable
    // A mid-read failure is logged by the accumulator and the partial counts are reported
    let (stats, _summary) = WordStats::from_path(path.as_deref())?;

    let report = stats.report();
    let rendered = match args.resolve_format(&config) {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => report.to_json().wrap_err("Failed to serialize report")?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    stdout.flush()?;

    Ok(())
}
