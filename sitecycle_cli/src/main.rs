use clap::Parser;
use sitecycle_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitecycle-convert")]
#[command(
    about = "Convert an infusion-tracker JSON backup to SiteCycle CSV format",
    long_about = None
)]
struct Cli {
    /// Path to the JSON backup file
    input: PathBuf,

    /// Path for the output CSV file (default: sitecycle-export-<date>.csv alongside input)
    output: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    sitecycle_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let output = cli.output.unwrap_or_else(|| {
        let today = chrono::Local::now().date_naive();
        default_output_path(&cli.input, &config.export.file_prefix, today)
    });

    tracing::debug!("Converting {:?} to {:?}", cli.input, output);
    let report = convert_file(&cli.input, &output, &config)?;

    for missing in &report.unresolved {
        eprintln!("Warning: siteId {} not found, skipping", missing.site_id);
    }

    println!(
        "Wrote {} rows to {}",
        report.rows_written,
        report.output_path.display()
    );

    Ok(())
}
