use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use riot_timeline_rdbms::config::{DEFAULT_INPUT, DEFAULT_OUT_DIR, ExportConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "riot-timeline-rdbms",
    about = "Flatten a match timeline JSON into relational tables",
    version
)]
struct Cli {
    /// Match timeline JSON keyed by match id
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory that receives one file per relation
    #[arg(long = "out-dir", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Output file format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log per-relation details
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = ExportConfig {
        input: args.input,
        out_dir: args.out_dir,
        format: args.format,
    };

    let out_dir = riot_timeline_rdbms::run(&config)?;
    println!("All relations saved to {}", out_dir.display());

    Ok(())
}
