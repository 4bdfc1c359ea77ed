use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "../single_match_timeline.json";
pub const DEFAULT_OUT_DIR: &str = "../csv_rdbms_style";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Parquet,
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub format: OutputFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            format: OutputFormat::default(),
        }
    }
}
