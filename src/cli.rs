use crate::export::ExportFormat;
use clap::Parser;
use std::path::PathBuf;

/// Terminal editor for model schema documents.
#[derive(Debug, Parser)]
#[command(name = "modelt", version, about)]
pub struct CliArgs {
    /// Catalog provider executable, run as `<CMD> fields` and `<CMD> models`.
    #[arg(long, value_name = "CMD")]
    pub provider: Option<String>,

    /// Read field types from a JSON file instead of the provider.
    #[arg(long, value_name = "PATH", requires = "models_file")]
    pub types_file: Option<PathBuf>,

    /// Read existing models from a JSON file instead of the provider.
    #[arg(long, value_name = "PATH", requires = "types_file")]
    pub models_file: Option<PathBuf>,

    /// Use the built-in catalog and start with a blank model.
    #[arg(long, conflicts_with_all = ["provider", "types_file", "models_file"])]
    pub offline: bool,

    /// Output format for the exported document.
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for log files.
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,
}
