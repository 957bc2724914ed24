pub use clap::Parser;

use std::path::PathBuf;

use super::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "lvs")]
#[command(about = "Generate, inspect and derive folder secrets")]
pub struct Args {
    /// Path to a config file (defaults to <config dir>/lvs/config.toml)
    #[arg(long, global = true, env = "LVS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log level (error, warn, info, debug, trace), overrides the config file
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: crate::Command,
}
