mod check;
mod dump;
mod translate;


pub use check::*;
pub use dump::*;
pub use translate::*;

use clap::{Args, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_CONFIG: &str = "config/railwatch.hcl";

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to config file
        #[arg(default_value = DEFAULT_CONFIG)]
        path: PathBuf,

        /// Print problems without colour
        #[arg(short, long)]
        plain: bool,
    },

    /// Print resolved configuration
    Dump {
        #[arg(default_value = DEFAULT_CONFIG)]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

/// Offline translation of a single phrase.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TranslateArgs {
    /// A line name, e.g. 山手線
    #[arg(long)]
    pub line: Option<String>,

    /// A status phrase, e.g. 運転見合わせ
    #[arg(long)]
    pub status: Option<String>,

    /// A free-text reason
    #[arg(long)]
    pub reason: Option<String>,
}
