use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use railwatch_core::cli::{self, ConfigCmd, DEFAULT_CONFIG, TranslateArgs};
use railwatch_core::conf::load_config;
use railwatch_core::logging::init_logging;
use railwatch_core::server;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "railwatch",
    version,
    about = "Railwatch: live English status board for a transit status page"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },

    /// Translate one phrase with the built-in tables
    Translate(TranslateArgs),

    /// Run the status board (default)
    Run {
        /// Path to the Railwatch config file
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Config { cmd }) => match cmd {
            ConfigCmd::Check { path, plain } => cli::check(path, plain),
            ConfigCmd::Dump { path, json, yaml } => cli::dump(path, json, yaml),
        },

        Some(Command::Translate(args)) => {
            init_logging();
            cli::translate(args)
        }

        Some(Command::Run { config }) => run(&config),

        None => run(Path::new(DEFAULT_CONFIG)),
    };

    if let Err(e) = result {
        eprintln!("railwatch: {e:#}");
        std::process::exit(1);
    }
}

fn run(path: &Path) -> Result<()> {
    init_logging();

    let cfg = load_config(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;

    tracing::info!(config = %path.display(), listen = %cfg.listen, "starting railwatch");
    server::run(cfg)
}
