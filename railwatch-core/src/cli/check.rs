use crate::conf::{ConfigError, ValidatedConfig, load_config};
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            for line in summary(&cfg) {
                println!("✔ {line}");
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

pub fn summary(cfg: &ValidatedConfig) -> Vec<String> {
    let source = &cfg.config.source;
    let board = &cfg.config.board;

    vec![
        "Config loaded successfully".to_string(),
        format!("listening on {}", cfg.listen),
        format!(
            "polling {} every {}s (timeout {}s)",
            source.url,
            source.interval().as_secs(),
            source.fetch_timeout().as_secs()
        ),
        format!("timestamps in {}", cfg.timezone),
        format!(
            "classifier {:?}, order {:?}",
            board.classifier, board.order
        )
        .to_lowercase(),
    ]
}

fn print_config_error(err: &ConfigError, plain: bool) {
    match err {
        ConfigError::Validation { issues } => {
            for issue in issues {
                if plain {
                    eprintln!("error: {issue}");
                } else {
                    eprintln!("{}: {issue}", "error".red().bold());
                }
            }
            eprintln!();
            eprintln!("{err}");
        }
        other => {
            if plain {
                eprintln!("{other}");
            } else {
                eprintln!("{}: {other}", "error".red().bold());
            }
        }
    }
}
