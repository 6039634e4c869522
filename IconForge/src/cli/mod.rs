//! `IconForge` CLI - Command-line interface for the icon-font pipeline

pub mod commands;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;
use tracing::Level;

use crate::config::ProjectConfig;

#[derive(Parser)]
#[command(name = "iconforge")]
#[command(about = "IconForge: icon-font stylesheets to Android resources", long_about = None)]
#[command(version)]
struct Cli {
    /// Project file (defaults to ./iconforge.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Suppress step output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every parsed mapping
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}

/// Run the `IconForge` CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .init();

    let config = ProjectConfig::load(cli.config.as_deref())?;
    cli.command.execute(&config, cli.quiet)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_missing_topic_is_rejected() {
        let err = Cli::try_parse_from(["iconforge", "manual", "-i", "bundle"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["iconforge", "auto"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_invalid_topic_is_rejected() {
        let err = Cli::try_parse_from(["iconforge", "auto", "-t", "a/b"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_manual_args() {
        let cli = Cli::try_parse_from(["iconforge", "manual", "-t", "feed", "-i", "bundle"]).unwrap();
        match cli.command {
            Commands::Manual { topic, input } => {
                assert_eq!(topic.as_str(), "feed");
                assert_eq!(input, PathBuf::from("bundle"));
            }
            _ => panic!("expected manual command"),
        }
    }

    #[test]
    fn test_auto_delete_flag() {
        let cli = Cli::try_parse_from(["iconforge", "auto", "--topic", "feed"]).unwrap();
        assert!(matches!(cli.command, Commands::Auto { delete: 1, .. }));

        let cli = Cli::try_parse_from(["iconforge", "auto", "-t", "feed", "-d", "0"]).unwrap();
        assert!(matches!(cli.command, Commands::Auto { delete: 0, .. }));

        let err = Cli::try_parse_from(["iconforge", "auto", "-t", "feed", "-d", "2"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "iconforge", "inspect", "style.css", "-c", "custom.toml", "-q",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.quiet);
        assert_eq!(cli.log_level(), Level::ERROR);
    }
}
