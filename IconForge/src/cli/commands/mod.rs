use clap::Subcommand;
use std::path::PathBuf;

use crate::config::ProjectConfig;
use crate::topic::Topic;

pub mod generate;
pub mod inspect;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate resources from an icon-font bundle downloaded by hand
    Manual {
        /// Topic the icon font belongs to (e.g. feed)
        #[arg(short, long)]
        topic: Topic,

        /// Unpacked bundle directory (contains style.css and fonts/icomoon.ttf)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Convert the topic's SVG icons through the conversion service, then generate resources
    Auto {
        /// Topic the icon font belongs to; SVGs are read from `<svg_dir>/<topic>`
        #[arg(short, long)]
        topic: Topic,

        /// Delete temporary files afterwards (1 = delete, 0 = keep)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
        delete: u8,
    },

    /// Parse a stylesheet and print its mappings without writing anything
    Inspect {
        /// Stylesheet to parse
        stylesheet: PathBuf,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if any pipeline step fails.
    pub fn execute(&self, config: &ProjectConfig, quiet: bool) -> anyhow::Result<()> {
        match self {
            Commands::Manual { topic, input } => generate::manual(topic, input, config, quiet),
            Commands::Auto { topic, delete } => generate::auto(topic, *delete == 1, config, quiet),
            Commands::Inspect { stylesheet } => inspect::execute(stylesheet, quiet),
        }
    }
}
