//! Command-line flags

use clap::Parser;
use std::path::PathBuf;

use crate::config::MouldConfig;

/// Compile a form format into an HTML form, a receipt page and a Rust form model
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// A file containing the form format to generate a form server from
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// A single CSS file applied to the form (fully replaces the default styling)
    #[arg(long)]
    pub stylesheet: Option<PathBuf>,

    /// Directory the artifacts are written into
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Fail on lines that don't match any directive instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Print the generated model to stdout without writing any files
    #[arg(long)]
    pub dry_run: bool,
}

/// Effective settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: Option<PathBuf>,
    pub stylesheet: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub strict: bool,
    pub dry_run: bool,
    pub default_user: Option<String>,
}

impl Settings {
    pub fn merge(cli: Cli, config: MouldConfig) -> Self {
        Self {
            input: cli.input,
            stylesheet: cli.stylesheet.or(config.stylesheet),
            out_dir: cli
                .out_dir
                .or(config.out_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            strict: cli.strict || config.strict.unwrap_or(false),
            dry_run: cli.dry_run,
            default_user: config.default_user,
        }
    }
}
