//! mould - form-definition compiler
//!
//! Compiles a line-oriented form format into an HTML form page, an HTML
//! receipt page and a generated Rust form model.

mod app;
mod cli;
mod compiler;
mod config;
mod emit;
mod error;
mod format;
mod output;

use anyhow::Result;
use app::{App, RunOutcome};
use clap::Parser;
use cli::{Cli, Settings};
use config::MouldConfig;
use output::FsSink;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mould=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = MouldConfig::load().unwrap_or_else(|err| {
        tracing::warn!("ignoring config: {err:#}");
        MouldConfig::default()
    });
    let settings = Settings::merge(cli, config);

    let Some(input) = settings.input.clone() else {
        println!("must pass --input <file containing form format>");
        std::process::exit(1);
    };

    let app = App::new(settings);
    match app.run(&input, &mut FsSink)? {
        RunOutcome::DryRun(source) => print!("{source}"),
        RunOutcome::Written(report) => {
            if !report.is_complete() {
                for err in &report.failed {
                    tracing::warn!("not written: {}", err.path().display());
                }
                tracing::warn!(
                    "{} of {} artifacts could not be written to {}",
                    report.failed.len(),
                    report.failed.len() + report.written.len(),
                    app.settings().out_dir.display()
                );
            }
        }
    }

    Ok(())
}
