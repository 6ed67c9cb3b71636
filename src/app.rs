//! Main application: one straight-line compilation run

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::Settings;
use crate::compiler::{compile, CompiledForm};
use crate::emit::{self, Stylesheet};
use crate::format::ParseOptions;
use crate::output::{write_artifacts, ArtifactSink, WriteReport};

/// Outcome of a run that got past compilation
#[derive(Debug)]
pub enum RunOutcome {
    /// Artifacts were rendered and printed, nothing written
    DryRun(String),
    Written(WriteReport),
}

pub struct App {
    settings: Settings,
}

/// Read the form format; an unreadable file compiles as an empty format
fn read_format(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!("issue when reading format file {}: {err}", path.display());
            String::new()
        }
    }
}

/// Pick the stylesheet; an unreadable external file falls back to the built-in one
fn load_stylesheet(path: Option<&Path>, form: &CompiledForm) -> Stylesheet {
    let builtin = || Stylesheet::Builtin(form.theme.clone());
    let Some(path) = path else {
        return builtin();
    };
    match fs::read_to_string(path) {
        Ok(css) => {
            tracing::debug!("using stylesheet {}", path.display());
            Stylesheet::External(css)
        }
        Err(err) => {
            tracing::error!("err reading stylesheet {}: {err}", path.display());
            builtin()
        }
    }
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Compile the input and hand every artifact to `sink`
    pub fn run(&self, input: &Path, sink: &mut impl ArtifactSink) -> Result<RunOutcome> {
        let format = read_format(input);
        let options = ParseOptions {
            strict: self.settings.strict,
        };
        let mut form = compile(&format, options)
            .with_context(|| format!("compiling {}", input.display()))?;

        if let Some(user) = &self.settings.default_user {
            form.auth.user.get_or_insert_with(|| user.clone());
        }

        let stylesheet = load_stylesheet(self.settings.stylesheet.as_deref(), &form);
        let artifacts = emit::render_artifacts(&form, &stylesheet, &self.settings.out_dir)?;

        tracing::info!(
            fields = form.answer.len(),
            content = form.content.len(),
            "compiled {}",
            input.display()
        );

        if self.settings.dry_run {
            let source = artifacts
                .iter()
                .find(|a| a.path.ends_with(emit::MODEL_FILE))
                .map(|a| a.contents.clone())
                .unwrap_or_default();
            return Ok(RunOutcome::DryRun(source));
        }

        Ok(RunOutcome::Written(write_artifacts(sink, &artifacts)))
    }
}
