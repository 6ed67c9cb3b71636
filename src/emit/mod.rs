//! Artifact emitters
//!
//! Renders the generated Rust model, its JSON schema and the two HTML
//! pages from one [`CompiledForm`].

mod html;
mod source;

pub use html::Stylesheet;

use html::{render_form_page, render_response_page};
use source::{render_source, schema_json};

use anyhow::{Context, Result};
use std::path::Path;

use crate::compiler::CompiledForm;
use crate::output::Artifact;

/// Directory (and module name) holding the generated model
pub const PACKAGE_NAME: &str = "myform";
pub const MODEL_FILE: &str = "generated_form_model.rs";
pub const SCHEMA_FILE: &str = "form-schema.json";
pub const FORM_PAGE_FILE: &str = "index-template.html";
pub const RESPONSE_PAGE_FILE: &str = "response-template.html";

/// Render every artifact, rooted at `out_dir`
pub fn render_artifacts(
    form: &CompiledForm,
    stylesheet: &Stylesheet,
    out_dir: &Path,
) -> Result<Vec<Artifact>> {
    let schema = form.schema(PACKAGE_NAME);
    let package_dir = out_dir.join(PACKAGE_NAME);
    let css = stylesheet.render();

    Ok(vec![
        Artifact::new(package_dir.join(MODEL_FILE), render_source(&schema)),
        Artifact::new(
            package_dir.join(SCHEMA_FILE),
            schema_json(&schema).context("serializing form schema")?,
        ),
        Artifact::new(out_dir.join(FORM_PAGE_FILE), render_form_page(&form.page, &css)),
        Artifact::new(out_dir.join(RESPONSE_PAGE_FILE), render_response_page(&css)),
    ])
}
