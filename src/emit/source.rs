//! Rust source emitter for the generated form model
//!
//! Works purely from a [`FormSchema`], so the compiler never deals with
//! target syntax.

use std::fmt::Write;

use crate::compiler::{FieldDescriptor, FormSchema};

/// Rust string literal for `text`
fn literal(text: &str) -> String {
    format!("{text:?}")
}

fn struct_def(
    out: &mut String,
    doc: &str,
    name: &str,
    fields: &[FieldDescriptor],
    tagged: bool,
) -> std::fmt::Result {
    writeln!(out, "/// {doc}")?;
    writeln!(out, "#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]")?;
    if fields.is_empty() {
        return writeln!(out, "pub struct {name} {{}}");
    }
    writeln!(out, "pub struct {name} {{")?;
    for field in fields {
        if tagged {
            writeln!(out, "    #[serde(rename = {})]", literal(&field.key))?;
        }
        writeln!(out, "    pub {}: {},", field.title, field.field_type.rust_type())?;
    }
    writeln!(out, "}}")
}

fn write_source(out: &mut String, schema: &FormSchema) -> std::fmt::Result {
    writeln!(out, "// Code generated by mould. DO NOT EDIT.")?;
    writeln!(out, "// Module: {}", schema.package)?;
    writeln!(out)?;
    writeln!(out, "#![allow(non_snake_case)]")?;
    writeln!(out)?;
    writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
    writeln!(out)?;
    writeln!(out, "/// Basic-auth password guarding the form; empty disables auth")?;
    writeln!(out, "pub const BASIC_PASSWORD: &str = {};", literal(schema.basic_password))?;
    writeln!(out, "/// Basic-auth user, only used when a password is set")?;
    writeln!(out, "pub const BASIC_USER: &str = {};", literal(schema.basic_user))?;
    writeln!(out)?;

    struct_def(out, "Page-level form content", "FormContent", schema.content, false)?;
    writeln!(out)?;
    struct_def(out, "One submitted response", "FormAnswer", schema.answer, true)?;
    writeln!(out)?;

    writeln!(out, "/// Submitted form values, looked up by input name")?;
    writeln!(out, "pub trait FormValues {{")?;
    writeln!(out, "    fn form_value(&self, key: &str) -> String;")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl FormAnswer {{")?;
    writeln!(out, "    /// Fill every answer field from the submitted values")?;
    writeln!(out, "    pub fn parse_post(&mut self, req: &impl FormValues) {{")?;
    if schema.statements.is_empty() {
        writeln!(out, "        let _ = req;")?;
    }
    for statement in schema.statements {
        writeln!(
            out,
            "        self.{} = req.form_value({});",
            statement.title,
            literal(&statement.key)
        )?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "/// Data echoed back on the response page")?;
    writeln!(out, "#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]")?;
    writeln!(out, "pub struct ResponderData {{")?;
    writeln!(out, "    pub data: String,")?;
    writeln!(out, "}}")
}

/// Render the generated Rust module
pub fn render_source(schema: &FormSchema) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    let _ = write_source(&mut out, schema);
    out
}

/// Pretty-printed JSON description of the generated structures
pub fn schema_json(schema: &FormSchema) -> serde_json::Result<String> {
    serde_json::to_string_pretty(schema)
}
