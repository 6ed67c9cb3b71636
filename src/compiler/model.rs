//! Compiled form model shared by every emitter

use serde::Serialize;

/// User for basic auth when the format doesn't set `form-user`
pub const DEFAULT_USER: &str = "mouldy";

/// Type of a generated field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,
}

impl FieldType {
    /// Rust type used in generated structs
    pub fn rust_type(self) -> &'static str {
        match self {
            FieldType::Text => "String",
        }
    }
}

/// A single generated struct field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Wire name, used verbatim as the serialization tag
    pub key: String,
    /// Identifier of the generated field
    pub title: String,
    pub required: bool,
    pub field_type: FieldType,
}

impl FieldDescriptor {
    /// Create a new text field
    pub fn text(key: &str, title: &str, required: bool) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            required,
            field_type: FieldType::Text,
        }
    }

    /// Create a content field for page metadata
    pub fn content(title: &str) -> Self {
        Self::text(&title.to_lowercase(), title, false)
    }
}

/// `answer.<title> = <submitted value named key>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionStatement {
    pub title: String,
    pub key: String,
}

impl ExtractionStatement {
    pub fn for_field(field: &FieldDescriptor) -> Self {
        Self {
            title: field.title.clone(),
            key: field.key.clone(),
        }
    }
}

/// Theme colors; `None` falls back to the built-in stylesheet defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub background: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Basic-auth settings carried into the generated source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Auth {
    /// Set by `form-user`
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Auth {
    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_USER)
    }
}

/// Rendered page body and page-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageModel {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Body fragments in input order
    pub fragments: Vec<String>,
}

impl PageModel {
    pub fn body(&self) -> String {
        self.fragments.join("\n")
    }
}

/// Output of the document assembler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledForm {
    pub page: PageModel,
    pub theme: Theme,
    pub auth: Auth,
    /// Fields of the content struct, one per metadata directive present
    pub content: Vec<FieldDescriptor>,
    /// Fields of the answer struct, in field-directive order
    pub answer: Vec<FieldDescriptor>,
    pub statements: Vec<ExtractionStatement>,
}

/// Serializable description of the generated structures
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema<'a> {
    pub package: &'a str,
    pub basic_user: &'a str,
    pub basic_password: &'a str,
    pub content: &'a [FieldDescriptor],
    pub answer: &'a [FieldDescriptor],
    pub statements: &'a [ExtractionStatement],
}

impl CompiledForm {
    pub fn schema<'a>(&'a self, package: &'a str) -> FormSchema<'a> {
        FormSchema {
            package,
            basic_user: self.auth.user(),
            basic_password: self.auth.password.as_deref().unwrap_or(""),
            content: &self.content,
            answer: &self.answer,
            statements: &self.statements,
        }
    }
}
