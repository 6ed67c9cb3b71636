//! Element dispatch: one HTML fragment set, one field and one extraction
//! statement per field directive

use super::model::{ExtractionStatement, FieldDescriptor};
use crate::format::{derive_key_title, Directive, FieldKind};

/// Placeholder shown on every email input
pub const EMAIL_PLACEHOLDER: &str = "email@provider.tld";

/// Everything a field directive contributes to the compiled form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub fragments: Vec<String>,
    pub field: FieldDescriptor,
    pub statement: ExtractionStatement,
}

fn required_attr(required: bool) -> &'static str {
    if required {
        " required"
    } else {
        ""
    }
}

/// Turn `min=1, max=5` into ` min="1" max="5"`.
///
/// Pairs without `=` are passed through as bare tokens.
fn constraint_attrs(value: &str) -> String {
    value
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((attr, val)) => format!(r#" {}="{}""#, attr.trim(), val.trim()),
            None => format!(" {pair}"),
        })
        .collect()
}

fn options(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|o| !o.is_empty())
}

/// Inline paragraph for `form-paragraph`
pub fn paragraph(value: &str) -> String {
    format!("<p>{value}</p>")
}

impl FieldKind {
    /// Text of the `<label>` element; `None` for kinds that render their
    /// own label variant (or none at all)
    fn label<'a>(self, directive: &'a Directive, title: &'a str) -> Option<&'a str> {
        match self {
            FieldKind::Input | FieldKind::Email => Some(&directive.title),
            FieldKind::Textarea | FieldKind::Number | FieldKind::Range => Some(title),
            FieldKind::Hidden | FieldKind::Radio => None,
        }
    }

    fn controls(self, directive: &Directive, key: &str) -> Vec<String> {
        let required = required_attr(directive.required);
        let value = &directive.value;
        match self {
            FieldKind::Input => vec![format!(
                r#"<input type="text"{required} placeholder="{value}" name="{key}"/>"#
            )],
            FieldKind::Textarea => vec![format!(
                r#"<textarea{required} placeholder="{value}" name="{key}"></textarea>"#
            )],
            FieldKind::Hidden => vec![format!(
                r#"<input type="hidden"{required} value="{value}" name="{key}"/>"#
            )],
            FieldKind::Email => {
                let pattern = if value.is_empty() {
                    String::new()
                } else {
                    format!(r#" pattern="{value}""#)
                };
                vec![format!(
                    r#"<input type="email"{required} placeholder="{EMAIL_PLACEHOLDER}"{pattern} name="{key}"/>"#
                )]
            }
            FieldKind::Number | FieldKind::Range => {
                let attrs = constraint_attrs(value);
                vec![format!(
                    r#"<input type="{}"{required}{attrs} name="{key}"/>"#,
                    self.tag()
                )]
            }
            FieldKind::Radio => {
                let mut out = vec![format!("<span>{}</span>", directive.title)];
                for option in options(value) {
                    let option_value = option.to_lowercase();
                    let id = format!("{key}-option-{option_value}");
                    out.push("<span>".to_string());
                    out.push(format!(
                        r#"<input type="radio"{required} id="{id}" value="{option_value}" name="{key}"/>"#
                    ));
                    out.push(format!(r#"<label for="{id}">{option}</label>"#));
                    out.push("</span>".to_string());
                }
                out
            }
        }
    }

    /// Render a field directive of this kind
    pub fn render(self, directive: &Directive) -> RenderedField {
        let (key, title) = derive_key_title(&directive.title, directive.key.as_deref());

        let mut fragments = vec!["<div>".to_string()];
        if let Some(label) = self.label(directive, &title) {
            fragments.push(format!(r#"<label for="{key}">{label}</label>"#));
        }
        fragments.extend(self.controls(directive, &key));
        fragments.push("</div>".to_string());

        let field = FieldDescriptor::text(&key, &title, directive.required);
        let statement = ExtractionStatement::for_field(&field);
        RenderedField {
            fragments,
            field,
            statement,
        }
    }
}
