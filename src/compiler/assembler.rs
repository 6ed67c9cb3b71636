//! Document assembler
//!
//! Two independent passes over the same directive list: metadata first,
//! then fields in input order. Metadata interleaved with fields never
//! changes where the fields land.

use super::elements::paragraph;
use super::model::{CompiledForm, FieldDescriptor};
use crate::format::{Directive, ElementKind, MetaKind};

pub const FORM_OPEN: &str = r#"<form action="/" method="post">"#;
pub const SUBMIT: &str = r#"<div><button type="submit">Submit</button></div>"#;
pub const FORM_CLOSE: &str = "</form>";

fn color(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Suffix `title` until no existing field uses it
fn unique_title(fields: &[FieldDescriptor], title: &str) -> String {
    let taken = |candidate: &str| fields.iter().any(|f| f.title == candidate);
    if !taken(title) {
        return title.to_string();
    }
    (2..)
        .map(|n| format!("{title}_{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| title.to_string())
}

fn collect_metadata(form: &mut CompiledForm, directive: &Directive, kind: MetaKind) {
    let value = &directive.value;
    match kind {
        MetaKind::Title => {
            form.content.push(FieldDescriptor::content("Title"));
            form.page.fragments.push(format!("<h1>{value}</h1>"));
            form.page.title = value.clone();
        }
        MetaKind::Description => {
            form.content.push(FieldDescriptor::content("Description"));
            form.page.fragments.push(format!("<p>{value}</p>"));
            form.page.description = Some(value.clone());
        }
        MetaKind::Image => {
            form.content.push(FieldDescriptor::content("Image"));
            form.page.fragments.push(format!(r#"<img src="{value}">"#));
            form.page.image = Some(value.clone());
        }
        MetaKind::Password => {
            form.content.push(FieldDescriptor::content("Password"));
            form.auth.password = Some(value.clone());
        }
        MetaKind::User => {
            form.content.push(FieldDescriptor::content("User"));
            form.auth.user = Some(value.clone());
        }
        MetaKind::Background => form.theme.background = color(value),
        MetaKind::TitleColor => form.theme.title = color(value),
        MetaKind::Foreground => form.theme.body = color(value),
        MetaKind::Paragraph => {}
    }
}

/// Assemble parsed directives into the compiled form model
pub fn assemble(directives: &[Directive]) -> CompiledForm {
    let mut form = CompiledForm::default();

    for directive in directives {
        if let ElementKind::Meta(kind) = directive.element {
            collect_metadata(&mut form, directive, kind);
        }
    }

    form.page.fragments.push(FORM_OPEN.to_string());
    for directive in directives {
        match directive.element {
            ElementKind::Field(kind) => {
                let mut rendered = kind.render(directive);
                let title = unique_title(&form.answer, &rendered.field.title);
                if title != rendered.field.title {
                    tracing::warn!(
                        "line {}: field `{}` already exists, generating `{title}`",
                        directive.line,
                        rendered.field.title
                    );
                    rendered.field.title = title.clone();
                    rendered.statement.title = title;
                }
                form.page.fragments.extend(rendered.fragments);
                form.answer.push(rendered.field);
                form.statements.push(rendered.statement);
            }
            ElementKind::Meta(MetaKind::Paragraph) => {
                form.page.fragments.push(paragraph(&directive.value));
            }
            ElementKind::Meta(_) => {}
        }
    }
    form.page.fragments.push(SUBMIT.to_string());
    form.page.fragments.push(FORM_CLOSE.to_string());

    tracing::debug!(
        content = form.content.len(),
        answer = form.answer.len(),
        fragments = form.page.fragments.len(),
        "assembled form"
    );
    form
}
