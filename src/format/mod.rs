//! Form format layer
//!
//! Turns the line-oriented form format into an ordered list of
//! [`Directive`]s and derives the keys and identifiers used by every
//! generated artifact.

mod directive;
mod naming;
mod parser;

pub use directive::{Directive, ElementKind, FieldKind, MetaKind};
pub use naming::derive_key_title;
pub use parser::{parse_format, ParseOptions};
