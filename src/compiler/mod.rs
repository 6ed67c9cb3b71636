//! Form-definition compiler
//!
//! Parsing, element dispatch and document assembly live here; the
//! emitters only ever see the resulting [`CompiledForm`].

mod assembler;
mod elements;
mod model;

pub use model::{CompiledForm, FieldDescriptor, FormSchema, PageModel, Theme};

use assembler::assemble;

use crate::error::ParseError;
use crate::format::{parse_format, ParseOptions};

/// Parse and assemble a form format in one go
pub fn compile(format: &str, options: ParseOptions) -> Result<CompiledForm, ParseError> {
    let directives = parse_format(format, options)?;
    Ok(assemble(&directives))
}
