//! Line parser for the form format
//!
//! Each non-blank line is `descriptor = value`. The descriptor is either a
//! metadata tag (`form-title`) or `!?element[Title]#key?`.

use lazy_static::lazy_static;
use regex::Regex;

use super::directive::{Directive, ElementKind};
use crate::error::ParseError;

lazy_static! {
    static ref DESCRIPTOR: Regex = Regex::new(
        r"^(?:(?P<meta>form-\w+)|(?P<required>!)?\s*(?P<element>\w+)\[(?P<title>[^\]]+)\]\s*(?:#(?P<key>\S+))?)$"
    )
    .expect("descriptor pattern is valid");
}

/// Options controlling how unrecognized lines are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail on unrecognized lines instead of skipping them
    pub strict: bool,
}

/// Parse a single line.
///
/// Returns `Ok(None)` for blank lines. A line without `=` is always an
/// error; a line whose descriptor doesn't match is reported as
/// [`ParseError::Unrecognized`] and left to the caller to skip or reject.
pub fn parse_line(text: &str, line: usize) -> Result<Option<Directive>, ParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let (left, right) = text
        .split_once('=')
        .ok_or(ParseError::MissingSeparator { line })?;
    let left = left.trim();
    let value = right.trim();

    let unrecognized = || ParseError::Unrecognized {
        line,
        text: left.to_string(),
    };

    let caps = DESCRIPTOR.captures(left).ok_or_else(unrecognized)?;

    if let Some(tag) = caps.name("meta") {
        return match ElementKind::from_tag(tag.as_str()) {
            Some(ElementKind::Meta(kind)) => Ok(Some(Directive::meta(kind, value, line))),
            _ => Err(unrecognized()),
        };
    }

    let tag = caps.name("element").map_or("", |m| m.as_str());
    let Some(ElementKind::Field(kind)) = ElementKind::from_tag(tag) else {
        return Err(unrecognized());
    };

    Ok(Some(Directive::field(
        kind,
        caps.name("title").map_or("", |m| m.as_str()),
        caps.name("key").map(|m| m.as_str()),
        caps.name("required").is_some(),
        value,
        line,
    )))
}

/// Parse a whole form format, preserving line order
pub fn parse_format(format: &str, options: ParseOptions) -> Result<Vec<Directive>, ParseError> {
    let mut directives = Vec::new();
    let format = format.strip_prefix('\u{feff}').unwrap_or(format);

    for (index, text) in format.lines().enumerate() {
        match parse_line(text, index + 1) {
            Ok(Some(directive)) => {
                tracing::trace!(
                    line = directive.line,
                    tag = directive.element.tag(),
                    "directive"
                );
                directives.push(directive);
            }
            Ok(None) => {}
            Err(err @ ParseError::Unrecognized { .. }) if !options.strict => {
                tracing::warn!("skipping {err}");
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!("parsed {} directives", directives.len());
    Ok(directives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{FieldKind, MetaKind};
    use pretty_assertions::assert_eq;

    const STICKERS: &str = "\
form-title          = Merveilles Stickers
form-desc           = Hey mervs, welcome to this form!
form-password       = hihi-stickertown
input[Name]         = First and last name
textarea[Address]   = your postal address
number[Sticker sheet amount]#amount                 = min=1, max=5, value=1
input[The rabbit boat but backwards]#access-token   = you know it.
radio[Size]                                         = Small, Medium, Large
";

    #[test]
    fn test_parse_metadata_line() {
        let d = parse_line("form-title = Merveilles Stickers", 1)
            .unwrap()
            .unwrap();
        assert_eq!(d, Directive::meta(MetaKind::Title, "Merveilles Stickers", 1));
    }

    #[test]
    fn test_parse_field_with_key() {
        let d = parse_line("number[Sticker sheet amount]#amount = min=1, max=5", 2)
            .unwrap()
            .unwrap();
        assert_eq!(d.element, ElementKind::Field(FieldKind::Number));
        assert_eq!(d.title, "Sticker sheet amount");
        assert_eq!(d.key.as_deref(), Some("amount"));
        assert_eq!(d.value, "min=1, max=5");
        assert!(!d.required);
    }

    #[test]
    fn test_parse_required_marker() {
        let d = parse_line("!input[Name] = placeholder", 1).unwrap().unwrap();
        assert!(d.required);
        assert_eq!(d.title, "Name");
        assert_eq!(d.key, None);

        let d = parse_line("input[Name] = placeholder", 1).unwrap().unwrap();
        assert!(!d.required);
    }

    #[test]
    fn test_value_split_at_first_equals() {
        let d = parse_line("hidden[Token] = a=b=c", 1).unwrap().unwrap();
        assert_eq!(d.value, "a=b=c");
    }

    #[test]
    fn test_blank_line_is_nothing() {
        assert_eq!(parse_line("   \t", 1), Ok(None));
        assert_eq!(parse_line("", 1), Ok(None));
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        assert_eq!(
            parse_line("input[Name]", 5),
            Err(ParseError::MissingSeparator { line: 5 })
        );
        let err = parse_format("form-title = Hi\ninput[Name]\n", ParseOptions::default());
        assert_eq!(err, Err(ParseError::MissingSeparator { line: 2 }));
    }

    #[test]
    fn test_unknown_tags_are_unrecognized() {
        assert!(matches!(
            parse_line("select[Colour] = red, blue", 3),
            Err(ParseError::Unrecognized { line: 3, .. })
        ));
        assert!(matches!(
            parse_line("form-footer = bye", 1),
            Err(ParseError::Unrecognized { .. })
        ));
        assert!(matches!(
            parse_line("just some words = here", 1),
            Err(ParseError::Unrecognized { .. })
        ));
    }

    #[test]
    fn test_lenient_mode_skips_unrecognized() {
        let directives = parse_format(
            "input[Name] = x\nbogus line = y\nemail[Mail] = .*",
            ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[1].line, 3);
    }

    #[test]
    fn test_strict_mode_rejects_unrecognized() {
        let err = parse_format(
            "input[Name] = x\nbogus line = y",
            ParseOptions { strict: true },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::Unrecognized {
                line: 2,
                text: "bogus line".to_string()
            }
        );
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let directives = parse_format(
            "\u{feff}form-title = Hello\ninput[Name] = n\n",
            ParseOptions { strict: true },
        )
        .unwrap();
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0], Directive::meta(MetaKind::Title, "Hello", 1));
    }

    #[test]
    fn test_parse_full_format_preserves_order() {
        let directives = parse_format(STICKERS, ParseOptions::default()).unwrap();
        let tags: Vec<&str> = directives.iter().map(|d| d.element.tag()).collect();
        assert_eq!(
            tags,
            vec![
                "form-title",
                "form-desc",
                "form-password",
                "input",
                "textarea",
                "number",
                "input",
                "radio"
            ]
        );
        assert_eq!(directives[6].key.as_deref(), Some("access-token"));
        assert_eq!(directives[7].value, "Small, Medium, Large");
    }
}
