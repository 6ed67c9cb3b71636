//! Key and identifier derivation
//!
//! The resolved key names the HTML input and tags the generated field; the
//! resolved title is the generated field's identifier. Both come from the
//! same directive so every artifact agrees on them.

/// Uppercase the first letter of every word.
///
/// A word starts after any character that isn't alphanumeric or `_`; the
/// remaining letters keep their case.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}

/// Identifier used when a title has no identifier characters at all
pub const FALLBACK_IDENTIFIER: &str = "Field";

/// Keep only identifier characters; never returns an empty string or one
/// starting with a digit
fn identifier(text: &str) -> String {
    let ident: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    match ident.chars().next() {
        None => FALLBACK_IDENTIFIER.to_string(),
        Some(c) if c.is_numeric() => format!("_{ident}"),
        Some(_) if ident == "Self" || ident == "_" => format!("{ident}_"),
        Some(_) => ident,
    }
}

/// Resolve `(key, title)` for a field directive.
///
/// Without an explicit key the key is the lowercased title. With one, the
/// key is used verbatim and the identifier is built from it, splitting
/// words at hyphens. An empty key counts as absent.
pub fn derive_key_title(title: &str, key: Option<&str>) -> (String, String) {
    match key.filter(|k| !k.is_empty()) {
        Some(key) => (key.to_string(), identifier(&title_case(&key.replace('-', " ")))),
        None => (title.to_lowercase(), identifier(&title_case(title))),
    }
}
