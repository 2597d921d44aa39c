//! Ordered text-surgery passes over printed snapshot text
//!
//! Four passes run in a fixed order, each on the previous pass's output:
//!
//! 1. Strip unreferenced convention-prefixed tokens anywhere in the text
//! 2. Strip expanded tokens confirmed present in the filtered style text
//! 3. Strip registry identifiers inside `class` / `className` attribute values
//! 4. Normalize attributes the earlier passes emptied
//!
//! Passes 1 and 2 splice literal occurrences out by hand; passes 3 and 4
//! build patterns, and every identifier interpolated into a pattern is
//! escaped first. Non-attribute text content and tag names are never
//! altered.

use std::collections::BTreeSet;

use regex::Regex;

/// Run the full rewrite pipeline over printed snapshot text.
pub fn rewrite(
    text: &str,
    unreferenced: &BTreeSet<String>,
    expanded: &BTreeSet<String>,
    style_text: &str,
    identifiers: &BTreeSet<String>,
) -> String {
    let result = strip_unreferenced(text, unreferenced);
    let result = strip_matched(&result, expanded, style_text);
    let result = strip_identifiers_in_class_attrs(&result, identifiers);
    normalize_class_attrs(&result)
}

/// Remove every occurrence of each unreferenced token, plus one optional
/// trailing whitespace character per occurrence. Exact literal matching;
/// idempotent.
pub fn strip_unreferenced(text: &str, unreferenced: &BTreeSet<String>) -> String {
    unreferenced
        .iter()
        .fold(text.to_string(), |acc, token| splice_out(&acc, token, true))
}

/// Remove every occurrence of each expanded token that is confirmed
/// present in `style_text`. Tokens that matched no real rule are left
/// alone so an unrelated token sharing a short literal form survives.
pub fn strip_matched(text: &str, expanded: &BTreeSet<String>, style_text: &str) -> String {
    expanded
        .iter()
        .filter(|token| style_text.contains(token.as_str()))
        .fold(text.to_string(), |acc, token| splice_out(&acc, token, false))
}

/// Remove each registry identifier, plus one optional trailing whitespace
/// character, from inside `class="..."` / `className="..."` attribute
/// values. The rest of the attribute value is left intact; one occurrence
/// per attribute is removed per identifier.
pub fn strip_identifiers_in_class_attrs(text: &str, identifiers: &BTreeSet<String>) -> String {
    let mut result = text.to_string();
    for identifier in identifiers {
        if identifier.is_empty() {
            continue;
        }
        let pattern = format!(
            r#"((?:class|className)="[^"]*?){}\s?([^"]*")"#,
            regex::escape(identifier)
        );
        let re = Regex::new(&pattern).expect("escaped identifier forms a valid pattern");
        result = re.replace_all(&result, "${1}${2}").into_owned();
    }
    result
}

/// Collapse attributes whose value the earlier passes reduced to
/// whitespace, and trim the first `className` value left with padding
/// around a single surviving token.
pub fn normalize_class_attrs(text: &str) -> String {
    let empty_class_name =
        Regex::new(r#"\s+className="\s*"\s+"#).expect("static pattern is valid");
    let empty_class = Regex::new(r#"\s+class="\s*"\s+"#).expect("static pattern is valid");
    let padded_single = Regex::new(r#"className="\s+(\S+)\s+""#).expect("static pattern is valid");

    let result = empty_class_name.replace_all(text, " ");
    let result = empty_class.replace_all(&result, " ");
    padded_single.replace(&result, "className=\"${1}\"").into_owned()
}

/// Remove every occurrence of `token` from `text`, optionally eating one
/// whitespace character that directly follows each occurrence.
fn splice_out(text: &str, token: &str, eat_trailing_whitespace: bool) -> String {
    if token.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(found) = rest.find(token) {
        out.push_str(&rest[..found]);
        rest = &rest[found + token.len()..];
        if eat_trailing_whitespace {
            let mut chars = rest.chars();
            if chars.next().is_some_and(|c| c.is_whitespace()) {
                rest = chars.as_str();
            }
        }
    }
    out.push_str(rest);
    out
}
