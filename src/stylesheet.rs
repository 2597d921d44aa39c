//! Stylesheet rule matching and transitive hash expansion
//!
//! Parses the stylesheet text registered for the current test, keeps only
//! the rules whose selectors reference a matched class token (descending
//! into @media / @supports groups), and re-serializes the filtered sheet.
//! The serialized text is a matching aid for the rewrite passes; it is
//! never embedded into the final snapshot.

use std::collections::BTreeSet;

use lightningcss::printer::PrinterOptions;
use lightningcss::rules::style::StyleRule;
use lightningcss::rules::CssRule;
use lightningcss::selector::SelectorList;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use lightningcss::traits::ToCss;
use thiserror::Error;

/// Error type for stylesheet processing failures.
///
/// A stylesheet that fails to parse indicates a bug upstream in style
/// generation; no recovery is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StylesheetError {
    /// Registered stylesheet text failed to parse
    #[error("CSS parse error: {0}")]
    Parse(String),
    /// Filtered stylesheet failed to re-serialize
    #[error("CSS print error: {0}")]
    Print(String),
}

/// Rules retained by [`extract_matching_rules`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleMatches {
    /// Selector lists of the retained top-level plain rules, in original
    /// order. Input to [`expand_transitive`].
    pub selectors: Vec<Vec<String>>,
    /// The filtered stylesheet, re-serialized. Used only to confirm which
    /// tokens are backed by a real rule.
    pub css: String,
}

/// Filter the registered stylesheet down to the rules that apply to
/// `tokens`.
///
/// A plain rule is eligible when at least one of its selectors contains at
/// least one token as a substring and its declaration list is non-empty.
/// Top-level eligible rules are kept in order; @media and @supports groups
/// have their nested rules filtered by the same predicate and are kept even
/// when no nested rule survives. Every other rule kind is dropped.
pub fn extract_matching_rules(
    css_text: &str,
    tokens: &BTreeSet<String>,
) -> Result<RuleMatches, StylesheetError> {
    let mut sheet = StyleSheet::parse(css_text, ParserOptions::default())
        .map_err(|e| StylesheetError::Parse(e.to_string()))?;

    let mut plain = Vec::new();
    let mut groups = Vec::new();
    let mut selectors = Vec::new();

    for rule in std::mem::take(&mut sheet.rules.0) {
        match rule {
            CssRule::Style(style) => {
                let texts = selector_texts(&style.selectors)?;
                if is_eligible(&style, &texts, tokens) {
                    selectors.push(texts);
                    plain.push(CssRule::Style(style));
                }
            }
            CssRule::Media(mut media) => {
                media.rules.0 = filter_nested(std::mem::take(&mut media.rules.0), tokens)?;
                groups.push(CssRule::Media(media));
            }
            CssRule::Supports(mut supports) => {
                supports.rules.0 = filter_nested(std::mem::take(&mut supports.rules.0), tokens)?;
                groups.push(CssRule::Supports(supports));
            }
            _ => {}
        }
    }

    plain.extend(groups);
    sheet.rules.0 = plain;

    let css = sheet
        .to_css(PrinterOptions::default())
        .map_err(|e| StylesheetError::Print(e.to_string()))?
        .code;

    Ok(RuleMatches { selectors, css })
}

/// Union `matched` with every registry identifier referenced from the
/// retained rules.
///
/// Style composition can make a generated rule's selector reference a
/// second identifier that never appeared as a literal class token on any
/// node. Only the first selector of each retained rule is scanned; that
/// mirrors the one-rule-one-primary-selector shape of generated output and
/// avoids over-matching compound selector lists. The result is always a
/// superset of `matched` and only ever grows by registry identifiers.
pub fn expand_transitive(
    matched: &BTreeSet<String>,
    identifiers: &BTreeSet<String>,
    matches: &RuleMatches,
) -> BTreeSet<String> {
    let mut expanded = matched.clone();
    for hash in identifiers {
        if expanded.contains(hash) {
            continue;
        }
        let referenced = matches
            .selectors
            .iter()
            .any(|list| list.first().map_or(false, |first| first.contains(hash.as_str())));
        if referenced {
            expanded.insert(hash.clone());
        }
    }
    expanded
}

fn selector_texts(selectors: &SelectorList) -> Result<Vec<String>, StylesheetError> {
    selectors
        .0
        .iter()
        .map(|selector| {
            selector
                .to_css_string(PrinterOptions::default())
                .map_err(|e| StylesheetError::Print(e.to_string()))
        })
        .collect()
}

fn is_eligible<T>(rule: &StyleRule<'_, T>, selector_texts: &[String], tokens: &BTreeSet<String>) -> bool {
    let has_declarations = !rule.declarations.declarations.is_empty()
        || !rule.declarations.important_declarations.is_empty();

    has_declarations
        && selector_texts
            .iter()
            .any(|selector| tokens.iter().any(|token| selector.contains(token.as_str())))
}

fn filter_nested<'i>(
    rules: Vec<CssRule<'i>>,
    tokens: &BTreeSet<String>,
) -> Result<Vec<CssRule<'i>>, StylesheetError> {
    let mut kept = Vec::new();
    for rule in rules {
        if let CssRule::Style(style) = rule {
            let texts = selector_texts(&style.selectors)?;
            if is_eligible(&style, &texts, tokens) {
                kept.push(CssRule::Style(style));
            }
        }
    }
    Ok(kept)
}
