//! Snapshot serialization pipeline
//!
//! Wires the stages together: collect nodes, extract and classify class
//! tokens, match stylesheet rules, expand transitively referenced hashes,
//! print, rewrite. One invocation processes exactly one tree end-to-end;
//! the whole pipeline is synchronous and pure apart from reading the
//! registry.
//!
//! Whether a given value should go through this transform at all is the
//! host framework's eligibility check and stays outside this crate.

use thiserror::Error;

use crate::classnames::{classify, collect_class_tokens};
use crate::printer::print_tree;
use crate::registry::StyleRegistry;
use crate::rewrite::rewrite;
use crate::stylesheet::{expand_transitive, extract_matching_rules, StylesheetError};
use crate::tree::{collect, RenderedNode};

/// Error type for snapshot serialization failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializeError {
    /// The registered stylesheet could not be processed
    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),
}

/// Serialize a rendered tree with the reference printer.
///
/// # Examples
///
/// ```
/// use snapscrub::registry::StyleRegistry;
/// use snapscrub::serializer::serialize;
/// use snapscrub::tree::RenderedNode;
///
/// let mut registry = StyleRegistry::new();
/// registry.register_identifier("sc-abc123");
/// registry.register_css(".sc-abc123 { color: red; }");
///
/// let root = RenderedNode::Dom {
///     tag: "div".to_string(),
///     class_list: vec!["sc-abc123".to_string()],
///     children: vec![],
/// };
/// assert_eq!(serialize(&root, &registry).unwrap(), "<div />");
/// ```
pub fn serialize(root: &RenderedNode, registry: &StyleRegistry) -> Result<String, SerializeError> {
    serialize_with(root, registry, print_tree)
}

/// Serialize a rendered tree, printing it with `print`.
///
/// The printer is any value-to-text step producing well-formed
/// `class="..."` / `className="..."` attribute syntax; the rewrite passes
/// preserve that syntax and never touch non-attribute text content or tag
/// names.
pub fn serialize_with<F>(
    root: &RenderedNode,
    registry: &StyleRegistry,
    print: F,
) -> Result<String, SerializeError>
where
    F: FnOnce(&RenderedNode) -> String,
{
    let nodes = collect(root);
    let tokens = collect_class_tokens(&nodes);
    let classification = classify(&tokens, registry.identifiers());

    let matches = extract_matching_rules(registry.stylesheet_text(), &classification.matched)?;
    let expanded = expand_transitive(&classification.matched, registry.identifiers(), &matches);

    let printed = print(root);
    Ok(rewrite(
        &printed,
        &classification.unreferenced,
        &expanded,
        &matches.css,
        registry.identifiers(),
    ))
}
