//! Class token extraction and classification
//!
//! Tokens are gathered from every collected node into one set, then split
//! against the identifier registry into the subset backed by the current
//! run ("matched") and the subset that merely follows the generated-class
//! naming convention ("unreferenced").

use std::collections::BTreeSet;

use crate::tree::RenderedNode;

/// Naming-convention prefix carried by generated class identifiers.
pub const GENERATED_PREFIX: &str = "sc-";

/// Extract the class-name tokens of a single node.
///
/// This is the one dispatch point over node shapes: DOM-backed nodes
/// contribute their class list verbatim; virtual nodes contribute the
/// whitespace-split value of their `class` prop, falling back to
/// `className` (`class` wins when both are present); text nodes and
/// nodes with neither prop contribute nothing.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use snapscrub::classnames::class_tokens;
/// use snapscrub::tree::RenderedNode;
///
/// let node = RenderedNode::Virtual {
///     tag: "div".to_string(),
///     props: BTreeMap::from([("className".to_string(), "  sc-a   b ".to_string())]),
///     children: vec![],
/// };
/// let tokens = class_tokens(&node);
/// assert!(tokens.contains("sc-a"));
/// assert!(tokens.contains("b"));
/// ```
pub fn class_tokens(node: &RenderedNode) -> BTreeSet<String> {
    match node {
        RenderedNode::Dom { class_list, .. } => class_list.iter().cloned().collect(),
        RenderedNode::Virtual { props, .. } => {
            match props.get("class").or_else(|| props.get("className")) {
                Some(value) => value.split_whitespace().map(str::to_string).collect(),
                None => BTreeSet::new(),
            }
        }
        RenderedNode::Text { .. } => BTreeSet::new(),
    }
}

/// Aggregate the class tokens of a node sequence into one set.
///
/// Duplicates collapse; iteration order of the result is lexicographic,
/// which keeps downstream text passes deterministic.
pub fn collect_class_tokens(nodes: &[&RenderedNode]) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for node in nodes {
        tokens.extend(class_tokens(node));
    }
    tokens
}

/// Result of classifying aggregated tokens against the identifier registry.
///
/// `matched` and `unreferenced` are independent filters over the same
/// source set and never overlap. Tokens that are neither registry members
/// nor convention-prefixed appear in neither.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    /// Tokens present in the registry
    pub matched: BTreeSet<String>,
    /// Convention-prefixed tokens absent from the registry
    pub unreferenced: BTreeSet<String>,
}

/// Partition `tokens` against the run's generated identifiers.
pub fn classify(tokens: &BTreeSet<String>, identifiers: &BTreeSet<String>) -> Classification {
    let matched = tokens
        .iter()
        .filter(|token| identifiers.contains(token.as_str()))
        .cloned()
        .collect();
    let unreferenced = tokens
        .iter()
        .filter(|token| token.starts_with(GENERATED_PREFIX) && !identifiers.contains(token.as_str()))
        .cloned()
        .collect();

    Classification { matched, unreferenced }
}
