//! Rendered component tree model and node collection
//!
//! The tree being serialized is read-only input: it is borrowed from the
//! caller, traversed depth-first, and never mutated. Nodes come in two
//! class-bearing shapes (DOM-backed and virtual) plus inert text content.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in a rendered component tree.
///
/// Polymorphic over two class-bearing shapes: a DOM-backed element exposing
/// a live class token list, and a virtual element exposing string-valued
/// props (`class` / `className` among them). Text content carries no
/// class information.
///
/// Trees deserialize from JSON fixtures, tagged by `kind`:
///
/// ```
/// use snapscrub::tree::RenderedNode;
///
/// let node: RenderedNode = serde_json::from_str(
///     r#"{"kind": "dom", "tag": "div", "classList": ["sc-a", "b"]}"#,
/// ).unwrap();
/// assert!(matches!(node, RenderedNode::Dom { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderedNode {
    /// DOM-backed element with a live class token list
    Dom {
        tag: String,
        #[serde(default, rename = "classList")]
        class_list: Vec<String>,
        #[serde(default)]
        children: Vec<RenderedNode>,
    },
    /// Virtual element with string-valued props
    Virtual {
        tag: String,
        #[serde(default)]
        props: BTreeMap<String, String>,
        #[serde(default)]
        children: Vec<RenderedNode>,
    },
    /// Inert text content
    Text { content: String },
}

impl RenderedNode {
    /// The node's children; text nodes are always leaves.
    pub fn children(&self) -> &[RenderedNode] {
        match self {
            RenderedNode::Dom { children, .. } | RenderedNode::Virtual { children, .. } => children,
            RenderedNode::Text { .. } => &[],
        }
    }
}

/// Flatten a rooted tree into a linear sequence of nodes.
///
/// Order is depth-first, parent before children, siblings in their given
/// order. Nodes without children are treated as leaves.
pub fn collect(root: &RenderedNode) -> Vec<&RenderedNode> {
    let mut nodes = Vec::new();
    visit(root, &mut nodes);
    nodes
}

fn visit<'a>(node: &'a RenderedNode, nodes: &mut Vec<&'a RenderedNode>) {
    nodes.push(node);
    for child in node.children() {
        visit(child, nodes);
    }
}
