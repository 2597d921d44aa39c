//! Reference tree printer
//!
//! Produces the element-per-line markup shape snapshot frameworks emit:
//! props one per line, children indented two spaces, childless elements
//! self-closed. Any printer producing well-formed `class="..."` /
//! `className="..."` attribute syntax can stand in for this one via
//! [`crate::serializer::serialize_with`].

use crate::tree::RenderedNode;

/// Print a rendered tree as indented markup text.
///
/// # Examples
///
/// ```
/// use snapscrub::printer::print_tree;
/// use snapscrub::tree::RenderedNode;
///
/// let root = RenderedNode::Dom {
///     tag: "div".to_string(),
///     class_list: vec!["sc-a".to_string()],
///     children: vec![],
/// };
/// assert_eq!(print_tree(&root), "<div\n  class=\"sc-a\"\n/>");
/// ```
pub fn print_tree(root: &RenderedNode) -> String {
    let mut out = String::new();
    write_node(root, 0, &mut out);
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

fn write_node(node: &RenderedNode, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    match node {
        RenderedNode::Text { content } => {
            out.push_str(&pad);
            out.push_str(content);
            out.push('\n');
        }
        RenderedNode::Dom { tag, class_list, children } => {
            let props = if class_list.is_empty() {
                Vec::new()
            } else {
                vec![("class".to_string(), class_list.join(" "))]
            };
            write_element(tag, &props, children, depth, out);
        }
        RenderedNode::Virtual { tag, props, children } => {
            let props: Vec<(String, String)> =
                props.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            write_element(tag, &props, children, depth, out);
        }
    }
}

fn write_element(
    tag: &str,
    props: &[(String, String)],
    children: &[RenderedNode],
    depth: usize,
    out: &mut String,
) {
    let pad = "  ".repeat(depth);

    if props.is_empty() {
        if children.is_empty() {
            out.push_str(&format!("{pad}<{tag} />\n"));
            return;
        }
        out.push_str(&format!("{pad}<{tag}>\n"));
    } else {
        out.push_str(&format!("{pad}<{tag}\n"));
        for (name, value) in props {
            out.push_str(&format!("{pad}  {name}=\"{value}\"\n"));
        }
        if children.is_empty() {
            out.push_str(&format!("{pad}/>\n"));
            return;
        }
        out.push_str(&format!("{pad}>\n"));
    }

    for child in children {
        write_node(child, depth + 1, out);
    }
    out.push_str(&format!("{pad}</{tag}>\n"));
}
