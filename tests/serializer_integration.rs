//! End-to-end tests for the snapshot serialization pipeline
//!
//! Each test drives the full collect -> classify -> match -> expand ->
//! rewrite chain through the public API, the way a host test framework
//! would invoke it.

use std::collections::BTreeSet;

use snapscrub::classnames::{classify, collect_class_tokens};
use snapscrub::printer::print_tree;
use snapscrub::registry::StyleRegistry;
use snapscrub::rewrite::{normalize_class_attrs, strip_unreferenced};
use snapscrub::serializer::{serialize, serialize_with};
use snapscrub::stylesheet::{expand_transitive, extract_matching_rules};
use snapscrub::tree::{collect, RenderedNode};

fn dom(tag: &str, classes: &[&str], children: Vec<RenderedNode>) -> RenderedNode {
    RenderedNode::Dom {
        tag: tag.to_string(),
        class_list: classes.iter().map(|c| c.to_string()).collect(),
        children,
    }
}

fn text(content: &str) -> RenderedNode {
    RenderedNode::Text { content: content.to_string() }
}

fn set(tokens: &[&str]) -> BTreeSet<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

// ============================================================================
// Chained-style scenario: a matched rule's selector references a second
// identifier that never appeared as a class token on any node
// ============================================================================

#[test]
fn chained_hash_is_expanded_and_erased() {
    let mut registry = StyleRegistry::new();
    registry.register_identifier("sc-abc123");
    registry.register_identifier("xyz789");
    registry.register_css(".sc-abc123 { color: red; }");
    registry.register_css(".sc-abc123.xyz789 { color: green; }");
    registry.register_css(".xyz789 { color: blue; }");

    let root = dom("div", &["sc-abc123", "sc-def"], vec![]);

    // Stage-by-stage, the way the pipeline composes them.
    let tokens = collect_class_tokens(&collect(&root));
    let classification = classify(&tokens, registry.identifiers());
    assert_eq!(classification.matched, set(&["sc-abc123"]));
    assert_eq!(classification.unreferenced, set(&["sc-def"]));

    let matches =
        extract_matching_rules(registry.stylesheet_text(), &classification.matched).unwrap();
    let expanded = expand_transitive(&classification.matched, registry.identifiers(), &matches);
    assert_eq!(expanded, set(&["sc-abc123", "xyz789"]));

    // End to end: every identifier disappears and the emptied attribute
    // collapses away.
    let result = serialize_with(&root, &registry, |_| {
        "<div\n  className=\"sc-abc123 xyz789 sc-def\"\n/>".to_string()
    })
    .unwrap();
    assert_eq!(result, "<div />");
}

// ============================================================================
// Mixed token sets through the reference printer
// ============================================================================

#[test]
fn matched_and_stale_tokens_are_stripped_user_classes_survive() {
    let mut registry = StyleRegistry::new();
    registry.register_identifier("sc-abc123");
    registry.register_css(".sc-abc123 { color: red; }");

    let root = dom("div", &["sc-abc123", "extra", "sc-dead"], vec![text("hello")]);

    let result = serialize(&root, &registry).unwrap();
    assert_eq!(result, "<div\n  class=\" extra \"\n>\n  hello\n</div>");
    assert!(!result.contains("sc-abc123"));
    assert!(!result.contains("sc-dead"));
}

#[test]
fn padded_single_survivor_in_class_name_attr_is_trimmed() {
    let registry = StyleRegistry::new();

    let root = RenderedNode::Virtual {
        tag: "Button".to_string(),
        props: [("className".to_string(), " sc-dead primary ".to_string())]
            .into_iter()
            .collect(),
        children: vec![],
    };

    let result = serialize(&root, &registry).unwrap();
    assert_eq!(result, "<Button\n  className=\"primary\"\n/>");
}

#[test]
fn token_styled_only_inside_media_group_is_erased() {
    let mut registry = StyleRegistry::new();
    registry.register_identifier("sc-med");
    registry.register_css("@media (min-width: 600px) { .sc-med { color: red; } }");

    let root = dom("section", &["sc-med"], vec![]);
    assert_eq!(serialize(&root, &registry).unwrap(), "<section />");
}

// ============================================================================
// Registry-driven stability
// ============================================================================

#[test]
fn empty_registry_applies_only_stale_stripping_and_normalization() {
    let registry = StyleRegistry::new();
    let printed = "<div\n  className=\"sc-stale\"\n>\n  body\n</div>";

    let root = RenderedNode::Virtual {
        tag: "div".to_string(),
        props: [("className".to_string(), "sc-stale".to_string())].into_iter().collect(),
        children: vec![text("body")],
    };

    let result = serialize_with(&root, &registry, |_| printed.to_string()).unwrap();

    let expected = normalize_class_attrs(&strip_unreferenced(printed, &set(&["sc-stale"])));
    assert_eq!(result, expected);
    assert_eq!(result, "<div >\n  body\n</div>");
}

#[test]
fn empty_registry_and_no_generated_tokens_is_identity() {
    let registry = StyleRegistry::new();
    let root = dom("nav", &["menu", "open"], vec![text("items")]);

    let result = serialize(&root, &registry).unwrap();
    assert_eq!(result, print_tree(&root));
}

// ============================================================================
// JSON fixture trees
// ============================================================================

#[test]
fn fixture_tree_round_trips_through_the_pipeline() {
    let fixture = r#"{
        "kind": "virtual",
        "tag": "App",
        "props": {"className": "sc-root shell"},
        "children": [
            {
                "kind": "dom",
                "tag": "div",
                "classList": ["sc-inner"],
                "children": [{"kind": "text", "content": "body"}]
            }
        ]
    }"#;
    let root: RenderedNode = serde_json::from_str(fixture).unwrap();

    let mut registry = StyleRegistry::new();
    registry.register_identifier("sc-root");
    registry.register_identifier("sc-inner");
    registry.register_css(".sc-root { margin: 0; }");
    registry.register_css(".sc-inner { padding: 0; }");

    let result = serialize(&root, &registry).unwrap();
    assert_eq!(
        result,
        "<App\n  className=\" shell\"\n>\n  <div >\n    body\n  </div>\n</App>"
    );
}

// ============================================================================
// Output invariants
// ============================================================================

#[test]
fn class_attributes_stay_well_formed() {
    let mut registry = StyleRegistry::new();
    registry.register_identifier("sc-abc123");
    registry.register_css(".sc-abc123 { color: red; }");

    let root = dom(
        "div",
        &["sc-abc123", "keep"],
        vec![dom("span", &["sc-dead", "also-keep"], vec![])],
    );

    let result = serialize(&root, &registry).unwrap();
    assert_eq!(result.matches('"').count() % 2, 0);
    assert!(result.contains("keep"));
    assert!(result.contains("also-keep"));
}

#[test]
fn matched_tokens_backed_by_rules_never_survive() {
    let mut registry = StyleRegistry::new();
    for id in ["sc-one", "sc-two"] {
        registry.register_identifier(id);
    }
    registry.register_css(".sc-one { color: red; }\n.sc-two { color: blue; }");

    let root = dom("div", &["sc-one"], vec![dom("p", &["sc-two"], vec![])]);
    let result = serialize(&root, &registry).unwrap();

    assert!(!result.contains("sc-one"));
    assert!(!result.contains("sc-two"));
}
