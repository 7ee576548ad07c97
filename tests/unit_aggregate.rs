// tests/unit_aggregate.rs
use designlint_core::aggregate::{aggregate, ignore_all, CategoryFilter, FilterChip};
use designlint_core::types::{Category, ErrorRecord, IgnoredError, NodeErrors};
use std::collections::BTreeSet;

fn err(node: &str, category: Category, message: &str, value: &str) -> ErrorRecord {
    ErrorRecord {
        category,
        message: message.into(),
        node_id: node.into(),
        node_name: format!("Layer {node}"),
        value: value.into(),
    }
}

fn node(id: &str, errors: Vec<ErrorRecord>) -> NodeErrors {
    NodeErrors {
        id: id.into(),
        name: format!("Layer {id}"),
        errors,
    }
}

fn fill(node_id: &str, value: &str) -> ErrorRecord {
    err(node_id, Category::Fill, "Missing fill style", value)
}

#[test]
fn test_ignored_error_is_dropped_per_node() {
    let nodes = vec![
        node("a", vec![fill("a", "#ff0000")]),
        node("b", vec![fill("b", "#ff0000")]),
    ];
    let ignored = vec![IgnoredError { node_id: "a".into(), value: "#ff0000".into() }];
    let report = aggregate(&nodes, &ignored);

    assert_eq!(report.bulk.len(), 1);
    assert_eq!(report.bulk[0].count, 1);
    assert_eq!(report.bulk[0].nodes, vec!["b".to_string()]);
    assert_eq!(report.nodes.len(), 1);
    assert_eq!(report.nodes[0].id, "b");
}

#[test]
fn test_three_plus_one() {
    let nodes = vec![
        node("d", vec![fill("d", "#00ff00")]),
        node("a", vec![fill("a", "#ff0000")]),
        node("b", vec![fill("b", "#ff0000")]),
        node("c", vec![fill("c", "#ff0000")]),
    ];
    let report = aggregate(&nodes, &[]);

    assert_eq!(report.bulk.len(), 2);
    assert_eq!(report.bulk[0].count, 3);
    assert_eq!(report.bulk[0].nodes, vec!["a", "b", "c"]);
    assert_eq!(report.bulk[0].error.value, "#ff0000");
    assert_eq!(report.bulk[1].count, 1);
    assert_eq!(report.bulk[1].error.value, "#00ff00");
    assert_eq!(report.total_errors(), 4);
}

#[test]
fn test_same_value_different_message_is_separate() {
    let nodes = vec![node(
        "a",
        vec![
            err("a", Category::Text, "Missing text style", "Mixed sizes or families"),
            err("a", Category::Text, "Mixed text style", "Mixed sizes or families"),
        ],
    )];
    assert_eq!(aggregate(&nodes, &[]).bulk.len(), 2);
}

#[test]
fn test_separator_characters_do_not_collide() {
    // Values that would collide under "type_message_value" string keys.
    let nodes = vec![
        node("a", vec![err("a", Category::Fill, "x_y", "z")]),
        node("b", vec![err("b", Category::Fill, "x", "y_z")]),
    ];
    assert_eq!(aggregate(&nodes, &[]).bulk.len(), 2);
}

type Summary = BTreeSet<(Category, String, String, usize, BTreeSet<String>)>;

fn summarize(nodes: &[NodeErrors]) -> (Summary, Vec<String>) {
    let report = aggregate(nodes, &[]);
    let set = report
        .bulk
        .iter()
        .map(|b| {
            (
                b.error.category,
                b.error.message.clone(),
                b.error.value.clone(),
                b.count,
                b.nodes.iter().cloned().collect(),
            )
        })
        .collect();
    let order = report.bulk.iter().map(|b| b.error.value.clone()).collect();
    (set, order)
}

#[test]
fn test_permutation_keeps_groups_but_may_change_tie_order() {
    let forward = vec![
        node("a", vec![fill("a", "#111111")]),
        node("b", vec![fill("b", "#222222")]),
        node("c", vec![fill("c", "#333333"), fill("c", "#111111")]),
        node("d", vec![fill("d", "#333333")]),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let (set_f, order_f) = summarize(&forward);
    let (set_r, order_r) = summarize(&reversed);

    assert_eq!(set_f, set_r);
    // #111111 and #333333 tie at 2; first encounter decides.
    assert_eq!(order_f, vec!["#111111", "#333333", "#222222"]);
    assert_eq!(order_r, vec!["#333333", "#111111", "#222222"]);
}

#[test]
fn test_ignore_all_matches_category_and_value() {
    let nodes = vec![
        node("a", vec![fill("a", "#ff0000")]),
        node("b", vec![err("b", Category::Fill, "Other message", "#ff0000")]),
        node("c", vec![err("c", Category::Stroke, "Missing stroke style", "#ff0000")]),
        node("d", vec![fill("d", "#00ff00")]),
    ];
    let report = aggregate(&nodes, &[]);
    let target = report
        .bulk
        .iter()
        .find(|b| b.error.node_id == "a")
        .unwrap();

    let hits: Vec<&str> = ignore_all(target, &report.nodes)
        .into_iter()
        .map(|e| e.node_id.as_str())
        .collect();
    assert_eq!(hits, vec!["a", "b"]);

    let ignored: Vec<IgnoredError> = ignore_all(target, &report.nodes)
        .into_iter()
        .map(IgnoredError::from)
        .collect();
    let after = aggregate(&nodes, &ignored);
    assert!(after.bulk.iter().all(|b| b.error.category != Category::Fill || b.error.value != "#ff0000"));
    assert_eq!(after.nodes.len(), 2);
}

#[test]
fn test_filter_by_category() {
    let nodes = vec![
        node("a", vec![fill("a", "#ff0000"), err("a", Category::Text, "Missing text style", "Inter")]),
        node("b", vec![err("b", Category::Text, "Missing text style", "Inter")]),
    ];
    let report = aggregate(&nodes, &[]);

    let text_only = CategoryFilter::from_categories([Category::Text]);
    let shown = text_only.apply(&report.bulk);
    assert_eq!(shown.len(), 1);
    assert!(shown.iter().all(|b| b.category() == Category::Text));

    let all = CategoryFilter::all();
    let shown: Vec<_> = all.apply(&report.bulk).into_iter().cloned().collect();
    assert_eq!(shown, report.bulk);

    let mut toggled = text_only;
    toggled.toggle(FilterChip::All);
    assert_eq!(toggled.apply(&report.bulk).len(), report.bulk.len());
}

#[test]
fn test_empty_input() {
    let report = aggregate(&[], &[]);
    assert!(report.is_clean());
    assert_eq!(report.total_errors(), 0);
    let clean = vec![node("a", vec![])];
    assert!(aggregate(&clean, &[]).nodes.is_empty());
}
