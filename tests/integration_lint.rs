// tests/integration_lint.rs
//! Snapshot JSON → rule engine → aggregation, through the public API.

use designlint_core::aggregate::{aggregate, CategoryFilter};
use designlint_core::config::{Config, Profile};
use designlint_core::ignore::IgnoreStore;
use designlint_core::rules::RuleEngine;
use designlint_core::snapshot::{load_nodes, parse_nodes};
use designlint_core::theme::Theme;
use designlint_core::types::{Category, IgnoredError};
use std::fs;

const SNAPSHOT: &str = r##"[
  { "id": "1", "name": "Red A", "type": "RECTANGLE", "height": 20, "cornerRadius": 0,
    "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 } }] },
  { "id": "2", "name": "Red B", "type": "RECTANGLE", "height": 20, "cornerRadius": 20,
    "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 } }] },
  { "id": "3", "name": "Red C", "type": "RECTANGLE", "height": 20, "cornerRadius": 5,
    "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 } }] },
  { "id": "4", "name": "Blue", "type": "RECTANGLE",
    "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 1 } }] },
  { "id": "5", "name": "Styled", "type": "RECTANGLE", "fillStyleId": "S:brand",
    "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 1 } }] },
  { "id": "6", "name": "Scrim", "type": "RECTANGLE",
    "fills": [{ "type": "SOLID", "opacity": 0.2,
                "color": { "r": 0.07058823853731155, "g": 0.07058823853731155, "b": 0.07058823853731155 } }] },
  { "id": "7", "name": "Title", "type": "TEXT",
    "fontName": { "family": "Inter", "style": "Bold" }, "fontSize": 24,
    "lineHeight": { "unit": "PIXELS", "value": 32 } }
]"##;

fn engine(profile: Profile) -> RuleEngine {
    let mut config = Config::new();
    config.profile = profile;
    RuleEngine::new(config, Theme::default())
}

#[test]
fn test_end_to_end_grouping() {
    let nodes = parse_nodes(SNAPSHOT).unwrap();
    let results = engine(Profile::Default).scan(&nodes);
    assert_eq!(results.len(), nodes.len());

    let report = aggregate(&results, &[]);
    let top = &report.bulk[0];
    assert_eq!(top.count, 3);
    assert_eq!(top.error.category, Category::Fill);
    assert_eq!(top.error.value, "#ff0000");
    assert_eq!(top.nodes, vec!["1", "2", "3"]);

    let values: Vec<&str> = report.bulk.iter().map(|b| b.error.value.as_str()).collect();
    assert!(values.contains(&"#0000ff"));
    assert!(values.contains(&"5"));
    assert!(values.contains(&"Inter Bold / 24 (32 line-height)"));
    // Overlay and styled fill produce nothing.
    assert!(report.nodes.iter().all(|n| n.id != "5" && n.id != "6"));
    assert!(report.bulk[1..].iter().all(|b| b.count == 1));
}

#[test]
fn test_profile_switch_changes_overlay_result() {
    let nodes = parse_nodes(SNAPSHOT).unwrap();
    let mut eng = engine(Profile::Default);
    let before = aggregate(&eng.scan(&nodes), &[]);
    assert!(before.nodes.iter().all(|n| n.id != "6"));

    eng.set_profile(Profile::Docv);
    let after = aggregate(&eng.scan(&nodes), &[]);
    assert!(after
        .bulk
        .iter()
        .any(|b| b.error.value == "#121212" && b.nodes == vec!["6".to_string()]));
}

#[test]
fn test_ignore_store_roundtrip_feeds_aggregation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ignored.json");

    let mut store = IgnoreStore::open(&path).unwrap();
    assert!(store.is_empty());
    let added = store.extend(vec![
        IgnoredError { node_id: "1".into(), value: "#ff0000".into() },
        IgnoredError { node_id: "1".into(), value: "#ff0000".into() },
    ]);
    assert_eq!(added, 1);
    store.save().unwrap();

    let reopened = IgnoreStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);

    let nodes = parse_nodes(SNAPSHOT).unwrap();
    let report = aggregate(&engine(Profile::Default).scan(&nodes), reopened.as_slice());
    assert_eq!(report.bulk[0].count, 2);
    assert_eq!(report.bulk[0].nodes, vec!["2", "3"]);

    let mut store = reopened;
    assert!(store.remove(&IgnoredError { node_id: "1".into(), value: "#ff0000".into() }));
    assert!(store.is_empty());
}

#[test]
fn test_load_nodes_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.json"), r#"{ "nodes": [{ "id": "b" }] }"#).unwrap();
    fs::write(dir.path().join("a.json"), r#"[{ "id": "a" }]"#).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a snapshot").unwrap();

    let nodes = load_nodes(&[dir.path().to_path_buf()]).unwrap();
    let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_bad_snapshot_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ nope").unwrap();
    let err = load_nodes(&[bad]).unwrap_err();
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_filter_on_real_results() {
    let nodes = parse_nodes(SNAPSHOT).unwrap();
    let report = aggregate(&engine(Profile::Default).scan(&nodes), &[]);
    let radius = CategoryFilter::from_categories([Category::Radius]);
    let shown = radius.apply(&report.bulk);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].error.message, "Incorrect border radius");
}
