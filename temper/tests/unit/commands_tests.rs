use temper::commands;
use temper::{Engine, EngineConfig};

fn engine() -> Engine {
    Engine::with_config(&EngineConfig::default().with_prefix("x"))
}

#[test]
fn test_class_prints_name_and_sheet() {
    let e = engine();
    let output = commands::class(&e, "color red\non-hover");
    assert_eq!(output, "x1\n.x1{color:red;}");
    assert!(e.rules().is_empty());
}

#[test]
fn test_css_prints_rules_per_line() {
    let e = engine();
    let output = commands::css(&e, "h1, h2", "margin 0\nfont-weight 600");
    assert_eq!(output, "h1, h2{margin:0;font-weight:600;}");
}

#[test]
fn test_properties_lists_short_names() {
    let lines = commands::properties(Some("backgroundCo"));
    assert_eq!(lines, vec!["backgroundColor (bc)"]);
}

#[test]
fn test_pseudos_mark_functional_selectors() {
    let lines = commands::pseudos();
    assert!(lines.contains(&":hover".to_string()));
    assert!(lines.contains(&":nth-child()".to_string()));
    assert!(lines.contains(&"::before".to_string()));
}
