use temper::sheet::Sheet;
use temper::{Engine, EngineConfig, MemoryTarget};

fn config() -> EngineConfig {
    EngineConfig::default().with_prefix("x")
}

#[test]
fn test_rules_are_mirrored_into_target() {
    let target = MemoryTarget::new();
    let e = Engine::with_target(&config(), target.clone());

    e.style().color("red").class();
    e.style().import("url(reset.css)");

    assert_eq!(target.rules(), vec!["@import url(reset.css);", ".x1{color:red;}"]);
    assert_eq!(target.text(), "");
}

#[test]
fn test_debug_mode_dumps_text() {
    let target = MemoryTarget::new();
    let e = Engine::with_target(&config().with_debug(true), target.clone());

    e.style().color("red").class();
    e.style().color("blue").class();

    assert!(target.rules().is_empty());
    assert_eq!(target.text(), ".x1{color:red;}\n.x2{color:blue;}");
}

#[test]
fn test_debug_can_be_toggled_at_runtime() {
    let target = MemoryTarget::new();
    let e = Engine::with_target(&config(), target.clone());

    e.set_debug(true);
    e.style().color("red").class();
    e.set_debug(false);
    e.style().color("blue").class();

    assert_eq!(target.text(), ".x1{color:red;}");
    assert_eq!(target.rules(), vec![".x2{color:blue;}"]);
}

#[test]
fn test_rejected_rules_stay_buffered() {
    let target = MemoryTarget::new();
    let e = Engine::with_target(&config(), target.clone());

    e.insert(".broken{color:red;", None);

    assert_eq!(e.rules(), vec![".broken{color:red;"]);
    assert!(target.rules().is_empty());
}

#[test]
fn test_headless_engine_still_buffers() {
    let e = Engine::with_config(&config());
    e.style().color("red").class();
    assert_eq!(e.flush(), ".x1{color:red;}");
}

#[test]
fn test_sheet_insert_clamps_index_and_take_drains() {
    let mut sheet = Sheet::new(false);
    sheet.insert("b{}", Some(5));
    sheet.insert("a{}", Some(0));
    sheet.insert("c{}", None);

    assert_eq!(sheet.rules(), ["a{}", "b{}", "c{}"]);
    assert_eq!(sheet.take(), "a{}b{}c{}");
    assert!(sheet.is_empty());
    assert!(!sheet.has_target());
}
