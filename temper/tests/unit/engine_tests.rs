use temper::{Engine, EngineConfig, StyleDescription, global};

fn engine() -> Engine {
    Engine::with_config(&EngineConfig::default().with_prefix("x"))
}

fn red() -> StyleDescription {
    StyleDescription::new().declare("color", "red")
}

#[test]
fn test_identify_dedups_by_content() {
    let e = engine();
    let first = e.identify(&red());
    let second = e.identify(&red());

    assert_eq!(first, second);
    assert_eq!(e.rules(), vec![".x1{color:red;}"]);
}

#[test]
fn test_equal_chains_share_a_class() {
    let e = engine();
    let a = e.style().color("red").padding(4).class();
    let b = e.style().color("red").padding(4).class();
    assert_eq!(a, b);
    assert_eq!(e.rules().len(), 1);
}

#[test]
fn test_key_order_is_part_of_the_content() {
    let e = engine();
    let a = e.identify(&StyleDescription::new().declare("color", "red").declare("fontSize", 12));
    let b = e.identify(&StyleDescription::new().declare("fontSize", 12).declare("color", "red"));

    assert_ne!(a, b);
    assert_eq!(e.rules().len(), 2);
}

#[test]
fn test_flush_resets_buffer_caches_and_counter() {
    let e = engine();
    assert_eq!(e.identify(&red()), "x1");
    e.keyframes([("to", "opacity 1")]);

    let css = e.flush();
    assert_eq!(css, ".x1{color:red;}@keyframes x2{to{opacity:1;}}");
    assert!(e.rules().is_empty());

    let blue = StyleDescription::new().declare("color", "blue");
    assert_eq!(e.identify(&blue), "x1");
    assert_eq!(e.identify(&red()), "x2");
    assert_eq!(e.rules(), vec![".x1{color:blue;}", ".x2{color:red;}"]);
}

#[test]
fn test_keyframes_dedup() {
    let e = engine();
    let steps = [("from", "opacity 0"), ("to", "opacity 1")];
    let first = e.keyframes(steps);
    let second = e.keyframes(steps);

    assert_eq!(first, second);
    assert_eq!(e.rules(), vec!["@keyframes x1{from{opacity:0;}to{opacity:1;}}"]);
}

#[test]
fn test_classes_and_keyframes_share_the_counter() {
    let e = engine();
    assert_eq!(e.identify(&red()), "x1");
    assert_eq!(e.keyframes([("50%", "transform scale(2)")]), "x2");
}

#[test]
fn test_css_emits_raw_rules_outside_the_cache() {
    let e = engine();
    e.css(".card", "padding 8\nmargin 0");
    e.css(".card", "padding 8\nmargin 0");
    e.css_map([("body", "margin 0"), ("a:hover", "color red")]);

    assert_eq!(
        e.rules(),
        vec![
            ".card{padding:8px;margin:0;}",
            ".card{padding:8px;margin:0;}",
            "body{margin:0;}",
            "a:hover{color:red;}"
        ]
    );
}

#[test]
fn test_css_with_nested_blocks() {
    let e = engine();
    let style = e
        .style()
        .color("black")
        .nest("a, button", "color inherit")
        .media("print", "color black");
    e.css("main", &style);

    assert_eq!(
        e.rules(),
        vec![
            "main{color:black;}",
            "main a,main button{color:inherit;}",
            "@media print{main{color:black;}}"
        ]
    );
}

#[test]
fn test_helper_registration_invalidates_parse_cache() {
    let e = engine();
    assert!(e.parse("pad").is_empty());

    e.helper("pad", "padding 4");
    assert_eq!(e.parse("pad").value("padding"), Some("4px"));
    assert_eq!(e.helper_names(), vec!["pad".to_string()]);
}

#[test]
fn test_random_prefixes_differ_between_engines() {
    let a = Engine::new();
    let b = Engine::new();

    assert_eq!(a.prefix().len(), 7);
    assert!(a.prefix().starts_with('t'));
    assert_ne!(a.prefix(), b.prefix());
    assert!(!a.is_same(&b));
}

#[test]
fn test_engines_do_not_share_state() {
    let a = engine();
    let b = engine();
    a.style().color("red").class();

    assert_eq!(a.rules().len(), 1);
    assert!(b.rules().is_empty());
}

#[test]
fn test_global_engine_is_shared_per_thread() {
    assert!(global().is_same(&global()));
}
