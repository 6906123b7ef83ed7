use temper::parser::parse;
use temper::{Engine, EngineConfig};

fn engine() -> Engine {
    Engine::with_config(&EngineConfig::default().with_prefix("x"))
}

#[test]
fn test_shorthand_matches_fluent_setters() {
    let e = engine();
    let parsed = e.parse("color: red\nfont-size: 12");
    let chained = e.style().color("red").font_size(12);
    assert_eq!(&parsed, chained.description());
}

#[test]
fn test_semicolons_split_declarations() {
    let style = parse("color red; background-color: blue;", &());
    assert_eq!(style.value("color"), Some("red"));
    assert_eq!(style.value("backgroundColor"), Some("blue"));
    assert_eq!(style.len(), 2);
}

#[test]
fn test_trailing_comma_continues_on_next_line() {
    let style = parse("transition: opacity 1s,\n  transform 2s", &());
    assert_eq!(style.value("transition"), Some("opacity 1s,transform 2s"));
}

#[test]
fn test_leading_comma_appends_to_previous_value() {
    let style = parse("box-shadow 0 0 2px red\n, 0 0 4px blue", &());
    assert_eq!(style.value("boxShadow"), Some("0 0 2px red, 0 0 4px blue"));
}

#[test]
fn test_custom_properties_stay_verbatim() {
    let style = parse("--main-color: red\n--gap 4", &());
    assert_eq!(style.value("--main-color"), Some("red"));
    assert_eq!(style.value("--gap"), Some("4"));
}

#[test]
fn test_short_names_and_vendor_keys() {
    let style = parse("bc red\n-webkit-appearance none", &());
    assert_eq!(style.value("backgroundColor"), Some("red"));
    assert_eq!(style.value("WebkitAppearance"), Some("none"));
}

#[test]
fn test_lines_without_key_are_skipped() {
    let style = parse(";;\n   \n: nothing\ncolor", &());
    assert!(style.is_empty());
}

#[test]
fn test_repeated_property_stacks() {
    let style = parse("color red\ncolor blue", &());
    let keys = style.keys().collect::<Vec<_>>();
    assert_eq!(keys, vec!["color", "!color"]);
}

#[test]
fn test_only_first_separator_splits_the_key() {
    let style = parse("background: url(http://example.com/a.png)", &());
    assert_eq!(style.value("background"), Some("url(http://example.com/a.png)"));
}

#[test]
fn test_unknown_names_without_helpers_are_ignored() {
    assert!(parse("pad", &()).is_empty());
}

#[test]
fn test_parse_is_memoized() {
    let e = engine();
    let first = e.parse("margin 4");
    let second = e.parse("margin 4");
    assert_eq!(first, second);
    assert_eq!(first.value("margin"), Some("4px"));
}
