use temper::composer::compose;
use temper::{Engine, EngineConfig, StyleDescription};

fn engine() -> Engine {
    Engine::with_config(&EngineConfig::default().with_prefix("x"))
}

fn render(description: &StyleDescription, selector: &str) -> Vec<String> {
    compose(description, selector)
        .iter()
        .map(|rule| rule.render())
        .collect()
}

#[test]
fn test_base_rule_comes_first() {
    let e = engine();
    let style = e.style().on_hover("color blue").color("red");
    assert_eq!(
        render(style.description(), ".a"),
        vec![".a{color:red;}", ".a:hover{color:blue;}"]
    );
}

#[test]
fn test_media_inside_nested_selector() {
    let e = engine();
    let hover = e.style().color("blue").media("print", "color black");
    let style = e.style().nest(":hover", &hover);

    assert_eq!(
        render(style.description(), ".a"),
        vec![".a:hover{color:blue;}", "@media print{.a:hover{color:black;}}"]
    );
}

#[test]
fn test_nesting_composes_at_every_depth() {
    let e = engine();
    let inner = e.style().nest(":hover", "color red");
    let style = e.style().nest("li", e.style().nest("> a", &inner));

    assert_eq!(
        render(style.description(), ".nav"),
        vec![".nav li > a:hover{color:red;}"]
    );
}

#[test]
fn test_comma_fragments_share_declarations() {
    let e = engine();
    let style = e.style().nest("a, :focus", "outline none");
    assert_eq!(
        render(style.description(), ".a"),
        vec![".a a,.a:focus{outline:none;}"]
    );
}

#[test]
fn test_ampersand_stands_for_parent() {
    let e = engine();
    let style = e
        .style()
        .nest("&.active", "color red")
        .nest(".dark &", "color white");

    assert_eq!(
        render(style.description(), ".a"),
        vec![".a.active{color:red;}", ".dark .a{color:white;}"]
    );
}

#[test]
fn test_empty_blocks_emit_nothing() {
    let e = engine();
    let style = e.style().media("print", StyleDescription::new());
    assert!(render(style.description(), ".a").is_empty());
    assert!(render(&StyleDescription::new(), ".a").is_empty());
}

#[test]
fn test_ampersand_inside_quotes_is_not_the_parent() {
    let e = engine();
    let style = e
        .style()
        .nest("[data-q='a&b'], a[title=\"x&y\"]", "color red");

    assert_eq!(
        render(style.description(), ".a"),
        vec![".a[data-q='a&b'],.a a[title=\"x&y\"]{color:red;}"]
    );
}
