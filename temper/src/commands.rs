use crate::engine::Engine;
use crate::styling::{Pseudo, table};
use strum::IntoEnumIterator;

pub fn class(engine: &Engine, text: &str) -> String {
    let class = engine.parse_style(text).class();
    format!("{class}\n{}", engine.flush())
}

pub fn css(engine: &Engine, selector: &str, text: &str) -> String {
    engine.css(selector, text);
    let rules = engine.rules();
    engine.flush();
    rules.join("\n")
}

pub fn properties(filter: Option<&str>) -> Vec<String> {
    let table = table();
    table
        .setters()
        .filter(|setter| filter.is_none_or(|text| setter.contains(text)))
        .map(|setter| match table.short_for(setter) {
            Some(short) => format!("{setter} ({short})"),
            None => setter.to_string(),
        })
        .collect()
}

pub fn pseudos() -> Vec<String> {
    Pseudo::iter()
        .map(|pseudo| {
            if pseudo.is_functional() {
                format!("{pseudo}()")
            } else {
                pseudo.to_string()
            }
        })
        .collect()
}
