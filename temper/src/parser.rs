use crate::description::StyleDescription;
use crate::styling::case::hyphen_to_camel;
use crate::styling::properties::{is_custom, table};
use crate::values::Token;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";|\n").expect("valid line pattern"));
static KEY_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ :]+").expect("valid key pattern"));

pub trait HelperSource {
    fn expand(&self, name: &str, args: &[String]) -> Option<StyleDescription>;
}

impl HelperSource for () {
    fn expand(&self, _name: &str, _args: &[String]) -> Option<StyleDescription> {
        None
    }
}

/// Parses shorthand text. Never fails: lines without a key are skipped and
/// unknown properties are kept as written.
pub fn parse(text: &str, helpers: &impl HelperSource) -> StyleDescription {
    let mut style = StyleDescription::new();
    let mut pending = String::new();
    let mut previous: Option<String> = None;

    for raw in LINE_BREAK.split(text.trim()) {
        let line = format!("{pending}{}", raw.trim());
        pending.clear();

        // value list continues on the next line
        if line.ends_with(',') {
            pending = line;
            continue;
        }

        if line.starts_with(',') {
            if let Some(key) = &previous {
                style.append(key, &line);
            }
            continue;
        }

        let line = KEY_SEPARATOR.replace(&line, " ");
        let mut words = line.split_whitespace();
        let Some(key) = words.next().filter(|key| !line.starts_with(' ') && !key.is_empty()) else {
            if !line.trim().is_empty() {
                tracing::trace!("skipping shorthand line without a key: {line:?}");
            }
            continue;
        };
        let tokens = words.map(str::to_string).collect::<Vec<_>>();

        let prop = if is_custom(key) {
            key.to_string()
        } else {
            hyphen_to_camel(key)
        };
        let resolved = table().resolve(&prop).to_string();
        previous = Some(resolved.clone());

        if let Some(expanded) = helpers.expand(&prop, &tokens) {
            style.assign(&expanded);
        } else if !tokens.is_empty() {
            let values = tokens.into_iter().map(Token::Text).collect::<Vec<_>>();
            style.add(&resolved, &values);
        }
    }

    if !pending.is_empty() {
        tracing::trace!("dropping unterminated shorthand line: {pending:?}");
    }

    style
}

#[derive(Debug, Default)]
pub struct ShorthandCache {
    entries: HashMap<String, StyleDescription>,
}

impl ShorthandCache {
    pub fn get(&self, text: &str) -> Option<StyleDescription> {
        self.entries.get(text).cloned()
    }

    pub fn insert(&mut self, text: &str, style: StyleDescription) {
        self.entries.insert(text.to_string(), style);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
