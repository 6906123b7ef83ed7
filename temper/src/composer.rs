use crate::description::{StyleDescription, StyleValue};
use crate::styling::css::CssRule;

pub fn compose(description: &StyleDescription, selector: &str) -> Vec<CssRule> {
    let mut base = CssRule::new(selector);
    let mut rules = Vec::new();

    for (key, value) in description.iter() {
        match value {
            StyleValue::Value(value) => base = base.declare(key, value),
            StyleValue::Nested(nested) if key.starts_with('@') => {
                let inner = compose(nested, selector);
                if !inner.is_empty() {
                    rules.push(CssRule::new(key).children(inner));
                }
            }
            StyleValue::Nested(nested) => {
                rules.extend(compose(nested, &compose_selector(selector, key)));
            }
        }
    }

    if !base.is_empty() {
        rules.insert(0, base);
    }
    rules
}

pub fn nest_key(selector: &str) -> String {
    split_selectors(selector)
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            if chains(fragment) || !placeholders(fragment).is_empty() {
                fragment.to_string()
            } else {
                format!(" {fragment}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

pub fn compose_selector(parent: &str, key: &str) -> String {
    let fragments = split_selectors(key);
    split_selectors(parent)
        .into_iter()
        .map(str::trim)
        .flat_map(|parent| {
            fragments
                .iter()
                .map(move |fragment| combine(parent, fragment))
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn combine(parent: &str, fragment: &str) -> String {
    if chains(fragment) {
        return format!("{parent}{}", fragment.trim_end());
    }

    let fragment = fragment.trim_end();
    let at = placeholders(fragment);
    if at.is_empty() {
        return format!("{parent}{fragment}");
    }

    let mut combined = String::with_capacity(fragment.len() + parent.len() * at.len());
    let mut start = 0;
    for i in at {
        combined.push_str(&fragment[start..i]);
        combined.push_str(parent);
        start = i + 1;
    }
    combined.push_str(&fragment[start..]);
    combined.trim_start().to_string()
}

/// Pseudo and attribute fragments are appended to the parent as written.
fn chains(fragment: &str) -> bool {
    fragment.starts_with(':') || fragment.starts_with('[')
}

/// Byte offsets of `&` outside quotes, brackets and parentheses.
fn placeholders(fragment: &str) -> Vec<usize> {
    top_level(fragment, '&')
}

/// Splits on commas outside quotes, brackets and parentheses.
pub fn split_selectors(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for i in top_level(selector, ',') {
        parts.push(&selector[start..i]);
        start = i + 1;
    }
    parts.push(&selector[start..]);
    parts
}

fn top_level(text: &str, wanted: char) -> Vec<usize> {
    let mut found = Vec::new();
    let mut quote = None;
    let mut depth = 0usize;

    for (i, c) in text.char_indices() {
        match (quote, c) {
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, c) if c == wanted && depth == 0 => found.push(i),
            _ => {}
        }
    }
    found
}
