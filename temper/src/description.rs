use crate::values::{IntoValues, Token, format_values};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleDescription {
    entries: IndexMap<String, StyleValue>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Value(String),
    Nested(StyleDescription),
}

#[derive(Clone, Debug, PartialEq)]
pub enum StyleInput {
    Text(String),
    Description(StyleDescription),
}

impl StyleDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(mut self, prop: &str, values: impl IntoValues) -> Self {
        self.add(prop, &values.into_values());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(StyleValue::Value(value)) => Some(value),
            _ => None,
        }
    }

    pub fn nested(&self, key: &str) -> Option<&StyleDescription> {
        match self.entries.get(key) {
            Some(StyleValue::Nested(nested)) => Some(nested),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(key, value)| match value {
            StyleValue::Value(value) => Some((key.as_str(), value.as_str())),
            StyleValue::Nested(_) => None,
        })
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries
            .insert(key.to_string(), StyleValue::Value(value.into()));
    }

    pub fn nest(&mut self, key: &str, nested: StyleDescription) {
        self.entries
            .insert(key.to_string(), StyleValue::Nested(nested));
    }

    /// Merge-or-stack: a free property is set; a taken one is stacked under
    /// a `!` escaped key so both declarations render, in order.
    pub fn add(&mut self, prop: &str, values: &[Token]) {
        let mut key = prop.to_string();
        while self.entries.contains_key(&key) {
            key.insert(0, '!');
        }
        self.entries
            .insert(key, StyleValue::Value(format_values(prop, values)));
    }

    pub fn remove(&mut self, prop: &str) {
        self.entries
            .retain(|key, _| key.trim_start_matches('!') != prop);
    }

    pub fn append(&mut self, key: &str, text: &str) {
        if let Some(StyleValue::Value(value)) = self.entries.get_mut(key) {
            value.push_str(text);
        }
    }

    pub fn assign(&mut self, other: &StyleDescription) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    pub fn resolved(&self) -> IndexMap<String, String> {
        let mut resolved = IndexMap::new();
        for (key, value) in self.declarations() {
            resolved.insert(key.trim_start_matches('!').to_string(), value.to_string());
        }
        resolved
    }

    pub fn content_key(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

impl From<&str> for StyleInput {
    fn from(value: &str) -> Self {
        StyleInput::Text(value.to_string())
    }
}

impl From<String> for StyleInput {
    fn from(value: String) -> Self {
        StyleInput::Text(value)
    }
}

impl From<&String> for StyleInput {
    fn from(value: &String) -> Self {
        StyleInput::Text(value.clone())
    }
}

impl From<StyleDescription> for StyleInput {
    fn from(value: StyleDescription) -> Self {
        StyleInput::Description(value)
    }
}

impl From<&StyleDescription> for StyleInput {
    fn from(value: &StyleDescription) -> Self {
        StyleInput::Description(value.clone())
    }
}

impl From<(&str, &str)> for StyleInput {
    fn from((prop, value): (&str, &str)) -> Self {
        let mut description = StyleDescription::new();
        description.set(prop, value);
        StyleInput::Description(description)
    }
}
