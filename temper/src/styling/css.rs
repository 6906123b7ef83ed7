use crate::styling::properties::css_name;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssRule {
    selector: String,
    properties: Vec<(String, String)>,
    children: Vec<CssRule>,
}

impl CssRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn property(mut self, name: &str, value: &str) -> Self {
        self.properties.push((name.to_string(), value.to_string()));
        self
    }

    pub fn declare(self, key: &str, value: &str) -> Self {
        let name = css_name(key);
        self.property(&name, value)
    }

    pub fn children(mut self, rules: impl IntoIterator<Item = CssRule>) -> Self {
        self.children.extend(rules);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.children.is_empty()
    }

    pub fn render(&self) -> String {
        let mut css = String::new();
        self.render_into(&mut css);
        css
    }

    fn render_into(&self, css: &mut String) {
        css.push_str(&self.selector);
        css.push('{');
        self.push_declarations(css);
        for child in &self.children {
            child.render_into(css);
        }
        css.push('}');
    }

    fn push_declarations(&self, css: &mut String) {
        for (name, value) in &self.properties {
            css.push_str(&format!("{name}:{value};"));
        }
    }
}
