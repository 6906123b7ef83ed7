use crate::builder::Style;
use crate::composer::compose;
use crate::config::EngineConfig;
use crate::description::{StyleDescription, StyleInput};
use crate::parser::{self, HelperSource, ShorthandCache};
use crate::registry::{Helper, HelperRegistry};
use crate::sheet::{Sheet, StyleTarget};
use crate::styling::css::CssRule;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;
use uuid::Uuid;

thread_local! {
    static GLOBAL: Engine = Engine::new();
}

pub fn global() -> Engine {
    GLOBAL.with(Engine::clone)
}

/// Handle to one engine: its rule sheet, dedup caches, helpers and parse
/// cache. Clones share state; separate engines never do.
#[derive(Clone)]
pub struct Engine {
    inner: Rc<EngineState>,
}

struct EngineState {
    prefix: String,
    sheet: RefCell<Sheet>,
    minted: RefCell<Minted>,
    helpers: RefCell<HelperRegistry>,
    shorthand: RefCell<ShorthandCache>,
}

#[derive(Debug, Default)]
struct Minted {
    classes: HashMap<String, String>,
    keyframes: HashMap<String, String>,
    count: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("prefix", &self.inner.prefix)
            .field("rules", &self.inner.sheet.borrow().len())
            .finish()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        let prefix = config.prefix.clone().unwrap_or_else(random_prefix);
        tracing::debug!("creating style engine with prefix {prefix}");

        Self {
            inner: Rc::new(EngineState {
                prefix,
                sheet: RefCell::new(Sheet::new(config.debug)),
                minted: RefCell::new(Minted::default()),
                helpers: RefCell::new(HelperRegistry::default()),
                shorthand: RefCell::new(ShorthandCache::default()),
            }),
        }
    }

    pub fn with_target(config: &EngineConfig, target: impl StyleTarget + 'static) -> Self {
        let engine = Self::with_config(config);
        engine.attach(target);
        engine
    }

    pub fn prefix(&self) -> &str {
        &self.inner.prefix
    }

    pub fn attach(&self, target: impl StyleTarget + 'static) {
        self.inner.sheet.borrow_mut().attach(Box::new(target));
    }

    pub fn set_debug(&self, debug: bool) {
        self.inner.sheet.borrow_mut().set_debug(debug);
    }

    pub fn is_same(&self, other: &Engine) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn style(&self) -> Style {
        Style::new(self.clone(), StyleDescription::new())
    }

    pub fn parse_style(&self, input: impl Into<StyleInput>) -> Style {
        Style::new(self.clone(), self.resolve(input))
    }

    pub fn parse(&self, text: &str) -> StyleDescription {
        if let Some(cached) = self.inner.shorthand.borrow().get(text) {
            return cached;
        }

        let parsed = parser::parse(text, self);
        self.inner.shorthand.borrow_mut().insert(text, parsed.clone());
        parsed
    }

    pub fn resolve(&self, input: impl Into<StyleInput>) -> StyleDescription {
        match input.into() {
            StyleInput::Text(text) => self.parse(&text),
            StyleInput::Description(description) => description,
        }
    }

    pub fn helper(&self, name: &str, input: impl Into<StyleInput>) {
        let description = self.resolve(input);
        self.register(name, Helper::Static(description));
    }

    pub fn helper_fn(&self, name: &str, f: impl Fn(&Style, &[String]) -> Style + 'static) {
        self.register(name, Helper::dynamic(f));
    }

    pub fn helpers<N: AsRef<str>>(&self, helpers: impl IntoIterator<Item = (N, Helper)>) {
        for (name, helper) in helpers {
            self.register(name.as_ref(), helper);
        }
    }

    pub fn register(&self, name: &str, helper: Helper) {
        if self
            .inner
            .helpers
            .borrow_mut()
            .register(name, helper)
            .is_some()
        {
            tracing::debug!("helper {name} replaced");
        }
        // helper names change what shorthand text means
        self.inner.shorthand.borrow_mut().clear();
    }

    pub fn helper_names(&self) -> Vec<String> {
        self.inner
            .helpers
            .borrow()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn identify(&self, description: &StyleDescription) -> String {
        let key = description.content_key();
        if let Some(class) = self.inner.minted.borrow().classes.get(&key) {
            tracing::trace!("class cache hit for {class}");
            return class.clone();
        }

        let class = self.mint();
        for rule in compose(description, &format!(".{class}")) {
            self.insert(&rule.render(), None);
        }
        self.inner
            .minted
            .borrow_mut()
            .classes
            .insert(key, class.clone());

        tracing::debug!("minted class {class}");
        class
    }

    pub fn keyframes<K, S>(&self, steps: impl IntoIterator<Item = (K, S)>) -> String
    where
        K: AsRef<str>,
        S: Into<StyleInput>,
    {
        let body = steps
            .into_iter()
            .map(|(step, input)| {
                let description = self.resolve(input);
                description
                    .declarations()
                    .fold(CssRule::new(step.as_ref()), |rule, (key, value)| {
                        rule.declare(key, value)
                    })
                    .render()
            })
            .collect::<String>();

        if let Some(name) = self.inner.minted.borrow().keyframes.get(&body) {
            tracing::trace!("keyframes cache hit for {name}");
            return name.clone();
        }

        let name = self.mint();
        self.insert(&format!("@keyframes {name}{{{body}}}"), None);
        self.inner
            .minted
            .borrow_mut()
            .keyframes
            .insert(body, name.clone());

        tracing::debug!("minted keyframes {name}");
        name
    }

    pub fn import(&self, value: &str) {
        let value = value.trim();
        if !value.is_empty() {
            self.insert(&format!("@import {value};"), Some(0));
        }
    }

    pub fn css(&self, selector: &str, input: impl Into<StyleInput>) {
        let description = self.resolve(input);
        for rule in compose(&description, selector.trim()) {
            self.insert(&rule.render(), None);
        }
    }

    pub fn css_map<K, S>(&self, rules: impl IntoIterator<Item = (K, S)>)
    where
        K: AsRef<str>,
        S: Into<StyleInput>,
    {
        for (selector, input) in rules {
            self.css(selector.as_ref(), input);
        }
    }

    pub fn insert(&self, rule: &str, index: Option<usize>) {
        self.inner.sheet.borrow_mut().insert(rule, index);
    }

    pub fn rules(&self) -> Vec<String> {
        self.inner.sheet.borrow().rules().to_vec()
    }

    /// Returns the accumulated css and starts a new generation: the buffer,
    /// both identifier caches and the counter are reset. Identifiers handed
    /// out before may be reissued for different content afterwards.
    pub fn flush(&self) -> String {
        let css = self.inner.sheet.borrow_mut().take();
        *self.inner.minted.borrow_mut() = Minted::default();
        tracing::debug!("flushed {} bytes of css", css.len());
        css
    }

    fn mint(&self) -> String {
        let mut minted = self.inner.minted.borrow_mut();
        minted.count += 1;
        format!("{}{}", self.inner.prefix, minted.count)
    }
}

impl HelperSource for Engine {
    fn expand(&self, name: &str, args: &[String]) -> Option<StyleDescription> {
        let helper = self.inner.helpers.borrow().get(name)?;
        let description = match helper {
            Helper::Static(description) => description,
            Helper::Dynamic(f) => f(&self.style(), args).description().clone(),
        };
        Some(description)
    }
}

fn random_prefix() -> String {
    let mut seed = Uuid::new_v4().as_u128();
    let mut prefix = String::from("t");
    for _ in 0..6 {
        prefix.push(std::char::from_digit((seed % 36) as u32, 36).unwrap_or('0'));
        seed /= 36;
    }
    prefix
}
