use crate::builder::Style;
use crate::description::StyleDescription;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Style producing function. Receives a fresh root node of the same engine
/// and the helper's arguments.
pub type HelperFn = dyn Fn(&Style, &[String]) -> Style;

#[derive(Clone)]
pub enum Helper {
    Static(StyleDescription),
    Dynamic(Rc<HelperFn>),
}

impl Helper {
    pub fn dynamic(f: impl Fn(&Style, &[String]) -> Style + 'static) -> Self {
        Helper::Dynamic(Rc::new(f))
    }
}

impl Debug for Helper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Helper::Static(description) => f.debug_tuple("Static").field(description).finish(),
            Helper::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HelperRegistry {
    entries: HashMap<String, Helper>,
}

impl HelperRegistry {
    pub fn register(&mut self, name: &str, helper: Helper) -> Option<Helper> {
        self.entries.insert(name.to_string(), helper)
    }

    pub fn get(&self, name: &str) -> Option<Helper> {
        self.entries.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names = self.entries.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}
