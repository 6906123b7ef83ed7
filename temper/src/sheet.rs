use crate::error::TargetError;
use std::cell::RefCell;
use std::rc::Rc;

pub trait StyleTarget {
    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<(), TargetError>;

    fn rule_count(&self) -> usize;

    fn set_text(&mut self, text: &str);
}

#[derive(Default)]
pub struct Sheet {
    rules: Vec<String>,
    debug: bool,
    target: Option<Box<dyn StyleTarget>>,
}

impl Sheet {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            ..Self::default()
        }
    }

    pub fn attach(&mut self, target: Box<dyn StyleTarget>) {
        self.target = Some(target);
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn insert(&mut self, rule: &str, index: Option<usize>) {
        let position = index.map_or(self.rules.len(), |i| i.min(self.rules.len()));
        self.rules.insert(position, rule.to_string());

        let Some(target) = self.target.as_mut() else {
            return;
        };

        if self.debug {
            target.set_text(&self.rules.join("\n"));
            return;
        }

        let count = target.rule_count();
        let at = index.map_or(count, |i| i.min(count));
        if let Err(err) = target.insert_rule(rule, at) {
            tracing::warn!("{err}");
        }
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.rules).concat()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    rules: Vec<String>,
    text: String,
}

/// In-memory target for headless rendering and tests. Clones share state,
/// so a handle kept outside the engine observes what was inserted.
#[derive(Clone, Debug, Default)]
pub struct MemoryTarget {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> Vec<String> {
        self.state.borrow().rules.clone()
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }
}

impl StyleTarget for MemoryTarget {
    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<(), TargetError> {
        let opened = rule.matches('{').count();
        if rule.trim().is_empty() || opened != rule.matches('}').count() {
            return Err(TargetError::Rejected {
                rule: rule.to_string(),
                reason: "unbalanced or empty rule".to_string(),
            });
        }

        let mut state = self.state.borrow_mut();
        let index = index.min(state.rules.len());
        state.rules.insert(index, rule.to_string());
        Ok(())
    }

    fn rule_count(&self) -> usize {
        self.state.borrow().rules.len()
    }

    fn set_text(&mut self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }
}
