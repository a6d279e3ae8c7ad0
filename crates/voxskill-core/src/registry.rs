//! Intent registry for name-keyed handler lookup.
//!
//! A concrete skill builds one registry at construction time and hands it to
//! the dispatcher; routing is a plain map lookup on the intent name.

use std::collections::HashMap;

use crate::handler::{BoxIntentHandler, IntentHandler};

/// Registry of intent handlers, indexed by case-sensitive intent name
/// (including vendor-namespaced names such as `AMAZON.HelpIntent`).
#[derive(Debug)]
pub struct IntentRegistry {
    handlers: HashMap<String, BoxIntentHandler>,
}

impl IntentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under the given intent name.
    ///
    /// If a handler with this name already exists, it is replaced.
    pub fn register(&mut self, name: impl Into<String>, handler: impl IntentHandler + 'static) {
        self.handlers.insert(name.into(), BoxIntentHandler::new(handler));
    }

    /// Look up a handler by intent name.
    pub fn get(&self, name: &str) -> Option<&BoxIntentHandler> {
        self.handlers.get(name)
    }

    /// List all registered intent names.
    pub fn names(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
