//! Intent and slot types for intent-based routing.
//!
//! The intent `name` is the case-sensitive routing key (including
//! vendor-namespaced names such as `AMAZON.HelpIntent`). Slot values are
//! plain strings; the platform leaves a slot's value unset when the user
//! did not fill it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A recognized user intent with its filled slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    /// Routing key, matched case-sensitively against registered handlers.
    pub name: String,
    /// Slot map keyed by slot name.
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// The value of a named slot, if the slot exists and was filled.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|slot| slot.value.as_deref())
    }
}

/// A single slot as delivered by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// Slot name, repeated inside the slot object on the wire.
    pub name: String,
    /// Recognized value, absent when the user did not fill the slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
