//! Session types carried on every inbound request.
//!
//! The session is created by the host platform and carried across turns of a
//! conversation; the framework never persists it. Attributes are a flexible
//! JSON map that intent handlers may mutate before a response is built.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-conversation session state, as delivered by the voice platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True on the first turn of a conversation.
    #[serde(default)]
    pub new: bool,
    /// Platform-issued opaque session identifier.
    pub session_id: String,
    /// Turn-to-turn attribute map. Absent on the first turn; the dispatcher
    /// initializes it to an empty map before any handler observes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    /// The application this session belongs to.
    pub application: Application,
    /// The end user behind the session.
    pub user: User,
}

impl Session {
    /// Mutable access to the attribute map, initializing it if absent.
    pub fn attributes_mut(&mut self) -> &mut Map<String, Value> {
        self.attributes.get_or_insert_with(Map::new)
    }

    /// Read a single attribute by key, if the map and key exist.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.as_ref().and_then(|attrs| attrs.get(key))
    }

    /// Insert or replace a single attribute, initializing the map if absent.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.attributes_mut().insert(key.into(), value);
    }
}

/// The requesting application's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Platform-assigned application identifier, compared against the
    /// dispatcher's configured id when the identity check is enabled.
    pub application_id: String,
}

/// The end user attached to the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Platform-assigned user identifier.
    pub user_id: String,
    /// OAuth access token, present when the user has linked an account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}
