//! Outbound response envelope and its speech, card, and reprompt parts.
//!
//! The envelope matches the platform's speechlet wire schema: camelCase keys,
//! internally tagged unions, and optional keys omitted entirely when absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire protocol version stamped on every outbound envelope.
pub const WIRE_VERSION: &str = "1.0";

/// Spoken output, either plain text or SSML markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    /// Plain text rendered by the platform's default voice.
    PlainText { text: String },
    /// Speech Synthesis Markup Language document.
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    /// Plain-text speech.
    pub fn plain(text: impl Into<String>) -> Self {
        OutputSpeech::PlainText { text: text.into() }
    }

    /// SSML speech.
    pub fn ssml(ssml: impl Into<String>) -> Self {
        OutputSpeech::Ssml { ssml: ssml.into() }
    }
}

/// A UI card shown in the companion app alongside the spoken response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card kind, serialized as the wire `type` tag.
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub title: String,
    pub content: String,
}

/// The card kinds the platform renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Simple,
    LinkAccount,
}

impl Card {
    /// Build a `Simple` card, or `None` when either part is empty.
    ///
    /// A card is attached to a response only when both its title and content
    /// are non-empty.
    pub fn simple(title: impl Into<String>, content: impl Into<String>) -> Option<Self> {
        let title = title.into();
        let content = content.into();
        if title.is_empty() || content.is_empty() {
            return None;
        }
        Some(Card {
            kind: CardKind::Simple,
            title,
            content,
        })
    }
}

/// Follow-up speech played when the user is expected to answer but stays
/// silent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl Reprompt {
    pub fn new(output_speech: OutputSpeech) -> Self {
        Reprompt { output_speech }
    }
}

/// The response body: exactly one output speech, optional card and reprompt,
/// and the end-of-session flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

/// The complete outbound payload handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    /// Session attributes echoed verbatim from the inbound session; omitted
    /// when the session carried none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<Map<String, Value>>,
    pub response: ResponseBody,
}
