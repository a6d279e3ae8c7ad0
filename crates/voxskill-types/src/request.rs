//! Inbound request envelope and the request union.
//!
//! `Request` is internally tagged on the wire `type` field. The tag set is
//! closed: anything outside it fails deserialization before the dispatcher
//! ever sees the event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intent::Intent;
use crate::session::Session;

/// Top-level inbound payload delivered by the host for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    /// Protocol version of the inbound event.
    pub version: String,
    pub session: Session,
    pub request: Request,
}

/// The request union, discriminated by the wire `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest(LaunchRequest),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
    SessionStartedRequest(SessionStartedRequest),
}

impl Request {
    /// The wire tag of this request, for routing logs.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Request::LaunchRequest(_) => "LaunchRequest",
            Request::IntentRequest(_) => "IntentRequest",
            Request::SessionEndedRequest(_) => "SessionEndedRequest",
            Request::SessionStartedRequest(_) => "SessionStartedRequest",
        }
    }

    /// The platform-issued request id, common to all variants.
    pub fn request_id(&self) -> &str {
        match self {
            Request::LaunchRequest(req) => &req.request_id,
            Request::IntentRequest(req) => &req.request_id,
            Request::SessionEndedRequest(req) => &req.request_id,
            Request::SessionStartedRequest(req) => &req.request_id,
        }
    }
}

/// Sent when the user opens the skill without naming an intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Sent when the platform recognized a named intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    pub intent: Intent,
}

/// Sent when the platform closed the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    /// Platform reason code, e.g. `USER_INITIATED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Part of the inbound schema but never routed; a new session is signaled by
/// `Session::new` on the envelope instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStartedRequest {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope_json(request: serde_json::Value) -> serde_json::Value {
        json!({
            "version": "1.0",
            "session": {
                "new": false,
                "sessionId": "session-0001",
                "attributes": {"turn": 2},
                "application": {"applicationId": "app-1234"},
                "user": {"userId": "user-5678"}
            },
            "request": request
        })
    }

    #[test]
    fn deserializes_launch_request() {
        let raw = envelope_json(json!({
            "type": "LaunchRequest",
            "requestId": "req-0001",
            "timestamp": "2016-03-04T12:34:56Z"
        }));
        let envelope: RequestEnvelope = serde_json::from_value(raw).unwrap();

        assert_eq!(envelope.request.type_tag(), "LaunchRequest");
        assert_eq!(envelope.request.request_id(), "req-0001");
    }

    #[test]
    fn deserializes_intent_request_with_slots() {
        let raw = envelope_json(json!({
            "type": "IntentRequest",
            "requestId": "req-0002",
            "timestamp": "2016-03-04T12:35:10Z",
            "intent": {
                "name": "OneShotPriceCheck",
                "slots": {"Address": {"name": "Address", "value": "Zilker Park"}}
            }
        }));
        let envelope: RequestEnvelope = serde_json::from_value(raw).unwrap();

        let Request::IntentRequest(req) = &envelope.request else {
            panic!("expected IntentRequest, got {}", envelope.request.type_tag());
        };
        assert_eq!(req.intent.name, "OneShotPriceCheck");
        assert_eq!(req.intent.slot_value("Address"), Some("Zilker Park"));
    }

    #[test]
    fn deserializes_session_ended_with_reason() {
        let raw = envelope_json(json!({
            "type": "SessionEndedRequest",
            "requestId": "req-0003",
            "timestamp": "2016-03-04T12:36:00Z",
            "reason": "USER_INITIATED"
        }));
        let envelope: RequestEnvelope = serde_json::from_value(raw).unwrap();

        let Request::SessionEndedRequest(req) = &envelope.request else {
            panic!("expected SessionEndedRequest");
        };
        assert_eq!(req.reason.as_deref(), Some("USER_INITIATED"));
    }

    #[test]
    fn unknown_request_type_fails_structurally() {
        let raw = envelope_json(json!({
            "type": "AudioPlayerRequest",
            "requestId": "req-0004",
            "timestamp": "2016-03-04T12:37:00Z"
        }));
        assert!(serde_json::from_value::<RequestEnvelope>(raw).is_err());
    }
}
