//! Wire-schema domain types for Voxskill.
//!
//! This crate contains the voice-platform payload types consumed and produced
//! by the dispatch framework: the inbound request envelope, session, intent,
//! and the outbound speechlet response envelope.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, chrono.

pub mod intent;
pub mod request;
pub mod response;
pub mod session;
