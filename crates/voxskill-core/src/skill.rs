//! The lifecycle-hook trait a concrete skill implements.

use std::future::Future;

use voxskill_types::request::{LaunchRequest, Request, SessionEndedRequest};
use voxskill_types::session::Session;

use crate::error::SkillError;
use crate::speechlet::{Responder, Speechlet};

/// Lifecycle hooks owned by the concrete skill.
///
/// `on_launch` is required: every skill must greet a bare open. The session
/// notification hooks are observational -- they produce no response -- and
/// default to no-ops, so a skill overrides only what it needs. Intent
/// handling is not a hook here; intents route through the
/// [`crate::registry::IntentRegistry`] supplied to the dispatcher.
pub trait Skill: Send + Sync {
    /// Called once, before routing, when the session is marked new. The
    /// request is whichever one opened the session.
    fn on_session_started(&self, _request: &Request, _session: &Session) {}

    /// Called for a LaunchRequest: the user opened the skill without naming
    /// an intent. Must produce a terminal response.
    fn on_launch(
        &self,
        request: &LaunchRequest,
        session: &mut Session,
        responder: Responder,
    ) -> impl Future<Output = Result<Speechlet, SkillError>> + Send;

    /// Called when the platform closed the session. No response is produced;
    /// the dispatcher signals completion itself afterwards.
    fn on_session_ended(&self, _request: &SessionEndedRequest, _session: &Session) {}
}
