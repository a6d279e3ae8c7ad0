//! Request lifecycle: validation, request-type routing, intent routing.
//!
//! `SkillDispatcher::execute` is the sole entry point for one invocation. The
//! whole pipeline is a `Result`-returning call chain; `execute` converts its
//! outcome into exactly one `ExecutionContext` signal, so the host always
//! receives a definite completion regardless of what hooks and handlers do.

use tracing::{debug, warn};

use voxskill_types::request::{IntentRequest, Request, RequestEnvelope};
use voxskill_types::response::ResponseEnvelope;
use voxskill_types::session::Session;

use crate::context::ExecutionContext;
use crate::error::SkillError;
use crate::registry::IntentRegistry;
use crate::skill::Skill;
use crate::speechlet::{Responder, Speechlet};

/// Owns the request lifecycle for one concrete skill.
///
/// Holds the skill's lifecycle hooks, its intent registry, and the single
/// configuration parameter: the expected application id. State is per-skill,
/// not per-invocation; a host can keep one dispatcher behind an `Arc` and
/// feed it every event.
pub struct SkillDispatcher<S> {
    /// Expected application id; `None` disables the identity check.
    application_id: Option<String>,
    skill: S,
    intents: IntentRegistry,
}

impl<S: Skill> SkillDispatcher<S> {
    /// Create a dispatcher for `skill` with its registered intents.
    ///
    /// An empty `application_id` disables the identity check, same as `None`.
    pub fn new(application_id: Option<String>, skill: S, intents: IntentRegistry) -> Self {
        Self {
            application_id: application_id.filter(|id| !id.is_empty()),
            skill,
            intents,
        }
    }

    /// Process one inbound event, reporting the outcome through `ctx`.
    ///
    /// Exactly one of `ctx.succeed` / `ctx.fail` is invoked, exactly once.
    pub async fn execute(&self, envelope: RequestEnvelope, ctx: &dyn ExecutionContext) {
        let session_id = envelope.session.session_id.clone();
        match self.dispatch(envelope).await {
            Ok(result) => ctx.succeed(result),
            Err(error) => {
                warn!(%session_id, %error, "invocation failed");
                ctx.fail(error);
            }
        }
    }

    /// The dispatch pipeline. `Ok(None)` is a successful completion with no
    /// response payload (session-end processing).
    async fn dispatch(
        &self,
        mut envelope: RequestEnvelope,
    ) -> Result<Option<ResponseEnvelope>, SkillError> {
        debug!(
            request_type = envelope.request.type_tag(),
            request_id = envelope.request.request_id(),
            session_id = %envelope.session.session_id,
            application_id = %envelope.session.application.application_id,
            "dispatching request"
        );

        if let Some(expected) = &self.application_id {
            let actual = &envelope.session.application.application_id;
            if actual != expected {
                return Err(SkillError::UnauthorizedApplication(actual.clone()));
            }
        }

        // Handlers must never observe an absent attribute map.
        envelope.session.attributes_mut();

        if envelope.session.new {
            self.skill
                .on_session_started(&envelope.request, &envelope.session);
        }

        let RequestEnvelope {
            mut session,
            request,
            ..
        } = envelope;

        match request {
            Request::LaunchRequest(req) => {
                let speechlet = self
                    .skill
                    .on_launch(&req, &mut session, Responder::new())
                    .await?;
                Ok(Some(speechlet.into_envelope(&session)))
            }
            Request::IntentRequest(req) => {
                let speechlet = self.on_intent(&req, &mut session).await?;
                Ok(Some(speechlet.into_envelope(&session)))
            }
            Request::SessionEndedRequest(req) => {
                self.skill.on_session_ended(&req, &session);
                Ok(None)
            }
            Request::SessionStartedRequest(_) => {
                Err(SkillError::UnroutableRequest("SessionStartedRequest"))
            }
        }
    }

    /// Intent routing: map lookup on the intent name, case-sensitive.
    async fn on_intent(
        &self,
        request: &IntentRequest,
        session: &mut Session,
    ) -> Result<Speechlet, SkillError> {
        let intent = &request.intent;
        let Some(handler) = self.intents.get(&intent.name) else {
            return Err(SkillError::UnsupportedIntent(intent.name.clone()));
        };
        debug!(intent = %intent.name, "dispatching intent");
        handler.handle(intent, session, Responder::new()).await
    }
}
