//! Intent handler trait and its object-safe dynamic-dispatch wrapper.
//!
//! `IntentHandler` uses RPITIT for async handling, so it cannot be a trait
//! object directly. `BoxIntentHandler` provides the erased form used by the
//! registry:
//! 1. an object-safe `IntentHandlerDyn` trait with boxed futures,
//! 2. a blanket impl of `IntentHandlerDyn` for all `T: IntentHandler`,
//! 3. `BoxIntentHandler` wrapping `Box<dyn IntentHandlerDyn>` and delegating.

use std::future::Future;
use std::pin::Pin;

use voxskill_types::intent::Intent;
use voxskill_types::session::Session;

use crate::error::SkillError;
use crate::speechlet::{Responder, Speechlet};

/// A handler for one named intent.
///
/// Handlers may await external work (geocoding, price lookups) before
/// producing their response; the returned `Result` guarantees every exit --
/// including failed awaited work -- reaches exactly one completion signal.
/// The session is mutable so a handler can stash attributes for the next
/// turn; they are echoed into the response envelope after the handler
/// returns.
pub trait IntentHandler: Send + Sync {
    /// Handle the intent and produce a terminal response via `responder`.
    fn handle(
        &self,
        intent: &Intent,
        session: &mut Session,
        responder: Responder,
    ) -> impl Future<Output = Result<Speechlet, SkillError>> + Send;
}

/// Object-safe version of [`IntentHandler`] with boxed futures.
///
/// Exists solely to enable dynamic dispatch; a blanket implementation covers
/// every `IntentHandler`.
pub trait IntentHandlerDyn: Send + Sync {
    fn handle_boxed<'a>(
        &'a self,
        intent: &'a Intent,
        session: &'a mut Session,
        responder: Responder,
    ) -> Pin<Box<dyn Future<Output = Result<Speechlet, SkillError>> + Send + 'a>>;
}

impl<T: IntentHandler> IntentHandlerDyn for T {
    fn handle_boxed<'a>(
        &'a self,
        intent: &'a Intent,
        session: &'a mut Session,
        responder: Responder,
    ) -> Pin<Box<dyn Future<Output = Result<Speechlet, SkillError>> + Send + 'a>> {
        Box::pin(self.handle(intent, session, responder))
    }
}

/// Type-erased intent handler, so handlers of different concrete types can
/// share one registry.
pub struct BoxIntentHandler {
    inner: Box<dyn IntentHandlerDyn>,
}

impl BoxIntentHandler {
    /// Wrap a concrete `IntentHandler` in a type-erased box.
    pub fn new<T: IntentHandler + 'static>(handler: T) -> Self {
        Self {
            inner: Box::new(handler),
        }
    }

    /// Handle the intent via the erased inner handler.
    pub async fn handle(
        &self,
        intent: &Intent,
        session: &mut Session,
        responder: Responder,
    ) -> Result<Speechlet, SkillError> {
        self.inner.handle_boxed(intent, session, responder).await
    }
}

impl std::fmt::Debug for BoxIntentHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxIntentHandler").finish_non_exhaustive()
    }
}
