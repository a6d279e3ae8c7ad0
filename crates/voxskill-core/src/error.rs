//! Error taxonomy for the dispatch lifecycle.

use thiserror::Error;

/// Errors surfaced through the execution context's failure signal.
///
/// Every variant is recoverable from the host's perspective: the dispatcher
/// converts it into a single `fail` call and the invocation completes
/// cleanly. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum SkillError {
    /// The inbound event's application id does not match the configured one.
    /// Raised before any hook or handler runs.
    #[error("unauthorized application '{0}'")]
    UnauthorizedApplication(String),

    /// No handler is registered for the named intent.
    #[error("unsupported intent '{0}'")]
    UnsupportedIntent(String),

    /// The request type is outside the fixed routing set
    /// {LaunchRequest, IntentRequest, SessionEndedRequest}.
    #[error("no route for request type '{0}'")]
    UnroutableRequest(&'static str),

    /// An error raised by hook or handler code.
    #[error("handler error: {0}")]
    Handler(#[from] anyhow::Error),
}
