//! The host-provided completion handle.
//!
//! A serverless host hands the dispatcher one `ExecutionContext` per
//! invocation and requires a definite completion signal: the dispatcher calls
//! exactly one of `succeed` or `fail`, exactly once.

use std::time::Duration;

use voxskill_types::response::ResponseEnvelope;

use crate::error::SkillError;

/// Completion and deadline interface owned by the hosting runtime.
///
/// Object-safe so the dispatcher can hold any host's handle behind
/// `&dyn ExecutionContext`.
pub trait ExecutionContext: Send + Sync {
    /// Report successful completion. `None` signals success with no response
    /// payload (session-end processing).
    fn succeed(&self, result: Option<ResponseEnvelope>);

    /// Report failed completion with the surfaced error.
    fn fail(&self, error: SkillError);

    /// Time remaining before the host's own deadline fires. The dispatcher
    /// imposes no timeout of its own; long-running handlers can consult this
    /// to stay inside the host's budget.
    fn remaining_time(&self) -> Duration;
}
