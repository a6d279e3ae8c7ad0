//! Event dispatch and response-building framework for voice skills.
//!
//! A concrete skill implements the [`skill::Skill`] lifecycle hooks, registers
//! an [`handler::IntentHandler`] per intent name in an
//! [`registry::IntentRegistry`], and hands both to a
//! [`dispatcher::SkillDispatcher`]. The dispatcher validates each inbound
//! [`voxskill_types::request::RequestEnvelope`], routes it, and reports the
//! outcome through the host's [`context::ExecutionContext`] -- exactly one
//! success or failure signal per invocation.

pub mod context;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod registry;
pub mod skill;
pub mod speechlet;
