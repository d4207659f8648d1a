//! Hooks Module
//!
//! Provides the filter pipeline that inspects a tool invocation before the
//! host runs it, and the stdin/stdout plumbing around it.

pub mod autopilot;
pub mod registry;
pub mod stdio;
pub mod types;

pub use autopilot::{extract_command, AutoPilotHook};
pub use registry::{Hook, HookRegistry};
pub use stdio::{read_event, run_exchange, write_decision};
pub use types::{HookAction, HookEvent, HookResponse, HookResult};

use crate::config::Settings;
use thiserror::Error;

/// Errors raised while talking to the host.
#[derive(Debug, Error)]
pub enum HookError {
    /// Reading the event from the host failed.
    #[error("Failed to read hook input: {0}")]
    ReadInput(#[source] std::io::Error),
    /// The event is not valid JSON or not shaped like an event.
    #[error("Invalid hook event: {0}")]
    ParseEvent(#[source] serde_json::Error),
    /// The response could not be encoded.
    #[error("Failed to encode hook response: {0}")]
    SerializeResponse(#[source] serde_json::Error),
    /// Writing the response back to the host failed.
    #[error("Failed to write hook response: {0}")]
    WriteOutput(#[source] std::io::Error),
}

/// Result type for host I/O.
pub type HookIoResult<T> = Result<T, HookError>;

/// Build the registry used for a hook run.
///
/// A disabled configuration yields an empty registry, which passes every
/// event through.
#[must_use]
pub fn build_registry(settings: &Settings) -> HookRegistry {
    let mut registry = HookRegistry::new();
    if settings.enabled {
        registry.register(Box::new(AutoPilotHook::new(settings.trigger.clone())));
    }
    registry
}
