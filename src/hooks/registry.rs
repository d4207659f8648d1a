//! Hook Registry - manages and executes hooks
//!
//! Provides the `Hook` trait and `HookRegistry` for registering and
//! running filters against a tool invocation.

use super::types::{HookEvent, HookResult};
use tracing::{debug, info};

/// Trait for implementing hooks
pub trait Hook: Send + Sync {
    /// Name of the hook for logging and debugging
    fn name(&self) -> &'static str;

    /// Handle a hook event and return the decision
    ///
    /// Hooks should return `HookResult::PassThrough` when they have no
    /// opinion about the call.
    fn handle(&self, event: &HookEvent) -> HookResult;
}

/// Registry that manages multiple hooks
pub struct HookRegistry {
    hooks: Vec<Box<dyn Hook>>,
}

impl HookRegistry {
    /// Create a new empty hook registry
    #[must_use]
    pub const fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a new hook
    pub fn register(&mut self, hook: Box<dyn Hook>) {
        debug!(hook = hook.name(), "Registered hook");
        self.hooks.push(hook);
    }

    /// Execute all hooks for an event
    ///
    /// Hooks are executed in registration order. The first blocking
    /// result stops the chain and is returned.
    pub fn execute(&self, event: &HookEvent) -> HookResult {
        for hook in &self.hooks {
            let result = hook.handle(event);

            match &result {
                HookResult::PassThrough => {
                    debug!(hook = hook.name(), tool = %event.tool_name, "Hook passed");
                }
                HookResult::Block { feedback } => {
                    info!(
                        hook = hook.name(),
                        tool = %event.tool_name,
                        feedback_len = feedback.len(),
                        "Hook blocking tool call"
                    );
                    return result;
                }
            }
        }

        HookResult::PassThrough
    }

    /// Check if any hooks are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Get the number of registered hooks
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
