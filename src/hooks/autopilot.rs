//! AutoPilot hook.
//!
//! Intercepts `Bash` and `Task` calls whose command carries the trigger
//! flag, and answers them with a canned plan instead of running them.

use super::registry::Hook;
use super::types::{HookEvent, HookResult};
use crate::config::DEFAULT_TRIGGER;
use crate::prompt::render_feedback;
use crate::task::{classify, plan_for};
use tracing::debug;

/// Tools that carry free-text instructions, and the input field holding it
const COMMAND_FIELDS: &[(&str, &str)] = &[("Bash", "command"), ("Task", "prompt")];

/// Extract the free-text command of an event.
///
/// Returns `None` for tools outside the recognized set. A recognized tool
/// whose field is missing (or not a string) yields an empty command.
#[must_use]
pub fn extract_command(event: &HookEvent) -> Option<&str> {
    COMMAND_FIELDS
        .iter()
        .find(|(tool, _)| *tool == event.tool_name)
        .map(|(_, field)| event.input_str(field).unwrap_or(""))
}

/// Hook that turns `--auto` commands into an autonomous execution plan.
pub struct AutoPilotHook {
    trigger: String,
}

impl AutoPilotHook {
    /// Create a hook reacting to the given trigger substring.
    #[must_use]
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
        }
    }

    /// The trigger substring this hook reacts to
    #[must_use]
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Remove every occurrence of the trigger and trim the rest.
    ///
    /// Stripping repeats until no trigger is left, since removing one
    /// occurrence can join its neighbours into a new one (`--a--autouto`).
    #[must_use]
    pub fn clean_command(&self, command: &str) -> String {
        let mut clean = command.to_string();
        if self.trigger.is_empty() {
            return clean.trim().to_string();
        }

        while clean.contains(self.trigger.as_str()) {
            clean = clean.replace(self.trigger.as_str(), "");
        }
        clean.trim().to_string()
    }

    /// Build the feedback for a command that already carries the trigger.
    ///
    /// Also used by `preview`, where the trigger is optional.
    #[must_use]
    pub fn feedback_for(&self, command: &str) -> String {
        let clean = self.clean_command(command);
        let kind = classify(&clean);
        debug!(kind = %kind, task = %clean, "Classified command");
        render_feedback(kind, &clean, plan_for(kind))
    }
}

impl Default for AutoPilotHook {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER)
    }
}

impl Hook for AutoPilotHook {
    fn name(&self) -> &'static str {
        "autopilot"
    }

    fn handle(&self, event: &HookEvent) -> HookResult {
        let Some(command) = extract_command(event) else {
            debug!(tool = %event.tool_name, "Tool carries no command");
            return HookResult::PassThrough;
        };

        // An empty trigger would match every command.
        if self.trigger.is_empty() || !command.contains(self.trigger.as_str()) {
            return HookResult::PassThrough;
        }

        HookResult::Block {
            feedback: self.feedback_for(command),
        }
    }
}
