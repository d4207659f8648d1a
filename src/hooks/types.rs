//! Hook Types - events, decisions, and the response record
//!
//! Defines the data structures exchanged with the host's tool pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single tool invocation announced by the host before it runs
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HookEvent {
    /// Name of the tool being called (`Bash`, `Task`, ...)
    #[serde(default)]
    pub tool_name: String,

    /// Tool-specific input fields
    #[serde(default)]
    pub tool_input: Map<String, Value>,
}

impl HookEvent {
    /// Create an event for the given tool with the given input object
    #[must_use]
    pub fn new(tool_name: impl Into<String>, tool_input: Map<String, Value>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_input,
        }
    }

    /// Look up a string field of the tool input.
    ///
    /// Missing fields and non-string values both read as `None`.
    #[must_use]
    pub fn input_str(&self, field: &str) -> Option<&str> {
        self.tool_input.get(field).and_then(Value::as_str)
    }
}

/// Decision produced for one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HookResult {
    /// No opinion, the host runs the tool as usual
    #[default]
    PassThrough,

    /// Block the tool call and hand the feedback back to the assistant
    Block {
        /// Guidance text shown in place of the tool result
        feedback: String,
    },
}

impl HookResult {
    /// Whether this decision blocks the call
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Self::Block { .. })
    }

    /// Convert into the record written back to the host, if any
    #[must_use]
    pub fn into_response(self) -> Option<HookResponse> {
        match self {
            Self::PassThrough => None,
            Self::Block { feedback } => Some(HookResponse {
                action: HookAction::Block,
                feedback,
            }),
        }
    }
}

/// Actions the host understands in a response record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HookAction {
    /// Do not run the tool
    Block,
}

/// JSON record written to stdout when the hook blocks a call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookResponse {
    /// What the host should do with the call
    pub action: HookAction,
    /// Text returned to the assistant
    pub feedback: String,
}
