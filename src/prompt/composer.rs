//! Feedback composer module
//!
//! Builds the guidance text returned to the assistant when a call is
//! intercepted: the task, its category, the numbered plan and the
//! autonomy directives.

use crate::task::{plan_for, ExecutionPlan, TaskKind};
use std::fmt::Write;

const BANNER: &str = "🤖 AutoPilot Mode Activated!";

/// Directives appended after the plan
const AUTONOMY_DIRECTIVES: &str = "🚨 IMPORTANT: Execute this plan AUTONOMOUSLY:
- Do NOT ask for permission between steps
- Do NOT use interactive Task() calls
- Do NOT wait for user confirmation
- Execute all steps in sequence
- Only report back when complete or if truly blocked";

/// Operating principles, numbered in the rendered text
const PRINCIPLES: [&str; 5] = [
    "Read files before editing them",
    "Run tests after making changes",
    "Create new files when needed",
    "Fix any issues that arise",
    "Complete the entire task",
];

const CLOSING: &str = "Start executing the plan now!";

fn push_numbered(out: &mut String, items: &[&str]) {
    for (i, item) in items.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}. {item}", i + 1);
    }
}

/// Render the feedback for a classified command
#[must_use]
pub fn render_feedback(kind: TaskKind, command: &str, plan: ExecutionPlan) -> String {
    let mut out = format!(
        "{BANNER}\n\nTask: {command}\nType: {label}\n\nAutonomous Execution Plan:\n",
        label = kind.label()
    );

    push_numbered(&mut out, plan);

    out.push('\n');
    out.push_str(AUTONOMY_DIRECTIVES);
    out.push_str("\n\nUse these principles:\n");
    push_numbered(&mut out, &PRINCIPLES);
    out.push('\n');
    out.push_str(CLOSING);

    out
}

/// Whether `needle` occurs in the fixed text of any rendered feedback.
///
/// A trigger that passes this check cannot reappear in feedback through the
/// template itself.
#[must_use]
pub fn template_contains(needle: &str) -> bool {
    TaskKind::ALL
        .iter()
        .any(|kind| render_feedback(*kind, "", plan_for(*kind)).contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_task_and_type() {
        let text = render_feedback(TaskKind::Test, "verify login", plan_for(TaskKind::Test));
        assert!(text.starts_with(BANNER));
        assert!(text.contains("Task: verify login\n"));
        assert!(text.contains("Type: Test\n"));
        assert!(text.ends_with(CLOSING));
    }

    #[test]
    fn test_plan_is_numbered_from_one() {
        let text = render_feedback(TaskKind::General, "", plan_for(TaskKind::General));
        assert!(text.contains(
            "Autonomous Execution Plan:\n\
             1. Understand the request\n\
             2. Plan the approach\n\
             3. Execute the task\n\
             4. Verify the results\n\
             \n🚨 IMPORTANT"
        ));
    }

    #[test]
    fn test_template_contains_fixed_text() {
        assert!(template_contains("Fix"));
        assert!(template_contains("plan"));
        assert!(template_contains("Document findings"));
        assert!(!template_contains("--auto"));
        assert!(!template_contains("--yolo"));
    }

    #[test]
    fn test_principles_follow_directives() {
        let text = render_feedback(TaskKind::Fix, "x", plan_for(TaskKind::Fix));
        let directives = text.find("Do NOT wait for user confirmation");
        let principles = text.find("5. Complete the entire task");
        assert!(directives.is_some());
        assert!(directives < principles);
    }
}
