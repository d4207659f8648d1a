//! Fixed execution plans, one per task kind.

use super::classify::TaskKind;

/// Ordered checklist for a task kind
pub type ExecutionPlan = &'static [&'static str];

const FIX_PLAN: ExecutionPlan = &[
    "Search for files related to the issue",
    "Read and understand the problematic code",
    "Identify the root cause",
    "Implement the fix",
    "Add or update tests",
    "Run all tests to verify",
];

const FEATURE_PLAN: ExecutionPlan = &[
    "Analyze existing code structure",
    "Design the feature architecture",
    "Create necessary files",
    "Implement the feature",
    "Add comprehensive tests",
    "Update documentation",
    "Run validation suite",
];

const TEST_PLAN: ExecutionPlan = &[
    "Identify what needs testing",
    "Create test files",
    "Write comprehensive test cases",
    "Run tests and verify coverage",
    "Fix any failing tests",
];

const REFACTOR_PLAN: ExecutionPlan = &[
    "Analyze current implementation",
    "Identify improvement opportunities",
    "Create refactoring plan",
    "Implement changes incrementally",
    "Ensure tests still pass",
    "Verify no regressions",
];

const ANALYZE_PLAN: ExecutionPlan = &[
    "Gather relevant files",
    "Perform deep analysis",
    "Create detailed report",
    "Identify issues or improvements",
    "Document findings",
];

const GENERAL_PLAN: ExecutionPlan = &[
    "Understand the request",
    "Plan the approach",
    "Execute the task",
    "Verify the results",
];

/// Look up the plan for a task kind
#[must_use]
pub const fn plan_for(kind: TaskKind) -> ExecutionPlan {
    match kind {
        TaskKind::Fix => FIX_PLAN,
        TaskKind::Feature => FEATURE_PLAN,
        TaskKind::Test => TEST_PLAN,
        TaskKind::Refactor => REFACTOR_PLAN,
        TaskKind::Analyze => ANALYZE_PLAN,
        TaskKind::General => GENERAL_PLAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_lengths() {
        let lengths: Vec<usize> = TaskKind::ALL.iter().map(|k| plan_for(*k).len()).collect();
        assert_eq!(lengths, vec![6, 7, 5, 6, 5, 4]);
    }

    #[test]
    fn test_fix_plan_order() {
        let plan = plan_for(TaskKind::Fix);
        assert_eq!(plan.first(), Some(&"Search for files related to the issue"));
        assert_eq!(plan.last(), Some(&"Run all tests to verify"));
    }
}
