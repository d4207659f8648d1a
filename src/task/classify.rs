//! Task classification.
//!
//! Assigns a command to one of a fixed set of task kinds by keyword
//! matching. Rules are evaluated in table order and the first hit wins.

use std::fmt;

/// Category of work a command asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Bug fixing and debugging
    Fix,
    /// New functionality
    Feature,
    /// Writing or running tests
    Test,
    /// Restructuring existing code
    Refactor,
    /// Reviews and audits
    Analyze,
    /// Anything else
    General,
}

/// Ordered keyword rules. Priority is the table order.
const RULES: &[(TaskKind, &[&str])] = &[
    (TaskKind::Fix, &["fix", "debug", "error", "bug"]),
    (TaskKind::Feature, &["add", "implement", "create", "build"]),
    (TaskKind::Test, &["test", "verify", "check"]),
    (TaskKind::Refactor, &["refactor", "improve", "optimize"]),
    (TaskKind::Analyze, &["analyze", "review", "audit"]),
];

impl TaskKind {
    /// Every kind, in priority order
    pub const ALL: [Self; 6] = [
        Self::Fix,
        Self::Feature,
        Self::Test,
        Self::Refactor,
        Self::Analyze,
        Self::General,
    ];

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fix => "fix",
            Self::Feature => "feature",
            Self::Test => "test",
            Self::Refactor => "refactor",
            Self::Analyze => "analyze",
            Self::General => "general",
        }
    }

    /// Display label with the first letter capitalized
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fix => "Fix",
            Self::Feature => "Feature",
            Self::Test => "Test",
            Self::Refactor => "Refactor",
            Self::Analyze => "Analyze",
            Self::General => "General",
        }
    }

    /// Keywords that select this kind. `General` has none.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match RULES.iter().find(|(kind, _)| *kind == self) {
            Some(&(_, keywords)) => keywords,
            None => &[],
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a command.
///
/// Matching is a case-insensitive substring test, so `"prefix"` counts as
/// `"fix"` and `"address"` as `"add"`.
#[must_use]
pub fn classify(text: &str) -> TaskKind {
    let normalized = text.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map_or(TaskKind::General, |(kind, _)| *kind)
}
