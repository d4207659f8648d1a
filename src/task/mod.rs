//! Task classification and the plans attached to each category.

pub mod classify;
pub mod plan;

pub use classify::{classify, TaskKind};
pub use plan::{plan_for, ExecutionPlan};
