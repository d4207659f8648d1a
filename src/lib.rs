#![deny(missing_docs)]
//! AutoPilot hook library.
//!
//! A `PreToolUse` filter for an assistant's tool pipeline: commands carrying
//! the `--auto` flag are blocked and answered with an autonomous execution
//! plan.

/// Configuration management.
pub mod config;
/// Tool-call filters and host protocol plumbing.
pub mod hooks;
/// Host settings installer.
pub mod install;
/// Feedback text construction.
pub mod prompt;
/// Task classification and plans.
pub mod task;
