//! Prompt construction for intercepted calls.

pub mod composer;

pub use composer::{render_feedback, template_contains};
