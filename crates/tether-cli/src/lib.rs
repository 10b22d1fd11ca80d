//! Command-line tools and the interactive code prompt.

pub mod commands;
pub mod prompt;
