//! `tethertool` subcommand implementations.

pub mod code_ops;
pub mod complete_ops;
pub mod input_ops;
