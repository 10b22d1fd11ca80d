//! Core pairing-code primitives: word tables, code generation, settings.

pub mod code;
pub mod settings;
pub mod wordlist;
