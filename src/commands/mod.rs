//! Command implementations for the ollama-params CLI

pub mod completions;
pub mod copy;
pub mod helpers;
pub mod list;
pub mod parse;
pub mod registry;
pub mod show;
pub mod validate;
pub mod version;
