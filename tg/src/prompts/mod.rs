//! Prompt templates for the data agents
//!
//! Each agent renders its Handlebars template through [`PromptLoader`],
//! which prefers user override files and falls back to the embedded
//! defaults compiled into the binary.

pub mod embedded;
mod loader;

pub use loader::{PromptLoader, TemplateSource};
