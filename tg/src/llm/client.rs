//! Structured generation client trait
//!
//! The sole wire-level dependency of the planning core. A client receives a
//! named capability, a rendered prompt, and a JSON Schema describing the
//! expected output, and returns either a schema-conforming object or a
//! failure. Everything behind this trait (provider, transport, retries) is
//! opaque to the agents.

use async_trait::async_trait;

use super::GenerationError;

/// Everything needed for one structured generation call
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Capability name; also names the tool the output schema is bound to
    /// (e.g. "gather_destination_intelligence")
    pub capability: String,

    /// System prompt establishing the agent's role
    pub system_prompt: String,

    /// User prompt (rendered from a Handlebars template)
    pub prompt: String,

    /// JSON Schema the output object must conform to
    pub output_schema: serde_json::Value,

    /// Max tokens for the response
    pub max_tokens: u32,
}

impl GenerationRequest {
    /// Create a request with the given capability and schema
    pub fn new(
        capability: impl Into<String>,
        system_prompt: impl Into<String>,
        prompt: impl Into<String>,
        output_schema: serde_json::Value,
        max_tokens: u32,
    ) -> Self {
        Self {
            capability: capability.into(),
            system_prompt: system_prompt.into(),
            prompt: prompt.into(),
            output_schema,
            max_tokens,
        }
    }
}

/// A structured generation backend
///
/// Implementations must return an object conforming to the request's
/// `output_schema`, or fail. They never return partial output.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Run one structured generation call
    async fn generate(&self, request: GenerationRequest) -> Result<serde_json::Value, GenerationError>;
}
