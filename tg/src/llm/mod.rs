//! Structured generation client for TripGenie
//!
//! The planning core's only external dependency: a client that accepts a
//! capability name, a rendered prompt, and an output schema, and returns a
//! schema-conforming JSON object or fails.

use std::sync::Arc;

use tracing::debug;

mod anthropic;
pub mod client;
mod error;

pub use anthropic::AnthropicClient;
pub use client::{GenerationClient, GenerationRequest};
pub use error::GenerationError;

use crate::config::LlmConfig;

/// Create a generation client based on the provider specified in config
///
/// Currently only "anthropic" is supported.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn GenerationClient>, GenerationError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "anthropic" => {
            debug!("create_client: creating Anthropic client");
            Ok(Arc::new(AnthropicClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_client: unknown provider");
            Err(GenerationError::Config(format!(
                "Unknown generation provider: '{}'. Supported: anthropic",
                other
            )))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted generation client for unit tests

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{GenerationClient, GenerationError, GenerationRequest};

    /// Returns a canned JSON value per capability; unknown capabilities get
    /// an EmptyResponse. Records every request it sees.
    #[derive(Default)]
    pub struct ScriptedClient {
        responses: HashMap<String, serde_json::Value>,
        pub requests: Mutex<Vec<GenerationRequest>>,
    }

    impl ScriptedClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, capability: &str, value: serde_json::Value) -> Self {
            self.responses.insert(capability.to_string(), value);
            self
        }
    }

    #[async_trait]
    impl GenerationClient for ScriptedClient {
        async fn generate(&self, request: GenerationRequest) -> Result<serde_json::Value, GenerationError> {
            self.requests.lock().unwrap().push(request.clone());
            match self.responses.get(&request.capability) {
                Some(value) => Ok(value.clone()),
                None => Err(GenerationError::EmptyResponse {
                    capability: request.capability,
                }),
            }
        }
    }
}
