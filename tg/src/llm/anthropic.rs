//! Anthropic Claude API client implementation
//!
//! Implements the GenerationClient trait for Anthropic's Messages API.
//! Structured output is obtained by presenting the output schema as a single
//! tool named after the capability and forcing the model to call it; the
//! tool call's input object is the generation result.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{GenerationClient, GenerationError, GenerationRequest};
use crate::config::LlmConfig;

/// Maximum number of retries for transient errors
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay for retries
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504 | 529)
}

/// Anthropic Claude API client
pub struct AnthropicClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
}

impl AnthropicClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, GenerationError> {
        debug!(?config, "from_config: called");
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| GenerationError::Config(format!("environment variable {} is not set", config.api_key_env)))?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder().timeout(timeout).build().map_err(GenerationError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
        })
    }

    /// Build the request body for the Anthropic API
    ///
    /// The output schema rides along as the only available tool, and
    /// tool_choice forces the model to call it.
    fn build_request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        debug!(%self.model, %request.capability, "build_request_body: called");
        serde_json::json!({
            "model": self.model,
            "max_tokens": request.max_tokens.min(self.max_tokens),
            "system": request.system_prompt,
            "messages": [{
                "role": "user",
                "content": request.prompt,
            }],
            "tools": [{
                "name": request.capability,
                "description": format!("Submit the complete {} result. Call exactly once.", request.capability),
                "input_schema": request.output_schema,
            }],
            "tool_choice": { "type": "tool", "name": request.capability },
        })
    }

    /// Extract the forced tool call's input from the API response
    fn extract_output(&self, capability: &str, api_response: AnthropicResponse) -> Result<serde_json::Value, GenerationError> {
        debug!(%capability, stop_reason = %api_response.stop_reason, "extract_output: called");
        for block in api_response.content {
            if let AnthropicContentBlock::ToolUse { name, input, .. } = block
                && name == capability
            {
                return Ok(input);
            }
        }

        Err(GenerationError::EmptyResponse {
            capability: capability.to_string(),
        })
    }
}

#[async_trait]
impl GenerationClient for AnthropicClient {
    async fn generate(&self, request: GenerationRequest) -> Result<serde_json::Value, GenerationError> {
        debug!(%self.model, %request.capability, "generate: called");
        let url = format!("{}/v1/messages", self.base_url);
        let body = self.build_request_body(&request);

        let mut last_error = None;
        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let backoff = INITIAL_BACKOFF_MS * 2u64.pow(attempt - 1);
                warn!(attempt, backoff_ms = backoff, "generate: retrying after transient error");
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }

            let response = match self
                .http
                .post(url.clone())
                .header("x-api-key", self.api_key.clone())
                .header("anthropic-version", "2023-06-01")
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    debug!(attempt, error = %e, "generate: network error");
                    last_error = Some(GenerationError::Network(e));
                    continue;
                }
            };

            let status = response.status().as_u16();

            if status == 429 {
                debug!("generate: rate limited (429)");
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(60);

                return Err(GenerationError::RateLimited {
                    retry_after: Duration::from_secs(retry_after),
                });
            }

            if is_retryable_status(status) && attempt < MAX_RETRIES {
                let text = response.text().await.unwrap_or_default();
                debug!(attempt, status, "generate: retryable error");
                last_error = Some(GenerationError::ApiError { status, message: text });
                continue;
            }

            if !response.status().is_success() {
                debug!(%status, "generate: API error");
                let text = response.text().await.unwrap_or_default();
                return Err(GenerationError::ApiError { status, message: text });
            }

            debug!("generate: success");
            let api_response: AnthropicResponse = response.json().await?;
            return self.extract_output(&request.capability, api_response);
        }

        Err(last_error.unwrap_or_else(|| GenerationError::EmptyResponse {
            capability: request.capability,
        }))
    }
}

// Anthropic API response types

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContentBlock>,
    stop_reason: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum AnthropicContentBlock {
    #[serde(rename = "text")]
    Text {
        #[allow(dead_code)]
        text: String,
    },
    #[serde(rename = "tool_use")]
    ToolUse {
        #[allow(dead_code)]
        id: String,
        name: String,
        input: serde_json::Value,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AnthropicClient {
        AnthropicClient {
            model: "claude-sonnet-4".to_string(),
            api_key: "test-key".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            http: Client::new(),
            max_tokens: 8192,
        }
    }

    fn request(max_tokens: u32) -> GenerationRequest {
        GenerationRequest::new(
            "gather_destination_intelligence",
            "You are a destination expert",
            "Analyze Goa",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "destination": { "type": "string" }
                },
                "required": ["destination"]
            }),
            max_tokens,
        )
    }

    #[test]
    fn test_build_request_body_forces_tool() {
        let body = client().build_request_body(&request(1000));

        assert_eq!(body["model"], "claude-sonnet-4");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["tools"][0]["name"], "gather_destination_intelligence");
        assert_eq!(body["tool_choice"]["type"], "tool");
        assert_eq!(body["tool_choice"]["name"], "gather_destination_intelligence");
    }

    #[test]
    fn test_max_tokens_capped() {
        let body = client().build_request_body(&request(50_000));
        assert_eq!(body["max_tokens"], 8192);
    }

    #[test]
    fn test_extract_output_finds_tool_call() {
        let response = AnthropicResponse {
            content: vec![
                AnthropicContentBlock::Text {
                    text: "Gathering...".to_string(),
                },
                AnthropicContentBlock::ToolUse {
                    id: "toolu_1".to_string(),
                    name: "gather_destination_intelligence".to_string(),
                    input: serde_json::json!({ "destination": "Goa" }),
                },
            ],
            stop_reason: "tool_use".to_string(),
        };

        let output = client().extract_output("gather_destination_intelligence", response).unwrap();
        assert_eq!(output["destination"], "Goa");
    }

    #[test]
    fn test_extract_output_no_tool_call_is_empty_response() {
        let response = AnthropicResponse {
            content: vec![AnthropicContentBlock::Text {
                text: "I cannot do that".to_string(),
            }],
            stop_reason: "end_turn".to_string(),
        };

        let err = client().extract_output("gather_destination_intelligence", response).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse { .. }));
    }

    #[test]
    fn test_extract_output_ignores_other_tools() {
        let response = AnthropicResponse {
            content: vec![AnthropicContentBlock::ToolUse {
                id: "toolu_1".to_string(),
                name: "some_other_tool".to_string(),
                input: serde_json::json!({}),
            }],
            stop_reason: "tool_use".to_string(),
        };

        let err = client().extract_output("estimate_trip_costs", response).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse { .. }));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(429));
        assert!(is_retryable_status(503));
        assert!(is_retryable_status(529));
        assert!(!is_retryable_status(400));
        assert!(!is_retryable_status(200));
    }
}
