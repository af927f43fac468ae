//! Formal trip enhancement agent
//!
//! Adjusts a planned trip around a fixed business engagement: lodging near
//! the meeting, transport that fits its schedule, and buffer times so delays
//! cannot make the traveler late. Only runs for formal trips that carry
//! meeting details.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::{AgentError, AgentKind, run_generation};
use crate::domain::{MeetingDetails, TripAdjustments, TripRequest};
use crate::llm::{GenerationClient, GenerationRequest};
use crate::prompts::{PromptLoader, embedded};

/// Template context for the formal enhancement prompt
#[derive(Debug, Serialize)]
struct PromptContext<'a> {
    destination: &'a str,
    duration_days: u32,
    budget: f64,
    people_count: u32,
    travel_dates: &'a str,
    meeting: &'a MeetingDetails,
}

/// Adjusts plans for formal business trips
pub struct FormalEnhancementAgent {
    client: Arc<dyn GenerationClient>,
    prompts: Arc<PromptLoader>,
    max_tokens: u32,
}

impl FormalEnhancementAgent {
    /// Create a new agent
    pub fn new(client: Arc<dyn GenerationClient>, prompts: Arc<PromptLoader>, max_tokens: u32) -> Self {
        Self {
            client,
            prompts,
            max_tokens,
        }
    }

    /// Produce adjustments for the given meeting
    pub async fn run(&self, request: &TripRequest, meeting: &MeetingDetails) -> Result<TripAdjustments, AgentError> {
        info!(destination = %request.destination, meeting_location = %meeting.location, "Enhancing formal trip");

        let context = PromptContext {
            destination: &request.destination,
            duration_days: request.duration_days,
            budget: request.budget,
            people_count: request.people_count,
            travel_dates: &request.travel_dates,
            meeting,
        };

        let prompt = self
            .prompts
            .render("formal-enhancement", &context)
            .map_err(|e| AgentError::Prompt {
                agent: AgentKind::FormalEnhancement,
                destination: request.destination.clone(),
                message: e.to_string(),
            })?;

        let generation = GenerationRequest::new(
            AgentKind::FormalEnhancement.capability(),
            embedded::FORMAL_SYSTEM,
            prompt,
            Self::output_schema(),
            self.max_tokens,
        );

        let adjustments: TripAdjustments =
            run_generation(&self.client, AgentKind::FormalEnhancement, &request.destination, generation).await?;

        info!(destination = %request.destination, "Formal trip adjustments ready");
        Ok(adjustments)
    }

    /// JSON Schema for [`TripAdjustments`]
    fn output_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "adjusted_stay": { "type": "string", "description": "Lodging adjusted for the meeting location and facilities" },
                "adjusted_transport": { "type": "string", "description": "Transport adjusted for the meeting schedule" },
                "adjusted_schedule": { "type": "string", "description": "Day plan around the meeting" },
                "adjusted_buffer_times": { "type": "string", "description": "Explicit buffers against delays" }
            },
            "required": ["adjusted_stay", "adjusted_transport", "adjusted_schedule", "adjusted_buffer_times"]
        })
    }
}
