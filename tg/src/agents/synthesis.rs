//! Itinerary synthesis agent
//!
//! The final generation call of the pipeline. Receives the raw trip request
//! plus the outputs of all three prior phases and must emit exactly three
//! complete itineraries with distinct vibes, each internally consistent with
//! the research it was given. The orchestrator validates the result and
//! zeroes the derived cost fields afterwards.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::{AccommodationShortlist, ActivityCatalog, AgentError, AgentKind, CostModel, run_generation};
use crate::domain::{DestinationProfile, ItineraryBundle, TripRequest};
use crate::llm::{GenerationClient, GenerationRequest};
use crate::prompts::{PromptLoader, embedded};

/// Template context for the synthesis prompt
///
/// The research outputs ride along as pretty-printed JSON blobs; the model
/// is instructed to keep ids, costs, and scores consistent with them.
#[derive(Debug, Serialize)]
struct PromptContext<'a> {
    request: &'a TripRequest,
    destination_json: String,
    activities_json: String,
    accommodation_json: String,
    costs_json: String,
}

/// Merges all agent outputs into the final three-variant bundle
pub struct SynthesisAgent {
    client: Arc<dyn GenerationClient>,
    prompts: Arc<PromptLoader>,
    max_tokens: u32,
}

impl SynthesisAgent {
    /// Create a new agent
    pub fn new(client: Arc<dyn GenerationClient>, prompts: Arc<PromptLoader>, max_tokens: u32) -> Self {
        Self {
            client,
            prompts,
            max_tokens,
        }
    }

    /// Synthesize the final bundle from all prior phase outputs
    pub async fn run(
        &self,
        request: &TripRequest,
        profile: &DestinationProfile,
        catalog: &ActivityCatalog,
        shortlist: &AccommodationShortlist,
        costs: &CostModel,
    ) -> Result<ItineraryBundle, AgentError> {
        info!(destination = %request.destination, "Synthesizing itineraries");

        let context = PromptContext {
            request,
            destination_json: to_pretty_json(profile, request, AgentKind::ItinerarySynthesis)?,
            activities_json: to_pretty_json(catalog, request, AgentKind::ItinerarySynthesis)?,
            accommodation_json: to_pretty_json(shortlist, request, AgentKind::ItinerarySynthesis)?,
            costs_json: to_pretty_json(costs, request, AgentKind::ItinerarySynthesis)?,
        };

        let prompt = self
            .prompts
            .render("itinerary-synthesis", &context)
            .map_err(|e| AgentError::Prompt {
                agent: AgentKind::ItinerarySynthesis,
                destination: request.destination.clone(),
                message: e.to_string(),
            })?;

        let generation = GenerationRequest::new(
            AgentKind::ItinerarySynthesis.capability(),
            embedded::SYNTHESIS_SYSTEM,
            prompt,
            Self::output_schema(),
            self.max_tokens,
        );

        let bundle: ItineraryBundle =
            run_generation(&self.client, AgentKind::ItinerarySynthesis, &request.destination, generation).await?;

        info!(
            destination = %request.destination,
            itinerary_count = bundle.itineraries.len(),
            "Itineraries synthesized"
        );
        Ok(bundle)
    }

    /// JSON Schema for [`ItineraryBundle`]
    fn output_schema() -> serde_json::Value {
        let review_schema = serde_json::json!({
            "type": "object",
            "properties": {
                "source": { "type": "string" },
                "snippet": { "type": "string" },
                "rating": { "type": "number" }
            },
            "required": ["source", "snippet", "rating"]
        });

        serde_json::json!({
            "type": "object",
            "properties": {
                "itineraries": {
                    "type": "array",
                    "minItems": 3,
                    "maxItems": 3,
                    "description": "Three itineraries with pairwise-distinct vibes",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string", "description": "Unique itinerary ID" },
                            "vibe": { "type": "string", "description": "Distinct thematic label (e.g. Relaxed, Adventurous, Cultural)" },
                            "title": { "type": "string" },
                            "description": { "type": "string" },
                            "daily_plan": {
                                "type": "array",
                                "description": "One entry per day, days 1..N contiguous",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "day": { "type": "integer", "minimum": 1 },
                                        "title": { "type": "string" },
                                        "theme": { "type": "string" },
                                        "activities": {
                                            "type": "array",
                                            "items": {
                                                "type": "object",
                                                "properties": {
                                                    "id": { "type": "string" },
                                                    "name": { "type": "string" },
                                                    "category": { "type": "string" },
                                                    "duration": { "type": "string" },
                                                    "cost": { "type": "number", "description": "INR, consistent with the activity catalog" },
                                                    "location": { "type": "string" },
                                                    "difficulty": { "type": "string", "enum": ["Easy", "Moderate", "Challenging"] },
                                                    "safety_score": { "type": "number", "minimum": 0, "maximum": 100 },
                                                    "booking_required": { "type": "boolean" },
                                                    "review": review_schema.clone(),
                                                    "selected": { "type": "boolean", "description": "Default selection status" }
                                                },
                                                "required": [
                                                    "id", "name", "category", "duration", "cost", "location",
                                                    "difficulty", "safety_score", "booking_required", "review", "selected"
                                                ]
                                            }
                                        }
                                    },
                                    "required": ["day", "title", "theme", "activities"]
                                }
                            },
                            "hotel_options": {
                                "type": "array",
                                "minItems": 3,
                                "maxItems": 6,
                                "description": "Drawn from the accommodation shortlist",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "id": { "type": "string" },
                                        "name": { "type": "string" },
                                        "category": { "type": "string" },
                                        "cost_per_night": { "type": "number" },
                                        "booking_link": { "type": "string" },
                                        "safety_score": { "type": "number", "minimum": 0, "maximum": 100 },
                                        "review": review_schema,
                                        "amenities": { "type": "array", "items": { "type": "string" } }
                                    },
                                    "required": ["id", "name", "category", "cost_per_night", "booking_link", "safety_score", "review", "amenities"]
                                }
                            },
                            "commute_options": {
                                "type": "array",
                                "minItems": 3,
                                "maxItems": 6,
                                "description": "Consistent with the destination's transport modes",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "id": { "type": "string" },
                                        "transport_type": { "type": "string" },
                                        "cost": { "type": "number", "description": "INR per day" },
                                        "pros": { "type": "array", "items": { "type": "string" } },
                                        "cons": { "type": "array", "items": { "type": "string" } },
                                        "safety_score": { "type": "number", "minimum": 0, "maximum": 100 }
                                    },
                                    "required": ["id", "transport_type", "cost", "pros", "cons", "safety_score"]
                                }
                            },
                            "cost": {
                                "type": "object",
                                "properties": {
                                    "flights": { "type": "number", "description": "From the cost model" },
                                    "food": { "type": "number", "description": "Per-day rate from the cost model" },
                                    "accommodation": { "type": "number", "description": "Leave 0, derived from selections" },
                                    "activities": { "type": "number", "description": "Leave 0, derived from selections" },
                                    "commute": { "type": "number", "description": "Leave 0, derived from selections" },
                                    "total": { "type": "number", "description": "Leave 0, derived from selections" }
                                },
                                "required": ["flights", "food", "accommodation", "activities", "commute", "total"]
                            },
                            "overall_safety_score": { "type": "number", "minimum": 0, "maximum": 100 },
                            "unique_experiences": { "type": "array", "items": { "type": "string" } },
                            "local_insights": { "type": "array", "items": { "type": "string" } }
                        },
                        "required": [
                            "id", "vibe", "title", "description", "daily_plan", "hotel_options",
                            "commute_options", "cost", "overall_safety_score", "unique_experiences", "local_insights"
                        ]
                    }
                },
                "destination_overview": {
                    "type": "object",
                    "properties": {
                        "destination": { "type": "string" },
                        "best_time_to_visit": { "type": "string" },
                        "currency": { "type": "string" },
                        "language": { "type": "string" },
                        "safety_overview": { "type": "string" },
                        "cultural_tips": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["destination", "best_time_to_visit", "currency", "language", "safety_overview", "cultural_tips"]
                },
                "budget_guidance": {
                    "type": "object",
                    "properties": {
                        "recommended_budget": {
                            "type": "object",
                            "properties": {
                                "budget": { "type": "number" },
                                "mid_range": { "type": "number" },
                                "luxury": { "type": "number" }
                            },
                            "required": ["budget", "mid_range", "luxury"]
                        },
                        "cost_saving_tips": { "type": "array", "items": { "type": "string" } },
                        "hidden_costs": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["recommended_budget", "cost_saving_tips", "hidden_costs"]
                }
            },
            "required": ["itineraries", "destination_overview", "budget_guidance"]
        })
    }
}

/// Pretty-print a research output for the synthesis prompt
fn to_pretty_json<T: Serialize>(value: &T, request: &TripRequest, agent: AgentKind) -> Result<String, AgentError> {
    serde_json::to_string_pretty(value).map_err(|source| AgentError::Schema {
        agent,
        destination: request.destination.clone(),
        source,
    })
}
