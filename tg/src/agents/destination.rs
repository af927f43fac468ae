//! Destination intelligence agent
//!
//! The first agent in every planning run. Produces the
//! [`DestinationProfile`] all downstream agents slice for their own context:
//! transport modes, accommodation categories, local costs, safety, culture.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::{AgentError, AgentKind, run_generation};
use crate::domain::{DestinationProfile, TripRequest};
use crate::llm::{GenerationClient, GenerationRequest};
use crate::prompts::{PromptLoader, embedded};
use crate::validation::validate_profile;

/// Template context for the destination prompt
#[derive(Debug, Serialize)]
struct PromptContext<'a> {
    destination: &'a str,
    duration_days: u32,
    budget: f64,
    travel_dates: &'a str,
    people_count: u32,
}

/// Gathers comprehensive information about a destination
pub struct DestinationIntelligenceAgent {
    client: Arc<dyn GenerationClient>,
    prompts: Arc<PromptLoader>,
    max_tokens: u32,
}

impl DestinationIntelligenceAgent {
    /// Create a new agent
    pub fn new(client: Arc<dyn GenerationClient>, prompts: Arc<PromptLoader>, max_tokens: u32) -> Self {
        Self {
            client,
            prompts,
            max_tokens,
        }
    }

    /// Analyze a destination
    pub async fn run(&self, request: &TripRequest) -> Result<DestinationProfile, AgentError> {
        info!(destination = %request.destination, "Gathering destination intelligence");

        let context = PromptContext {
            destination: &request.destination,
            duration_days: request.duration_days,
            budget: request.budget,
            travel_dates: &request.travel_dates,
            people_count: request.people_count,
        };

        let prompt = self
            .prompts
            .render("destination-intelligence", &context)
            .map_err(|e| AgentError::Prompt {
                agent: AgentKind::DestinationIntelligence,
                destination: request.destination.clone(),
                message: e.to_string(),
            })?;

        let generation = GenerationRequest::new(
            AgentKind::DestinationIntelligence.capability(),
            embedded::DESTINATION_SYSTEM,
            prompt,
            Self::output_schema(),
            self.max_tokens,
        );

        let profile: DestinationProfile =
            run_generation(&self.client, AgentKind::DestinationIntelligence, &request.destination, generation).await?;

        validate_profile(&profile).map_err(|source| AgentError::Validation {
            agent: AgentKind::DestinationIntelligence,
            destination: request.destination.clone(),
            source,
        })?;

        info!(
            destination = %profile.destination,
            transport_count = profile.transportation.len(),
            accommodation_count = profile.accommodation.len(),
            "Destination intelligence gathered"
        );
        Ok(profile)
    }

    /// JSON Schema for [`DestinationProfile`]
    fn output_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "destination": { "type": "string", "description": "Confirmed destination name" },
                "country": { "type": "string" },
                "region": { "type": "string" },
                "climate": {
                    "type": "object",
                    "properties": {
                        "season": { "type": "string", "description": "Season during the travel dates" },
                        "temperature": { "type": "string", "description": "Expected temperature range" },
                        "rainfall": { "type": "string" }
                    },
                    "required": ["season", "temperature", "rainfall"]
                },
                "currency": {
                    "type": "object",
                    "properties": {
                        "local": { "type": "string", "description": "Local currency" },
                        "exchange_rate": { "type": "number", "description": "Approximate exchange rate to INR" }
                    },
                    "required": ["local", "exchange_rate"]
                },
                "language": {
                    "type": "object",
                    "properties": {
                        "primary": { "type": "string" },
                        "english_level": { "type": "string", "description": "High/Medium/Low" }
                    },
                    "required": ["primary", "english_level"]
                },
                "transportation": {
                    "type": "array",
                    "description": "All locally available transport modes, destination specific",
                    "items": {
                        "type": "object",
                        "properties": {
                            "transport_type": { "type": "string" },
                            "availability": { "type": "string" },
                            "cost_min": { "type": "number", "description": "Minimum cost per day/trip in INR" },
                            "cost_max": { "type": "number", "description": "Maximum cost per day/trip in INR" },
                            "pros": { "type": "array", "items": { "type": "string" } },
                            "cons": { "type": "array", "items": { "type": "string" } },
                            "safety_score": { "type": "number", "minimum": 0, "maximum": 100 }
                        },
                        "required": ["transport_type", "availability", "cost_min", "cost_max", "pros", "cons", "safety_score"]
                    }
                },
                "accommodation": {
                    "type": "array",
                    "description": "Accommodation categories available at this destination",
                    "items": {
                        "type": "object",
                        "properties": {
                            "category": { "type": "string" },
                            "average_cost_per_night": { "type": "number", "description": "INR" },
                            "popular_areas": { "type": "array", "items": { "type": "string" } },
                            "amenities": { "type": "array", "items": { "type": "string" } },
                            "safety_score": { "type": "number", "minimum": 0, "maximum": 100 }
                        },
                        "required": ["category", "average_cost_per_night", "popular_areas", "amenities", "safety_score"]
                    }
                },
                "costs": {
                    "type": "object",
                    "properties": {
                        "meals": {
                            "type": "object",
                            "properties": {
                                "budget": { "type": "number", "description": "Budget meal cost per day in INR" },
                                "mid_range": { "type": "number" },
                                "luxury": { "type": "number" }
                            },
                            "required": ["budget", "mid_range", "luxury"]
                        },
                        "free_activities": { "type": "array", "items": { "type": "string" } },
                        "activity_cost_min": { "type": "number" },
                        "activity_cost_max": { "type": "number" }
                    },
                    "required": ["meals", "free_activities", "activity_cost_min", "activity_cost_max"]
                },
                "safety": {
                    "type": "object",
                    "properties": {
                        "overall_score": { "type": "number", "minimum": 0, "maximum": 100 },
                        "concerns": { "type": "array", "items": { "type": "string" } },
                        "tips": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["overall_score", "concerns", "tips"]
                },
                "culture": {
                    "type": "object",
                    "properties": {
                        "customs": { "type": "array", "items": { "type": "string" } },
                        "etiquette": { "type": "array", "items": { "type": "string" } },
                        "festivals": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["customs", "etiquette", "festivals"]
                }
            },
            "required": [
                "destination", "country", "region", "climate", "currency", "language",
                "transportation", "accommodation", "costs", "safety", "culture"
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::ScriptedClient;

    fn request() -> TripRequest {
        TripRequest {
            destination: "Goa".to_string(),
            duration_days: 3,
            people_count: 2,
            budget: 50_000.0,
            trip_type: Default::default(),
            travel_dates: "mid December".to_string(),
            preferences: vec!["beaches".to_string()],
            meeting: None,
        }
    }

    fn profile_json() -> serde_json::Value {
        serde_json::json!({
            "destination": "Goa",
            "country": "India",
            "region": "West India",
            "climate": { "season": "Winter", "temperature": "22-32C", "rainfall": "Minimal" },
            "currency": { "local": "INR", "exchange_rate": 1.0 },
            "language": { "primary": "Konkani", "english_level": "High" },
            "transportation": [{
                "transport_type": "Scooter rental",
                "availability": "Everywhere",
                "cost_min": 300.0,
                "cost_max": 500.0,
                "pros": ["Cheap"],
                "cons": ["Helmet"],
                "safety_score": 70.0
            }],
            "accommodation": [{
                "category": "Mid-Range",
                "average_cost_per_night": 4000.0,
                "popular_areas": ["Baga"],
                "amenities": ["WiFi"],
                "safety_score": 85.0
            }],
            "costs": {
                "meals": { "budget": 800.0, "mid_range": 1500.0, "luxury": 3500.0 },
                "free_activities": ["Beach walks"],
                "activity_cost_min": 200.0,
                "activity_cost_max": 4000.0
            },
            "safety": { "overall_score": 82.0, "concerns": [], "tips": [] },
            "culture": { "customs": [], "etiquette": [], "festivals": ["Sunburn"] }
        })
    }

    #[tokio::test]
    async fn test_run_returns_validated_profile() {
        let client = Arc::new(ScriptedClient::new().respond("gather_destination_intelligence", profile_json()));
        let agent = DestinationIntelligenceAgent::new(client.clone(), Arc::new(PromptLoader::embedded_only()), 8192);

        let profile = agent.run(&request()).await.unwrap();
        assert_eq!(profile.destination, "Goa");
        assert_eq!(profile.transportation.len(), 1);

        let recorded = client.requests.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].capability, "gather_destination_intelligence");
        assert!(recorded[0].prompt.contains("Destination: Goa"));
    }

    #[tokio::test]
    async fn test_empty_generation_is_tagged_failure() {
        let client: Arc<dyn GenerationClient> = Arc::new(ScriptedClient::new());
        let agent = DestinationIntelligenceAgent::new(client, Arc::new(PromptLoader::embedded_only()), 8192);

        let err = agent.run(&request()).await.unwrap_err();
        assert_eq!(err.agent(), AgentKind::DestinationIntelligence);
        assert_eq!(err.destination(), "Goa");
        assert!(matches!(err, AgentError::Generation { .. }));
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_failure() {
        let client: Arc<dyn GenerationClient> = Arc::new(
            ScriptedClient::new().respond("gather_destination_intelligence", serde_json::json!({ "oops": true })),
        );
        let agent = DestinationIntelligenceAgent::new(client, Arc::new(PromptLoader::embedded_only()), 8192);

        let err = agent.run(&request()).await.unwrap_err();
        assert!(matches!(err, AgentError::Schema { .. }));
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_validation_failure() {
        let mut json = profile_json();
        json["safety"]["overall_score"] = serde_json::json!(140.0);

        let client: Arc<dyn GenerationClient> =
            Arc::new(ScriptedClient::new().respond("gather_destination_intelligence", json));
        let agent = DestinationIntelligenceAgent::new(client, Arc::new(PromptLoader::embedded_only()), 8192);

        let err = agent.run(&request()).await.unwrap_err();
        assert!(matches!(err, AgentError::Validation { .. }));
    }

    #[test]
    fn test_schema_matches_domain_type() {
        // The sample JSON conforms to the schema's required fields and must
        // deserialize into the domain type without loss.
        let profile: DestinationProfile = serde_json::from_value(profile_json()).unwrap();
        assert_eq!(profile.costs.meals.mid_range, 1_500.0);

        let schema = DestinationIntelligenceAgent::output_schema();
        for field in schema["required"].as_array().unwrap() {
            assert!(
                profile_json().get(field.as_str().unwrap()).is_some(),
                "sample missing required field {}",
                field
            );
        }
    }
}
