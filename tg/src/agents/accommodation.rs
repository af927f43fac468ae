//! Accommodation search agent
//!
//! Finds 3-8 concrete lodging options grounded in the destination profile's
//! accommodation categories and currency. Runs concurrently with activity
//! discovery in Phase 2.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{AgentError, AgentKind, run_generation};
use crate::domain::{AccommodationCategory, CurrencyInfo, DestinationProfile, Hotel, TripRequest};
use crate::llm::{GenerationClient, GenerationRequest};
use crate::prompts::{PromptLoader, embedded};
use crate::validation::{ValidationError, check_len, validate_hotel};

/// A recommended area to stay in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRecommendation {
    /// Area name
    pub area: String,
    /// What the area is like
    pub description: String,
    /// Traveler types this area suits
    pub best_for: Vec<String>,
}

/// The accommodation agent's findings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationShortlist {
    /// Destination name
    pub destination: String,
    /// 3-8 concrete lodging options
    pub options: Vec<Hotel>,
    /// Recommended areas to stay
    #[serde(default)]
    pub area_recommendations: Vec<AreaRecommendation>,
    /// Booking tips for this destination
    #[serde(default)]
    pub booking_tips: Vec<String>,
}

/// Template context for the accommodation prompt
#[derive(Debug, Serialize)]
struct PromptContext<'a> {
    destination: &'a str,
    duration_days: u32,
    people_count: u32,
    budget: f64,
    travel_dates: &'a str,
    preferences: &'a [String],
    currency: &'a CurrencyInfo,
    accommodation: &'a [AccommodationCategory],
}

/// Finds realistic lodging options for the trip
pub struct AccommodationAgent {
    client: Arc<dyn GenerationClient>,
    prompts: Arc<PromptLoader>,
    max_tokens: u32,
}

impl AccommodationAgent {
    /// Create a new agent
    pub fn new(client: Arc<dyn GenerationClient>, prompts: Arc<PromptLoader>, max_tokens: u32) -> Self {
        Self {
            client,
            prompts,
            max_tokens,
        }
    }

    /// Find lodging, grounded in the profile's accommodation categories and
    /// currency
    pub async fn run(
        &self,
        request: &TripRequest,
        profile: &DestinationProfile,
    ) -> Result<AccommodationShortlist, AgentError> {
        info!(destination = %request.destination, "Finding accommodation options");

        let context = PromptContext {
            destination: &request.destination,
            duration_days: request.duration_days,
            people_count: request.people_count,
            budget: request.budget,
            travel_dates: &request.travel_dates,
            preferences: &request.preferences,
            currency: &profile.currency,
            accommodation: &profile.accommodation,
        };

        let prompt = self
            .prompts
            .render("accommodation-search", &context)
            .map_err(|e| AgentError::Prompt {
                agent: AgentKind::AccommodationSearch,
                destination: request.destination.clone(),
                message: e.to_string(),
            })?;

        let generation = GenerationRequest::new(
            AgentKind::AccommodationSearch.capability(),
            embedded::ACCOMMODATION_SYSTEM,
            prompt,
            Self::output_schema(),
            self.max_tokens,
        );

        let shortlist: AccommodationShortlist =
            run_generation(&self.client, AgentKind::AccommodationSearch, &request.destination, generation).await?;

        Self::validate(&shortlist).map_err(|source| AgentError::Validation {
            agent: AgentKind::AccommodationSearch,
            destination: request.destination.clone(),
            source,
        })?;

        info!(
            destination = %request.destination,
            option_count = shortlist.options.len(),
            "Accommodation options found"
        );
        Ok(shortlist)
    }

    /// Invariants: 3-8 options, each with a non-negative nightly cost and a
    /// score in range
    fn validate(shortlist: &AccommodationShortlist) -> Result<(), ValidationError> {
        check_len("options", shortlist.options.len(), 3, 8)?;
        for hotel in &shortlist.options {
            validate_hotel(hotel)?;
        }
        Ok(())
    }

    /// JSON Schema for [`AccommodationShortlist`]
    fn output_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "destination": { "type": "string" },
                "options": {
                    "type": "array",
                    "minItems": 3,
                    "maxItems": 8,
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string", "description": "Unique hotel ID" },
                            "name": { "type": "string", "description": "Real property name" },
                            "category": { "type": "string", "description": "Luxury, Mid-Range, Budget, ..." },
                            "cost_per_night": { "type": "number", "description": "INR" },
                            "booking_link": { "type": "string", "description": "Direct booking link on a real platform" },
                            "safety_score": { "type": "number", "minimum": 0, "maximum": 100 },
                            "review": {
                                "type": "object",
                                "properties": {
                                    "source": { "type": "string" },
                                    "snippet": { "type": "string" },
                                    "rating": { "type": "number" }
                                },
                                "required": ["source", "snippet", "rating"]
                            },
                            "amenities": { "type": "array", "items": { "type": "string" } }
                        },
                        "required": ["id", "name", "category", "cost_per_night", "booking_link", "safety_score", "review", "amenities"]
                    }
                },
                "area_recommendations": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "area": { "type": "string" },
                            "description": { "type": "string" },
                            "best_for": { "type": "array", "items": { "type": "string" } }
                        },
                        "required": ["area", "description", "best_for"]
                    }
                },
                "booking_tips": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["destination", "options", "area_recommendations", "booking_tips"]
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
            travel_dates: "December".to_string(),
            preferences: vec![],
            meeting: None,
        }
    }

    fn profile() -> DestinationProfile {
        serde_json::from_value(serde_json::json!({
            "destination": "Goa",
            "country": "India",
            "region": "West India",
            "climate": { "season": "Winter", "temperature": "22-32C", "rainfall": "Minimal" },
            "currency": { "local": "INR", "exchange_rate": 1.0 },
            "language": { "primary": "Konkani", "english_level": "High" },
            "transportation": [],
            "accommodation": [{
                "category": "Mid-Range",
                "average_cost_per_night": 4000.0,
                "popular_areas": ["Baga", "Calangute"],
                "amenities": ["WiFi"],
                "safety_score": 85.0
            }],
            "costs": {
                "meals": { "budget": 800.0, "mid_range": 1500.0, "luxury": 3500.0 },
                "free_activities": [],
                "activity_cost_min": 200.0,
                "activity_cost_max": 4000.0
            },
            "safety": { "overall_score": 82.0, "concerns": [], "tips": [] },
            "culture": { "customs": [], "etiquette": [], "festivals": [] }
        }))
        .unwrap()
    }

    fn hotel_json(id: &str, cost: f64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": format!("Hotel {}", id),
            "category": "Mid-Range",
            "cost_per_night": cost,
            "booking_link": "https://www.booking.com/example",
            "safety_score": 85.0,
            "review": { "source": "Booking.com", "snippet": "Clean and friendly", "rating": 4.3 },
            "amenities": ["WiFi", "Pool"]
        })
    }

    fn shortlist_json() -> serde_json::Value {
        serde_json::json!({
            "destination": "Goa",
            "options": [hotel_json("h1", 5000.0), hotel_json("h2", 2500.0), hotel_json("h3", 9000.0)],
            "area_recommendations": [{
                "area": "Baga",
                "description": "Lively beach strip",
                "best_for": ["nightlife"]
            }],
            "booking_tips": ["Book early for December"]
        })
    }

    #[tokio::test]
    async fn test_run_returns_shortlist() {
        let client = Arc::new(ScriptedClient::new().respond("find_accommodation_options", shortlist_json()));
        let agent = AccommodationAgent::new(client.clone(), Arc::new(PromptLoader::embedded_only()), 8192);

        let shortlist = agent.run(&request(), &profile()).await.unwrap();
        assert_eq!(shortlist.options.len(), 3);

        let recorded = client.requests.lock().unwrap();
        assert!(recorded[0].prompt.contains("Mid-Range: about INR 4000"));
        assert!(recorded[0].prompt.contains("Baga"));
    }

    #[tokio::test]
    async fn test_negative_nightly_cost_rejected() {
        let mut json = shortlist_json();
        json["options"][1]["cost_per_night"] = serde_json::json!(-2500.0);

        let client: Arc<dyn GenerationClient> =
            Arc::new(ScriptedClient::new().respond("find_accommodation_options", json));
        let agent = AccommodationAgent::new(client, Arc::new(PromptLoader::embedded_only()), 8192);

        let err = agent.run(&request(), &profile()).await.unwrap_err();
        assert!(matches!(err, AgentError::Validation { .. }));
        assert!(err.to_string().contains("failed to find accommodation options for Goa"));
    }

    #[tokio::test]
    async fn test_too_few_options_rejected() {
        let json = serde_json::json!({
            "destination": "Goa",
            "options": [hotel_json("h1", 5000.0)],
            "area_recommendations": [],
            "booking_tips": []
        });

        let client: Arc<dyn GenerationClient> =
            Arc::new(ScriptedClient::new().respond("find_accommodation_options", json));
        let agent = AccommodationAgent::new(client, Arc::new(PromptLoader::embedded_only()), 8192);

        let err = agent.run(&request(), &profile()).await.unwrap_err();
        assert!(matches!(err, AgentError::Validation { .. }));
    }

    #[test]
    fn test_options_deserialize_into_domain_hotels() {
        let shortlist: AccommodationShortlist = serde_json::from_value(shortlist_json()).unwrap();
        assert_eq!(shortlist.options[0].cost_per_night, 5_000.0);
        assert_eq!(shortlist.options[2].review.rating, 4.3);
    }
}
