//! Activity discovery agent
//!
//! Finds and curates activities for the destination, grouped by category,
//! with suggested daily themes. Runs concurrently with accommodation search
//! in Phase 2; both depend only on the Phase-1 destination profile.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{AgentError, AgentKind, run_generation};
use crate::domain::{Activity, ClimateInfo, DestinationProfile, TripRequest};
use crate::llm::{GenerationClient, GenerationRequest};
use crate::prompts::{PromptLoader, embedded};
use crate::validation::{ValidationError, check_cost, check_len, check_score};

/// Activities grouped under one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCategory {
    /// Category name (Cultural, Adventure, Food, Nature, ...)
    pub category: String,
    /// Activities in this category
    pub activities: Vec<Activity>,
}

/// A suggested theme for one day of the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTheme {
    /// Day number
    pub day: u32,
    /// Theme for the day (e.g. "Cultural Immersion")
    pub theme: String,
    /// What the day focuses on
    pub description: String,
    /// Activity ids recommended for this day
    pub recommended_activity_ids: Vec<String>,
}

/// Everything the activity agent discovered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCatalog {
    /// Destination name
    pub destination: String,
    /// Activities organized by category
    pub categories: Vec<ActivityCategory>,
    /// Suggested daily themes
    pub daily_themes: Vec<DailyTheme>,
    /// Lesser-known local experiences
    #[serde(default)]
    pub hidden_gems: Vec<String>,
}

impl ActivityCatalog {
    /// Iterate all activities across categories
    pub fn all_activities(&self) -> impl Iterator<Item = &Activity> {
        self.categories.iter().flat_map(|c| c.activities.iter())
    }

    /// Total number of discovered activities
    pub fn total_count(&self) -> usize {
        self.categories.iter().map(|c| c.activities.len()).sum()
    }
}

/// Template context for the activity prompt
#[derive(Debug, Serialize)]
struct PromptContext<'a> {
    destination: &'a str,
    duration_days: u32,
    people_count: u32,
    budget: f64,
    preferences: &'a [String],
    travel_dates: &'a str,
    climate: &'a ClimateInfo,
    festivals: &'a [String],
    free_activities: &'a [String],
    activity_cost_min: f64,
    activity_cost_max: f64,
}

/// Discovers activities matching the traveler's preferences
pub struct ActivityDiscoveryAgent {
    client: Arc<dyn GenerationClient>,
    prompts: Arc<PromptLoader>,
    max_tokens: u32,
}

impl ActivityDiscoveryAgent {
    /// Create a new agent
    pub fn new(client: Arc<dyn GenerationClient>, prompts: Arc<PromptLoader>, max_tokens: u32) -> Self {
        Self {
            client,
            prompts,
            max_tokens,
        }
    }

    /// Discover activities, grounded in the destination profile's climate,
    /// culture, and cost slices
    pub async fn run(&self, request: &TripRequest, profile: &DestinationProfile) -> Result<ActivityCatalog, AgentError> {
        info!(destination = %request.destination, "Discovering activities");

        let context = PromptContext {
            destination: &request.destination,
            duration_days: request.duration_days,
            people_count: request.people_count,
            budget: request.budget,
            preferences: &request.preferences,
            travel_dates: &request.travel_dates,
            climate: &profile.climate,
            festivals: &profile.culture.festivals,
            free_activities: &profile.costs.free_activities,
            activity_cost_min: profile.costs.activity_cost_min,
            activity_cost_max: profile.costs.activity_cost_max,
        };

        let prompt = self
            .prompts
            .render("activity-discovery", &context)
            .map_err(|e| AgentError::Prompt {
                agent: AgentKind::ActivityDiscovery,
                destination: request.destination.clone(),
                message: e.to_string(),
            })?;

        let generation = GenerationRequest::new(
            AgentKind::ActivityDiscovery.capability(),
            embedded::ACTIVITY_SYSTEM,
            prompt,
            Self::output_schema(),
            self.max_tokens,
        );

        let catalog: ActivityCatalog =
            run_generation(&self.client, AgentKind::ActivityDiscovery, &request.destination, generation).await?;

        Self::validate(&catalog).map_err(|source| AgentError::Validation {
            agent: AgentKind::ActivityDiscovery,
            destination: request.destination.clone(),
            source,
        })?;

        info!(
            destination = %request.destination,
            activity_count = catalog.total_count(),
            category_count = catalog.categories.len(),
            "Activities discovered"
        );
        Ok(catalog)
    }

    /// Invariants: at least one non-empty category, every activity priced
    /// >= 0 with a score in range
    fn validate(catalog: &ActivityCatalog) -> Result<(), ValidationError> {
        check_len("categories", catalog.categories.len(), 1, usize::MAX)?;
        for category in &catalog.categories {
            check_len(format!("categories[{}].activities", category.category), category.activities.len(), 1, usize::MAX)?;
            for activity in &category.activities {
                check_cost(format!("activity[{}].cost", activity.id), activity.cost)?;
                check_score(format!("activity[{}].safety_score", activity.id), activity.safety_score)?;
            }
        }
        Ok(())
    }

    /// JSON Schema for [`ActivityCatalog`]
    fn output_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "destination": { "type": "string" },
                "categories": {
                    "type": "array",
                    "description": "Activities organized by category",
                    "items": {
                        "type": "object",
                        "properties": {
                            "category": { "type": "string" },
                            "activities": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "id": { "type": "string", "description": "Unique activity ID" },
                                        "name": { "type": "string" },
                                        "category": { "type": "string" },
                                        "duration": { "type": "string", "description": "e.g. '2-3 hours', 'Half day'" },
                                        "cost": { "type": "number", "description": "INR, 0 for free activities" },
                                        "location": { "type": "string" },
                                        "difficulty": { "type": "string", "enum": ["Easy", "Moderate", "Challenging"] },
                                        "safety_score": { "type": "number", "minimum": 0, "maximum": 100 },
                                        "booking_required": { "type": "boolean" },
                                        "review": {
                                            "type": "object",
                                            "properties": {
                                                "source": { "type": "string" },
                                                "snippet": { "type": "string" },
                                                "rating": { "type": "number" }
                                            },
                                            "required": ["source", "snippet", "rating"]
                                        },
                                        "selected": { "type": "boolean", "description": "Default selection status" }
                                    },
                                    "required": [
                                        "id", "name", "category", "duration", "cost", "location",
                                        "difficulty", "safety_score", "booking_required", "review", "selected"
                                    ]
                                }
                            }
                        },
                        "required": ["category", "activities"]
                    }
                },
                "daily_themes": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "day": { "type": "integer", "minimum": 1 },
                            "theme": { "type": "string" },
                            "description": { "type": "string" },
                            "recommended_activity_ids": { "type": "array", "items": { "type": "string" } }
                        },
                        "required": ["day", "theme", "description", "recommended_activity_ids"]
                    }
                },
                "hidden_gems": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["destination", "categories", "daily_themes", "hidden_gems"]
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
            preferences: vec!["beaches".to_string()],
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
            "accommodation": [],
            "costs": {
                "meals": { "budget": 800.0, "mid_range": 1500.0, "luxury": 3500.0 },
                "free_activities": ["Beach walks"],
                "activity_cost_min": 200.0,
                "activity_cost_max": 4000.0
            },
            "safety": { "overall_score": 82.0, "concerns": [], "tips": [] },
            "culture": { "customs": [], "etiquette": [], "festivals": ["Sunburn"] }
        }))
        .unwrap()
    }

    fn catalog_json() -> serde_json::Value {
        serde_json::json!({
            "destination": "Goa",
            "categories": [{
                "category": "Nature",
                "activities": [{
                    "id": "act-dudhsagar",
                    "name": "Dudhsagar Falls day trip",
                    "category": "Nature",
                    "duration": "Full day",
                    "cost": 2500.0,
                    "location": "Mollem",
                    "difficulty": "Moderate",
                    "safety_score": 75.0,
                    "booking_required": true,
                    "review": { "source": "TripAdvisor", "snippet": "Stunning", "rating": 4.6 },
                    "selected": true
                }]
            }],
            "daily_themes": [{
                "day": 1,
                "theme": "Coastal",
                "description": "Beaches and shacks",
                "recommended_activity_ids": ["act-dudhsagar"]
            }],
            "hidden_gems": ["Fontainhas heritage walk"]
        })
    }

    #[tokio::test]
    async fn test_run_returns_catalog() {
        let client = Arc::new(ScriptedClient::new().respond("discover_activities", catalog_json()));
        let agent = ActivityDiscoveryAgent::new(client.clone(), Arc::new(PromptLoader::embedded_only()), 8192);

        let catalog = agent.run(&request(), &profile()).await.unwrap();
        assert_eq!(catalog.total_count(), 1);
        assert_eq!(catalog.all_activities().next().unwrap().id, "act-dudhsagar");

        let recorded = client.requests.lock().unwrap();
        assert!(recorded[0].prompt.contains("Season: Winter"));
        assert!(recorded[0].prompt.contains("Sunburn"));
    }

    #[tokio::test]
    async fn test_negative_cost_fails_validation() {
        let mut json = catalog_json();
        json["categories"][0]["activities"][0]["cost"] = serde_json::json!(-50.0);

        let client: Arc<dyn GenerationClient> = Arc::new(ScriptedClient::new().respond("discover_activities", json));
        let agent = ActivityDiscoveryAgent::new(client, Arc::new(PromptLoader::embedded_only()), 8192);

        let err = agent.run(&request(), &profile()).await.unwrap_err();
        assert!(matches!(err, AgentError::Validation { .. }));
        assert_eq!(err.agent(), AgentKind::ActivityDiscovery);
    }

    #[tokio::test]
    async fn test_empty_catalog_fails_validation() {
        let json = serde_json::json!({
            "destination": "Goa",
            "categories": [],
            "daily_themes": [],
            "hidden_gems": []
        });

        let client: Arc<dyn GenerationClient> = Arc::new(ScriptedClient::new().respond("discover_activities", json));
        let agent = ActivityDiscoveryAgent::new(client, Arc::new(PromptLoader::embedded_only()), 8192);

        let err = agent.run(&request(), &profile()).await.unwrap_err();
        assert!(matches!(err, AgentError::Validation { .. }));
    }

    #[test]
    fn test_sample_deserializes_into_domain_activity() {
        let catalog: ActivityCatalog = serde_json::from_value(catalog_json()).unwrap();
        let activity = catalog.all_activities().next().unwrap();
        assert_eq!(activity.difficulty, crate::domain::Difficulty::Moderate);
        assert!(activity.selected);
    }
}
