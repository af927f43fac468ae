//! Cost estimation agent
//!
//! Turns the destination cost profile plus the concrete Phase-2 findings
//! (activity prices, nightly rates) into realistic budget bands, a flight
//! estimate, per-day food tiers, and hidden costs. Runs in Phase 3, after
//! the parallel discovery phase completes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{AccommodationShortlist, ActivityCatalog, AgentError, AgentKind, run_generation};
use crate::domain::{BudgetTiers, CurrencyInfo, DestinationProfile, MealCosts, TripRequest};
use crate::llm::{GenerationClient, GenerationRequest};
use crate::prompts::{PromptLoader, embedded};
use crate::validation::{ValidationError, check_cost};

/// Round-trip flight estimate from India
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEstimate {
    /// Flight route (e.g. "Delhi to Goa")
    pub route: String,
    /// Example airline
    pub airline: String,
    /// Minimum economy fare in INR
    pub economy_min: f64,
    /// Maximum economy fare in INR
    pub economy_max: f64,
    /// Average economy fare in INR
    pub economy_average: f64,
}

/// A potential unexpected expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenCost {
    /// Type of cost (visa, insurance, tips, ...)
    pub cost_type: String,
    /// What it covers
    pub description: String,
    /// Estimated cost in INR
    pub estimated_cost: f64,
}

/// The cost agent's full estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Destination name
    pub destination: String,
    /// Total trip cost by tier
    pub trip_totals: BudgetTiers,
    /// Flight estimate
    pub flights: FlightEstimate,
    /// Per-day food cost by tier
    pub food_per_day: MealCosts,
    /// Potential unexpected expenses
    #[serde(default)]
    pub hidden_costs: Vec<HiddenCost>,
    /// Cost-saving strategies
    #[serde(default)]
    pub cost_saving_tips: Vec<String>,
}

/// Accommodation category + nightly rate slice fed to the prompt
#[derive(Debug, Serialize)]
struct AccommodationSlice<'a> {
    category: &'a str,
    cost_per_night: f64,
}

/// Activity name + cost slice fed to the prompt
#[derive(Debug, Serialize)]
struct ActivitySlice<'a> {
    name: &'a str,
    category: &'a str,
    cost: f64,
}

/// Template context for the cost prompt
#[derive(Debug, Serialize)]
struct PromptContext<'a> {
    destination: &'a str,
    duration_days: u32,
    people_count: u32,
    budget: f64,
    travel_dates: &'a str,
    currency: &'a CurrencyInfo,
    meals: &'a MealCosts,
    accommodation_options: Vec<AccommodationSlice<'a>>,
    activities: Vec<ActivitySlice<'a>>,
}

/// Estimates realistic trip costs
pub struct CostEstimationAgent {
    client: Arc<dyn GenerationClient>,
    prompts: Arc<PromptLoader>,
    max_tokens: u32,
}

impl CostEstimationAgent {
    /// Create a new agent
    pub fn new(client: Arc<dyn GenerationClient>, prompts: Arc<PromptLoader>, max_tokens: u32) -> Self {
        Self {
            client,
            prompts,
            max_tokens,
        }
    }

    /// Estimate costs from the destination profile and the Phase-2 findings
    pub async fn run(
        &self,
        request: &TripRequest,
        profile: &DestinationProfile,
        catalog: &ActivityCatalog,
        shortlist: &AccommodationShortlist,
    ) -> Result<CostModel, AgentError> {
        info!(destination = %request.destination, "Estimating trip costs");

        let context = PromptContext {
            destination: &request.destination,
            duration_days: request.duration_days,
            people_count: request.people_count,
            budget: request.budget,
            travel_dates: &request.travel_dates,
            currency: &profile.currency,
            meals: &profile.costs.meals,
            accommodation_options: shortlist
                .options
                .iter()
                .map(|h| AccommodationSlice {
                    category: &h.category,
                    cost_per_night: h.cost_per_night,
                })
                .collect(),
            activities: catalog
                .all_activities()
                .map(|a| ActivitySlice {
                    name: &a.name,
                    category: &a.category,
                    cost: a.cost,
                })
                .collect(),
        };

        let prompt = self.prompts.render("cost-estimation", &context).map_err(|e| AgentError::Prompt {
            agent: AgentKind::CostEstimation,
            destination: request.destination.clone(),
            message: e.to_string(),
        })?;

        let generation = GenerationRequest::new(
            AgentKind::CostEstimation.capability(),
            embedded::COST_SYSTEM,
            prompt,
            Self::output_schema(),
            self.max_tokens,
        );

        let model: CostModel =
            run_generation(&self.client, AgentKind::CostEstimation, &request.destination, generation).await?;

        Self::validate(&model).map_err(|source| AgentError::Validation {
            agent: AgentKind::CostEstimation,
            destination: request.destination.clone(),
            source,
        })?;

        info!(
            destination = %request.destination,
            mid_range_total = model.trip_totals.mid_range,
            "Trip costs estimated"
        );
        Ok(model)
    }

    /// Invariants: every estimated figure is non-negative
    fn validate(model: &CostModel) -> Result<(), ValidationError> {
        check_cost("trip_totals.budget", model.trip_totals.budget)?;
        check_cost("trip_totals.mid_range", model.trip_totals.mid_range)?;
        check_cost("trip_totals.luxury", model.trip_totals.luxury)?;
        check_cost("flights.economy_min", model.flights.economy_min)?;
        check_cost("flights.economy_max", model.flights.economy_max)?;
        check_cost("flights.economy_average", model.flights.economy_average)?;
        check_cost("food_per_day.budget", model.food_per_day.budget)?;
        check_cost("food_per_day.mid_range", model.food_per_day.mid_range)?;
        check_cost("food_per_day.luxury", model.food_per_day.luxury)?;
        for hidden in &model.hidden_costs {
            check_cost(format!("hidden_costs[{}]", hidden.cost_type), hidden.estimated_cost)?;
        }
        Ok(())
    }

    /// JSON Schema for [`CostModel`]
    fn output_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "destination": { "type": "string" },
                "trip_totals": {
                    "type": "object",
                    "description": "Total trip cost in INR by tier",
                    "properties": {
                        "budget": { "type": "number" },
                        "mid_range": { "type": "number" },
                        "luxury": { "type": "number" }
                    },
                    "required": ["budget", "mid_range", "luxury"]
                },
                "flights": {
                    "type": "object",
                    "properties": {
                        "route": { "type": "string", "description": "e.g. 'Delhi to Goa'" },
                        "airline": { "type": "string", "description": "Example airline" },
                        "economy_min": { "type": "number", "description": "INR" },
                        "economy_max": { "type": "number", "description": "INR" },
                        "economy_average": { "type": "number", "description": "INR" }
                    },
                    "required": ["route", "airline", "economy_min", "economy_max", "economy_average"]
                },
                "food_per_day": {
                    "type": "object",
                    "description": "Per-day food cost in INR by tier",
                    "properties": {
                        "budget": { "type": "number" },
                        "mid_range": { "type": "number" },
                        "luxury": { "type": "number" }
                    },
                    "required": ["budget", "mid_range", "luxury"]
                },
                "hidden_costs": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "cost_type": { "type": "string" },
                            "description": { "type": "string" },
                            "estimated_cost": { "type": "number", "description": "INR" }
                        },
                        "required": ["cost_type", "description", "estimated_cost"]
                    }
                },
                "cost_saving_tips": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["destination", "trip_totals", "flights", "food_per_day", "hidden_costs", "cost_saving_tips"]
        })
    }
}
