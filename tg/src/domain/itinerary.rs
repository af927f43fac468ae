//! Itinerary domain types
//!
//! Everything the synthesis phase emits: activities, hotels, commute
//! options, daily plans, and the three-variant bundle handed to the
//! presentation layer. All entities are immutable after generation except
//! `Activity::selected`; hotel and commute selection live in session state,
//! never on the entities themselves.

use serde::{Deserialize, Serialize};

/// Physical difficulty of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Challenging => write!(f, "Challenging"),
        }
    }
}

/// A review excerpt attached to an activity or hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Review source (platform or publication)
    pub source: String,
    /// Review excerpt
    pub snippet: String,
    /// Rating given by the reviewer
    pub rating: f64,
}

/// A bookable activity at the destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity ID
    pub id: String,
    /// Activity name
    pub name: String,
    /// Category (Cultural, Adventure, Food, Nature, ...)
    pub category: String,
    /// Expected duration (e.g. "2-3 hours", "Half day")
    pub duration: String,
    /// Cost in INR, 0 for free activities
    pub cost: f64,
    /// Specific location or area
    pub location: String,
    /// Physical difficulty
    pub difficulty: Difficulty,
    /// Safety score, 0-100
    pub safety_score: f64,
    /// Whether advance booking is required
    pub booking_required: bool,
    /// Review excerpt
    pub review: Review,
    /// Current selection state. The only field a user may change.
    #[serde(default)]
    pub selected: bool,
}

/// A lodging option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Unique hotel ID
    pub id: String,
    /// Property name
    pub name: String,
    /// Price category (Luxury, Mid-Range, Budget, ...)
    pub category: String,
    /// Cost per night in INR
    pub cost_per_night: f64,
    /// Direct booking link
    pub booking_link: String,
    /// Safety score, 0-100
    pub safety_score: f64,
    /// Review excerpt
    pub review: Review,
    /// Available amenities
    pub amenities: Vec<String>,
}

/// A local transport option priced per day of the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuteOption {
    /// Unique commute ID
    pub id: String,
    /// Transport type, destination specific
    pub transport_type: String,
    /// Cost per day in INR
    pub cost: f64,
    /// Advantages
    pub pros: Vec<String>,
    /// Disadvantages
    pub cons: Vec<String>,
    /// Safety score, 0-100
    pub safety_score: f64,
}

/// One day of an itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Day number, 1..=duration, contiguous with no gaps or duplicates
    pub day: u32,
    /// Day title
    pub title: String,
    /// Day theme (e.g. "Cultural Immersion")
    pub theme: String,
    /// Ordered activities for the day
    pub activities: Vec<Activity>,
}

/// Cost model for one itinerary
///
/// `flights` and `food` are agent-estimated baselines fixed at generation
/// time (`food` is a per-day rate). The remaining fields are derived from
/// the user's selections and are stale the moment synthesis returns; the
/// orchestrator zeroes them pending the first recalculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CostBreakdown {
    /// Round-trip flight estimate in INR, fixed baseline
    pub flights: f64,
    /// Food estimate per day in INR, fixed baseline
    pub food: f64,
    /// Derived: selected hotel x nights
    pub accommodation: f64,
    /// Derived: sum of selected activity costs
    pub activities: f64,
    /// Derived: selected commute option x days
    pub commute: f64,
    /// Derived: flights + accommodation + food + activities + commute
    pub total: f64,
}

impl CostBreakdown {
    /// Reset the derived fields, keeping the generated baselines
    pub fn reset_derived(&mut self) {
        self.accommodation = 0.0;
        self.activities = 0.0;
        self.commute = 0.0;
        self.total = 0.0;
    }
}

/// One complete candidate trip plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Unique itinerary ID
    pub id: String,
    /// Thematic label distinguishing the variants (Relaxed, Adventurous, ...)
    pub vibe: String,
    /// Itinerary title
    pub title: String,
    /// Itinerary description
    pub description: String,
    /// Day-by-day plan
    pub daily_plan: Vec<DailyPlan>,
    /// Hotel options, 3-8
    pub hotel_options: Vec<Hotel>,
    /// Commute options, 3-8
    pub commute_options: Vec<CommuteOption>,
    /// Cost model
    pub cost: CostBreakdown,
    /// Overall safety score, 0-100
    pub overall_safety_score: f64,
    /// Experiences unique to this variant
    #[serde(default)]
    pub unique_experiences: Vec<String>,
    /// Local insights and tips
    #[serde(default)]
    pub local_insights: Vec<String>,
}

impl Itinerary {
    /// Iterate all activities across all days
    pub fn all_activities(&self) -> impl Iterator<Item = &Activity> {
        self.daily_plan.iter().flat_map(|day| day.activities.iter())
    }

    /// Find a hotel option by id
    pub fn find_hotel(&self, id: &str) -> Option<&Hotel> {
        self.hotel_options.iter().find(|h| h.id == id)
    }

    /// Find a commute option by id
    pub fn find_commute(&self, id: &str) -> Option<&CommuteOption> {
        self.commute_options.iter().find(|c| c.id == id)
    }

    /// Find an activity by id anywhere in the daily plan
    pub fn find_activity(&self, id: &str) -> Option<&Activity> {
        self.all_activities().find(|a| a.id == id)
    }
}

/// Destination-level summary attached to the bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationOverview {
    /// Destination name
    pub destination: String,
    /// Best time to visit
    pub best_time_to_visit: String,
    /// Local currency
    pub currency: String,
    /// Primary language
    pub language: String,
    /// General safety information
    pub safety_overview: String,
    /// Important cultural tips
    pub cultural_tips: Vec<String>,
}

/// Recommended trip budget by tier, in INR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTiers {
    pub budget: f64,
    pub mid_range: f64,
    pub luxury: f64,
}

/// Budget guidance attached to the bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetGuidance {
    /// Recommended total budget by tier
    pub recommended_budget: BudgetTiers,
    /// Cost-saving strategies
    pub cost_saving_tips: Vec<String>,
    /// Potential hidden costs
    pub hidden_costs: Vec<String>,
}

/// Adjustments for formal trips anchored to a meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripAdjustments {
    /// Adjusted stay recommendation
    pub adjusted_stay: String,
    /// Adjusted transport recommendation
    pub adjusted_transport: String,
    /// Adjusted schedule
    pub adjusted_schedule: String,
    /// Buffer times around the meeting
    pub adjusted_buffer_times: String,
}

/// Result of a full planning run: exactly three itinerary variants plus the
/// destination overview and budget guidance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryBundle {
    /// Three itineraries with pairwise-distinct vibes
    pub itineraries: Vec<Itinerary>,
    /// Destination summary
    pub destination_overview: DestinationOverview,
    /// Budget guidance
    pub budget_guidance: BudgetGuidance,
    /// Formal-trip adjustments, present only when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formal_adjustments: Option<TripAdjustments>,
}

impl ItineraryBundle {
    /// Find an itinerary by id
    pub fn find_itinerary(&self, id: &str) -> Option<&Itinerary> {
        self.itineraries.iter().find(|it| it.id == id)
    }
}
