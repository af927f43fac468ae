//! Itinerary cost and safety recalculation engine
//!
//! A pure function of (itinerary, selection snapshot, trip duration, budget)
//! producing the live cost and safety totals the presentation layer
//! displays. Invoked after every selection change; never mutates anything.
//!
//! Rules:
//! - accommodation = selected hotel cost per night x night count
//! - activities    = sum of selected activity costs
//! - commute       = selected option cost x duration in days (per day, not per night)
//! - food          = generated per-day baseline x duration in days
//! - total         = flights baseline + the four components above
//! - remaining     = budget - total (negative is a valid, displayable state)
//! - safety        = mean of selected hotel and selected activity scores,
//!                   non-positive scores excluded, 0 when nothing remains
//!
//! A hotel or commute id that does not resolve against the itinerary's
//! option lists counts as "no selection" and contributes 0. The result is
//! idempotent and independent of the order in which selections were made.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Itinerary;

/// Night count for a trip of the given length
///
/// One less than the day count; a trip of one day (or a degenerate zero)
/// still prices a single night.
pub fn night_count(duration_days: u32) -> u32 {
    if duration_days <= 1 { 1 } else { duration_days - 1 }
}

/// The user's current selections for one itinerary
///
/// Hotel and commute selection are held here, outside the entities. Activity
/// flags are seeded from the generated defaults and overridden per toggle.
/// Each mutating method is one atomic state transition; the engine always
/// reads a finished snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    /// Currently selected hotel id, if any
    pub hotel_id: Option<String>,
    /// Currently selected commute option id, if any
    pub commute_id: Option<String>,
    /// Per-activity selection overrides, activity id -> selected
    pub activities: BTreeMap<String, bool>,
}

impl SelectionState {
    /// Empty selection: no hotel, no commute, generation defaults for activities
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a selection from an itinerary's generated defaults
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let activities = itinerary
            .all_activities()
            .map(|a| (a.id.clone(), a.selected))
            .collect();
        Self {
            hotel_id: None,
            commute_id: None,
            activities,
        }
    }

    /// Select a hotel by id
    pub fn select_hotel(&mut self, id: impl Into<String>) {
        self.hotel_id = Some(id.into());
    }

    /// Clear the hotel selection
    pub fn clear_hotel(&mut self) {
        self.hotel_id = None;
    }

    /// Select a commute option by id
    pub fn select_commute(&mut self, id: impl Into<String>) {
        self.commute_id = Some(id.into());
    }

    /// Clear the commute selection
    pub fn clear_commute(&mut self) {
        self.commute_id = None;
    }

    /// Set an activity's selection flag
    pub fn set_activity(&mut self, id: impl Into<String>, selected: bool) {
        self.activities.insert(id.into(), selected);
    }

    /// Flip an activity's selection flag, returning the new state
    ///
    /// An activity never toggled before flips from the given default.
    pub fn toggle_activity(&mut self, id: impl Into<String>, default: bool) -> bool {
        let id = id.into();
        let next = !self.activities.get(&id).copied().unwrap_or(default);
        self.activities.insert(id, next);
        next
    }

    /// Whether an activity is currently selected
    pub fn is_selected(&self, id: &str, default: bool) -> bool {
        self.activities.get(id).copied().unwrap_or(default)
    }
}

/// Derived cost and safety totals for the current selections
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Flight baseline, carried through unchanged
    pub flights: f64,
    /// Selected hotel cost x nights
    pub accommodation: f64,
    /// Sum of selected activity costs
    pub activities: f64,
    /// Selected commute option cost x days
    pub commute: f64,
    /// Per-day food baseline x days
    pub food: f64,
    /// Sum of all components
    pub total: f64,
    /// Budget ceiling minus total; negative means over budget
    pub remaining_budget: f64,
    /// Mean safety of the selected hotel and activities
    pub overall_safety_score: f64,
}

/// The finalized choice for a session, stored when the user confirms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalSelection {
    /// Chosen itinerary id
    pub itinerary_id: String,
    /// Selections at confirmation time
    pub selection: SelectionState,
    /// Cost summary at confirmation time
    pub summary: CostSummary,
}

/// Recompute the cost and safety totals for the given selections
pub fn recalculate(itinerary: &Itinerary, selection: &SelectionState, duration_days: u32, budget: f64) -> CostSummary {
    debug!(itinerary_id = %itinerary.id, duration_days, "recalculate: called");

    let nights = night_count(duration_days) as f64;
    let days = duration_days as f64;

    // Unknown ids resolve to None and the component prices at 0
    let hotel = selection.hotel_id.as_deref().and_then(|id| itinerary.find_hotel(id));
    let commute = selection.commute_id.as_deref().and_then(|id| itinerary.find_commute(id));

    let accommodation = hotel.map(|h| h.cost_per_night * nights).unwrap_or(0.0);
    let commute_cost = commute.map(|c| c.cost * days).unwrap_or(0.0);

    let mut activities_cost = 0.0;
    let mut safety_scores: Vec<f64> = Vec::new();

    for activity in itinerary.all_activities() {
        if selection.is_selected(&activity.id, activity.selected) {
            activities_cost += activity.cost;
            if activity.safety_score > 0.0 {
                safety_scores.push(activity.safety_score);
            }
        }
    }

    if let Some(h) = hotel
        && h.safety_score > 0.0
    {
        safety_scores.push(h.safety_score);
    }

    let food = itinerary.cost.food * days;
    let total = itinerary.cost.flights + accommodation + activities_cost + commute_cost + food;

    let overall_safety_score = if safety_scores.is_empty() {
        0.0
    } else {
        safety_scores.iter().sum::<f64>() / safety_scores.len() as f64
    };

    CostSummary {
        flights: itinerary.cost.flights,
        accommodation,
        activities: activities_cost,
        commute: commute_cost,
        food,
        total,
        remaining_budget: budget - total,
        overall_safety_score,
    }
}
