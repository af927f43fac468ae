//! Boundary validation for generated data
//!
//! Every agent output crosses this module before it is allowed into the
//! pipeline: scores must sit in [0,100], costs must be non-negative, option
//! lists must respect their declared cardinality, and a synthesized bundle
//! must hold exactly three itineraries with distinct vibes and contiguous
//! day numbering. A failure here means the generated object is discarded in
//! full; no partially-valid data escapes.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::domain::{DestinationProfile, Hotel, Itinerary, ItineraryBundle};

/// Hotel and commute option lists carried by an itinerary
pub const OPTION_LIST_MIN: usize = 3;
pub const OPTION_LIST_MAX: usize = 8;

/// Number of itinerary variants per planning session
pub const ITINERARY_COUNT: usize = 3;

/// Errors raised when generated data violates its declared invariants
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} is empty")]
    EmptyField { field: &'static str },

    #[error("{field} is {value}, below minimum {min}")]
    BelowMinimum { field: &'static str, value: f64, min: f64 },

    #[error("{field} score {value} is outside 0-100")]
    ScoreOutOfRange { field: String, value: f64 },

    #[error("{field} cost {value} is negative")]
    NegativeCost { field: String, value: f64 },

    #[error("{field} has {len} entries, expected {min}-{max}")]
    CardinalityOutOfRange {
        field: String,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("expected exactly {expected} itineraries, got {got}")]
    WrongItineraryCount { expected: usize, got: usize },

    #[error("duplicate itinerary vibe: {vibe}")]
    DuplicateVibe { vibe: String },

    #[error("itinerary {itinerary} day numbering is not contiguous 1..={expected} (found day {found})")]
    NonContiguousDays {
        itinerary: String,
        expected: u32,
        found: u32,
    },

    #[error("itinerary {itinerary} has {got} days, expected {expected}")]
    WrongDayCount {
        itinerary: String,
        expected: u32,
        got: u32,
    },
}

/// Check a 0-100 score
pub fn check_score(field: impl Into<String>, value: f64) -> Result<(), ValidationError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::ScoreOutOfRange {
            field: field.into(),
            value,
        });
    }
    Ok(())
}

/// Check a non-negative cost
pub fn check_cost(field: impl Into<String>, value: f64) -> Result<(), ValidationError> {
    if value < 0.0 || !value.is_finite() {
        return Err(ValidationError::NegativeCost {
            field: field.into(),
            value,
        });
    }
    Ok(())
}

/// Check a list length against declared cardinality
pub fn check_len(field: impl Into<String>, len: usize, min: usize, max: usize) -> Result<(), ValidationError> {
    if len < min || len > max {
        return Err(ValidationError::CardinalityOutOfRange {
            field: field.into(),
            len,
            min,
            max,
        });
    }
    Ok(())
}

/// Validate a destination profile fresh from the generation client
pub fn validate_profile(profile: &DestinationProfile) -> Result<(), ValidationError> {
    debug!(destination = %profile.destination, "validate_profile: called");

    if profile.destination.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "destination" });
    }
    check_score("safety.overall_score", profile.safety.overall_score)?;
    check_len("transportation", profile.transportation.len(), 1, usize::MAX)?;
    check_len("accommodation", profile.accommodation.len(), 1, usize::MAX)?;

    for transport in &profile.transportation {
        check_score(format!("transportation[{}].safety_score", transport.transport_type), transport.safety_score)?;
        check_cost(format!("transportation[{}].cost_min", transport.transport_type), transport.cost_min)?;
        check_cost(format!("transportation[{}].cost_max", transport.transport_type), transport.cost_max)?;
    }
    for category in &profile.accommodation {
        check_score(format!("accommodation[{}].safety_score", category.category), category.safety_score)?;
        check_cost(
            format!("accommodation[{}].average_cost_per_night", category.category),
            category.average_cost_per_night,
        )?;
    }

    check_cost("costs.meals.budget", profile.costs.meals.budget)?;
    check_cost("costs.meals.mid_range", profile.costs.meals.mid_range)?;
    check_cost("costs.meals.luxury", profile.costs.meals.luxury)?;
    check_cost("costs.activity_cost_min", profile.costs.activity_cost_min)?;
    check_cost("costs.activity_cost_max", profile.costs.activity_cost_max)?;

    Ok(())
}

/// Validate one hotel option
pub fn validate_hotel(hotel: &Hotel) -> Result<(), ValidationError> {
    if hotel.id.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "hotel.id" });
    }
    check_cost(format!("hotel[{}].cost_per_night", hotel.id), hotel.cost_per_night)?;
    check_score(format!("hotel[{}].safety_score", hotel.id), hotel.safety_score)?;
    Ok(())
}

/// Validate one itinerary against the requested duration
pub fn validate_itinerary(itinerary: &Itinerary, duration_days: u32) -> Result<(), ValidationError> {
    debug!(itinerary_id = %itinerary.id, duration_days, "validate_itinerary: called");

    check_len(
        format!("itinerary[{}].hotel_options", itinerary.id),
        itinerary.hotel_options.len(),
        OPTION_LIST_MIN,
        OPTION_LIST_MAX,
    )?;
    check_len(
        format!("itinerary[{}].commute_options", itinerary.id),
        itinerary.commute_options.len(),
        OPTION_LIST_MIN,
        OPTION_LIST_MAX,
    )?;
    check_score(format!("itinerary[{}].overall_safety_score", itinerary.id), itinerary.overall_safety_score)?;
    check_cost(format!("itinerary[{}].cost.flights", itinerary.id), itinerary.cost.flights)?;
    check_cost(format!("itinerary[{}].cost.food", itinerary.id), itinerary.cost.food)?;

    for hotel in &itinerary.hotel_options {
        validate_hotel(hotel)?;
    }
    for commute in &itinerary.commute_options {
        check_cost(format!("commute[{}].cost", commute.id), commute.cost)?;
        check_score(format!("commute[{}].safety_score", commute.id), commute.safety_score)?;
    }
    for activity in itinerary.all_activities() {
        check_cost(format!("activity[{}].cost", activity.id), activity.cost)?;
        check_score(format!("activity[{}].safety_score", activity.id), activity.safety_score)?;
    }

    // Day numbering: exactly 1..=duration, no gaps, no duplicates
    if itinerary.daily_plan.len() as u32 != duration_days {
        return Err(ValidationError::WrongDayCount {
            itinerary: itinerary.id.clone(),
            expected: duration_days,
            got: itinerary.daily_plan.len() as u32,
        });
    }
    let mut seen = HashSet::new();
    for plan in &itinerary.daily_plan {
        if plan.day < 1 || plan.day > duration_days || !seen.insert(plan.day) {
            return Err(ValidationError::NonContiguousDays {
                itinerary: itinerary.id.clone(),
                expected: duration_days,
                found: plan.day,
            });
        }
    }

    Ok(())
}

/// Validate a full synthesized bundle
pub fn validate_bundle(bundle: &ItineraryBundle, duration_days: u32) -> Result<(), ValidationError> {
    debug!(itinerary_count = bundle.itineraries.len(), duration_days, "validate_bundle: called");

    if bundle.itineraries.len() != ITINERARY_COUNT {
        return Err(ValidationError::WrongItineraryCount {
            expected: ITINERARY_COUNT,
            got: bundle.itineraries.len(),
        });
    }

    let mut vibes = HashSet::new();
    for itinerary in &bundle.itineraries {
        let vibe = itinerary.vibe.trim().to_lowercase();
        if !vibes.insert(vibe) {
            return Err(ValidationError::DuplicateVibe {
                vibe: itinerary.vibe.clone(),
            });
        }
        validate_itinerary(itinerary, duration_days)?;
    }

    check_cost("budget_guidance.recommended_budget.budget", bundle.budget_guidance.recommended_budget.budget)?;
    check_cost(
        "budget_guidance.recommended_budget.mid_range",
        bundle.budget_guidance.recommended_budget.mid_range,
    )?;
    check_cost("budget_guidance.recommended_budget.luxury", bundle.budget_guidance.recommended_budget.luxury)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::*;

    fn review() -> Review {
        Review {
            source: "TripAdvisor".to_string(),
            snippet: "Great".to_string(),
            rating: 4.2,
        }
    }

    fn hotel(id: &str) -> Hotel {
        Hotel {
            id: id.to_string(),
            name: format!("Hotel {}", id),
            category: "Mid-Range".to_string(),
            cost_per_night: 4_000.0,
            booking_link: "https://example.com".to_string(),
            safety_score: 85.0,
            review: review(),
            amenities: vec![],
        }
    }

    fn commute(id: &str) -> CommuteOption {
        CommuteOption {
            id: id.to_string(),
            transport_type: "Taxi".to_string(),
            cost: 600.0,
            pros: vec![],
            cons: vec![],
            safety_score: 80.0,
        }
    }

    fn activity(id: &str) -> Activity {
        Activity {
            id: id.to_string(),
            name: format!("Activity {}", id),
            category: "Nature".to_string(),
            duration: "2 hours".to_string(),
            cost: 500.0,
            location: "Beach".to_string(),
            difficulty: Difficulty::Easy,
            safety_score: 90.0,
            booking_required: false,
            review: review(),
            selected: true,
        }
    }

    fn itinerary(id: &str, vibe: &str, days: u32) -> Itinerary {
        Itinerary {
            id: id.to_string(),
            vibe: vibe.to_string(),
            title: format!("{} trip", vibe),
            description: "desc".to_string(),
            daily_plan: (1..=days)
                .map(|day| DailyPlan {
                    day,
                    title: format!("Day {}", day),
                    theme: "theme".to_string(),
                    activities: vec![activity(&format!("{}-a{}", id, day))],
                })
                .collect(),
            hotel_options: vec![hotel("h1"), hotel("h2"), hotel("h3")],
            commute_options: vec![commute("c1"), commute("c2"), commute("c3")],
            cost: CostBreakdown {
                flights: 12_000.0,
                food: 1_500.0,
                ..Default::default()
            },
            overall_safety_score: 85.0,
            unique_experiences: vec![],
            local_insights: vec![],
        }
    }

    fn bundle(days: u32) -> ItineraryBundle {
        ItineraryBundle {
            itineraries: vec![
                itinerary("it-1", "Relaxed", days),
                itinerary("it-2", "Adventurous", days),
                itinerary("it-3", "Cultural", days),
            ],
            destination_overview: DestinationOverview {
                destination: "Goa".to_string(),
                best_time_to_visit: "November to February".to_string(),
                currency: "INR".to_string(),
                language: "Konkani".to_string(),
                safety_overview: "Generally safe".to_string(),
                cultural_tips: vec![],
            },
            budget_guidance: BudgetGuidance {
                recommended_budget: BudgetTiers {
                    budget: 30_000.0,
                    mid_range: 50_000.0,
                    luxury: 90_000.0,
                },
                cost_saving_tips: vec![],
                hidden_costs: vec![],
            },
            formal_adjustments: None,
        }
    }

    #[test]
    fn test_valid_bundle_passes() {
        assert!(validate_bundle(&bundle(3), 3).is_ok());
    }

    #[test]
    fn test_wrong_itinerary_count() {
        let mut b = bundle(3);
        b.itineraries.pop();
        assert!(matches!(
            validate_bundle(&b, 3),
            Err(ValidationError::WrongItineraryCount { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn test_duplicate_vibe_rejected() {
        let mut b = bundle(3);
        b.itineraries[2].vibe = "relaxed".to_string(); // case-insensitive clash with it-1
        assert!(matches!(validate_bundle(&b, 3), Err(ValidationError::DuplicateVibe { .. })));
    }

    #[test]
    fn test_negative_hotel_cost_rejected() {
        let mut b = bundle(3);
        b.itineraries[0].hotel_options[1].cost_per_night = -100.0;
        assert!(matches!(validate_bundle(&b, 3), Err(ValidationError::NegativeCost { .. })));
    }

    #[test]
    fn test_score_above_100_rejected() {
        let mut b = bundle(3);
        b.itineraries[1].commute_options[0].safety_score = 105.0;
        assert!(matches!(validate_bundle(&b, 3), Err(ValidationError::ScoreOutOfRange { .. })));
    }

    #[test]
    fn test_day_gap_rejected() {
        let mut b = bundle(3);
        b.itineraries[0].daily_plan[2].day = 5;
        assert!(matches!(validate_bundle(&b, 3), Err(ValidationError::NonContiguousDays { .. })));
    }

    #[test]
    fn test_duplicate_day_rejected() {
        let mut b = bundle(3);
        b.itineraries[0].daily_plan[2].day = 1;
        assert!(matches!(validate_bundle(&b, 3), Err(ValidationError::NonContiguousDays { .. })));
    }

    #[test]
    fn test_missing_day_rejected() {
        let mut b = bundle(3);
        b.itineraries[0].daily_plan.pop();
        assert!(matches!(validate_bundle(&b, 3), Err(ValidationError::WrongDayCount { .. })));
    }

    #[test]
    fn test_too_few_hotel_options() {
        let mut b = bundle(3);
        b.itineraries[0].hotel_options.truncate(2);
        assert!(matches!(
            validate_bundle(&b, 3),
            Err(ValidationError::CardinalityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_nine_hotel_options_rejected() {
        let mut b = bundle(3);
        for n in 0..6 {
            b.itineraries[0].hotel_options.push(hotel(&format!("hx{}", n)));
        }
        assert_eq!(b.itineraries[0].hotel_options.len(), 9);
        assert!(validate_bundle(&b, 3).is_err());
    }

    #[test]
    fn test_check_helpers() {
        assert!(check_score("s", 0.0).is_ok());
        assert!(check_score("s", 100.0).is_ok());
        assert!(check_score("s", -1.0).is_err());
        assert!(check_cost("c", 0.0).is_ok());
        assert!(check_cost("c", -0.01).is_err());
        assert!(check_cost("c", f64::NAN).is_err());
        assert!(check_len("l", 3, 3, 8).is_ok());
        assert!(check_len("l", 9, 3, 8).is_err());
    }
}
