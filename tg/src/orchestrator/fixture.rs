//! Static fixture bundle
//!
//! A deterministic, fully-valid itinerary bundle built without any network
//! call. Backs the fixture provider for demos, offline development, and the
//! caller-side fallback when live generation is unavailable.

use crate::domain::{
    Activity, BudgetGuidance, BudgetTiers, CommuteOption, CostBreakdown, DailyPlan, DestinationOverview, Difficulty,
    Hotel, Itinerary, ItineraryBundle, Review, TripRequest, slugify,
};

/// Per-vibe knobs for the generated variants
struct VibeSpec {
    vibe: &'static str,
    title: &'static str,
    description: &'static str,
    hotel_rate: f64,
    activity_rate: f64,
    safety: f64,
}

const VIBES: [VibeSpec; 3] = [
    VibeSpec {
        vibe: "Relaxed",
        title: "Slow Mornings",
        description: "Unhurried days built around food, shade, and short strolls.",
        hotel_rate: 5_000.0,
        activity_rate: 800.0,
        safety: 88.0,
    },
    VibeSpec {
        vibe: "Adventurous",
        title: "Out Early, Back Late",
        description: "Full days of trails, water, and whatever the locals dare you to try.",
        hotel_rate: 3_500.0,
        activity_rate: 1_800.0,
        safety: 74.0,
    },
    VibeSpec {
        vibe: "Cultural",
        title: "Old Streets First",
        description: "Museums, markets, and neighborhoods with the history still on the walls.",
        hotel_rate: 4_200.0,
        activity_rate: 1_100.0,
        safety: 90.0,
    },
];

/// Build the deterministic bundle for a request
///
/// The result satisfies every bundle invariant for any duration >= 1 and is
/// identical across calls with the same request.
pub fn fixture_bundle(request: &TripRequest) -> ItineraryBundle {
    let destination = request.destination.as_str();

    ItineraryBundle {
        itineraries: VIBES.iter().map(|spec| build_itinerary(request, spec)).collect(),
        destination_overview: DestinationOverview {
            destination: destination.to_string(),
            best_time_to_visit: "October to March".to_string(),
            currency: "INR".to_string(),
            language: "Local language with widespread English".to_string(),
            safety_overview: format!("{} is broadly safe for visitors who take standard precautions.", destination),
            cultural_tips: vec![
                "Dress modestly at religious sites".to_string(),
                "Carry small cash for markets and tips".to_string(),
            ],
        },
        budget_guidance: BudgetGuidance {
            recommended_budget: BudgetTiers {
                budget: 9_000.0 * request.duration_days as f64,
                mid_range: 16_000.0 * request.duration_days as f64,
                luxury: 32_000.0 * request.duration_days as f64,
            },
            cost_saving_tips: vec![
                "Travel midweek for cheaper fares".to_string(),
                "Eat where the locals queue".to_string(),
            ],
            hidden_costs: vec!["Airport transfers".to_string(), "Tourist taxes on hotel bills".to_string()],
        },
        formal_adjustments: None,
    }
}

fn build_itinerary(request: &TripRequest, spec: &VibeSpec) -> Itinerary {
    let slug = slugify(spec.vibe);
    let destination = request.destination.as_str();

    let daily_plan = (1..=request.duration_days)
        .map(|day| DailyPlan {
            day,
            title: format!("Day {} in {}", day, destination),
            theme: spec.title.to_string(),
            activities: vec![
                fixture_activity(&slug, day, 1, spec, destination, true),
                fixture_activity(&slug, day, 2, spec, destination, day % 2 == 1),
            ],
        })
        .collect();

    Itinerary {
        id: format!("fx-{}", slug),
        vibe: spec.vibe.to_string(),
        title: format!("{}: {}", spec.title, destination),
        description: spec.description.to_string(),
        daily_plan,
        hotel_options: fixture_hotels(&slug, spec),
        commute_options: fixture_commutes(&slug),
        cost: CostBreakdown {
            flights: 12_000.0,
            food: 1_500.0,
            ..Default::default()
        },
        overall_safety_score: spec.safety,
        unique_experiences: vec![format!("A {} take on {}", spec.vibe.to_lowercase(), destination)],
        local_insights: vec!["Sunset is the busiest hour everywhere; go an hour early".to_string()],
    }
}

fn fixture_activity(slug: &str, day: u32, slot: u32, spec: &VibeSpec, destination: &str, selected: bool) -> Activity {
    Activity {
        id: format!("fx-{}-d{}-a{}", slug, day, slot),
        name: format!("{} highlight {}.{} in {}", spec.vibe, day, slot, destination),
        category: spec.vibe.to_string(),
        duration: "2-3 hours".to_string(),
        cost: spec.activity_rate * slot as f64,
        location: format!("{} center", destination),
        difficulty: if spec.vibe == "Adventurous" {
            Difficulty::Moderate
        } else {
            Difficulty::Easy
        },
        safety_score: spec.safety,
        booking_required: slot == 2,
        review: fixture_review(),
        selected,
    }
}

fn fixture_hotels(slug: &str, spec: &VibeSpec) -> Vec<Hotel> {
    let categories = [("Budget", 0.5), ("Mid-Range", 1.0), ("Luxury", 2.4)];
    categories
        .iter()
        .enumerate()
        .map(|(idx, (category, factor))| Hotel {
            id: format!("fx-{}-h{}", slug, idx + 1),
            name: format!("{} Stay {}", category, idx + 1),
            category: category.to_string(),
            cost_per_night: spec.hotel_rate * factor,
            booking_link: "https://www.booking.com".to_string(),
            safety_score: spec.safety,
            review: fixture_review(),
            amenities: vec!["WiFi".to_string(), "Breakfast".to_string()],
        })
        .collect()
}

fn fixture_commutes(slug: &str) -> Vec<CommuteOption> {
    vec![
        CommuteOption {
            id: format!("fx-{}-c1", slug),
            transport_type: "Metro / local transit".to_string(),
            cost: 150.0,
            pros: vec!["Cheap".to_string(), "Frequent".to_string()],
            cons: vec!["Crowded at peak hours".to_string()],
            safety_score: 85.0,
        },
        CommuteOption {
            id: format!("fx-{}-c2", slug),
            transport_type: "App-based taxi".to_string(),
            cost: 900.0,
            pros: vec!["Door to door".to_string()],
            cons: vec!["Surge pricing".to_string()],
            safety_score: 90.0,
        },
        CommuteOption {
            id: format!("fx-{}-c3", slug),
            transport_type: "Scooter rental".to_string(),
            cost: 400.0,
            pros: vec!["Flexible".to_string()],
            cons: vec!["Weather dependent".to_string()],
            safety_score: 65.0,
        },
    ]
}

fn fixture_review() -> Review {
    Review {
        source: "TripAdvisor".to_string(),
        snippet: "Exactly as described, would repeat.".to_string(),
        rating: 4.4,
    }
}
