//! Domain types for TripGenie
//!
//! Core entities of a planning session: the immutable [`TripRequest`], the
//! [`DestinationProfile`] gathered in Phase 1, and the itinerary entities
//! produced by synthesis. All of them live for one session and are
//! discarded when it ends.

mod id;
mod itinerary;
mod profile;
mod request;

pub use id::slugify;
pub use itinerary::{
    Activity, BudgetGuidance, BudgetTiers, CommuteOption, CostBreakdown, DailyPlan, DestinationOverview, Difficulty,
    Hotel, Itinerary, ItineraryBundle, Review, TripAdjustments,
};
pub use profile::{
    AccommodationCategory, ClimateInfo, CultureNotes, CurrencyInfo, DestinationProfile, LanguageInfo,
    LocalCostProfile, LocalTransportOption, MealCosts, SafetyOverview,
};
pub use request::{MeetingDetails, TripRequest, TripType};
