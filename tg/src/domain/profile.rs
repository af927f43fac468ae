//! DestinationProfile domain types
//!
//! Produced once by the destination intelligence agent; read-only input to
//! every downstream agent. Field groups mirror the slices handed to each
//! consumer: climate + culture for activity discovery, accommodation +
//! currency for lodging search, currency + costs for estimation.

use serde::{Deserialize, Serialize};

/// Expected weather during the travel dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateInfo {
    /// Season during the travel dates
    pub season: String,
    /// Expected temperature range
    pub temperature: String,
    /// Rainfall expectations
    pub rainfall: String,
}

/// Local currency and its exchange rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    /// Local currency code or name
    pub local: String,
    /// Approximate exchange rate to INR
    pub exchange_rate: f64,
}

/// Language situation for travelers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Primary language
    pub primary: String,
    /// English proficiency level (High/Medium/Low)
    pub english_level: String,
}

/// Safety assessment for the destination as a whole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyOverview {
    /// Overall safety score, 0-100
    pub overall_score: f64,
    /// Safety concerns to be aware of
    pub concerns: Vec<String>,
    /// Safety tips for travelers
    pub tips: Vec<String>,
}

/// Cultural context for the destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CultureNotes {
    /// Important local customs
    pub customs: Vec<String>,
    /// Social etiquette tips
    pub etiquette: Vec<String>,
    /// Festivals during the travel period
    pub festivals: Vec<String>,
}

/// One locally available transport mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalTransportOption {
    /// Transport type, destination specific (Metro, Tuk-tuk, Ferry, ...)
    pub transport_type: String,
    /// Availability and coverage
    pub availability: String,
    /// Minimum cost per day/trip in INR
    pub cost_min: f64,
    /// Maximum cost per day/trip in INR
    pub cost_max: f64,
    /// Advantages
    pub pros: Vec<String>,
    /// Disadvantages
    pub cons: Vec<String>,
    /// Safety score, 0-100
    pub safety_score: f64,
}

/// One accommodation price category available at the destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationCategory {
    /// Category (Luxury, Mid-Range, Budget, Hostel, ...)
    pub category: String,
    /// Average cost per night in INR
    pub average_cost_per_night: f64,
    /// Best areas to stay for this category
    pub popular_areas: Vec<String>,
    /// Common amenities
    pub amenities: Vec<String>,
    /// Safety score for this category, 0-100
    pub safety_score: f64,
}

/// Daily meal cost tiers in INR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCosts {
    pub budget: f64,
    pub mid_range: f64,
    pub luxury: f64,
}

/// Local cost structure used to ground downstream estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalCostProfile {
    /// Daily meal costs by tier
    pub meals: MealCosts,
    /// Free activities available
    pub free_activities: Vec<String>,
    /// Minimum paid activity cost in INR
    pub activity_cost_min: f64,
    /// Maximum paid activity cost in INR
    pub activity_cost_max: f64,
}

/// Comprehensive destination intelligence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationProfile {
    /// Confirmed destination name
    pub destination: String,
    /// Country name
    pub country: String,
    /// Region or state
    pub region: String,
    /// Weather during the travel dates
    pub climate: ClimateInfo,
    /// Local currency
    pub currency: CurrencyInfo,
    /// Language situation
    pub language: LanguageInfo,
    /// Available transportation options
    pub transportation: Vec<LocalTransportOption>,
    /// Accommodation categories available
    pub accommodation: Vec<AccommodationCategory>,
    /// Local cost breakdown
    pub costs: LocalCostProfile,
    /// Destination-wide safety assessment
    pub safety: SafetyOverview,
    /// Cultural context
    pub culture: CultureNotes,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> DestinationProfile {
        DestinationProfile {
            destination: "Goa".to_string(),
            country: "India".to_string(),
            region: "West India".to_string(),
            climate: ClimateInfo {
                season: "Winter".to_string(),
                temperature: "22-32C".to_string(),
                rainfall: "Minimal".to_string(),
            },
            currency: CurrencyInfo {
                local: "INR".to_string(),
                exchange_rate: 1.0,
            },
            language: LanguageInfo {
                primary: "Konkani".to_string(),
                english_level: "High".to_string(),
            },
            transportation: vec![LocalTransportOption {
                transport_type: "Scooter rental".to_string(),
                availability: "Everywhere".to_string(),
                cost_min: 300.0,
                cost_max: 500.0,
                pros: vec!["Cheap".to_string()],
                cons: vec!["Helmet required".to_string()],
                safety_score: 70.0,
            }],
            accommodation: vec![AccommodationCategory {
                category: "Mid-Range".to_string(),
                average_cost_per_night: 4_000.0,
                popular_areas: vec!["Baga".to_string()],
                amenities: vec!["WiFi".to_string()],
                safety_score: 85.0,
            }],
            costs: LocalCostProfile {
                meals: MealCosts {
                    budget: 800.0,
                    mid_range: 1_500.0,
                    luxury: 3_500.0,
                },
                free_activities: vec!["Beach walks".to_string()],
                activity_cost_min: 200.0,
                activity_cost_max: 4_000.0,
            },
            safety: SafetyOverview {
                overall_score: 82.0,
                concerns: vec!["Petty theft near markets".to_string()],
                tips: vec!["Keep valuables in the hotel safe".to_string()],
            },
            culture: CultureNotes {
                customs: vec!["Remove footwear in temples".to_string()],
                etiquette: vec!["Dress modestly away from beaches".to_string()],
                festivals: vec!["Sunburn festival".to_string()],
            },
        }
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let back: DestinationProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }

    #[test]
    fn test_profile_field_names_are_snake_case() {
        let json = serde_json::to_value(sample_profile()).unwrap();
        assert!(json["currency"]["exchange_rate"].is_number());
        assert!(json["costs"]["meals"]["mid_range"].is_number());
    }
}
