//! TripRequest domain type
//!
//! A TripRequest is created once per planning session from user input and is
//! immutable afterward. Every agent consumes it (or a slice of it).

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Type of trip being planned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    /// Leisure travel
    #[default]
    Informal,
    /// Business travel, optionally anchored to a meeting
    Formal,
}

impl std::fmt::Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Informal => write!(f, "informal"),
            Self::Formal => write!(f, "formal"),
        }
    }
}

/// Meeting details for formal trips
///
/// Present only when the traveler has a fixed business engagement the plan
/// must accommodate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingDetails {
    /// Where the meeting takes place
    pub location: String,
    /// How long the meeting runs (e.g. "2 hours", "full day")
    pub duration: String,
    /// Whether attendance is offline or online
    pub offline_online: String,
    /// Facilities the meeting requires (projector, conference room, ...)
    pub facilities_required: Vec<String>,
}

/// A trip planning request
///
/// Budget and all generated costs are INR throughout the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Travel destination (city, country, or region)
    pub destination: String,

    /// Duration of the trip in days
    pub duration_days: u32,

    /// Number of travelers
    pub people_count: u32,

    /// Budget ceiling in INR
    pub budget: f64,

    /// Trip type
    #[serde(default)]
    pub trip_type: TripType,

    /// Travel dates or season, free text (e.g. "mid December", "2026-03-10 to 2026-03-14")
    pub travel_dates: String,

    /// Travel preferences and interests
    #[serde(default)]
    pub preferences: Vec<String>,

    /// Meeting details, formal trips only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting: Option<MeetingDetails>,
}

impl TripRequest {
    /// Validate the request before it enters the pipeline
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.destination.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "destination" });
        }
        if self.duration_days < 1 {
            return Err(ValidationError::BelowMinimum {
                field: "duration_days",
                value: self.duration_days as f64,
                min: 1.0,
            });
        }
        if self.people_count < 1 {
            return Err(ValidationError::BelowMinimum {
                field: "people_count",
                value: self.people_count as f64,
                min: 1.0,
            });
        }
        if self.budget <= 0.0 {
            return Err(ValidationError::BelowMinimum {
                field: "budget",
                value: self.budget,
                min: 1.0,
            });
        }
        Ok(())
    }

    /// Night count for accommodation pricing
    ///
    /// One less than the day count, floored at 1 so a day trip still prices
    /// a single night of lodging.
    pub fn night_count(&self) -> u32 {
        crate::engine::night_count(self.duration_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest {
            destination: "Goa".to_string(),
            duration_days: 3,
            people_count: 2,
            budget: 50_000.0,
            trip_type: TripType::Informal,
            travel_dates: "mid December".to_string(),
            preferences: vec!["beaches".to_string(), "nightlife".to_string()],
            meeting: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_empty_destination_rejected() {
        let mut req = request();
        req.destination = "  ".to_string();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::EmptyField { field: "destination" })
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut req = request();
        req.duration_days = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_zero_people_rejected() {
        let mut req = request();
        req.people_count = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_non_positive_budget_rejected() {
        let mut req = request();
        req.budget = 0.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_night_count_floors_at_one() {
        let mut req = request();
        assert_eq!(req.night_count(), 2);
        req.duration_days = 1;
        assert_eq!(req.night_count(), 1);
    }

    #[test]
    fn test_trip_type_serde() {
        let json = serde_json::to_string(&TripType::Formal).unwrap();
        assert_eq!(json, "\"formal\"");
        let back: TripType = serde_json::from_str("\"informal\"").unwrap();
        assert_eq!(back, TripType::Informal);
    }

    #[test]
    fn test_request_serde_roundtrip() {
        let req = request();
        let json = serde_json::to_string(&req).unwrap();
        let back: TripRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }
}
