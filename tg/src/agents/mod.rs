//! Specialized data agents
//!
//! Four narrow request/response units, each responsible for one slice of
//! travel data: destination intelligence, activity discovery, accommodation
//! search, and cost estimation, plus the formal-trip enhancement agent used
//! for business travel. Each agent renders its prompt, calls the generation
//! client with a domain-specific output schema, deserializes the result into
//! its typed output, and validates every numeric and cardinality invariant
//! before anything reaches the caller.
//!
//! Splitting generation into narrow, independently-validated calls bounds
//! the blast radius of a malformed model response: a failure in activity
//! discovery cannot corrupt accommodation data. Agents hold no mutable
//! state and are safe to call concurrently with independent inputs.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::llm::{GenerationClient, GenerationError, GenerationRequest};
use crate::validation::ValidationError;

mod accommodation;
mod activities;
mod costs;
mod destination;
mod formal;
mod synthesis;

pub use accommodation::{AccommodationAgent, AccommodationShortlist, AreaRecommendation};
pub use activities::{ActivityCatalog, ActivityCategory, ActivityDiscoveryAgent, DailyTheme};
pub use costs::{CostEstimationAgent, CostModel, FlightEstimate, HiddenCost};
pub use destination::DestinationIntelligenceAgent;
pub use formal::FormalEnhancementAgent;
pub use synthesis::SynthesisAgent;

/// The agents of the pipeline, used to tag failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    DestinationIntelligence,
    ActivityDiscovery,
    AccommodationSearch,
    CostEstimation,
    ItinerarySynthesis,
    FormalEnhancement,
}

impl AgentKind {
    /// The capability name presented to the generation client
    pub fn capability(&self) -> &'static str {
        match self {
            Self::DestinationIntelligence => "gather_destination_intelligence",
            Self::ActivityDiscovery => "discover_activities",
            Self::AccommodationSearch => "find_accommodation_options",
            Self::CostEstimation => "estimate_trip_costs",
            Self::ItinerarySynthesis => "synthesize_itineraries",
            Self::FormalEnhancement => "enhance_formal_trip",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Reads as "failed to {agent} for {destination}"
        match self {
            Self::DestinationIntelligence => write!(f, "gather destination intelligence"),
            Self::ActivityDiscovery => write!(f, "discover activities"),
            Self::AccommodationSearch => write!(f, "find accommodation options"),
            Self::CostEstimation => write!(f, "estimate trip costs"),
            Self::ItinerarySynthesis => write!(f, "synthesize itineraries"),
            Self::FormalEnhancement => write!(f, "enhance formal trip"),
        }
    }
}

/// A domain-tagged agent failure
///
/// Every variant carries the agent and the destination so failures stay
/// diagnosable after they propagate out of the orchestrator.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The generation client returned nothing usable
    #[error("failed to {agent} for {destination}: {source}")]
    Generation {
        agent: AgentKind,
        destination: String,
        #[source]
        source: GenerationError,
    },

    /// The generated object does not match the agent's output type
    #[error("failed to {agent} for {destination}: output does not match schema: {source}")]
    Schema {
        agent: AgentKind,
        destination: String,
        #[source]
        source: serde_json::Error,
    },

    /// The generated object violates a domain invariant
    #[error("failed to {agent} for {destination}: {source}")]
    Validation {
        agent: AgentKind,
        destination: String,
        #[source]
        source: ValidationError,
    },

    /// The prompt template could not be loaded or rendered
    #[error("failed to {agent} for {destination}: prompt error: {message}")]
    Prompt {
        agent: AgentKind,
        destination: String,
        message: String,
    },
}

impl AgentError {
    /// Which agent failed
    pub fn agent(&self) -> AgentKind {
        match self {
            Self::Generation { agent, .. }
            | Self::Schema { agent, .. }
            | Self::Validation { agent, .. }
            | Self::Prompt { agent, .. } => *agent,
        }
    }

    /// The destination the failing call was about
    pub fn destination(&self) -> &str {
        match self {
            Self::Generation { destination, .. }
            | Self::Schema { destination, .. }
            | Self::Validation { destination, .. }
            | Self::Prompt { destination, .. } => destination,
        }
    }
}

/// Run one generation call and deserialize the result into the agent's
/// output type
///
/// Both an empty/failed generation and a schema mismatch fail the agent;
/// no partial object is ever returned.
pub(crate) async fn run_generation<T: DeserializeOwned>(
    client: &Arc<dyn GenerationClient>,
    agent: AgentKind,
    destination: &str,
    request: GenerationRequest,
) -> Result<T, AgentError> {
    debug!(%agent, destination, capability = %request.capability, "run_generation: called");

    let value = client.generate(request).await.map_err(|source| AgentError::Generation {
        agent,
        destination: destination.to_string(),
        source,
    })?;

    serde_json::from_value(value).map_err(|source| AgentError::Schema {
        agent,
        destination: destination.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_are_distinct() {
        let kinds = [
            AgentKind::DestinationIntelligence,
            AgentKind::ActivityDiscovery,
            AgentKind::AccommodationSearch,
            AgentKind::CostEstimation,
            AgentKind::ItinerarySynthesis,
            AgentKind::FormalEnhancement,
        ];
        let caps: std::collections::HashSet<_> = kinds.iter().map(|k| k.capability()).collect();
        assert_eq!(caps.len(), kinds.len());
    }

    #[test]
    fn test_error_message_carries_destination() {
        let err = AgentError::Generation {
            agent: AgentKind::DestinationIntelligence,
            destination: "Goa".to_string(),
            source: GenerationError::EmptyResponse {
                capability: "gather_destination_intelligence".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to gather destination intelligence"));
        assert!(msg.contains("Goa"));
        assert_eq!(err.agent(), AgentKind::DestinationIntelligence);
        assert_eq!(err.destination(), "Goa");
    }

    #[test]
    fn test_accommodation_failure_label() {
        let err = AgentError::Validation {
            agent: AgentKind::AccommodationSearch,
            destination: "Kyoto".to_string(),
            source: ValidationError::NegativeCost {
                field: "hotel[h1].cost_per_night".to_string(),
                value: -5.0,
            },
        };
        assert!(err.to_string().contains("failed to find accommodation options for Kyoto"));
    }
}
