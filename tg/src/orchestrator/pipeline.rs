//! Master orchestrator
//!
//! Sequences the specialized agents through four ordered phases:
//!
//! 1. Destination intelligence - single call, required by everything after it
//! 2. Discovery - activity discovery and accommodation search in parallel,
//!    awaited jointly (fork-join, no partial-result path)
//! 3. Cost estimation - consumes Phase 1 plus the flattened Phase 2 data
//! 4. Synthesis - one call that merges everything into three itineraries
//!
//! Formal trips with meeting details get one extra enhancement call after
//! synthesis. Any phase failing aborts the whole run; the orchestrator
//! either returns a fully-validated bundle or a tagged error carrying the
//! phase and destination. It never falls back to fixture data itself; that
//! choice belongs to the caller via the provider strategy.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::agents::{
    AccommodationAgent, ActivityDiscoveryAgent, AgentError, AgentKind, CostEstimationAgent,
    DestinationIntelligenceAgent, FormalEnhancementAgent, SynthesisAgent,
};
use crate::config::PlannerConfig;
use crate::domain::{ItineraryBundle, TripRequest, TripType};
use crate::llm::GenerationClient;
use crate::prompts::PromptLoader;
use crate::validation::{ValidationError, validate_bundle};

/// The orchestrator's ordered phases, used to tag failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Phase 1: destination intelligence
    DestinationIntelligence,
    /// Phase 2: parallel activity + accommodation discovery
    Discovery,
    /// Phase 3: cost estimation
    CostEstimation,
    /// Phase 4: itinerary synthesis
    Synthesis,
    /// Post-synthesis formal trip enhancement
    FormalEnhancement,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DestinationIntelligence => write!(f, "destination-intelligence"),
            Self::Discovery => write!(f, "discovery"),
            Self::CostEstimation => write!(f, "cost-estimation"),
            Self::Synthesis => write!(f, "synthesis"),
            Self::FormalEnhancement => write!(f, "formal-enhancement"),
        }
    }
}

/// A planning run failure
#[derive(Debug, Error)]
pub enum PlanError {
    /// The request itself is unusable; nothing was generated
    #[error("invalid trip request: {0}")]
    InvalidRequest(#[source] ValidationError),

    /// A phase failed and the run was aborted
    #[error("phase {phase} failed: {source}")]
    Phase {
        phase: Phase,
        #[source]
        source: AgentError,
    },
}

impl PlanError {
    /// The failing phase, if the run got that far
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::InvalidRequest(_) => None,
            Self::Phase { phase, .. } => Some(*phase),
        }
    }
}

/// Coordinates the multi-agent planning pipeline
pub struct MasterOrchestrator {
    destination: DestinationIntelligenceAgent,
    activities: ActivityDiscoveryAgent,
    accommodation: AccommodationAgent,
    costs: CostEstimationAgent,
    synthesis: SynthesisAgent,
    formal: FormalEnhancementAgent,
}

impl MasterOrchestrator {
    /// Create an orchestrator with agents sharing one client and one prompt
    /// loader
    pub fn new(client: Arc<dyn GenerationClient>, prompts: Arc<PromptLoader>, planner: &PlannerConfig) -> Self {
        let agent_tokens = planner.agent_max_tokens;
        Self {
            destination: DestinationIntelligenceAgent::new(client.clone(), prompts.clone(), agent_tokens),
            activities: ActivityDiscoveryAgent::new(client.clone(), prompts.clone(), agent_tokens),
            accommodation: AccommodationAgent::new(client.clone(), prompts.clone(), agent_tokens),
            costs: CostEstimationAgent::new(client.clone(), prompts.clone(), agent_tokens),
            synthesis: SynthesisAgent::new(client.clone(), prompts.clone(), planner.synthesis_max_tokens),
            formal: FormalEnhancementAgent::new(client, prompts, agent_tokens),
        }
    }

    /// Run the full pipeline for one request
    ///
    /// Returns exactly three validated itineraries or fails as a unit.
    pub async fn plan(&self, request: &TripRequest) -> Result<ItineraryBundle, PlanError> {
        request.validate().map_err(PlanError::InvalidRequest)?;

        info!(destination = %request.destination, duration_days = request.duration_days, "Planning trip");

        // Phase 1: destination intelligence. Everything downstream slices
        // this profile.
        let profile = self.destination.run(request).await.map_err(|source| PlanError::Phase {
            phase: Phase::DestinationIntelligence,
            source,
        })?;

        // Phase 2: fork-join. The two calls share nothing but the read-only
        // profile; either failing aborts the run with no partial result.
        debug!(destination = %request.destination, "Phase 2: parallel discovery");
        let (catalog, shortlist) = futures::try_join!(
            self.activities.run(request, &profile),
            self.accommodation.run(request, &profile),
        )
        .map_err(|source| PlanError::Phase {
            phase: Phase::Discovery,
            source,
        })?;

        // Phase 3: cost estimation over the flattened discovery data
        let cost_model = self
            .costs
            .run(request, &profile, &catalog, &shortlist)
            .await
            .map_err(|source| PlanError::Phase {
                phase: Phase::CostEstimation,
                source,
            })?;

        // Phase 4: synthesis, then bundle-level validation
        let mut bundle = self
            .synthesis
            .run(request, &profile, &catalog, &shortlist, &cost_model)
            .await
            .map_err(|source| PlanError::Phase {
                phase: Phase::Synthesis,
                source,
            })?;

        validate_bundle(&bundle, request.duration_days).map_err(|source| PlanError::Phase {
            phase: Phase::Synthesis,
            source: AgentError::Validation {
                agent: AgentKind::ItinerarySynthesis,
                destination: request.destination.clone(),
                source,
            },
        })?;

        // Derived cost fields are stale the moment synthesis returns; zero
        // them pending the first recalculation.
        for itinerary in &mut bundle.itineraries {
            itinerary.cost.reset_derived();
        }

        // Formal trips with a fixed engagement get the enhancement pass
        if request.trip_type == TripType::Formal
            && let Some(meeting) = &request.meeting
        {
            let adjustments = self.formal.run(request, meeting).await.map_err(|source| PlanError::Phase {
                phase: Phase::FormalEnhancement,
                source,
            })?;
            bundle.formal_adjustments = Some(adjustments);
        }

        info!(
            destination = %request.destination,
            itinerary_count = bundle.itineraries.len(),
            "Planning complete"
        );
        Ok(bundle)
    }
}
