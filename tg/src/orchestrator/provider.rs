//! Itinerary provider strategy
//!
//! The planning entry point is a trait with two implementations: the live
//! multi-agent pipeline and a deterministic static fixture. The caller picks
//! one through configuration; the orchestrator itself never branches on
//! mock-versus-real inline. Falling back from live to fixture on failure is
//! likewise a caller decision.

use std::sync::Arc;

use async_trait::async_trait;
use eyre::{Context, Result};
use tracing::info;

use super::fixture::fixture_bundle;
use super::pipeline::{MasterOrchestrator, PlanError};
use crate::config::{Config, ProviderKind};
use crate::domain::{ItineraryBundle, TripRequest};
use crate::llm::create_client;
use crate::prompts::PromptLoader;

/// A source of itinerary bundles
#[async_trait]
pub trait ItineraryProvider: Send + Sync {
    /// Plan a trip: exactly three itineraries or a tagged failure
    async fn plan(&self, request: &TripRequest) -> Result<ItineraryBundle, PlanError>;
}

/// Live multi-agent generation
pub struct LiveGeneration {
    orchestrator: MasterOrchestrator,
}

impl LiveGeneration {
    /// Wrap an orchestrator
    pub fn new(orchestrator: MasterOrchestrator) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl ItineraryProvider for LiveGeneration {
    async fn plan(&self, request: &TripRequest) -> Result<ItineraryBundle, PlanError> {
        self.orchestrator.plan(request).await
    }
}

/// Deterministic built-in bundle, no network
pub struct StaticFixture;

#[async_trait]
impl ItineraryProvider for StaticFixture {
    async fn plan(&self, request: &TripRequest) -> Result<ItineraryBundle, PlanError> {
        request.validate().map_err(PlanError::InvalidRequest)?;
        info!(destination = %request.destination, "Serving fixture bundle");
        Ok(fixture_bundle(request))
    }
}

/// Build the provider selected by configuration
pub fn create_provider(config: &Config) -> Result<Arc<dyn ItineraryProvider>> {
    match config.planner.provider {
        ProviderKind::Fixture => {
            info!("Using static fixture provider");
            Ok(Arc::new(StaticFixture))
        }
        ProviderKind::Live => {
            let client = create_client(&config.llm).context("Failed to create generation client")?;
            let prompts = Arc::new(PromptLoader::new(config.prompts.override_dir.as_ref()));
            let orchestrator = MasterOrchestrator::new(client, prompts, &config.planner);
            info!(model = %config.llm.model, "Using live generation provider");
            Ok(Arc::new(LiveGeneration::new(orchestrator)))
        }
    }
}
