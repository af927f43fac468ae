//! Planning orchestration
//!
//! The [`MasterOrchestrator`] sequences the specialized agents through the
//! four-phase pipeline; the [`ItineraryProvider`] strategy lets callers pick
//! between live generation and the static fixture without any inline
//! branching in the pipeline itself.

mod fixture;
mod pipeline;
mod provider;

pub use fixture::fixture_bundle;
pub use pipeline::{MasterOrchestrator, Phase, PlanError};
pub use provider::{ItineraryProvider, LiveGeneration, StaticFixture, create_provider};
