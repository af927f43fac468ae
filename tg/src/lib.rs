#![recursion_limit = "256"]
//! TripGenie - Multi-Agent Travel Itinerary Planner
//!
//! TripGenie plans trips by sequencing specialized LLM "agents" through a
//! four-phase pipeline: destination intelligence, parallel activity and
//! accommodation discovery, cost estimation, and a final synthesis that
//! merges everything into exactly three itinerary variants. A pure
//! recalculation engine then turns the user's hotel/commute/activity
//! selections into live cost and safety totals.
//!
//! # Core Concepts
//!
//! - **Typed at the boundary**: every agent output is deserialized into a
//!   typed struct and validated before it enters the pipeline; nothing
//!   partial survives a failed call.
//! - **Fail as a unit**: any phase failing aborts the whole run with an
//!   error tagged by phase and destination.
//! - **Derived state is recomputed, never trusted**: generated cost totals
//!   are zeroed at synthesis and only the recalculation engine fills them.
//!
//! # Modules
//!
//! - [`agents`] - the specialized data agents and their schemas
//! - [`orchestrator`] - the four-phase pipeline and provider strategy
//! - [`engine`] - selection state and cost/safety recalculation
//! - [`domain`] - trip request, destination profile, itinerary entities
//! - [`llm`] - structured generation client boundary
//! - [`prompts`] - Handlebars templates with embedded defaults
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod agents;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod llm;
pub mod orchestrator;
pub mod prompts;
pub mod validation;

// Re-export commonly used types
pub use agents::{AgentError, AgentKind};
pub use config::{Config, LlmConfig, PlannerConfig, ProviderKind};
pub use domain::{
    Activity, CommuteOption, CostBreakdown, DailyPlan, DestinationProfile, Hotel, Itinerary, ItineraryBundle,
    TripRequest, TripType,
};
pub use engine::{CostSummary, FinalSelection, SelectionState, night_count, recalculate};
pub use llm::{AnthropicClient, GenerationClient, GenerationError, GenerationRequest, create_client};
pub use orchestrator::{ItineraryProvider, MasterOrchestrator, Phase, PlanError, create_provider};
pub use prompts::PromptLoader;
pub use validation::ValidationError;
