//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ProviderKind;

/// TripGenie - multi-agent travel itinerary planner
#[derive(Parser)]
#[command(
    name = "tripgenie",
    about = "Multi-agent travel itinerary planner",
    version,
    after_help = "Logs are written to: ~/.local/share/tripgenie/logs/tripgenie.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Plan a trip: run the agent pipeline and print the itineraries
    Plan {
        /// Travel destination
        destination: String,

        /// Trip duration in days
        #[arg(short, long, default_value = "3")]
        days: u32,

        /// Number of travelers
        #[arg(short, long, default_value = "2")]
        people: u32,

        /// Budget ceiling in INR
        #[arg(short, long, default_value = "50000")]
        budget: f64,

        /// Travel dates or season, free text
        #[arg(long, default_value = "flexible")]
        dates: String,

        /// Preference tags (repeatable)
        #[arg(long = "prefer")]
        preferences: Vec<String>,

        /// Plan a formal (business) trip
        #[arg(long)]
        formal: bool,

        /// Meeting location (formal trips; enables the enhancement pass)
        #[arg(long)]
        meeting_location: Option<String>,

        /// Meeting duration (formal trips)
        #[arg(long, default_value = "2 hours")]
        meeting_duration: String,

        /// Whether the meeting is offline or online (formal trips)
        #[arg(long, default_value = "offline")]
        meeting_mode: String,

        /// Facilities the meeting requires (repeatable)
        #[arg(long = "facility")]
        facilities: Vec<String>,

        /// Override the configured provider
        #[arg(long)]
        provider: Option<ProviderKind>,

        /// Write the full bundle JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Recalculate costs for a saved bundle with the given selections
    Recalc {
        /// Bundle JSON file produced by `plan --output`
        bundle: PathBuf,

        /// Itinerary id within the bundle (defaults to the first)
        #[arg(short, long)]
        itinerary: Option<String>,

        /// Selected hotel id
        #[arg(long)]
        hotel: Option<String>,

        /// Selected commute option id
        #[arg(long)]
        commute: Option<String>,

        /// Activity ids to select (replaces the generated defaults)
        #[arg(long = "activity")]
        activities: Vec<String>,

        /// Trip duration in days
        #[arg(short, long, default_value = "3")]
        days: u32,

        /// Budget ceiling in INR
        #[arg(short, long, default_value = "50000")]
        budget: f64,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// List prompt templates and where each resolves from
    Prompts,
}

/// Output format for plan/recalc commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
