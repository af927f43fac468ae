//! TripGenie - Multi-Agent Travel Itinerary Planner
//!
//! CLI entry point for planning trips and recalculating costs.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use sessionstore::{SessionKey, SessionStore};
use tripgenie::cli::{Cli, Command, OutputFormat};
use tripgenie::config::{Config, ProviderKind};
use tripgenie::domain::{ItineraryBundle, MeetingDetails, TripRequest, TripType};
use tripgenie::engine::{CostSummary, FinalSelection, SelectionState, recalculate};
use tripgenie::orchestrator::create_provider;
use tripgenie::prompts::{PromptLoader, embedded};

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripgenie")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Setup tracing subscriber - write to log file, not stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("tripgenie.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Plan {
            destination,
            days,
            people,
            budget,
            dates,
            preferences,
            formal,
            meeting_location,
            meeting_duration,
            meeting_mode,
            facilities,
            provider,
            output,
            format,
        } => {
            if let Some(kind) = provider {
                config.planner.provider = kind;
            }
            config.validate()?;

            let meeting = match (formal, meeting_location) {
                (true, Some(location)) => Some(MeetingDetails {
                    location,
                    duration: meeting_duration,
                    offline_online: meeting_mode,
                    facilities_required: facilities,
                }),
                _ => None,
            };

            let request = TripRequest {
                destination,
                duration_days: days,
                people_count: people,
                budget,
                trip_type: if formal { TripType::Formal } else { TripType::Informal },
                travel_dates: dates,
                preferences,
                meeting,
            };

            cmd_plan(&config, request, output, format).await
        }
        Command::Recalc {
            bundle,
            itinerary,
            hotel,
            commute,
            activities,
            days,
            budget,
            format,
        } => cmd_recalc(&bundle, itinerary.as_deref(), hotel, commute, activities, days, budget, format),
        Command::Prompts => cmd_prompts(&config),
    }
}

/// Run the pipeline and print the resulting itineraries
async fn cmd_plan(config: &Config, request: TripRequest, output: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    if config.planner.provider == ProviderKind::Live {
        println!(
            "Planning {} ({} days, {} travelers, budget INR {})...",
            request.destination, request.duration_days, request.people_count, request.budget
        );
    }

    let provider = create_provider(config)?;
    let bundle = provider.plan(&request).await.context("Planning failed")?;

    // A planning session holds the request and its results until the user
    // finalizes a selection.
    let sessions = SessionStore::new();
    let session_id = sessions.create();
    sessions.put(&session_id, SessionKey::TripRequest, &request)?;
    sessions.put(&session_id, SessionKey::ItineraryBundle, &bundle)?;
    info!(%session_id, "Bundle stored in session");

    if let Some(path) = &output {
        let json = serde_json::to_string_pretty(&bundle)?;
        fs::write(path, json).context(format!("Failed to write bundle to {}", path.display()))?;
        println!("Bundle written to {}", path.display());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        }
        OutputFormat::Text => print_bundle(&request, &bundle),
    }

    Ok(())
}

/// Load a bundle, apply selections, and print the recalculated summary
#[allow(clippy::too_many_arguments)]
fn cmd_recalc(
    bundle_path: &PathBuf,
    itinerary_id: Option<&str>,
    hotel: Option<String>,
    commute: Option<String>,
    activities: Vec<String>,
    days: u32,
    budget: f64,
    format: OutputFormat,
) -> Result<()> {
    let content =
        fs::read_to_string(bundle_path).context(format!("Failed to read bundle {}", bundle_path.display()))?;
    let bundle: ItineraryBundle = serde_json::from_str(&content).context("Failed to parse bundle JSON")?;

    let itinerary = match itinerary_id {
        Some(id) => bundle
            .find_itinerary(id)
            .ok_or_else(|| eyre::eyre!("No itinerary '{}' in bundle", id))?,
        None => bundle
            .itineraries
            .first()
            .ok_or_else(|| eyre::eyre!("Bundle holds no itineraries"))?,
    };

    let mut selection = SelectionState::from_itinerary(itinerary);
    if let Some(id) = hotel {
        selection.select_hotel(id);
    }
    if let Some(id) = commute {
        selection.select_commute(id);
    }
    if !activities.is_empty() {
        // Explicit activity list replaces the generated defaults
        for activity in itinerary.all_activities() {
            selection.set_activity(activity.id.clone(), activities.contains(&activity.id));
        }
    }

    let summary = recalculate(itinerary, &selection, days, budget);

    // Record the finalized choice the way the presentation layer would
    let sessions = SessionStore::new();
    let session_id = sessions.create();
    sessions.put(
        &session_id,
        SessionKey::FinalSelection,
        &FinalSelection {
            itinerary_id: itinerary.id.clone(),
            selection: selection.clone(),
            summary,
        },
    )?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => print_summary(itinerary.vibe.as_str(), &summary),
    }

    Ok(())
}

/// List prompt templates and their sources
fn cmd_prompts(config: &Config) -> Result<()> {
    let loader = PromptLoader::new(config.prompts.override_dir.as_ref());

    println!("Prompt templates:");
    println!();
    for &name in embedded::template_names() {
        match loader.source(name) {
            Some(source) => println!("  {:<26} {}", name, source),
            None => println!("  {:<26} missing", name),
        }
    }

    Ok(())
}

fn format_inr(amount: f64) -> String {
    format!("INR {:.0}", amount)
}

/// Print the three variants with their daily plans and baselines
fn print_bundle(request: &TripRequest, bundle: &ItineraryBundle) {
    let overview = &bundle.destination_overview;
    println!();
    println!("{}", format!("Your trip to {}", overview.destination).bold());
    println!(
        "  best time: {}  currency: {}  language: {}",
        overview.best_time_to_visit, overview.currency, overview.language
    );
    println!("  safety: {}", overview.safety_overview);
    println!();

    for itinerary in &bundle.itineraries {
        println!("{}", format!("[{}] {}", itinerary.vibe, itinerary.title).bold().cyan());
        println!("  {}", itinerary.description);
        for day in &itinerary.daily_plan {
            println!("  Day {}: {} ({})", day.day, day.title, day.theme);
            for activity in &day.activities {
                let marker = if activity.selected { "x" } else { " " };
                println!(
                    "    [{}] {} - {} ({})",
                    marker,
                    activity.name,
                    format_inr(activity.cost),
                    activity.duration
                );
            }
        }
        println!(
            "  {} hotel options, {} commute options, flights {} + food {}/day",
            itinerary.hotel_options.len(),
            itinerary.commute_options.len(),
            format_inr(itinerary.cost.flights),
            format_inr(itinerary.cost.food),
        );
        println!();
    }

    if let Some(adjustments) = &bundle.formal_adjustments {
        println!("{}", "Formal trip adjustments".bold());
        println!("  stay: {}", adjustments.adjusted_stay);
        println!("  transport: {}", adjustments.adjusted_transport);
        println!("  schedule: {}", adjustments.adjusted_schedule);
        println!("  buffers: {}", adjustments.adjusted_buffer_times);
        println!();
    }

    let guidance = &bundle.budget_guidance;
    println!("{}", "Budget guidance".bold());
    println!(
        "  budget {} / mid-range {} / luxury {} (your ceiling: {})",
        format_inr(guidance.recommended_budget.budget),
        format_inr(guidance.recommended_budget.mid_range),
        format_inr(guidance.recommended_budget.luxury),
        format_inr(request.budget),
    );
    for tip in &guidance.cost_saving_tips {
        println!("  tip: {}", tip);
    }
}

/// Print a recalculated cost summary
fn print_summary(vibe: &str, summary: &CostSummary) {
    println!();
    println!("{}", format!("Cost summary ({})", vibe).bold());
    println!("  flights        {}", format_inr(summary.flights));
    println!("  accommodation  {}", format_inr(summary.accommodation));
    println!("  food           {}", format_inr(summary.food));
    println!("  activities     {}", format_inr(summary.activities));
    println!("  commute        {}", format_inr(summary.commute));
    println!("  {}", format!("total          {}", format_inr(summary.total)).bold());

    let remaining = format_inr(summary.remaining_budget);
    if summary.remaining_budget < 0.0 {
        println!("  remaining      {}", remaining.red());
    } else {
        println!("  remaining      {}", remaining.green());
    }
    println!("  safety score   {:.0}", summary.overall_safety_score);
}
