use crate::{
    catalog::Catalog,
    config::AiSettings,
    error::PlannerError,
    render::{build_itinerary_pdf, pdf_file_name, render_plan_text},
    services::{plan_trip, AiMode, AiPlanner},
    types::{DayCount, TripRequest},
};
use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{info, warn};

const DEFAULT_DAYS: &str = "5";

fn command() -> Command {
    Command::new("travel-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plan a multi-day trip from interests and guardrails, with optional AI help")
        .arg(
            Arg::new("destination")
                .help("Where the trip goes")
                .required_unless_present("list-options")
                .index(1),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("DAYS")
                .help("Trip length in days, clamped to 1-30")
                .default_value(DEFAULT_DAYS),
        )
        .arg(
            Arg::new("interest")
                .short('i')
                .long("interest")
                .value_name("INTEREST")
                .help("Interest to focus on (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("guardrail")
                .short('g')
                .long("guardrail")
                .value_name("GUARDRAIL")
                .help("Guardrail to apply (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .value_name("FILE")
                .help("Load activities from a JSON catalog instead of the built-in one"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("pdf")
                .long("pdf")
                .value_name("FILE")
                .help("Also write a PDF (defaults to <destination>_itinerary.pdf)")
                .num_args(0..=1)
                .default_missing_value(""),
        )
        .arg(
            Arg::new("no-ai")
                .long("no-ai")
                .help("Skip the AI planner and use the rule-based engine only")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Ask the AI planner for a short recap of the final plan")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("Chat model to use (or set OPENAI_MODEL)"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("API key (or set OPENAI_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("API base URL (or set OPENAI_BASE_URL / OPENROUTER_BASE_URL env vars)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("list-options")
                .long("list-options")
                .help("List the interests and guardrails the catalog understands")
                .action(ArgAction::SetTrue),
        )
}

/// CLI entry point for the travel planner
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = command().get_matches();

    let loaded;
    let catalog = match matches.get_one::<String>("catalog") {
        Some(path) => {
            loaded = Catalog::load(Path::new(path))
                .with_context(|| format!("could not load catalog from {path}"))?;
            &loaded
        }
        None => Catalog::builtin(),
    };

    if matches.get_flag("list-options") {
        println!("{}", list_options(catalog));
        return Ok(());
    }

    let destination = matches
        .get_one::<String>("destination")
        .context("a destination is required")?;
    let days = matches
        .get_one::<String>("days")
        .map(|raw| DayCount::parse(raw))
        .unwrap_or_default();
    let interests = canonical_labels(strings(&matches, "interest"), "interest", |label| {
        catalog.canonical_interest(label)
    });
    let guardrails = canonical_labels(strings(&matches, "guardrail"), "guardrail", |label| {
        catalog.canonical_guardrail(label)
    });
    let request = TripRequest::new(destination.as_str(), i64::from(days.get()))
        .with_interests(interests)
        .with_guardrails(guardrails);

    let planner = if matches.get_flag("no-ai") {
        None
    } else {
        match ai_settings(&matches) {
            Ok(settings) => {
                info!("Using model: {}", settings.model());
                info!("Base URL: {}", settings.base_url());
                Some(Ok(AiPlanner::from_settings(&settings)))
            }
            Err(PlannerError::Config(reason)) => Some(Err(reason)),
            Err(err) => Some(Err(err.to_string())),
        }
    };
    let mode = match &planner {
        Some(Ok(planner)) => AiMode::Enabled(planner),
        Some(Err(reason)) => AiMode::Unavailable(reason.clone()),
        None => AiMode::Disabled,
    };

    info!("Planning {} day(s) in {}", days.get(), request.destination);
    let outcome = plan_trip(&request, catalog, mode).await;
    eprintln!("{}", outcome.status_line());
    info!("\n{}", outcome.replay());

    let mut plan = outcome.plan;
    if matches.get_flag("summary") {
        match &planner {
            Some(Ok(planner)) => match planner.summarize(&plan).await {
                Ok(summary) => plan = plan.with_ai_summary(summary),
                Err(e) => warn!("AI summary unavailable: {}", e),
            },
            _ => warn!("AI summary skipped: the AI planner is not configured"),
        }
    }

    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => println!("{}", serde_json::to_string_pretty(&plan)?),
        _ => println!("{}", render_plan_text(&plan)),
    }

    if let Some(target) = matches.get_one::<String>("pdf") {
        let path = if target.trim().is_empty() {
            PathBuf::from(pdf_file_name(&plan.destination))
        } else {
            PathBuf::from(target)
        };
        std::fs::write(&path, build_itinerary_pdf(&plan))
            .with_context(|| format!("could not write {}", path.display()))?;
        eprintln!("PDF saved to {}", path.display());
    }

    Ok(())
}

fn ai_settings(matches: &ArgMatches) -> crate::Result<AiSettings> {
    let api_key = matches.get_one::<String>("api-key").cloned();
    let mut settings = AiSettings::from_env_with_key(api_key)?;
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        settings = settings.with_base_url(base_url.as_str());
    }
    if let Some(model) = matches.get_one::<String>("model") {
        settings = settings.with_model(model.as_str());
    }
    if let Some(seconds) = matches.get_one::<u64>("timeout") {
        settings = settings.with_timeout(Duration::from_secs(*seconds));
    }
    Ok(settings)
}

fn strings(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Rewrite typed labels in catalog spelling, dropping repeats and unknown labels.
fn canonical_labels<'c, F>(labels: Vec<String>, kind: &str, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<&'c str>,
{
    let mut known: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        match lookup(&label) {
            Some(canonical) => {
                if !known.iter().any(|existing| existing == canonical) {
                    known.push(canonical.to_string());
                }
            }
            None => warn!("Ignoring unknown {} '{}' (see --list-options)", kind, label),
        }
    }
    known
}

fn list_options(catalog: &Catalog) -> String {
    let mut lines = vec!["Interests:".to_string()];
    lines.extend(catalog.interests().iter().map(|label| format!("  {label}")));
    lines.push("Guardrails:".to_string());
    lines.extend(catalog.guardrail_labels().map(|label| format!("  {label}")));
    lines.join("\n")
}
