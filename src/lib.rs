//! travel-planner: rule-based travel itineraries with an optional AI planner
//!
//! The core engine turns a destination, a day count, interests and guardrails
//! into a day-by-day plan using a fixed activity catalog. It never fails: bad
//! input is normalized and over-constrained requests are relaxed. An
//! OpenAI-compatible model can be tried first, with the rule-based plan as
//! the fallback.
//!
//! # Quick Start
//!
//! ```rust
//! use travel_planner::generate_itinerary;
//!
//! let plan = generate_itinerary("Lisbon", 2, &["History"], &[] as &[&str]);
//! assert_eq!(plan.days.len(), 2);
//! assert_eq!(plan.days[0].theme, "History focus");
//! ```
//!
//! With AI planning:
//!
//! ```rust,no_run
//! use travel_planner::{plan_trip, AiMode, AiPlanner, AiSettings, Catalog, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = AiSettings::from_env()?;
//!     let planner = AiPlanner::from_settings(&settings);
//!     let request = TripRequest::new("Kyoto", 3).with_interests(["History", "Food"]);
//!
//!     let outcome = plan_trip(&request, Catalog::builtin(), AiMode::Enabled(&planner)).await;
//!     println!("{}", outcome.status_line());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod schemas;
pub mod services;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;

pub use catalog::Catalog;
pub use config::AiSettings;
pub use core::{generate_itinerary, Planner};
pub use error::{PlannerError, Result};
pub use render::{build_itinerary_pdf, pdf_file_name, render_plan_text};
pub use schemas::{CompletionSchema, SchemaHandle};
pub use services::{plan_trip, AiMode, AiPlanner, ChatBackend, OpenAIClient};
pub use types::{
    Activity, DayCount, DayPlan, DaySlotEntry, GuardrailRule, ItineraryPlan, PlanOutcome,
    PlanSource, TripRequest,
};
