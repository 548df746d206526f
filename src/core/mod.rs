//! Rule-based itinerary engine.
//!
//! Guardrails resolve to tag constraints, the selector narrows the catalog
//! (relaxing constraints rather than ever returning nothing), and the
//! assembler lays the pool out slot by slot across the trip.

pub mod assembler;
pub mod constraints;
pub mod input;
pub mod planner;
pub mod selector;
pub mod summary;

pub use assembler::{assemble_days, daily_tip, AssemblyInput, Cycle};
pub use constraints::{resolve_constraints, ConstraintSet};
pub use input::{
    normalize_destination, normalize_interests, selected_guardrails, DEFAULT_DESTINATION,
};
pub use planner::{generate_itinerary, Planner};
pub use selector::{select_activities, Relaxation, Selection};
pub use summary::{guardrail_message, highlight_text, NO_GUARDRAILS_MESSAGE};
