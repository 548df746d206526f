pub mod outcome;
pub mod plan;
pub mod request;

pub use outcome::{PlanOutcome, PlanSource};
pub use plan::{Activity, DayPlan, DaySlotEntry, GuardrailRule, ItineraryPlan};
pub use request::{DayCount, TripRequest, MAX_DAYS, MIN_DAYS};
