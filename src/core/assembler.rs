use crate::types::{Activity, DayCount, DayPlan, DaySlotEntry};

const FALLBACK_THEME: &str = "Balanced";
const FALLBACK_TIP: &str = "Mix high-energy stops with slow moments.";

/// Endless round-robin over a slice, driven by an explicit cursor.
#[derive(Debug, Clone)]
pub struct Cycle<'a, T> {
    items: &'a [T],
    cursor: usize,
}

impl<'a, T> Cycle<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, cursor: 0 }
    }

    /// Number of items handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl<'a, T> Iterator for Cycle<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.items.is_empty() {
            return None;
        }
        let item = &self.items[self.cursor % self.items.len()];
        self.cursor += 1;
        Some(item)
    }
}

/// Inputs to day assembly, all already normalized.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInput<'a> {
    pub days: DayCount,
    pub slots: &'a [String],
    pub interests: &'a [String],
    pub pool: &'a [&'a Activity],
    pub guardrails: &'a [String],
}

/// Lay the pool out over the requested days.
///
/// Activities advance once per slot and keep going across days; interests
/// advance once per day. Both cursors start fresh on every call.
pub fn assemble_days(input: AssemblyInput<'_>) -> Vec<DayPlan> {
    let mut activities = Cycle::new(input.pool);
    let mut themes = Cycle::new(input.interests);
    let day_total = input.days.get();

    let mut day_plans = Vec::with_capacity(day_total as usize);
    for day in 1..=day_total {
        let mut items = Vec::with_capacity(input.slots.len());
        for slot in input.slots {
            let Some(activity) = activities.next() else {
                break;
            };
            items.push(DaySlotEntry::from_activity(slot.as_str(), activity));
        }

        let interest = themes
            .next()
            .map(String::as_str)
            .unwrap_or(FALLBACK_THEME);

        let daily_tip = daily_tip(&items, input.guardrails);
        day_plans.push(DayPlan {
            day,
            theme: format!("{interest} focus"),
            items,
            daily_tip,
        });
    }
    day_plans
}

/// First slot's tip followed by the guardrails the day respects.
pub fn daily_tip(items: &[DaySlotEntry], guardrails: &[String]) -> String {
    let guardrail_text = if guardrails.is_empty() {
        "flexible day".to_string()
    } else {
        guardrails.join(", ")
    };
    let highlight = items
        .first()
        .map(|item| item.tip.as_str())
        .unwrap_or(FALLBACK_TIP);
    format!("{highlight} Guardrails considered: {guardrail_text}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_cycle_wraps_around() {
        let values = [1, 2, 3];
        let drawn: Vec<i32> = Cycle::new(&values).take(7).copied().collect();
        assert_eq!(drawn, [1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_cycle_over_empty_slice_is_exhausted() {
        let values: [u8; 0] = [];
        let mut cycle = Cycle::new(&values);
        assert!(cycle.next().is_none());
        assert_eq!(cycle.drawn(), 0);
    }

    #[test]
    fn test_activity_cursor_carries_across_days() {
        let catalog = Catalog::builtin();
        let pool: Vec<&Activity> = catalog.activities()[..4].iter().collect();
        let slots = labels(&["Morning", "Afternoon", "Evening"]);
        let interests = labels(&["History", "Food"]);

        let days = assemble_days(AssemblyInput {
            days: DayCount::new(3),
            slots: &slots,
            interests: &interests,
            pool: &pool,
            guardrails: &[],
        });

        let names: Vec<&str> = days
            .iter()
            .flat_map(|day| day.items.iter().map(|item| item.name.as_str()))
            .collect();
        let expected: Vec<&str> = (0..9).map(|idx| pool[idx % 4].name.as_str()).collect();
        assert_eq!(names, expected);

        let themes: Vec<&str> = days.iter().map(|day| day.theme.as_str()).collect();
        assert_eq!(themes, ["History focus", "Food focus", "History focus"]);
        assert_eq!(days[2].items[0].slot, "Morning");
        assert_eq!(days[2].items[2].slot, "Evening");
    }

    #[test]
    fn test_daily_tip_mentions_guardrails() {
        let catalog = Catalog::builtin();
        let entry = DaySlotEntry::from_activity("Morning", &catalog.activities()[0]);
        let items = vec![entry.clone()];

        let flexible = daily_tip(&items, &[]);
        assert_eq!(
            flexible,
            format!("{} Guardrails considered: flexible day.", entry.tip)
        );

        let guarded = daily_tip(&items, &labels(&["No late nights", "Low intensity"]));
        assert!(guarded.ends_with("Guardrails considered: No late nights, Low intensity."));
    }
}
