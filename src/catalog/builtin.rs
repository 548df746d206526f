use super::Catalog;
use crate::types::{Activity, GuardrailRule};

const INTERESTS: [&str; 8] = [
    "History",
    "Food",
    "Nature",
    "Art",
    "Nightlife",
    "Adventure",
    "Shopping",
    "Wellness",
];

const DAILY_SLOTS: [&str; 3] = ["Morning", "Afternoon", "Evening"];

pub(super) fn catalog() -> Catalog {
    Catalog {
        interests: INTERESTS.iter().map(|label| label.to_string()).collect(),
        slots: DAILY_SLOTS.iter().map(|label| label.to_string()).collect(),
        guardrails: guardrails(),
        activities: activities(),
    }
}

fn rule(label: &str, require: &[&str], exclude: &[&str]) -> GuardrailRule {
    GuardrailRule {
        label: label.to_string(),
        require_tags: require.iter().map(|tag| tag.to_string()).collect(),
        exclude_tags: exclude.iter().map(|tag| tag.to_string()).collect(),
    }
}

fn guardrails() -> Vec<GuardrailRule> {
    vec![
        rule(
            "Kid-friendly only",
            &["kid-friendly"],
            &["alcohol", "late-night"],
        ),
        rule("No walking tours", &[], &["walking-tour"]),
        rule("Wheelchair accessible", &["accessible"], &["strenuous"]),
        rule("Budget friendly", &["budget"], &["premium"]),
        rule("No late nights", &[], &["late-night"]),
        rule("Indoor only", &["indoor"], &["outdoor"]),
        rule("Low intensity", &[], &["strenuous"]),
    ]
}

fn activity(
    name: &str,
    category: &str,
    description: &str,
    duration_hours: u8,
    tip: &str,
    tags: &[&str],
) -> Activity {
    Activity {
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        duration_hours,
        tip: tip.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

fn activities() -> Vec<Activity> {
    vec![
        // History
        activity(
            "Old town heritage walk",
            "History",
            "Guided loop through the historic core, its squares and oldest churches.",
            2,
            "Start early to beat tour groups and catch soft light on the facades.",
            &["walking-tour", "outdoor", "budget", "kid-friendly"],
        ),
        activity(
            "City history museum",
            "History",
            "Permanent collection tracing the city from its founding to today.",
            2,
            "Check for free-entry hours and grab the audio guide.",
            &["indoor", "accessible", "kid-friendly"],
        ),
        activity(
            "Castle and fortifications",
            "History",
            "Climb the ramparts of the old fortress for sweeping views over the rooftops.",
            3,
            "Wear sturdy shoes; the paths are steep and uneven.",
            &["outdoor", "strenuous", "kid-friendly"],
        ),
        // Food
        activity(
            "Market breakfast crawl",
            "Food",
            "Graze through the central market tasting pastries, cheeses and fruit.",
            2,
            "Bring small change and ask vendors for their favorite stall.",
            &["walking-tour", "outdoor", "budget", "kid-friendly"],
        ),
        activity(
            "Regional cooking class",
            "Food",
            "Hands-on class cooking two or three local dishes with a chef.",
            3,
            "Book a day ahead and mention any dietary needs.",
            &["indoor", "accessible", "kid-friendly", "premium"],
        ),
        activity(
            "Wine and small plates evening",
            "Food",
            "Hop between neighborhood bars pairing local wine with small plates.",
            2,
            "Arrive before 8pm to find a seat without a reservation.",
            &["indoor", "alcohol", "late-night", "premium"],
        ),
        // Nature
        activity(
            "Botanical garden stroll",
            "Nature",
            "Shaded paths, greenhouses and a quiet lake in the city's garden.",
            2,
            "Pack water and look for the seasonal blooms map at the gate.",
            &["outdoor", "accessible", "budget", "kid-friendly"],
        ),
        activity(
            "Coastal cliff hike",
            "Nature",
            "Half-day trail along the cliffs with lookouts over hidden coves.",
            4,
            "Check the forecast and carry layers; wind picks up after noon.",
            &["outdoor", "strenuous"],
        ),
        activity(
            "Sunset viewpoint picnic",
            "Nature",
            "Pick up snacks and settle in at a hilltop lookout as the sun sets.",
            1,
            "Arrive thirty minutes before sunset to claim a good spot.",
            &["outdoor", "budget", "kid-friendly"],
        ),
        // Art
        activity(
            "Modern art gallery",
            "Art",
            "Contemporary collection with rotating exhibitions from local artists.",
            2,
            "Weekday mornings are the quietest time to visit.",
            &["indoor", "accessible", "kid-friendly"],
        ),
        activity(
            "Street art walking tour",
            "Art",
            "Murals and hidden installations across the creative district.",
            2,
            "Bring a phone with plenty of storage for photos.",
            &["walking-tour", "outdoor", "budget"],
        ),
        activity(
            "Evening concert or performance",
            "Art",
            "Catch a concert, dance piece or theater show at a landmark venue.",
            2,
            "Look for same-day discounted tickets at the box office.",
            &["indoor", "accessible", "premium"],
        ),
        // Nightlife
        activity(
            "Rooftop bar hop",
            "Nightlife",
            "Cocktails with skyline views across two or three rooftop terraces.",
            3,
            "Dress codes apply at some terraces; smart casual is safest.",
            &["outdoor", "alcohol", "late-night", "premium"],
        ),
        activity(
            "Live music club",
            "Nightlife",
            "Local bands and DJs in an intimate venue favored by residents.",
            3,
            "Doors open late; have a light dinner first.",
            &["indoor", "alcohol", "late-night"],
        ),
        activity(
            "Night food market",
            "Nightlife",
            "Open-air market with street food stalls, music and long tables.",
            2,
            "Share several small dishes to taste more of the market.",
            &["outdoor", "budget", "kid-friendly"],
        ),
        // Adventure
        activity(
            "Kayak or paddleboard session",
            "Adventure",
            "Guided paddle along the waterfront with a stop at a sheltered beach.",
            3,
            "Wear quick-dry clothes and bring a waterproof phone pouch.",
            &["outdoor", "strenuous", "kid-friendly"],
        ),
        activity(
            "Neighborhood bike tour",
            "Adventure",
            "Cycle between districts on bike lanes and riverside paths.",
            3,
            "Reserve helmets in advance for younger riders.",
            &["outdoor", "strenuous", "budget"],
        ),
        activity(
            "Indoor climbing gym",
            "Adventure",
            "Bouldering walls for all levels with coaching for first-timers.",
            2,
            "Rental shoes run small; size up.",
            &["indoor", "strenuous", "kid-friendly"],
        ),
        // Shopping
        activity(
            "Artisan craft quarter",
            "Shopping",
            "Workshops selling ceramics, textiles and leather made on site.",
            2,
            "Ask makers about shipping larger pieces home.",
            &["outdoor", "budget", "kid-friendly"],
        ),
        activity(
            "Flagship design stores",
            "Shopping",
            "Curated boutiques showcasing local fashion and homeware labels.",
            2,
            "Keep receipts for tax-free shopping refunds at the airport.",
            &["indoor", "accessible", "premium"],
        ),
        activity(
            "Vintage and flea market",
            "Shopping",
            "Weekend market stacked with records, furniture and curiosities.",
            2,
            "Haggling is expected; start at two thirds of the asking price.",
            &["outdoor", "budget"],
        ),
        // Wellness
        activity(
            "Thermal spa afternoon",
            "Wellness",
            "Pools, saunas and treatments in a historic bathhouse.",
            3,
            "Book treatments ahead and bring flip-flops.",
            &["indoor", "accessible", "premium"],
        ),
        activity(
            "Sunrise yoga in the park",
            "Wellness",
            "Gentle open-air yoga class as the city wakes up.",
            1,
            "Mats are provided, but bring a towel and water.",
            &["outdoor", "budget", "kid-friendly"],
        ),
        activity(
            "Tea house and slow lunch",
            "Wellness",
            "Unhurried lunch and tea tasting in a quiet courtyard tea house.",
            1,
            "Put the phone away and order the house blend.",
            &["indoor", "accessible", "budget", "kid-friendly"],
        ),
    ]
}
