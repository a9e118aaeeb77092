//! Best-effort location extraction.
//!
//! A `location` hint in the query context always wins. Otherwise the text is
//! searched for a known state name.

use krishi_shared::{Location, QueryContext};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::warn;

/// Context key carrying a caller-supplied location
pub const LOCATION_KEY: &str = "location";

/// States recognized in free text
pub const KNOWN_STATES: [&str; 15] = [
    "Punjab",
    "Haryana",
    "Rajasthan",
    "Gujarat",
    "Maharashtra",
    "Andhra Pradesh",
    "Telangana",
    "Karnataka",
    "Kerala",
    "Tamil Nadu",
    "West Bengal",
    "Bihar",
    "Uttar Pradesh",
    "Madhya Pradesh",
    "Odisha",
];

static STATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<String> = KNOWN_STATES
        .iter()
        .map(|s| regex::escape(s).replace(' ', r"\s+"))
        .collect();
    Regex::new(&format!(r"(?i)\b({})\b", names.join("|"))).expect("state pattern must compile")
});

/// Extract a location from the context hint or the query text
pub fn extract_location(text: &str, context: &QueryContext) -> Option<Location> {
    if let Some(hint) = context.get(LOCATION_KEY) {
        match location_from_hint(hint) {
            Some(location) => return Some(location),
            None => warn!("Ignoring malformed location hint: {}", hint),
        }
    }

    let found = STATE_PATTERN.find(text)?;
    let canonical = canonical_state(found.as_str())?;
    Some(Location::state_only(canonical))
}

/// Accepts `{"state": .., "district": ..}` or a bare state string
fn location_from_hint(hint: &Value) -> Option<Location> {
    match hint {
        Value::String(state) if !state.trim().is_empty() => {
            Some(Location::state_only(state.trim()))
        }
        Value::Object(_) => serde_json::from_value(hint.clone()).ok(),
        _ => None,
    }
}

fn canonical_state(matched: &str) -> Option<&'static str> {
    let normalized = matched.split_whitespace().collect::<Vec<_>>().join(" ");
    KNOWN_STATES
        .iter()
        .copied()
        .find(|s| s.eq_ignore_ascii_case(&normalized))
}
