//! US State Lookup Table
//!
//! Fixed name <-> 2-letter code mapping (50 states + DC) and the detector
//! that finds a state mentioned after a preposition in a query.

use regex::Regex;
use std::sync::LazyLock;

/// A single state entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsState {
    pub name: &'static str,
    pub code: &'static str,
}

// ============================================================================
// EMBEDDED STATE TABLE
// ============================================================================

static STATES: &[UsState] = &[
    UsState { name: "Alabama", code: "AL" },
    UsState { name: "Alaska", code: "AK" },
    UsState { name: "Arizona", code: "AZ" },
    UsState { name: "Arkansas", code: "AR" },
    UsState { name: "California", code: "CA" },
    UsState { name: "Colorado", code: "CO" },
    UsState { name: "Connecticut", code: "CT" },
    UsState { name: "Delaware", code: "DE" },
    UsState { name: "District of Columbia", code: "DC" },
    UsState { name: "Florida", code: "FL" },
    UsState { name: "Georgia", code: "GA" },
    UsState { name: "Hawaii", code: "HI" },
    UsState { name: "Idaho", code: "ID" },
    UsState { name: "Illinois", code: "IL" },
    UsState { name: "Indiana", code: "IN" },
    UsState { name: "Iowa", code: "IA" },
    UsState { name: "Kansas", code: "KS" },
    UsState { name: "Kentucky", code: "KY" },
    UsState { name: "Louisiana", code: "LA" },
    UsState { name: "Maine", code: "ME" },
    UsState { name: "Maryland", code: "MD" },
    UsState { name: "Massachusetts", code: "MA" },
    UsState { name: "Michigan", code: "MI" },
    UsState { name: "Minnesota", code: "MN" },
    UsState { name: "Mississippi", code: "MS" },
    UsState { name: "Missouri", code: "MO" },
    UsState { name: "Montana", code: "MT" },
    UsState { name: "Nebraska", code: "NE" },
    UsState { name: "Nevada", code: "NV" },
    UsState { name: "New Hampshire", code: "NH" },
    UsState { name: "New Jersey", code: "NJ" },
    UsState { name: "New Mexico", code: "NM" },
    UsState { name: "New York", code: "NY" },
    UsState { name: "North Carolina", code: "NC" },
    UsState { name: "North Dakota", code: "ND" },
    UsState { name: "Ohio", code: "OH" },
    UsState { name: "Oklahoma", code: "OK" },
    UsState { name: "Oregon", code: "OR" },
    UsState { name: "Pennsylvania", code: "PA" },
    UsState { name: "Rhode Island", code: "RI" },
    UsState { name: "South Carolina", code: "SC" },
    UsState { name: "South Dakota", code: "SD" },
    UsState { name: "Tennessee", code: "TN" },
    UsState { name: "Texas", code: "TX" },
    UsState { name: "Utah", code: "UT" },
    UsState { name: "Vermont", code: "VT" },
    UsState { name: "Virginia", code: "VA" },
    UsState { name: "Washington", code: "WA" },
    UsState { name: "West Virginia", code: "WV" },
    UsState { name: "Wisconsin", code: "WI" },
    UsState { name: "Wyoming", code: "WY" },
];

/// `(in|for|across) <state>` with every name and code as an alternative,
/// longest first so "west virginia" wins over "virginia".
static STATE_MENTION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let mut alternatives: Vec<String> = STATES
        .iter()
        .flat_map(|s| [s.name.to_lowercase(), s.code.to_lowercase()])
        .map(|alt| regex::escape(&alt).replace(' ', r"\s+"))
        .collect();
    alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let pattern = format!(r"\b(?:in|for|across)\s+({})\b", alternatives.join("|"));
    Regex::new(&pattern).ok()
});

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Resolve a full state name or 2-letter code, case-insensitively
///
/// Internal whitespace is collapsed, so "new   york" resolves to NY.
pub fn lookup_state(name_or_code: &str) -> Option<&'static UsState> {
    let needle = name_or_code
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    STATES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(&needle) || s.code.eq_ignore_ascii_case(&needle))
}

/// Display name for a 2-letter code, if known
pub fn state_name(code: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|s| s.code.eq_ignore_ascii_case(code))
        .map(|s| s.name)
}

/// Find a state named right after `in`, `for` or `across`
///
/// Expects an already-lowercased query.
pub fn find_state_mention(query: &str) -> Option<&'static UsState> {
    let regex = STATE_MENTION.as_ref()?;
    let captures = regex.captures(query)?;
    lookup_state(captures.get(1)?.as_str())
}
