//! Intent Classifier
//!
//! Keyword heuristics, not NLP: a query is normalized (trimmed, lowercased,
//! whitespace collapsed) and tested against `INTENT_RULES` from top to
//! bottom. The first rule whose predicate matches answers the query; when
//! nothing matches, `FALLBACK_RULE` (default summary) does.
//!
//! Rule order is load-bearing. Many queries satisfy several predicates
//! ("carbon impact in Colorado" is both a state and a carbon query) and the
//! earlier rule always wins.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::query::branches::{
    availability, carbon_impact, compost_filter, default_summary, funder_lookup, grant_fund,
    practice_frequency, state_breakdown,
};
use crate::query::types::QueryResult;
use crate::records::{FarmProject, Funder};
use crate::utils::states::{find_state_mention, UsState};

// ============================================================================
// Intent identifiers
// ============================================================================

/// Answer branch identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    StateBreakdown,
    CarbonImpact,
    CompostFilter,
    PracticeFrequency,
    FunderLookup,
    GrantFund,
    Availability,
    DefaultSummary,
}

impl Intent {
    /// Stable kebab-case identifier ("state-breakdown")
    pub fn id(self) -> &'static str {
        match self {
            Intent::StateBreakdown => "state-breakdown",
            Intent::CarbonImpact => "carbon-impact",
            Intent::CompostFilter => "compost-filter",
            Intent::PracticeFrequency => "practice-frequency",
            Intent::FunderLookup => "funder-lookup",
            Intent::GrantFund => "grant-fund",
            Intent::Availability => "availability",
            Intent::DefaultSummary => "default-summary",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Query context
// ============================================================================

/// Trim, lowercase, straighten curly apostrophes, collapse whitespace
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['\u{2018}', '\u{2019}'], "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Everything a predicate or answer branch may look at
pub struct QueryContext<'a> {
    pub raw: &'a str,
    pub normalized: String,
    pub projects: &'a [FarmProject],
    pub funders: &'a [Funder],
    pub config: &'a EngineConfig,
}

impl<'a> QueryContext<'a> {
    pub fn new(
        raw: &'a str,
        projects: &'a [FarmProject],
        funders: &'a [Funder],
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            raw,
            normalized: normalize_query(raw),
            projects,
            funders,
            config,
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.normalized.contains(needle)
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.normalized.contains(n))
    }

    /// State named after `in`/`for`/`across`, if any
    pub fn mentioned_state(&self) -> Option<&'static UsState> {
        find_state_mention(&self.normalized)
    }

    /// First funder (in given order) whose name, or slug with hyphens as
    /// spaces, appears in the query
    pub fn mentioned_funder(&self) -> Option<&'a Funder> {
        self.funders.iter().find(|funder| {
            let name = normalize_query(&funder.name);
            let slug = normalize_query(&funder.slug.replace('-', " "));
            (!name.is_empty() && self.contains(&name)) || (!slug.is_empty() && self.contains(&slug))
        })
    }
}

// ============================================================================
// Trigger vocabularies
// ============================================================================

const HOW_MANY_PROJECTS: &str = "how many projects";
const CARBON_TERMS: &[&str] = &["carbon", "co2", "sequest", "estimate"];
/// Words that turn "impact" into a request for a funder document
const IMPACT_DOCUMENT_WORDS: &[&str] = &["summary", "report", "story", "stories"];
const PRACTICE_TERMS: &[&str] = &["practice", "common", "popular", "compost", "cover crop", "grazing"];
const COMPOST_QUALIFIERS: &[&str] = &["project", "over", "acre", "50"];
const FUNDER_TERMS: &[&str] = &["funder", "partner"];
const GRANT_TERMS: &[&str] = &["grant", "fund", "money", "deploy", "budget"];
const AVAILABILITY_TERMS: &[&str] = &["available", "availability", "listed", "private", "conversation"];

// ============================================================================
// Predicates
// ============================================================================

fn is_state_breakdown(ctx: &QueryContext<'_>) -> bool {
    ctx.contains(HOW_MANY_PROJECTS) || ctx.mentioned_state().is_some()
}

fn is_carbon_impact(ctx: &QueryContext<'_>) -> bool {
    if ctx.contains_any(CARBON_TERMS) {
        return true;
    }
    let q = ctx.normalized.as_str();
    q.match_indices("impact").any(|(i, m)| {
        let rest = q[i + m.len()..].trim_start();
        !IMPACT_DOCUMENT_WORDS.iter().any(|w| rest.starts_with(w))
    })
}

fn is_compost_filter(ctx: &QueryContext<'_>) -> bool {
    ctx.contains("compost") && ctx.contains_any(COMPOST_QUALIFIERS)
}

fn is_practice_frequency(ctx: &QueryContext<'_>) -> bool {
    ctx.contains_any(PRACTICE_TERMS)
}

fn is_funder_lookup(ctx: &QueryContext<'_>) -> bool {
    ctx.mentioned_funder().is_some()
        || ctx.contains_any(FUNDER_TERMS)
        || ctx
            .config
            .brand_fragments
            .iter()
            .any(|fragment| !fragment.is_empty() && ctx.contains(&fragment.to_lowercase()))
}

fn is_grant_fund(ctx: &QueryContext<'_>) -> bool {
    ctx.contains_any(GRANT_TERMS)
}

fn is_availability(ctx: &QueryContext<'_>) -> bool {
    ctx.contains_any(AVAILABILITY_TERMS)
}

fn always(_ctx: &QueryContext<'_>) -> bool {
    true
}

// ============================================================================
// Priority table
// ============================================================================

/// A `(predicate, handler)` pair in the priority table
pub struct IntentRule {
    pub intent: Intent,
    pub matches: fn(&QueryContext<'_>) -> bool,
    pub answer: fn(&QueryContext<'_>) -> QueryResult,
}

/// Evaluated top to bottom; first match wins.
///
/// compost-filter sits directly above practice-frequency: every compost
/// query also satisfies the practice predicate, so the refinement has to be
/// tested first or it could never fire.
pub static INTENT_RULES: [IntentRule; 7] = [
    IntentRule {
        intent: Intent::StateBreakdown,
        matches: is_state_breakdown,
        answer: state_breakdown::answer,
    },
    IntentRule {
        intent: Intent::CarbonImpact,
        matches: is_carbon_impact,
        answer: carbon_impact::answer,
    },
    IntentRule {
        intent: Intent::CompostFilter,
        matches: is_compost_filter,
        answer: compost_filter::answer,
    },
    IntentRule {
        intent: Intent::PracticeFrequency,
        matches: is_practice_frequency,
        answer: practice_frequency::answer,
    },
    IntentRule {
        intent: Intent::FunderLookup,
        matches: is_funder_lookup,
        answer: funder_lookup::answer,
    },
    IntentRule {
        intent: Intent::GrantFund,
        matches: is_grant_fund,
        answer: grant_fund::answer,
    },
    IntentRule {
        intent: Intent::Availability,
        matches: is_availability,
        answer: availability::answer,
    },
];

/// Used when no rule in `INTENT_RULES` matches
pub static FALLBACK_RULE: IntentRule = IntentRule {
    intent: Intent::DefaultSummary,
    matches: always,
    answer: default_summary::answer,
};

/// Pick the rule that answers this query
pub fn resolve(ctx: &QueryContext<'_>) -> &'static IntentRule {
    INTENT_RULES
        .iter()
        .find(|rule| (rule.matches)(ctx))
        .unwrap_or(&FALLBACK_RULE)
}

/// Intent identifier for this query
pub fn classify(ctx: &QueryContext<'_>) -> Intent {
    resolve(ctx).intent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::CometEstimate;
    use chrono::NaiveDate;

    fn funder(name: &str, slug: &str) -> Funder {
        Funder {
            id: slug.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            description: String::new(),
            partnership_start: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            contribution_total: 250_000.0,
            regions: vec!["OR".to_string()],
            projects_supported: 12,
            acres_impacted: 1_000.0,
            practice_breakdown: Default::default(),
            carbon_impact: CometEstimate::new(100.0, 200.0),
        }
    }

    fn intent_of(query: &str) -> Intent {
        let config = EngineConfig::default();
        let funders = vec![funder("Golden State Growers Fund", "golden-state-growers-fund")];
        classify(&QueryContext::new(query, &[], &funders, &config))
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Bob\u{2019}s   Red\tMill  "), "bob's red mill");
        assert_eq!(normalize_query(""), "");
    }

    #[test]
    fn test_state_breakdown_triggers() {
        assert_eq!(intent_of("How many projects in California?"), Intent::StateBreakdown);
        assert_eq!(intent_of("how many projects do we have"), Intent::StateBreakdown);
        assert_eq!(intent_of("grants across new york"), Intent::StateBreakdown);
    }

    #[test]
    fn test_state_outranks_carbon() {
        assert_eq!(intent_of("carbon impact in Colorado"), Intent::StateBreakdown);
    }

    #[test]
    fn test_carbon_triggers() {
        assert_eq!(intent_of("total carbon sequestered"), Intent::CarbonImpact);
        assert_eq!(intent_of("What is our CO2 estimate?"), Intent::CarbonImpact);
        assert_eq!(intent_of("overall impact"), Intent::CarbonImpact);
        assert_eq!(intent_of("sequestration totals"), Intent::CarbonImpact);
    }

    #[test]
    fn test_impact_summary_is_not_carbon() {
        assert_eq!(intent_of("impact summary for golden state growers fund"), Intent::FunderLookup);
    }

    #[test]
    fn test_compost_refinement_precedes_practice_frequency() {
        assert_eq!(intent_of("compost projects over 50 acres"), Intent::CompostFilter);
        assert_eq!(intent_of("compost projects"), Intent::CompostFilter);
        assert_eq!(intent_of("compost"), Intent::PracticeFrequency);
        assert_eq!(intent_of("most popular practices"), Intent::PracticeFrequency);
        assert_eq!(intent_of("cover crop usage"), Intent::PracticeFrequency);
    }

    #[test]
    fn test_funder_triggers() {
        assert_eq!(intent_of("list our funders"), Intent::FunderLookup);
        assert_eq!(intent_of("who are the partners"), Intent::FunderLookup);
        assert_eq!(intent_of("golden state growers fund"), Intent::FunderLookup);
        assert_eq!(intent_of("tell me about bob's"), Intent::FunderLookup);
    }

    #[test]
    fn test_grant_and_availability_triggers() {
        assert_eq!(intent_of("how much money was deployed"), Intent::GrantFund);
        assert_eq!(intent_of("budget breakdown"), Intent::GrantFund);
        assert_eq!(intent_of("which farms are available"), Intent::Availability);
        assert_eq!(intent_of("anything still in conversation"), Intent::Availability);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(intent_of(""), Intent::DefaultSummary);
        assert_eq!(intent_of("   "), Intent::DefaultSummary);
        assert_eq!(intent_of("🌱🌱🌱"), Intent::DefaultSummary);
        assert_eq!(intent_of("?!.,;"), Intent::DefaultSummary);
    }

    #[test]
    fn test_rule_table_order() {
        let order: Vec<&str> = INTENT_RULES.iter().map(|r| r.intent.id()).collect();
        assert_eq!(
            order,
            vec![
                "state-breakdown",
                "carbon-impact",
                "compost-filter",
                "practice-frequency",
                "funder-lookup",
                "grant-fund",
                "availability",
            ]
        );
        assert_eq!(FALLBACK_RULE.intent, Intent::DefaultSummary);
    }
}
