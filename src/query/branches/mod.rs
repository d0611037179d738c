//! Answer Branches
//!
//! One module per intent. Every branch is a pure function of the query
//! context and returns a finished `QueryResult`.

pub mod state_breakdown;
pub mod carbon_impact;
pub mod practice_frequency;
pub mod compost_filter;
pub mod funder_lookup;
pub mod grant_fund;
pub mod availability;
pub mod default_summary;

pub use availability::{count_availability, AvailabilityCounts};
pub use carbon_impact::{summarize_carbon, CarbonSummary};
pub use compost_filter::{filter_compost_projects, ACREAGE_THRESHOLD};
pub use grant_fund::{summarize_grants, FundSourceTotal, GrantSummary};

use crate::records::{FarmProject, Practice};

pub(crate) const SOURCE_PROJECTS: &str = "Farm project records";
pub(crate) const SOURCE_FUNDERS: &str = "Funder partnership records";
pub(crate) const SOURCE_COMET: &str = "USDA COMET-Planner estimates";

/// How many projects use a practice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeCount {
    pub practice: Practice,
    pub count: usize,
}

/// Tally practices across projects, most frequent first
///
/// Each project counts once per distinct practice it carries. Ties keep
/// enumeration order; practices nobody uses are dropped.
pub fn tally_practices<'p>(projects: impl IntoIterator<Item = &'p FarmProject>) -> Vec<PracticeCount> {
    let mut counts = [0usize; Practice::ALL.len()];
    for project in projects {
        for practice in Practice::ALL {
            if project.has_practice(practice) {
                counts[practice.index()] += 1;
            }
        }
    }

    let mut tally: Vec<PracticeCount> = Practice::ALL
        .iter()
        .map(|&practice| PracticeCount {
            practice,
            count: counts[practice.index()],
        })
        .filter(|pc| pc.count > 0)
        .collect();
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally
}

/// "1 project" / "3 projects"
pub(crate) fn plural(count: usize, singular: &str, plural: &str) -> String {
    let word = if count == 1 { singular } else { plural };
    format!("{} {}", crate::utils::format_count(count), word)
}

/// "regional_restoration" -> "Regional Restoration"
pub(crate) fn humanize_tag(tag: &str) -> String {
    let words: Vec<String> = tag
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "Unspecified".to_string()
    } else {
        words.join(" ")
    }
}
