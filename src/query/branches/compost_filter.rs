//! Compost filter: compost projects, optionally over 50 acres, largest first.

use regex::Regex;
use std::sync::LazyLock;

use crate::query::assembler::ResponseBuilder;
use crate::query::branches::{plural, SOURCE_PROJECTS};
use crate::query::intent::QueryContext;
use crate::query::types::{QueryResult, ResultType};
use crate::records::{FarmProject, Practice};
use crate::utils::{format_count, format_number};

/// Only the literal "50 acre(s)" cue is recognized; other numbers are ignored
pub const ACREAGE_THRESHOLD: f64 = 50.0;

static THRESHOLD_CUE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b50\s*acres?\b").ok());

fn has_threshold_cue(normalized_query: &str) -> bool {
    THRESHOLD_CUE
        .as_ref()
        .is_some_and(|re| re.is_match(normalized_query))
}

/// Compost projects, optionally restricted to `acreage > 50`, sorted by
/// descending acreage (ties keep input order)
pub fn filter_compost_projects(projects: &[FarmProject], over_threshold: bool) -> Vec<&FarmProject> {
    let mut matches: Vec<&FarmProject> = projects
        .iter()
        .filter(|p| p.has_practice(Practice::CompostApplication))
        .filter(|p| !over_threshold || p.acreage > ACREAGE_THRESHOLD)
        .collect();
    matches.sort_by(|a, b| b.acreage.total_cmp(&a.acreage));
    matches
}

pub fn answer(ctx: &QueryContext<'_>) -> QueryResult {
    let over_threshold = has_threshold_cue(&ctx.normalized);
    let matches = filter_compost_projects(ctx.projects, over_threshold);
    let qualifier = if over_threshold {
        format!(" over {} acres", format_number(ACREAGE_THRESHOLD))
    } else {
        String::new()
    };

    let builder = if matches.is_empty() {
        ResponseBuilder::new(format!("No compost projects{} found.", qualifier))
    } else {
        let limit = ctx.config.compost_list_limit;
        let mut md = String::with_capacity(64 + matches.len().min(limit) * 64);
        md.push_str(&format!(
            "Found **{}**{}:\n\n",
            plural(matches.len(), "compost project", "compost projects"),
            qualifier
        ));
        for project in matches.iter().take(limit) {
            md.push_str(&format!(
                "- **{}** ({}, {}): {} acres\n",
                project.farm_name,
                project.location.county,
                project.location.state,
                format_number(project.acreage)
            ));
        }
        if matches.len() > limit {
            md.push_str(&format!("\n*...and {} more*", format_count(matches.len() - limit)));
        }
        ResponseBuilder::new(md)
    };

    builder
        .source(SOURCE_PROJECTS)
        .result_type(ResultType::List)
        .action("Open the compost calculator", "/calculator/compost")
        .build()
}
