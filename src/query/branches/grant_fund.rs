//! Grant and fund-source breakdown.

use rustc_hash::FxHashMap;

use crate::query::assembler::ResponseBuilder;
use crate::query::branches::{humanize_tag, plural, SOURCE_PROJECTS};
use crate::query::intent::QueryContext;
use crate::query::types::QueryResult;
use crate::records::FarmProject;
use crate::utils::{format_currency_abbrev, safe_average};

/// Grants deployed from one fund source
#[derive(Debug, Clone, PartialEq)]
pub struct FundSourceTotal {
    pub fund_source: String,
    pub count: usize,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrantSummary {
    pub total: f64,
    pub count: usize,
    /// 0.0 when there are no projects
    pub average: f64,
    /// Descending by total, ties by fund-source name
    pub by_source: Vec<FundSourceTotal>,
}

pub fn summarize_grants(projects: &[FarmProject]) -> GrantSummary {
    let total: f64 = projects.iter().map(|p| p.grant_amount).sum();

    let mut groups: FxHashMap<&str, (usize, f64)> = FxHashMap::default();
    for project in projects {
        let entry = groups.entry(project.fund_source.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += project.grant_amount;
    }

    let mut by_source: Vec<FundSourceTotal> = groups
        .into_iter()
        .map(|(source, (count, total))| FundSourceTotal {
            fund_source: source.to_string(),
            count,
            total,
        })
        .collect();
    by_source.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.fund_source.cmp(&b.fund_source))
    });

    GrantSummary {
        total,
        count: projects.len(),
        average: safe_average(total, projects.len()),
        by_source,
    }
}

pub fn answer(ctx: &QueryContext<'_>) -> QueryResult {
    let summary = summarize_grants(ctx.projects);

    let mut md = String::with_capacity(256 + summary.by_source.len() * 48);
    md.push_str(&format!(
        "**{}** in grants deployed across **{}** (average **{}** per project).",
        format_currency_abbrev(summary.total),
        plural(summary.count, "project", "projects"),
        format_currency_abbrev(summary.average)
    ));

    if !summary.by_source.is_empty() {
        md.push_str("\n\n**By fund source:**\n");
        for source in &summary.by_source {
            md.push_str(&format!(
                "- {}: {} ({})\n",
                humanize_tag(&source.fund_source),
                format_currency_abbrev(source.total),
                plural(source.count, "project", "projects")
            ));
        }
    }

    ResponseBuilder::new(md).source(SOURCE_PROJECTS).build()
}
