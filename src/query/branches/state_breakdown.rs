//! State breakdown: one state in detail, or project counts for every state.

use rustc_hash::FxHashMap;

use crate::query::assembler::ResponseBuilder;
use crate::query::branches::{plural, tally_practices, SOURCE_PROJECTS};
use crate::query::intent::QueryContext;
use crate::query::types::{QueryResult, ResultType};
use crate::records::{Availability, FarmProject};
use crate::utils::states::{state_name, UsState};
use crate::utils::{format_count, format_currency_abbrev, format_number};

pub fn answer(ctx: &QueryContext<'_>) -> QueryResult {
    match ctx.mentioned_state() {
        Some(state) => single_state(ctx, state),
        None => all_states(ctx),
    }
}

fn single_state(ctx: &QueryContext<'_>, state: &UsState) -> QueryResult {
    let projects: Vec<&FarmProject> = ctx
        .projects
        .iter()
        .filter(|p| p.location.state.trim().eq_ignore_ascii_case(state.code))
        .collect();

    let action_label = format!("View {} on the map", state.name);
    let action_target = format!("/map?state={}", state.code);

    if projects.is_empty() {
        return ResponseBuilder::new(format!("There are no projects in **{}** yet.", state.name))
            .source(SOURCE_PROJECTS)
            .action(action_label, action_target)
            .build();
    }

    let total_acres: f64 = projects.iter().map(|p| p.acreage).sum();
    let total_grants: f64 = projects.iter().map(|p| p.grant_amount).sum();
    let available = projects
        .iter()
        .filter(|p| p.availability == Availability::Available)
        .count();
    let top_practices: Vec<String> = tally_practices(projects.iter().copied())
        .into_iter()
        .take(ctx.config.top_practice_count)
        .map(|pc| format!("{} ({})", pc.practice.label(), pc.count))
        .collect();

    let mut md = String::with_capacity(256);
    md.push_str(&format!(
        "**{} ({})** has **{}** covering **{} acres**.\n\n",
        state.name,
        state.code,
        plural(projects.len(), "project", "projects"),
        format_number(total_acres)
    ));
    md.push_str(&format!("- Total grants: **{}**\n", format_currency_abbrev(total_grants)));
    md.push_str(&format!("- Available for new funders: **{}**\n", format_count(available)));
    if !top_practices.is_empty() {
        md.push_str(&format!("- Top practices: {}\n", top_practices.join(", ")));
    }

    ResponseBuilder::new(md)
        .source(SOURCE_PROJECTS)
        .result_type(ResultType::Data)
        .action(action_label, action_target)
        .build()
}

fn all_states(ctx: &QueryContext<'_>) -> QueryResult {
    let mut by_state: FxHashMap<String, usize> = FxHashMap::default();
    for project in ctx.projects {
        *by_state
            .entry(project.location.state.trim().to_uppercase())
            .or_default() += 1;
    }

    let mut counts: Vec<(String, usize)> = by_state.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut md = String::with_capacity(64 + counts.len() * 32);
    md.push_str(&format!(
        "**{}** across **{}**",
        plural(ctx.projects.len(), "project", "projects"),
        plural(counts.len(), "state", "states")
    ));

    if counts.is_empty() {
        md.push('.');
    } else {
        md.push_str(":\n\n");
        for (code, count) in &counts {
            let label = match state_name(code) {
                Some(name) => format!("{} ({})", name, code),
                None => code.clone(),
            };
            md.push_str(&format!("- {}: {}\n", label, format_count(*count)));
        }
    }

    ResponseBuilder::new(md)
        .source(SOURCE_PROJECTS)
        .result_type(ResultType::List)
        .build()
}
