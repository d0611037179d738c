//! Portfolio overview used when no other intent matches.

use rustc_hash::FxHashSet;

use crate::query::assembler::ResponseBuilder;
use crate::query::branches::{plural, SOURCE_FUNDERS, SOURCE_PROJECTS};
use crate::query::intent::QueryContext;
use crate::query::types::QueryResult;
use crate::utils::{format_currency_abbrev, format_number};

const PROMPT: &str =
    "*Try asking about carbon impact, practices, funders, grants, availability, or a specific state.*";

pub fn answer(ctx: &QueryContext<'_>) -> QueryResult {
    let states: FxHashSet<String> = ctx
        .projects
        .iter()
        .map(|p| p.location.state.trim().to_uppercase())
        .collect();
    let acres: f64 = ctx.projects.iter().map(|p| p.acreage).sum();
    let grants: f64 = ctx.projects.iter().map(|p| p.grant_amount).sum();

    let md = format!(
        "Tracking **{}** across **{}**, covering **{} acres** with **{}** in grants from **{}**.\n\n{}",
        plural(ctx.projects.len(), "project", "projects"),
        plural(states.len(), "state", "states"),
        format_number(acres),
        format_currency_abbrev(grants),
        plural(ctx.funders.len(), "funder", "funders"),
        PROMPT
    );

    ResponseBuilder::new(md)
        .source(SOURCE_PROJECTS)
        .source(SOURCE_FUNDERS)
        .build()
}
