//! Practice frequency: every practice ranked by how many projects use it.

use crate::query::assembler::ResponseBuilder;
use crate::query::branches::{plural, tally_practices, SOURCE_PROJECTS};
use crate::query::intent::QueryContext;
use crate::query::types::{QueryResult, ResultType};
use crate::utils::percentage;

pub fn answer(ctx: &QueryContext<'_>) -> QueryResult {
    let total = ctx.projects.len();
    let tally = tally_practices(ctx.projects);

    if tally.is_empty() {
        return ResponseBuilder::new("No practices have been recorded yet.")
            .source(SOURCE_PROJECTS)
            .result_type(ResultType::List)
            .build();
    }

    let mut md = String::with_capacity(64 + tally.len() * 48);
    md.push_str(&format!(
        "**Most common practices** across **{}**:\n\n",
        plural(total, "project", "projects")
    ));
    for pc in &tally {
        md.push_str(&format!(
            "- {}: {} ({}%)\n",
            pc.practice.label(),
            plural(pc.count, "project", "projects"),
            percentage(pc.count, total)
        ));
    }

    ResponseBuilder::new(md)
        .source(SOURCE_PROJECTS)
        .result_type(ResultType::List)
        .build()
}
