//! Funder lookup: one funder's profile, or the full partner list.

use crate::query::assembler::ResponseBuilder;
use crate::query::branches::{plural, SOURCE_FUNDERS};
use crate::query::intent::QueryContext;
use crate::query::types::{QueryResult, ResultType};
use crate::records::Funder;
use crate::utils::{format_carbon_range, format_currency_abbrev, format_month_year, format_number};

pub fn answer(ctx: &QueryContext<'_>) -> QueryResult {
    match ctx.mentioned_funder() {
        Some(funder) => profile(ctx, funder),
        None => list_all(ctx.funders),
    }
}

fn profile(ctx: &QueryContext<'_>, funder: &Funder) -> QueryResult {
    let regions = if funder.regions.is_empty() {
        "None listed".to_string()
    } else {
        funder.regions.join(", ")
    };

    let mut md = String::with_capacity(512);
    md.push_str(&format!(
        "**{}** has partnered with us since **{}**.\n\n",
        funder.name,
        format_month_year(funder.partnership_start)
    ));
    md.push_str(&format!(
        "- Total contribution: **{}**\n",
        format_currency_abbrev(funder.contribution_total)
    ));
    md.push_str(&format!(
        "- Projects supported: **{}**\n",
        format_number(f64::from(funder.projects_supported))
    ));
    md.push_str(&format!("- Acres impacted: **{}**\n", format_number(funder.acres_impacted)));
    md.push_str(&format!("- Regions: {}\n", regions));
    md.push_str(&format!(
        "- Carbon impact: **{}**\n",
        format_carbon_range(funder.carbon_impact.low, funder.carbon_impact.high)
    ));

    let description = funder.description.trim();
    if !description.is_empty() && !description.contains('\n') {
        md.push_str(&format!("\n*{}*", description));
    }

    ResponseBuilder::new(md)
        .source(format!("Funder profile: {}", funder.name))
        .source(SOURCE_FUNDERS)
        .result_type(ResultType::Narrative)
        .action("View impact story", ctx.config.story_path(&funder.slug))
        .build()
}

fn list_all(funders: &[Funder]) -> QueryResult {
    if funders.is_empty() {
        return ResponseBuilder::new("No funder partners are on record yet.")
            .source(SOURCE_FUNDERS)
            .result_type(ResultType::List)
            .build();
    }

    let mut md = String::with_capacity(64 + funders.len() * 64);
    md.push_str(&format!(
        "**{}**:\n\n",
        plural(funders.len(), "funder partner", "funder partners")
    ));
    // Given order, not re-sorted
    for funder in funders {
        md.push_str(&format!(
            "- **{}**: {} across {}\n",
            funder.name,
            format_currency_abbrev(funder.contribution_total),
            plural(funder.projects_supported as usize, "project", "projects")
        ));
    }

    ResponseBuilder::new(md)
        .source(SOURCE_FUNDERS)
        .result_type(ResultType::List)
        .build()
}
