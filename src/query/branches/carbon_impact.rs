//! Carbon impact: summed estimate range plus everyday equivalents.

use crate::query::assembler::ResponseBuilder;
use crate::query::branches::{plural, SOURCE_COMET, SOURCE_PROJECTS};
use crate::query::intent::QueryContext;
use crate::query::types::QueryResult;
use crate::records::FarmProject;
use crate::utils::{cars_equivalent, format_carbon_range, format_number, midpoint, trees_equivalent};

/// Portfolio-wide carbon totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonSummary {
    pub project_count: usize,
    pub sum_low: f64,
    pub sum_high: f64,
    pub midpoint: f64,
    pub cars: i64,
    pub trees: i64,
}

/// Sum the low and high bounds independently, then convert the midpoint
pub fn summarize_carbon(projects: &[FarmProject]) -> CarbonSummary {
    let sum_low: f64 = projects.iter().map(|p| p.comet_estimate.low).sum();
    let sum_high: f64 = projects.iter().map(|p| p.comet_estimate.high).sum();
    let mid = midpoint(sum_low, sum_high);

    CarbonSummary {
        project_count: projects.len(),
        sum_low,
        sum_high,
        midpoint: mid,
        cars: cars_equivalent(mid),
        trees: trees_equivalent(mid),
    }
}

pub fn answer(ctx: &QueryContext<'_>) -> QueryResult {
    let summary = summarize_carbon(ctx.projects);

    let mut md = String::with_capacity(384);
    md.push_str(&format!(
        "Across **{}**, estimated sequestration is **{}**.\n\n",
        plural(summary.project_count, "project", "projects"),
        format_carbon_range(summary.sum_low, summary.sum_high)
    ));
    md.push_str(&format!("- Midpoint estimate: **{} tCO2e**\n", format_number(summary.midpoint)));
    md.push_str(&format!(
        "- Equivalent to taking **{} cars** off the road for a year\n",
        format_number(summary.cars as f64)
    ));
    md.push_str(&format!(
        "- Equivalent to **{} tree seedlings** grown for 10 years\n\n",
        format_number(summary.trees as f64)
    ));
    md.push_str("*Ranges come from COMET-Planner; low and high bounds are summed separately.*");

    ResponseBuilder::new(md)
        .source(SOURCE_COMET)
        .source(SOURCE_PROJECTS)
        .action("Model a carbon scenario", "/scenarios")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::query::fixtures::project;
    use crate::records::CometEstimate;
    use approx::assert_relative_eq;

    fn portfolio() -> Vec<FarmProject> {
        let mut a = project("a", "CA", 10.0, 1.0);
        a.comet_estimate = CometEstimate::new(100.0, 300.0);
        let mut b = project("b", "CA", 10.0, 1.0);
        b.comet_estimate = CometEstimate::new(400.0, 1_200.0);
        vec![a, b]
    }

    #[test]
    fn test_bounds_summed_independently() {
        let summary = summarize_carbon(&portfolio());
        assert_relative_eq!(summary.sum_low, 500.0);
        assert_relative_eq!(summary.sum_high, 1_500.0);
        assert_relative_eq!(summary.midpoint, 1_000.0);
        // round(1000 * 0.216), round(1000 * 16.5)
        assert_eq!(summary.cars, 216);
        assert_eq!(summary.trees, 16_500);
    }

    #[test]
    fn test_answer_text() {
        let projects = portfolio();
        let config = EngineConfig::default();
        let result = answer(&QueryContext::new("carbon", &projects, &[], &config));

        assert!(result.answer.contains("Across **2 projects**"));
        assert!(result.answer.contains("**500–1,500 tCO2e**"));
        assert!(result.answer.contains("**1,000 tCO2e**"));
        assert!(result.answer.contains("**216 cars**"));
        assert!(result.answer.contains("**16,500 tree seedlings**"));
        assert_eq!(result.sources.len(), 2);
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = summarize_carbon(&[]);
        assert_eq!(summary.cars, 0);
        assert_eq!(summary.trees, 0);
        assert_relative_eq!(summary.midpoint, 0.0);
    }
}
