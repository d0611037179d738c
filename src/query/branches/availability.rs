//! Availability breakdown across the four matching states.

use crate::query::assembler::ResponseBuilder;
use crate::query::branches::{plural, SOURCE_PROJECTS};
use crate::query::intent::QueryContext;
use crate::query::types::QueryResult;
use crate::records::{Availability, FarmProject};
use crate::utils::{format_count, percentage};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityCounts {
    counts: [usize; Availability::ALL.len()],
    pub total: usize,
}

impl AvailabilityCounts {
    pub fn count(&self, availability: Availability) -> usize {
        self.counts[availability as usize]
    }

    /// Rounded share of `available` projects; 0 for an empty dataset
    pub fn available_percentage(&self) -> u64 {
        percentage(self.count(Availability::Available), self.total)
    }
}

pub fn count_availability(projects: &[FarmProject]) -> AvailabilityCounts {
    let mut counts = AvailabilityCounts::default();
    for project in projects {
        counts.counts[project.availability as usize] += 1;
    }
    counts.total = projects.len();
    counts
}

pub fn answer(ctx: &QueryContext<'_>) -> QueryResult {
    let counts = count_availability(ctx.projects);

    let mut md = String::with_capacity(256);
    md.push_str(&format!(
        "**{} of {}** ({}%) are available for new funders.\n\n",
        format_count(counts.count(Availability::Available)),
        plural(counts.total, "project", "projects"),
        counts.available_percentage()
    ));
    for status in Availability::ALL {
        md.push_str(&format!(
            "- {}: {}\n",
            status.label(),
            format_count(counts.count(status))
        ));
    }

    ResponseBuilder::new(md)
        .source(SOURCE_PROJECTS)
        .action("Browse available projects", "/projects?availability=available")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::query::fixtures::project;

    fn with_status(id: &str, availability: Availability) -> FarmProject {
        let mut p = project(id, "CA", 10.0, 1.0);
        p.availability = availability;
        p
    }

    #[test]
    fn test_counts_per_status() {
        let projects = vec![
            with_status("a", Availability::Available),
            with_status("b", Availability::Available),
            with_status("c", Availability::Committed),
            with_status("d", Availability::Private),
            with_status("e", Availability::InConversation),
            with_status("f", Availability::Available),
        ];
        let counts = count_availability(&projects);
        assert_eq!(counts.count(Availability::Available), 3);
        assert_eq!(counts.count(Availability::Committed), 1);
        assert_eq!(counts.total, 6);
        assert_eq!(counts.available_percentage(), 50);
    }

    #[test]
    fn test_empty_dataset() {
        let counts = count_availability(&[]);
        assert_eq!(counts.available_percentage(), 0);

        let config = EngineConfig::default();
        let result = answer(&QueryContext::new("available", &[], &[], &config));
        assert!(result.answer.starts_with("**0 of 0 projects** (0%)"));
        assert!(result.has_action_target("/projects?availability=available"));
    }

    #[test]
    fn test_rounded_percentage() {
        let projects = vec![
            with_status("a", Availability::Available),
            with_status("b", Availability::Private),
            with_status("c", Availability::Private),
        ];
        assert_eq!(count_availability(&projects).available_percentage(), 33);
    }
}
