//! Record builders shared by unit tests

use chrono::NaiveDate;

use crate::records::{
    Availability, CometEstimate, Coordinates, FarmProject, Funder, Location, Practice, ProjectStage,
};

pub(crate) fn project(id: &str, state: &str, acreage: f64, grant: f64) -> FarmProject {
    FarmProject {
        id: id.to_string(),
        farm_name: format!("Farm {}", id),
        location: Location {
            state: state.to_string(),
            county: "Test".to_string(),
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        },
        practices: vec![Practice::CompostApplication],
        acreage,
        grant_amount: grant,
        grant_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
        fund_source: "campaign_funds".to_string(),
        comet_estimate: CometEstimate::new(10.0, 20.0),
        availability: Availability::Available,
        stage: ProjectStage::Granted,
    }
}

pub(crate) fn funder(name: &str, slug: &str, contribution: f64, projects: u32) -> Funder {
    Funder {
        id: slug.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: String::new(),
        partnership_start: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
        contribution_total: contribution,
        regions: vec!["OR".to_string(), "CA".to_string()],
        projects_supported: projects,
        acres_impacted: 1_850.0,
        practice_breakdown: Default::default(),
        carbon_impact: CometEstimate::new(900.0, 1_500.0),
    }
}
