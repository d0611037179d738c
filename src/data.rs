//! Data Loading and Management
//!
//! Loads the farm-project and funder snapshots the dashboard ships as static
//! JSON. The engine only ever borrows these slices; a `Dataset` is the
//! convenience owner used by the binaries and the HTTP server.

use crate::error::DataError;
use crate::records::{FarmProject, Funder};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// One immutable snapshot of projects and funders
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    projects: Vec<FarmProject>,
    funders: Vec<Funder>,
}

impl Dataset {
    pub const PROJECTS_FILE: &'static str = "projects.json";
    pub const FUNDERS_FILE: &'static str = "funders.json";

    /// Load `projects.json` and `funders.json` from a snapshot directory
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        tracing::info!("Loading snapshot from {:?}", dir);

        let projects: Vec<FarmProject> = read_json(&dir.join(Self::PROJECTS_FILE))?;
        let funders: Vec<Funder> = read_json(&dir.join(Self::FUNDERS_FILE))?;

        let dataset = Self::from_records(projects, funders)?;
        tracing::info!(
            projects = dataset.projects.len(),
            funders = dataset.funders.len(),
            "Snapshot loaded"
        );
        Ok(dataset)
    }

    /// Build a dataset from in-memory records, validating each one
    pub fn from_records(projects: Vec<FarmProject>, funders: Vec<Funder>) -> Result<Self, DataError> {
        for project in &projects {
            validate_project(project)?;
        }
        for funder in &funders {
            validate_funder(funder)?;
        }
        Ok(Self { projects, funders })
    }

    pub fn projects(&self) -> &[FarmProject] {
        &self.projects
    }

    pub fn funders(&self) -> &[Funder] {
        &self.funders
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let contents = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn invalid(id: &str, reason: impl Into<String>) -> DataError {
    DataError::InvalidRecord {
        id: id.to_string(),
        reason: reason.into(),
    }
}

/// Check the record-level invariants of a farm project
pub fn validate_project(project: &FarmProject) -> Result<(), DataError> {
    if project.practices.is_empty() {
        return Err(invalid(&project.id, "practices must not be empty"));
    }
    let estimate = project.comet_estimate;
    if !(estimate.low <= estimate.high) {
        return Err(invalid(
            &project.id,
            format!("cometEstimate.low ({}) exceeds high ({})", estimate.low, estimate.high),
        ));
    }
    if !(project.acreage >= 0.0) {
        return Err(invalid(&project.id, "acreage must be non-negative"));
    }
    if !(project.grant_amount >= 0.0) {
        return Err(invalid(&project.id, "grantAmount must be non-negative"));
    }
    Ok(())
}

/// Check the record-level invariants of a funder
pub fn validate_funder(funder: &Funder) -> Result<(), DataError> {
    if funder.name.trim().is_empty() {
        return Err(invalid(&funder.id, "name must not be empty"));
    }
    if funder.slug.trim().is_empty() {
        return Err(invalid(&funder.id, "slug must not be empty"));
    }
    if !(funder.carbon_impact.low <= funder.carbon_impact.high) {
        return Err(invalid(&funder.id, "carbonImpact.low exceeds high"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Availability, CometEstimate, Coordinates, Location, Practice, ProjectStage};
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn project(id: &str) -> FarmProject {
        FarmProject {
            id: id.to_string(),
            farm_name: "Test Farm".to_string(),
            location: Location {
                state: "CA".to_string(),
                county: "Yolo".to_string(),
                coordinates: Coordinates { lat: 38.7, lng: -121.8 },
            },
            practices: vec![Practice::CompostApplication],
            acreage: 40.0,
            grant_amount: 10_000.0,
            grant_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            fund_source: "campaign_funds".to_string(),
            comet_estimate: CometEstimate::new(10.0, 20.0),
            availability: Availability::Available,
            stage: ProjectStage::Granted,
        }
    }

    fn sample_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample")
    }

    #[test]
    fn test_load_sample_snapshot() {
        let dataset = Dataset::load(sample_dir()).unwrap();
        assert!(!dataset.projects().is_empty());
        assert!(!dataset.funders().is_empty());
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let err = Dataset::load("/nonexistent/snapshot").unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn test_inverted_estimate_rejected() {
        let mut bad = project("p-bad");
        bad.comet_estimate = CometEstimate::new(50.0, 10.0);

        let err = Dataset::from_records(vec![project("p-ok"), bad], vec![]).unwrap_err();
        match err {
            DataError::InvalidRecord { id, reason } => {
                assert_eq!(id, "p-bad");
                assert!(reason.contains("cometEstimate"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_practices_rejected() {
        let mut bad = project("p-empty");
        bad.practices.clear();
        assert!(Dataset::from_records(vec![bad], vec![]).is_err());
    }
}
