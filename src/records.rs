//! Record Model
//!
//! The two input collections the query engine reads: farm projects and
//! funders. Both deserialize straight from the dashboard's JSON snapshots
//! (camelCase keys, snake_case enum tags) and are never mutated by the engine.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enumerations
// ============================================================================

/// Regenerative-agriculture practice tag
///
/// Declaration order is the canonical enumeration order; it breaks ties
/// whenever practices are ranked by frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Practice {
    CompostApplication,
    CoverCropping,
    ManagedGrazing,
    NoTill,
    ReducedTillage,
    Mulching,
    HedgerowPlanting,
    RiparianRestoration,
    Windbreak,
    Silvopasture,
    NutrientManagement,
    ConservationCropRotation,
}

impl Practice {
    /// All practices in enumeration order
    pub const ALL: [Practice; 12] = [
        Practice::CompostApplication,
        Practice::CoverCropping,
        Practice::ManagedGrazing,
        Practice::NoTill,
        Practice::ReducedTillage,
        Practice::Mulching,
        Practice::HedgerowPlanting,
        Practice::RiparianRestoration,
        Practice::Windbreak,
        Practice::Silvopasture,
        Practice::NutrientManagement,
        Practice::ConservationCropRotation,
    ];

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Practice::CompostApplication => "Compost Application",
            Practice::CoverCropping => "Cover Cropping",
            Practice::ManagedGrazing => "Managed Grazing",
            Practice::NoTill => "No-Till",
            Practice::ReducedTillage => "Reduced Tillage",
            Practice::Mulching => "Mulching",
            Practice::HedgerowPlanting => "Hedgerow Planting",
            Practice::RiparianRestoration => "Riparian Restoration",
            Practice::Windbreak => "Windbreak",
            Practice::Silvopasture => "Silvopasture",
            Practice::NutrientManagement => "Nutrient Management",
            Practice::ConservationCropRotation => "Conservation Crop Rotation",
        }
    }

    /// Position in the enumeration (0-based)
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Whether a project can currently be matched to a new funder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    InConversation,
    Committed,
    Private,
}

impl Availability {
    pub const ALL: [Availability; 4] = [
        Availability::Available,
        Availability::InConversation,
        Availability::Committed,
        Availability::Private,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::InConversation => "In conversation",
            Availability::Committed => "Committed",
            Availability::Private => "Private",
        }
    }
}

/// Position in the grant-to-credit pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStage {
    Granted,
    Implementing,
    Implemented,
    Listed,
    InterestReceived,
    CreditIssued,
    CreditSold,
    Recouped,
}

impl ProjectStage {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStage::Granted => "Granted",
            ProjectStage::Implementing => "Implementing",
            ProjectStage::Implemented => "Implemented",
            ProjectStage::Listed => "Listed",
            ProjectStage::InterestReceived => "Interest received",
            ProjectStage::CreditIssued => "Credit issued",
            ProjectStage::CreditSold => "Credit sold",
            ProjectStage::Recouped => "Recouped",
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// Geographic coordinates (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Where a farm project is located
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// 2-letter state code ("CA")
    pub state: String,
    pub county: String,
    pub coordinates: Coordinates,
}

/// Carbon sequestration estimate range, in tCO2e
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CometEstimate {
    pub low: f64,
    pub high: f64,
}

impl CometEstimate {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// A single grant-funded farm project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmProject {
    pub id: String,
    pub farm_name: String,
    pub location: Location,
    pub practices: Vec<Practice>,
    pub acreage: f64,
    pub grant_amount: f64,
    pub grant_date: NaiveDate,
    pub fund_source: String,
    pub comet_estimate: CometEstimate,
    pub availability: Availability,
    pub stage: ProjectStage,
}

impl FarmProject {
    /// True if the project's practice set contains `practice`
    pub fn has_practice(&self, practice: Practice) -> bool {
        self.practices.contains(&practice)
    }
}

/// A funding partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Funder {
    pub id: String,
    pub name: String,
    /// URL-safe identifier ("bobs-red-mill")
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub partnership_start: NaiveDate,
    pub contribution_total: f64,
    #[serde(default)]
    pub regions: Vec<String>,
    pub projects_supported: u32,
    pub acres_impacted: f64,
    #[serde(default)]
    pub practice_breakdown: FxHashMap<Practice, u32>,
    pub carbon_impact: CometEstimate,
}
