use super::GeographyMembership;
use serde::{Deserialize, Serialize};

/// the nested link sets that results are reported for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeographyTier {
    /// every in-region link
    Region,
    /// links selected as the project
    Project,
    /// links within the project corridor
    Corridor,
}

impl GeographyTier {
    /// tier label used in the `geog` column of summary outputs.
    pub fn label(&self, rsp_id: &str) -> String {
        match self {
            GeographyTier::Region => String::from("region"),
            GeographyTier::Project => format!("project_{rsp_id}"),
            GeographyTier::Corridor => format!("corridor_{rsp_id}"),
        }
    }

    /// label of the all-periods row closing a tier in the activity summary.
    pub fn total_label(&self) -> &'static str {
        match self {
            GeographyTier::Region => "Region Total",
            GeographyTier::Project => "Project Total",
            GeographyTier::Corridor => "Corridor Total",
        }
    }

    /// label used in the `analysis_level` column of the congestion report.
    pub fn analysis_level(&self) -> &'static str {
        match self {
            GeographyTier::Region => "7-county region",
            GeographyTier::Project => "project",
            GeographyTier::Corridor => "corridor",
        }
    }

    pub fn contains(&self, membership: &GeographyMembership) -> bool {
        match self {
            GeographyTier::Region => true,
            GeographyTier::Project => membership.project,
            GeographyTier::Corridor => membership.corridor,
        }
    }
}
