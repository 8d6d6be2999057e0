use super::RunModeError;
use crate::model::geography::GeographyTier;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// RSP identifiers containing this marker are no-build scenarios.
pub const NO_BUILD_MARKER: &str = "RSP00";

/// what kind of project a scenario evaluates, which decides the geography
/// tiers that are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RspMode {
    /// a highway project selected with a select-link file
    Roadway,
    /// a transit project selected with a select-line file
    Transit,
    /// the baseline network with no project
    NoBuild,
}

impl RspMode {
    /// decides the mode from the number of select-link and select-line files
    /// found for the run. exactly one file of one kind is allowed.
    pub fn from_selection_counts(
        rsp_id: &str,
        select_links: usize,
        select_lines: usize,
    ) -> Result<RspMode, RunModeError> {
        let no_build = RspMode::is_no_build_id(rsp_id);
        match (select_links, select_lines) {
            (0, 0) => Ok(RspMode::NoBuild),
            (links, lines) if no_build => Err(RunModeError::NoBuildWithSelection {
                rsp_id: rsp_id.to_string(),
                links,
                lines,
            }),
            (1, 0) => Ok(RspMode::Roadway),
            (0, 1) => Ok(RspMode::Transit),
            (links, lines) => Err(RunModeError::AmbiguousSelection { links, lines }),
        }
    }

    pub fn is_no_build_id(rsp_id: &str) -> bool {
        rsp_id.contains(NO_BUILD_MARKER)
    }

    /// tiers reported for this mode, region first. corridors are defined
    /// around roadway projects only.
    pub fn tiers(&self) -> Vec<GeographyTier> {
        match self {
            RspMode::Roadway => vec![
                GeographyTier::Region,
                GeographyTier::Project,
                GeographyTier::Corridor,
            ],
            RspMode::Transit | RspMode::NoBuild => vec![GeographyTier::Region],
        }
    }
}

impl Display for RspMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RspMode::Roadway => "roadway",
            RspMode::Transit => "transit",
            RspMode::NoBuild => "no-build",
        };
        write!(f, "{s}")
    }
}
