use serde::{Deserialize, Serialize};

/// the geographies a directed link (i, j) belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeographyMembership {
    /// link is part of the project itself
    pub project: bool,
    /// link lies within the project corridor buffer
    pub corridor: bool,
    /// link overlaps an economically disadvantaged area
    pub eda: bool,
    /// daily volume on the link attributable to EDA trips (ejvol)
    pub eda_volume: f64,
}

impl GeographyMembership {
    pub fn merge(&mut self, other: &GeographyMembership) {
        self.project |= other.project;
        self.corridor |= other.corridor;
        self.eda |= other.eda;
        self.eda_volume += other.eda_volume;
    }
}
