use crate::model::parameters::Parameters;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    /// greenhouse gases as CO2 equivalents
    Co2e,
    Pm25,
    Voc,
    Nox,
}

impl Pollutant {
    pub const ALL: [Pollutant; 4] = [
        Pollutant::Co2e,
        Pollutant::Pm25,
        Pollutant::Voc,
        Pollutant::Nox,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// column prefix used in emissions outputs
    pub fn name(&self) -> &'static str {
        match self {
            Pollutant::Co2e => "co2e",
            Pollutant::Pm25 => "pm",
            Pollutant::Voc => "voc",
            Pollutant::Nox => "nox",
        }
    }

    /// dollars per ton emitted
    pub fn cost_per_ton(&self, parameters: &Parameters) -> f64 {
        match self {
            Pollutant::Co2e => parameters.poll_ghg,
            Pollutant::Pm25 => parameters.poll_pm25,
            Pollutant::Voc => parameters.poll_voc,
            Pollutant::Nox => parameters.poll_nox,
        }
    }
}

impl Display for Pollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
