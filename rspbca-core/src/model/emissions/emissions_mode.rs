use super::{EmissionsInventory, Pollutant};
use crate::model::parameters::Parameters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// how link emissions are summarized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionsMode {
    /// tons of all four pollutants across the region, monetized into the BCA
    #[default]
    RegionTotals,
    /// grams of CO2e across the region and PM2.5 weighted by each zone's
    /// EDA population share
    EdaWeighted,
}

impl EmissionsMode {
    pub fn required_pollutants(&self) -> &'static [Pollutant] {
        match self {
            EmissionsMode::RegionTotals => &Pollutant::ALL,
            EmissionsMode::EdaWeighted => &[Pollutant::Co2e, Pollutant::Pm25],
        }
    }
}

impl Display for EmissionsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EmissionsMode::RegionTotals => "region_totals",
            EmissionsMode::EdaWeighted => "eda_weighted",
        };
        write!(f, "{s}")
    }
}

/// share of each zone's population living in an economically disadvantaged area.
#[derive(Clone, Debug, Default)]
pub struct EdaZoneShares {
    shares: HashMap<i64, f64>,
}

impl EdaZoneShares {
    pub fn from_rows<I>(rows: I) -> EdaZoneShares
    where
        I: IntoIterator<Item = (i64, f64)>,
    {
        EdaZoneShares {
            shares: rows.into_iter().collect(),
        }
    }

    pub fn share(&self, zone: i64) -> Option<f64> {
        self.shares.get(&zone).copied()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// typical weekday regional emissions in tons, with their monetized value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionEmissions {
    pub geog: String,
    pub vmt: f64,
    pub co2e: f64,
    pub pm: f64,
    pub voc: f64,
    pub nox: f64,
    pub co2e_cost: f64,
    pub pm_cost: f64,
    pub voc_cost: f64,
    pub nox_cost: f64,
    pub total_r_emissions: f64,
}

impl RegionEmissions {
    pub fn new(inventory: &EmissionsInventory, parameters: &Parameters) -> RegionEmissions {
        let tons = |p: Pollutant| inventory.tons(p);
        let cost = |p: Pollutant| parameters.annual_present_value(tons(p) * p.cost_per_ton(parameters));
        let co2e_cost = cost(Pollutant::Co2e);
        let pm_cost = cost(Pollutant::Pm25);
        let voc_cost = cost(Pollutant::Voc);
        let nox_cost = cost(Pollutant::Nox);
        RegionEmissions {
            geog: String::from("region"),
            vmt: inventory.vmt,
            co2e: tons(Pollutant::Co2e),
            pm: tons(Pollutant::Pm25),
            voc: tons(Pollutant::Voc),
            nox: tons(Pollutant::Nox),
            co2e_cost,
            pm_cost,
            voc_cost,
            nox_cost,
            total_r_emissions: co2e_cost + pm_cost + voc_cost + nox_cost,
        }
    }
}

/// typical weekday emissions in grams, PM2.5 weighted to EDA populations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdaWeightedEmissions {
    /// 1 for links inside the region
    pub dist: i64,
    pub vmt: f64,
    pub co2e: f64,
    pub pm: f64,
}

impl EdaWeightedEmissions {
    pub fn new(inventory: &EmissionsInventory) -> EdaWeightedEmissions {
        EdaWeightedEmissions {
            dist: 1,
            vmt: inventory.vmt,
            co2e: inventory.grams(Pollutant::Co2e),
            pm: inventory.eda_pm_grams,
        }
    }
}
