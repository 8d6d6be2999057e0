use super::CostCategory;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// annual present-value dollars by cost category. the total is always
/// derived from the categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub travel_time: f64,
    pub vehicle_operating: f64,
    pub safety: f64,
    pub noise: f64,
    pub reliability: f64,
    pub emissions: f64,
}

impl CostRecord {
    pub fn get(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::TravelTime => self.travel_time,
            CostCategory::VehicleOperating => self.vehicle_operating,
            CostCategory::Safety => self.safety,
            CostCategory::Noise => self.noise,
            CostCategory::Reliability => self.reliability,
            CostCategory::Emissions => self.emissions,
        }
    }

    pub fn total(&self) -> f64 {
        CostCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

impl AddAssign<&CostRecord> for CostRecord {
    fn add_assign(&mut self, rhs: &CostRecord) {
        self.travel_time += rhs.travel_time;
        self.vehicle_operating += rhs.vehicle_operating;
        self.safety += rhs.safety;
        self.noise += rhs.noise;
        self.reliability += rhs.reliability;
        self.emissions += rhs.emissions;
    }
}

impl Add for CostRecord {
    type Output = CostRecord;

    fn add(mut self, rhs: CostRecord) -> Self::Output {
        self += &rhs;
        self
    }
}
