use super::VehicleEquivalentVolumes;
use crate::model::TimePeriod;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Time};

/// VDF classes assigned to the interstate/expressway system for safety rates.
const INTERSTATE_VDFS: [i64; 5] = [2, 3, 4, 5, 8];

/// highest area type treated as urban for noise costs. area types 9 and
/// above are the rural remainder, external area and points of entry.
const MAX_URBAN_AREA_TYPE: i64 = 8;

/// one roadway link in one assignment time period, as punched from the
/// network after highway assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub i_node: i64,
    pub j_node: i64,
    pub time_period: TimePeriod,
    pub length: Length,
    pub lanes: i64,
    pub vdf: i64,
    /// capacity zone the link lies in
    pub zone: i64,
    pub area_type: i64,
    /// hourly capacity per lane (vehicle equivalents)
    pub emcap: f64,
    /// congested travel time from assignment
    pub congested_time: Time,
    /// free-flow travel time
    pub free_flow_time: Time,
    pub volumes: VehicleEquivalentVolumes,
}

impl LinkRecord {
    pub fn length_miles(&self) -> f64 {
        self.length.get::<uom::si::length::mile>()
    }

    pub fn lane_miles(&self) -> f64 {
        self.lanes as f64 * self.length_miles()
    }

    /// true when the link's zone falls within the modeled region `[1, zone_ceiling]`.
    pub fn is_in_region(&self, zone_ceiling: i64) -> bool {
        self.zone > 0 && self.zone <= zone_ceiling
    }

    pub fn is_interstate(&self) -> bool {
        INTERSTATE_VDFS.contains(&self.vdf)
    }

    pub fn is_urban(&self) -> bool {
        self.area_type <= MAX_URBAN_AREA_TYPE
    }
}
