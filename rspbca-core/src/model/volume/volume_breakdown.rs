use super::VehicleClass;
use crate::model::network::VehicleEquivalentVolumes;
use serde::{Deserialize, Serialize};

/// passenger-car equivalents per medium truck
const MEDIUM_TRUCK_EQUIVALENTS: f64 = 2.0;
/// passenger-car equivalents per heavy truck
const HEAVY_TRUCK_EQUIVALENTS: f64 = 3.0;
/// passenger-car equivalents per bus
const BUS_EQUIVALENTS: f64 = 3.0;

/// link volumes converted from vehicle equivalents into vehicles, by class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeBreakdown {
    pub sov: f64,
    pub hov2: f64,
    pub hov3: f64,
    pub pvt_vehicles: f64,
    pub bplate: f64,
    pub ltruck: f64,
    /// short-haul medium trucks
    pub mtruck: f64,
    /// short-haul heavy trucks
    pub htruck: f64,
    pub mtrucklh: f64,
    pub htrucklh: f64,
    pub bus: f64,
    /// total vehicle-equivalent volume, the numerator of the v/c ratio
    pub volau: f64,
    /// all vehicles, counting short-haul trucks only
    pub vehicles: f64,
}

impl VolumeBreakdown {
    pub fn from_equivalents(veq: &VehicleEquivalentVolumes) -> VolumeBreakdown {
        let (mtruck_veq, mtrucklh_veq) = split_long_haul(veq.medium_truck, veq.medium_long_haul);
        let (htruck_veq, htrucklh_veq) = split_long_haul(veq.heavy_truck, veq.heavy_long_haul);

        let sov = veq.sov;
        let hov2 = veq.hov2;
        let hov3 = veq.hov3;
        let bplate = veq.bplate;
        let ltruck = veq.light_truck;
        let mtruck = mtruck_veq / MEDIUM_TRUCK_EQUIVALENTS;
        let htruck = htruck_veq / HEAVY_TRUCK_EQUIVALENTS;
        let bus = veq.bus / BUS_EQUIVALENTS;

        VolumeBreakdown {
            sov,
            hov2,
            hov3,
            pvt_vehicles: sov + hov2 + hov3,
            bplate,
            ltruck,
            mtruck,
            htruck,
            mtrucklh: mtrucklh_veq / MEDIUM_TRUCK_EQUIVALENTS,
            htrucklh: htrucklh_veq / HEAVY_TRUCK_EQUIVALENTS,
            bus,
            volau: veq.total(),
            vehicles: sov + hov2 + hov3 + bplate + ltruck + mtruck + htruck + bus,
        }
    }

    pub fn get(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Sov => self.sov,
            VehicleClass::Hov2 => self.hov2,
            VehicleClass::Hov3 => self.hov3,
            VehicleClass::PvtVehicles => self.pvt_vehicles,
            VehicleClass::Bplate => self.bplate,
            VehicleClass::Ltruck => self.ltruck,
            VehicleClass::Mtruck => self.mtruck,
            VehicleClass::Htruck => self.htruck,
            VehicleClass::Bus => self.bus,
            VehicleClass::Mtrucklh => self.mtrucklh,
            VehicleClass::Htrucklh => self.htrucklh,
        }
    }
}

/// splits a truck volume into (short-haul, long-haul). the long-haul share is
/// capped at the total and neither part is ever negative.
pub fn split_long_haul(total: f64, long_haul: f64) -> (f64, f64) {
    let long_haul = long_haul.min(total).max(0.0);
    let short_haul = (total - long_haul).max(0.0);
    (short_haul, long_haul)
}
