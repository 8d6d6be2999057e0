use crate::model::parameters::Parameters;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// vehicle classes that link activity is reported for. `PvtVehicles` is the
/// union of the three auto classes; `Mtrucklh` and `Htrucklh` are the
/// long-haul portions split off of the medium and heavy truck volumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Sov,
    Hov2,
    Hov3,
    PvtVehicles,
    Bplate,
    Ltruck,
    Mtruck,
    Htruck,
    Bus,
    Mtrucklh,
    Htrucklh,
}

impl VehicleClass {
    /// all classes in reporting order.
    pub const ALL: [VehicleClass; 11] = [
        VehicleClass::Sov,
        VehicleClass::Hov2,
        VehicleClass::Hov3,
        VehicleClass::PvtVehicles,
        VehicleClass::Bplate,
        VehicleClass::Ltruck,
        VehicleClass::Mtruck,
        VehicleClass::Htruck,
        VehicleClass::Bus,
        VehicleClass::Mtrucklh,
        VehicleClass::Htrucklh,
    ];

    /// classes carrying persons, which also report person miles and hours.
    pub const AUTO: [VehicleClass; 4] = [
        VehicleClass::Sov,
        VehicleClass::Hov2,
        VehicleClass::Hov3,
        VehicleClass::PvtVehicles,
    ];

    pub const FREIGHT: [VehicleClass; 7] = [
        VehicleClass::Bplate,
        VehicleClass::Ltruck,
        VehicleClass::Mtruck,
        VehicleClass::Htruck,
        VehicleClass::Bus,
        VehicleClass::Mtrucklh,
        VehicleClass::Htrucklh,
    ];

    /// position of this class in [`VehicleClass::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            VehicleClass::Sov => "sov",
            VehicleClass::Hov2 => "hov2",
            VehicleClass::Hov3 => "hov3",
            VehicleClass::PvtVehicles => "pvt_vehicles",
            VehicleClass::Bplate => "bplate",
            VehicleClass::Ltruck => "ltruck",
            VehicleClass::Mtruck => "mtruck",
            VehicleClass::Htruck => "htruck",
            VehicleClass::Bus => "bus",
            VehicleClass::Mtrucklh => "mtrucklh",
            VehicleClass::Htrucklh => "htrucklh",
        }
    }

    pub fn is_auto(&self) -> bool {
        VehicleClass::AUTO.contains(self)
    }

    /// persons per vehicle for the single-class auto modes. other classes
    /// (including the aggregate `PvtVehicles`) do not carry an occupancy.
    pub fn occupancy(&self, parameters: &Parameters) -> Option<f64> {
        match self {
            VehicleClass::Sov => Some(1.0),
            VehicleClass::Hov2 => Some(2.0),
            VehicleClass::Hov3 => Some(parameters.occupancy_hov3),
            _ => None,
        }
    }
}

impl Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
