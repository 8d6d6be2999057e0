use crate::model::{activity::ActivityMetrics, volume::VehicleClass};
use serde::{Deserialize, Serialize};

/// share of auto travel made by motorcycles
const MOTORCYCLE_SHARE: f64 = 0.015;
const NON_MOTORCYCLE_SHARE: f64 = 0.985;
/// split of non-motorcycle auto travel between passenger cars and passenger trucks
const PASSENGER_CAR_SHARE: f64 = 0.55;
const PASSENGER_TRUCK_SHARE: f64 = 0.45;
/// split of heavy truck travel between short and long-haul combination trucks
const COMBINATION_SHORT_HAUL_SHARE: f64 = 0.06;
const COMBINATION_LONG_HAUL_SHARE: f64 = 0.94;

/// MOVES vehicle source types that model vehicle classes are binned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceType {
    Motorcycle,
    PassengerCar,
    PassengerTruck,
    LightCommercialTruck,
    TransitBus,
    SingleUnitShortHaulTruck,
    SingleUnitLongHaulTruck,
    CombinationShortHaulTruck,
    CombinationLongHaulTruck,
}

impl SourceType {
    pub const ALL: [SourceType; 9] = [
        SourceType::Motorcycle,
        SourceType::PassengerCar,
        SourceType::PassengerTruck,
        SourceType::LightCommercialTruck,
        SourceType::TransitBus,
        SourceType::SingleUnitShortHaulTruck,
        SourceType::SingleUnitLongHaulTruck,
        SourceType::CombinationShortHaulTruck,
        SourceType::CombinationLongHaulTruck,
    ];

    /// MOVES sourceTypeID
    pub fn id(&self) -> i64 {
        match self {
            SourceType::Motorcycle => 11,
            SourceType::PassengerCar => 21,
            SourceType::PassengerTruck => 31,
            SourceType::LightCommercialTruck => 32,
            SourceType::TransitBus => 42,
            SourceType::SingleUnitShortHaulTruck => 52,
            SourceType::SingleUnitLongHaulTruck => 53,
            SourceType::CombinationShortHaulTruck => 61,
            SourceType::CombinationLongHaulTruck => 62,
        }
    }

    /// the portion of a link's VMT attributed to this source type.
    pub fn vmt(&self, activity: &ActivityMetrics) -> f64 {
        let vmt = |class: VehicleClass| activity.class(class).vmt;
        let autos = vmt(VehicleClass::PvtVehicles);
        let heavy = vmt(VehicleClass::Htruck) + vmt(VehicleClass::Htrucklh);
        match self {
            SourceType::Motorcycle => autos * MOTORCYCLE_SHARE,
            SourceType::PassengerCar => autos * NON_MOTORCYCLE_SHARE * PASSENGER_CAR_SHARE,
            SourceType::PassengerTruck => autos * NON_MOTORCYCLE_SHARE * PASSENGER_TRUCK_SHARE,
            SourceType::LightCommercialTruck => vmt(VehicleClass::Bplate),
            SourceType::TransitBus => vmt(VehicleClass::Bus),
            SourceType::SingleUnitShortHaulTruck => {
                vmt(VehicleClass::Ltruck) + vmt(VehicleClass::Mtruck)
            }
            SourceType::SingleUnitLongHaulTruck => vmt(VehicleClass::Mtrucklh),
            SourceType::CombinationShortHaulTruck => heavy * COMBINATION_SHORT_HAUL_SHARE,
            SourceType::CombinationLongHaulTruck => heavy * COMBINATION_LONG_HAUL_SHARE,
        }
    }
}
