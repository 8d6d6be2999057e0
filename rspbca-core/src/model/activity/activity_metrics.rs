use super::ClassActivity;
use crate::model::{
    network::LinkRecord,
    parameters::Parameters,
    speed::SpeedResult,
    volume::{VehicleClass, VolumeBreakdown},
};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// travel activity of a link (or a sum of links), by vehicle class plus the
/// all-vehicle and network extent measures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityMetrics {
    /// indexed by [`VehicleClass::index`]
    pub classes: [ClassActivity; 11],
    pub all_vmt: f64,
    pub all_vht: f64,
    pub all_cvmt: f64,
    pub all_cvht: f64,
    /// link miles
    pub length: f64,
    pub lane_miles: f64,
}

impl ActivityMetrics {
    pub fn compute(
        link: &LinkRecord,
        volumes: &VolumeBreakdown,
        speed: &SpeedResult,
        parameters: &Parameters,
    ) -> ActivityMetrics {
        let length = link.length_miles();
        let mph = speed.mph();
        let mut classes = [ClassActivity::default(); 11];
        for class in VehicleClass::ALL {
            if class == VehicleClass::PvtVehicles {
                continue;
            }
            classes[class.index()] = ClassActivity::new(
                volumes.get(class),
                length,
                mph,
                speed.congested,
                class.occupancy(parameters),
            );
        }
        // private vehicles are exactly the sum of the three auto classes
        classes[VehicleClass::PvtVehicles.index()] = classes[VehicleClass::Sov.index()]
            + classes[VehicleClass::Hov2.index()]
            + classes[VehicleClass::Hov3.index()];

        let all_vmt = volumes.vehicles * length;
        let all_vht = speed.hours_for(all_vmt);
        let factor = speed.congested_factor();
        ActivityMetrics {
            classes,
            all_vmt,
            all_vht,
            all_cvmt: all_vmt * factor,
            all_cvht: all_vht * factor,
            length,
            lane_miles: link.lane_miles(),
        }
    }

    pub fn class(&self, class: VehicleClass) -> &ClassActivity {
        &self.classes[class.index()]
    }

    /// short and long-haul heavy trucks together
    pub fn heavy_truck(&self) -> ClassActivity {
        *self.class(VehicleClass::Htruck) + *self.class(VehicleClass::Htrucklh)
    }
}

impl AddAssign<&ActivityMetrics> for ActivityMetrics {
    fn add_assign(&mut self, rhs: &ActivityMetrics) {
        for (lhs, rhs) in self.classes.iter_mut().zip(rhs.classes.iter()) {
            *lhs += rhs;
        }
        self.all_vmt += rhs.all_vmt;
        self.all_vht += rhs.all_vht;
        self.all_cvmt += rhs.all_cvmt;
        self.all_cvht += rhs.all_cvht;
        self.length += rhs.length;
        self.lane_miles += rhs.lane_miles;
    }
}
