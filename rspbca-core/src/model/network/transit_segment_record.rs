use crate::model::transit::{TransitMode, TransitPeriod};
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Time};

/// one transit line segment in one transit assignment period. segments of
/// the same link traversed by several lines appear once per line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitSegmentRecord {
    pub period: TransitPeriod,
    pub mode: TransitMode,
    pub length: Length,
    /// time between vehicles on the line
    pub headway: Time,
    /// passengers on board across the segment (voltr)
    pub ridership: f64,
    pub total_capacity: f64,
    pub seated_capacity: f64,
    /// in-vehicle time across the segment (us1)
    pub travel_time: Time,
    pub zone: i64,
}

impl TransitSegmentRecord {
    pub fn length_miles(&self) -> f64 {
        self.length.get::<uom::si::length::mile>()
    }

    pub fn headway_minutes(&self) -> f64 {
        self.headway.get::<uom::si::time::minute>()
    }

    pub fn travel_time_minutes(&self) -> f64 {
        self.travel_time.get::<uom::si::time::minute>()
    }
}
