use super::{TransitMetrics, TransitMode};
use crate::model::{cost::CostRecord, network::TransitSegmentRecord, parameters::Parameters};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// share of transit person hours on work trips; the remainder are non-work trips
const TRANSIT_WORK_SHARE: f64 = 0.57;
const TRANSIT_NONWORK_SHARE: f64 = 0.43;

/// monetized transit costs, split by mode. a segment only carries costs
/// for its own mode; the other mode's columns are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitCost {
    pub bus_opcost: f64,
    pub rail_opcost: f64,
    pub bus_vot: f64,
    pub rail_vot: f64,
}

impl TransitCost {
    pub fn compute(
        segment: &TransitSegmentRecord,
        metrics: &TransitMetrics,
        parameters: &Parameters,
    ) -> TransitCost {
        let p = parameters;
        let oc = match segment.mode {
            TransitMode::Bus => p.oc_bus,
            TransitMode::Rail => p.oc_rail,
        };
        let opcost = p.annual_present_value(metrics.vmt_1hr * segment.period.hours() * oc);
        let vot_per_hour = TRANSIT_WORK_SHARE * p.vot_inv_work + TRANSIT_NONWORK_SHARE * p.vot_inv_nw;
        let vot = p.annual_present_value(vot_per_hour * metrics.pht);
        match segment.mode {
            TransitMode::Bus => TransitCost {
                bus_opcost: opcost,
                bus_vot: vot,
                ..Default::default()
            },
            TransitMode::Rail => TransitCost {
                rail_opcost: opcost,
                rail_vot: vot,
                ..Default::default()
            },
        }
    }

    pub fn total_trnt_op_cost(&self) -> f64 {
        self.bus_opcost + self.rail_opcost
    }

    pub fn total_trnt_vot(&self) -> f64 {
        self.bus_vot + self.rail_vot
    }

    /// transit costs by category. transit noise and emissions are not monetized.
    pub fn cost_record(&self) -> CostRecord {
        CostRecord {
            travel_time: self.total_trnt_vot(),
            vehicle_operating: self.total_trnt_op_cost(),
            ..Default::default()
        }
    }
}

impl AddAssign<&TransitCost> for TransitCost {
    fn add_assign(&mut self, rhs: &TransitCost) {
        self.bus_opcost += rhs.bus_opcost;
        self.rail_opcost += rhs.rail_opcost;
        self.bus_vot += rhs.bus_vot;
        self.rail_vot += rhs.rail_vot;
    }
}
