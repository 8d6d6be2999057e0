use crate::model::{volume::VehicleClass, LinkEvaluation};
use serde::{Deserialize, Serialize};

/// one row of link_details.csv, the per-link QA listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkDetailRow {
    pub i_node: i64,
    pub j_node: i64,
    pub timeperiod: i64,
    pub zone: i64,
    pub vdf: i64,
    pub area_type: i64,
    pub project: bool,
    pub corridor: bool,
    pub eda: bool,
    pub len: f64,
    pub lanes: i64,
    pub volau: f64,
    pub vehicles: f64,
    pub capacity: f64,
    pub vc_ratio: f64,
    pub ffs: f64,
    pub speed: f64,
    pub congested: bool,
    pub pvt_vehicles_vmt: f64,
    pub pvt_vehicles_vht: f64,
    pub truck_vmt: f64,
    pub all_vmt: f64,
    pub all_vht: f64,
    pub travel_time_cost: f64,
    pub vehicle_operating_cost: f64,
    pub safety_cost: f64,
    pub noise_cost: f64,
}

impl From<&LinkEvaluation> for LinkDetailRow {
    fn from(e: &LinkEvaluation) -> Self {
        let pvt = e.activity.class(VehicleClass::PvtVehicles);
        let truck_vmt: f64 = VehicleClass::FREIGHT
            .iter()
            .filter(|c| **c != VehicleClass::Bus)
            .map(|c| e.activity.class(*c).vmt)
            .sum();
        LinkDetailRow {
            i_node: e.link.i_node,
            j_node: e.link.j_node,
            timeperiod: e.link.time_period.id(),
            zone: e.link.zone,
            vdf: e.link.vdf,
            area_type: e.link.area_type,
            project: e.membership.project,
            corridor: e.membership.corridor,
            eda: e.membership.eda,
            len: e.activity.length,
            lanes: e.link.lanes,
            volau: e.volumes.volau,
            vehicles: e.volumes.vehicles,
            capacity: e.speed.capacity,
            vc_ratio: e.speed.volume_capacity_ratio(e.volumes.volau),
            ffs: e.speed.free_flow_mph(),
            speed: e.speed.mph(),
            congested: e.speed.congested,
            pvt_vehicles_vmt: pvt.vmt,
            pvt_vehicles_vht: pvt.vht,
            truck_vmt,
            all_vmt: e.activity.all_vmt,
            all_vht: e.activity.all_vht,
            travel_time_cost: e.costs.travel_time(),
            vehicle_operating_cost: e.costs.vehicle_operating(),
            safety_cost: e.costs.safety(),
            noise_cost: e.costs.noise(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::LinkDetailRow;
    use crate::model::link_evaluation::test::mock_evaluations;

    #[test]
    fn test_from_evaluation() {
        let evaluations = mock_evaluations();
        let row = LinkDetailRow::from(&evaluations[0]);
        assert_eq!(row.timeperiod, 1);
        assert!(row.project);
        assert_eq!(row.len, 1.0);
        assert!(row.truck_vmt > 0.0);
        assert!(row.truck_vmt < row.all_vmt);
        assert_eq!(row.all_vmt, evaluations[0].activity.all_vmt);
    }
}
