use super::CostRecord;
use crate::model::{
    activity::ActivityMetrics, network::LinkRecord, parameters::Parameters, volume::VehicleClass,
};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// share of private vehicle hours on work trips; the remainder are non-work trips
const PVT_WORK_SHARE: f64 = 0.27;
const PVT_NONWORK_SHARE: f64 = 0.73;
/// crash rates are expressed per 100 million VMT
const RATE_VMT_BASE: f64 = 100_000_000.0;

/// monetized roadway costs of one link in one period, itemized by vehicle
/// class. all dollar amounts are annual present values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub pvt_vehicles_work_vot: f64,
    pub pvt_vehicles_nonwork_vot: f64,
    pub bplate_vot: f64,
    pub ltruck_vot: f64,
    pub mtruck_vot: f64,
    pub htruck_vot: f64,
    pub pvt_vehicles_op_cost: f64,
    pub bplate_op_cost: f64,
    pub ltruck_op_cost: f64,
    pub mtruck_op_cost: f64,
    pub htruck_op_cost: f64,
    /// annual fatal and serious injury (K+A) crashes
    pub annual_ka: f64,
    /// annual crashes of all severities
    pub annual_crash: f64,
    pub annual_ka_dollar: f64,
    pub annual_crash_dollar: f64,
    pub pvt_vehicles_noise_cost: f64,
    pub ltruck_noise_cost: f64,
    pub mtruck_noise_cost: f64,
    pub htruck_noise_cost: f64,
    pub bus_noise_cost: f64,
}

impl CostBreakdown {
    pub fn compute(
        link: &LinkRecord,
        activity: &ActivityMetrics,
        parameters: &Parameters,
    ) -> CostBreakdown {
        let p = parameters;
        let annual = |daily: f64| p.annual_present_value(daily);
        let vmt = |c: VehicleClass| activity.class(c).vmt;
        let vht = |c: VehicleClass| activity.class(c).vht;

        let (ka_rate, crash_rate) = if link.is_interstate() {
            (p.safe_ikarate, p.safe_icrashrate)
        } else {
            (p.safe_nikarate, p.safe_nicrashrate)
        };
        let annual_ka = activity.all_vmt / RATE_VMT_BASE * p.ann_factor * ka_rate;
        let annual_crash = activity.all_vmt / RATE_VMT_BASE * p.ann_factor * crash_rate;

        let (n_allveh, n_ltruck, n_bustruck) = if link.is_urban() {
            (p.n_allveh_urban, p.n_ltruck_urban, p.n_bustruck_urban)
        } else {
            (p.n_allveh_rural, p.n_ltruck_rural, p.n_bustruck_rural)
        };

        use VehicleClass as V;
        CostBreakdown {
            pvt_vehicles_work_vot: annual(vht(V::PvtVehicles) * PVT_WORK_SHARE * p.vot_inv_work),
            pvt_vehicles_nonwork_vot: annual(
                vht(V::PvtVehicles) * PVT_NONWORK_SHARE * p.vot_inv_nw,
            ),
            bplate_vot: annual(vht(V::Bplate) * p.vot_bplate),
            ltruck_vot: annual(vht(V::Ltruck) * p.vot_ltruck),
            mtruck_vot: annual(vht(V::Mtruck) * p.vot_mtruck),
            htruck_vot: annual(vht(V::Htruck) * p.vot_htruck),
            pvt_vehicles_op_cost: annual(vmt(V::PvtVehicles) * p.oc_auto),
            bplate_op_cost: annual(vmt(V::Bplate) * p.oc_bplate),
            ltruck_op_cost: annual(vmt(V::Ltruck) * p.oc_ltruck),
            mtruck_op_cost: annual(vmt(V::Mtruck) * p.oc_mtruck),
            htruck_op_cost: annual(vmt(V::Htruck) * p.oc_htruck),
            annual_ka,
            annual_crash,
            // crash counts are already annualized
            annual_ka_dollar: annual_ka * p.safe_ka * p.pv_deprec_rate,
            annual_crash_dollar: annual_crash * p.safe_pdo * p.pv_deprec_rate,
            pvt_vehicles_noise_cost: annual(vmt(V::PvtVehicles) * n_allveh),
            ltruck_noise_cost: annual(vmt(V::Ltruck) * n_ltruck),
            mtruck_noise_cost: annual(vmt(V::Mtruck) * n_bustruck),
            htruck_noise_cost: annual(vmt(V::Htruck) * n_bustruck),
            bus_noise_cost: annual(vmt(V::Bus) * n_bustruck),
        }
    }

    pub fn travel_time(&self) -> f64 {
        self.pvt_vehicles_work_vot
            + self.pvt_vehicles_nonwork_vot
            + self.bplate_vot
            + self.ltruck_vot
            + self.mtruck_vot
            + self.htruck_vot
    }

    pub fn vehicle_operating(&self) -> f64 {
        self.pvt_vehicles_op_cost
            + self.bplate_op_cost
            + self.ltruck_op_cost
            + self.mtruck_op_cost
            + self.htruck_op_cost
    }

    pub fn safety(&self) -> f64 {
        self.annual_ka_dollar + self.annual_crash_dollar
    }

    pub fn noise(&self) -> f64 {
        self.pvt_vehicles_noise_cost
            + self.ltruck_noise_cost
            + self.mtruck_noise_cost
            + self.htruck_noise_cost
            + self.bus_noise_cost
    }

    /// link costs by category. reliability is not yet monetized and emissions
    /// are computed region-wide rather than per link.
    pub fn cost_record(&self) -> CostRecord {
        CostRecord {
            travel_time: self.travel_time(),
            vehicle_operating: self.vehicle_operating(),
            safety: self.safety(),
            noise: self.noise(),
            reliability: 0.0,
            emissions: 0.0,
        }
    }
}

impl AddAssign<&CostBreakdown> for CostBreakdown {
    fn add_assign(&mut self, rhs: &CostBreakdown) {
        self.pvt_vehicles_work_vot += rhs.pvt_vehicles_work_vot;
        self.pvt_vehicles_nonwork_vot += rhs.pvt_vehicles_nonwork_vot;
        self.bplate_vot += rhs.bplate_vot;
        self.ltruck_vot += rhs.ltruck_vot;
        self.mtruck_vot += rhs.mtruck_vot;
        self.htruck_vot += rhs.htruck_vot;
        self.pvt_vehicles_op_cost += rhs.pvt_vehicles_op_cost;
        self.bplate_op_cost += rhs.bplate_op_cost;
        self.ltruck_op_cost += rhs.ltruck_op_cost;
        self.mtruck_op_cost += rhs.mtruck_op_cost;
        self.htruck_op_cost += rhs.htruck_op_cost;
        self.annual_ka += rhs.annual_ka;
        self.annual_crash += rhs.annual_crash;
        self.annual_ka_dollar += rhs.annual_ka_dollar;
        self.annual_crash_dollar += rhs.annual_crash_dollar;
        self.pvt_vehicles_noise_cost += rhs.pvt_vehicles_noise_cost;
        self.ltruck_noise_cost += rhs.ltruck_noise_cost;
        self.mtruck_noise_cost += rhs.mtruck_noise_cost;
        self.htruck_noise_cost += rhs.htruck_noise_cost;
        self.bus_noise_cost += rhs.bus_noise_cost;
    }
}

#[cfg(test)]
mod test {
    use super::CostBreakdown;
    use crate::model::{
        activity::ActivityMetrics,
        network::{mock_link, LinkRecord},
        parameters::test_parameters,
        speed::SpeedResult,
        volume::{VehicleClass, VolumeBreakdown},
    };

    fn costs_for(link: &LinkRecord) -> (ActivityMetrics, CostBreakdown) {
        let params = test_parameters();
        let volumes = VolumeBreakdown::from_equivalents(&link.volumes);
        let speed = SpeedResult::compute(link, &volumes, &params);
        let activity = ActivityMetrics::compute(link, &volumes, &speed, &params);
        let costs = CostBreakdown::compute(link, &activity, &params);
        (activity, costs)
    }

    #[test]
    fn test_operating_cost() {
        let (activity, costs) = costs_for(&mock_link());
        // 100 vmt * 0.4 $/mi * 300 days
        assert!((costs.vehicle_operating() - 12_000.0).abs() < 1e-6);
        assert_eq!(activity.all_vmt, 100.0);
    }

    #[test]
    fn test_travel_time_splits_work_and_nonwork() {
        let (activity, costs) = costs_for(&mock_link());
        let pvt_vht = activity.class(VehicleClass::PvtVehicles).vht;
        let expected = pvt_vht * (0.27 * 30.0 + 0.73 * 15.0) * 300.0;
        assert!((costs.travel_time() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_safety_rates_by_facility() {
        let (_, arterial) = costs_for(&mock_link());
        // 100 vmt / 1e8 * 300 * 5 K+A per 100M
        assert!((arterial.annual_ka - 1.5e-3).abs() < 1e-12);
        assert!((arterial.annual_crash - 0.06).abs() < 1e-12);
        assert!((arterial.safety() - (1.5e-3 * 1_000_000.0 + 0.06 * 10_000.0)).abs() < 1e-6);

        let mut interstate = mock_link();
        interstate.vdf = 2;
        let (_, interstate) = costs_for(&interstate);
        assert!((interstate.annual_ka - 6.0e-4).abs() < 1e-12);
        assert!((interstate.annual_crash - 0.024).abs() < 1e-12);
    }

    #[test]
    fn test_noise_urban_and_rural() {
        let (_, urban) = costs_for(&mock_link());
        assert!((urban.noise() - 100.0 * 0.002 * 300.0).abs() < 1e-9);
        let mut rural = mock_link();
        rural.area_type = 10;
        let (_, rural) = costs_for(&rural);
        assert!((rural.noise() - 100.0 * 0.001 * 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_cost_record_has_no_link_level_emissions_or_reliability() {
        let (_, costs) = costs_for(&mock_link());
        let record = costs.cost_record();
        assert_eq!(record.reliability, 0.0);
        assert_eq!(record.emissions, 0.0);
        let expected =
            costs.travel_time() + costs.vehicle_operating() + costs.safety() + costs.noise();
        assert!((record.total() - expected).abs() < 1e-9);
    }
}
