use super::speed_ops;
use crate::model::{network::LinkRecord, parameters::Parameters, volume::VolumeBreakdown};
use serde::{Deserialize, Serialize};
use uom::si::f64::Velocity;
use uom::si::velocity::mile_per_hour;

/// speed and congestion state of one link in one time period.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeedResult {
    pub free_flow_speed: Velocity,
    /// speed used for all hours-traveled measures. for VDF 1 links this is
    /// the adjusted arterial speed; otherwise it is the assigned speed.
    pub speed: Velocity,
    /// period capacity in vehicle equivalents
    pub capacity: f64,
    pub congested: bool,
}

impl SpeedResult {
    pub fn compute(
        link: &LinkRecord,
        volumes: &VolumeBreakdown,
        parameters: &Parameters,
    ) -> SpeedResult {
        use uom::si::time::minute;
        let length = link.length_miles();
        let ffs = speed_ops::free_flow_speed_mph(length, link.free_flow_time.get::<minute>());
        let capacity = speed_ops::link_capacity(link.lanes, link.emcap, link.time_period);
        let mph = if link.vdf == 1 {
            speed_ops::vdf1_speed_mph(ffs, volumes.volau, capacity)
        } else {
            speed_ops::congested_speed_mph(length, link.congested_time.get::<minute>())
        };
        let congested = speed_ops::is_congested(volumes.volau, capacity, parameters.vc_threshold);
        SpeedResult {
            free_flow_speed: Velocity::new::<mile_per_hour>(ffs),
            speed: Velocity::new::<mile_per_hour>(mph),
            capacity,
            congested,
        }
    }

    pub fn mph(&self) -> f64 {
        self.speed.get::<mile_per_hour>()
    }

    pub fn free_flow_mph(&self) -> f64 {
        self.free_flow_speed.get::<mile_per_hour>()
    }

    /// 1.0 when congested, otherwise 0.0
    pub fn congested_factor(&self) -> f64 {
        if self.congested {
            1.0
        } else {
            0.0
        }
    }

    /// volume / capacity, or 0 when capacity is not positive
    pub fn volume_capacity_ratio(&self, volau: f64) -> f64 {
        if self.capacity > 0.0 {
            volau / self.capacity
        } else {
            0.0
        }
    }

    /// converts a distance traveled at this speed into hours, 0 when the speed is not positive.
    pub fn hours_for(&self, miles: f64) -> f64 {
        let mph = self.mph();
        if mph > 0.0 {
            miles / mph
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod test {
    use super::SpeedResult;
    use crate::model::{
        network::mock_link, parameters::test_parameters, volume::VolumeBreakdown,
    };
    use uom::si::f64::Time;
    use uom::si::time::minute;

    #[test]
    fn test_single_link_end_to_end() {
        let link = mock_link();
        let params = test_parameters();
        let volumes = VolumeBreakdown::from_equivalents(&link.volumes);
        let speed = SpeedResult::compute(&link, &volumes, &params);

        assert_eq!(volumes.volau, 100.0);
        assert_eq!(speed.capacity, 1800.0);
        assert!((speed.free_flow_mph() - 30.0).abs() < 1e-9);
        assert!((speed.volume_capacity_ratio(volumes.volau) - 0.0556).abs() < 1e-4);
        assert!(!speed.congested);

        let expected_mph =
            30.0 / (30.0_f64.ln() * 0.249 + 0.153 * (100.0_f64 / (1800.0 * 0.75)).powf(3.98));
        let expected_vht = 100.0 / expected_mph;
        let vht = speed.hours_for(volumes.vehicles * link.length_miles());
        assert!(((vht - expected_vht) / expected_vht).abs() < 1e-6);
    }

    #[test]
    fn test_non_vdf1_uses_assigned_time() {
        let mut link = mock_link();
        link.vdf = 2;
        let params = test_parameters();
        let volumes = VolumeBreakdown::from_equivalents(&link.volumes);
        let speed = SpeedResult::compute(&link, &volumes, &params);
        assert!((speed.mph() - 20.0).abs() < 1e-9);

        link.congested_time = Time::new::<minute>(0.0);
        let speed = SpeedResult::compute(&link, &volumes, &params);
        assert_eq!(speed.mph(), 0.0);
        assert_eq!(speed.hours_for(100.0), 0.0);
    }
}
