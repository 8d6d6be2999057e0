use crate::model::TimePeriod;

/// free-flow speed assumed for links without a free-flow time.
pub const DEFAULT_FREE_FLOW_MPH: f64 = 20.0;

/// arterial speed adjustment, LOS C capacity factor
const VDF1_CAPACITY_FACTOR: f64 = 0.75;
const VDF1_LOG_COEFFICIENT: f64 = 0.249;
const VDF1_VC_COEFFICIENT: f64 = 0.153;
const VDF1_VC_EXPONENT: f64 = 3.98;

/// length / (ftime / 60), or the default speed when `ftime_minutes` is not positive.
pub fn free_flow_speed_mph(length_miles: f64, ftime_minutes: f64) -> f64 {
    if ftime_minutes > 0.0 {
        length_miles / (ftime_minutes / 60.0)
    } else {
        DEFAULT_FREE_FLOW_MPH
    }
}

/// length / (timau / 60), or 0 when `timau_minutes` is not positive.
pub fn congested_speed_mph(length_miles: f64, timau_minutes: f64) -> f64 {
    if timau_minutes > 0.0 {
        length_miles / (timau_minutes / 60.0)
    } else {
        0.0
    }
}

/// adjusted arterial speed for VDF 1 links:
///
/// `ffs / (ln(ffs) * 0.249 + 0.153 * (volau / (capacity * 0.75))^3.98)`
///
/// returns 0 when capacity is not positive or when the denominator is not a
/// positive finite number.
pub fn vdf1_speed_mph(free_flow_mph: f64, volau: f64, capacity: f64) -> f64 {
    if capacity <= 0.0 {
        return 0.0;
    }
    let vc = volau / (capacity * VDF1_CAPACITY_FACTOR);
    let denominator =
        free_flow_mph.ln() * VDF1_LOG_COEFFICIENT + VDF1_VC_COEFFICIENT * vc.powf(VDF1_VC_EXPONENT);
    if !denominator.is_finite() || denominator <= 0.0 {
        return 0.0;
    }
    let speed = free_flow_mph / denominator;
    if speed.is_finite() {
        speed
    } else {
        0.0
    }
}

/// period capacity: lanes * hourly lane capacity * hours in the period.
pub fn link_capacity(lanes: i64, emcap: f64, time_period: TimePeriod) -> f64 {
    lanes as f64 * emcap * time_period.capacity_hours()
}

/// congested when capacity is positive and v/c meets or exceeds the threshold.
pub fn is_congested(volau: f64, capacity: f64, vc_threshold: f64) -> bool {
    capacity > 0.0 && volau / capacity >= vc_threshold
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_free_flow_fallback() {
        assert_eq!(free_flow_speed_mph(1.0, 2.0), 30.0);
        assert_eq!(free_flow_speed_mph(1.0, 0.0), DEFAULT_FREE_FLOW_MPH);
    }

    #[test]
    fn test_congested_speed_zero_time() {
        assert_eq!(congested_speed_mph(1.0, 3.0), 20.0);
        assert_eq!(congested_speed_mph(1.0, 0.0), 0.0);
        assert_eq!(congested_speed_mph(1.0, -1.0), 0.0);
    }

    #[test]
    fn test_vdf1_degenerate_inputs() {
        assert_eq!(vdf1_speed_mph(30.0, 100.0, 0.0), 0.0);
        assert_eq!(vdf1_speed_mph(30.0, 100.0, -5.0), 0.0);
        // ln(0) is -inf
        assert_eq!(vdf1_speed_mph(0.0, 100.0, 1800.0), 0.0);
        // ln(1) is 0, and zero volume leaves a zero denominator
        assert_eq!(vdf1_speed_mph(1.0, 0.0, 1800.0), 0.0);
        // ln of a speed under 1 mph is negative
        assert_eq!(vdf1_speed_mph(0.5, 0.0, 1800.0), 0.0);
    }

    #[test]
    fn test_vdf1_speed() {
        let expected =
            30.0 / (30.0_f64.ln() * 0.249 + 0.153 * (100.0_f64 / (1800.0 * 0.75)).powf(3.98));
        let speed = vdf1_speed_mph(30.0, 100.0, 1800.0);
        assert!(((speed - expected) / expected).abs() < 1e-12);
    }

    #[test]
    fn test_capacity_hours_by_period() {
        assert_eq!(link_capacity(2, 900.0, TimePeriod::Overnight), 9000.0);
        assert_eq!(link_capacity(2, 900.0, TimePeriod::EarlyAm), 1800.0);
        assert_eq!(link_capacity(2, 900.0, TimePeriod::AmPeak), 3600.0);
        assert_eq!(link_capacity(2, 900.0, TimePeriod::Midday), 7200.0);
    }

    #[test]
    fn test_congestion_boundary_is_inclusive() {
        assert!(is_congested(80.0, 100.0, 0.8));
        assert!(!is_congested(79.999, 100.0, 0.8));
        assert!(!is_congested(80.0, 0.0, 0.8));
        assert!(!is_congested(0.0, 0.0, 0.0));
    }
}
