use crate::model::network::TransitSegmentRecord;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// passenger and vehicle activity of a transit segment. vehicle measures are
/// per hour of service, derived from the line headway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitMetrics {
    pub pmt: f64,
    pub pht: f64,
    pub vmt_1hr: f64,
    pub vht_1hr: f64,
}

impl TransitMetrics {
    pub fn compute(segment: &TransitSegmentRecord) -> TransitMetrics {
        let length = segment.length_miles();
        let minutes = segment.travel_time_minutes();
        let headway = segment.headway_minutes();
        let (vmt_1hr, vht_1hr) = if headway > 0.0 {
            (length * 60.0 / headway, minutes / headway)
        } else {
            (0.0, 0.0)
        };
        TransitMetrics {
            pmt: segment.ridership * length,
            pht: segment.ridership * minutes / 60.0,
            vmt_1hr,
            vht_1hr,
        }
    }
}

impl AddAssign<&TransitMetrics> for TransitMetrics {
    fn add_assign(&mut self, rhs: &TransitMetrics) {
        self.pmt += rhs.pmt;
        self.pht += rhs.pht;
        self.vmt_1hr += rhs.vmt_1hr;
        self.vht_1hr += rhs.vht_1hr;
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::TransitMetrics;
    use crate::model::{
        network::TransitSegmentRecord,
        transit::{TransitMode, TransitPeriod},
    };
    use uom::si::f64::{Length, Time};
    use uom::si::{length::mile, time::minute};

    pub(crate) fn mock_segment(mode: TransitMode, headway: f64) -> TransitSegmentRecord {
        TransitSegmentRecord {
            period: TransitPeriod::Am,
            mode,
            length: Length::new::<mile>(2.0),
            headway: Time::new::<minute>(headway),
            ridership: 30.0,
            total_capacity: 70.0,
            seated_capacity: 40.0,
            travel_time: Time::new::<minute>(6.0),
            zone: 12,
        }
    }

    #[test]
    fn test_metrics() {
        let m = TransitMetrics::compute(&mock_segment(TransitMode::Bus, 10.0));
        assert!((m.pmt - 60.0).abs() < 1e-9);
        assert!((m.pht - 3.0).abs() < 1e-9);
        assert!((m.vmt_1hr - 12.0).abs() < 1e-9);
        assert!((m.vht_1hr - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_zero_headway_has_no_vehicle_activity() {
        let m = TransitMetrics::compute(&mock_segment(TransitMode::Rail, 0.0));
        assert_eq!(m.vmt_1hr, 0.0);
        assert_eq!(m.vht_1hr, 0.0);
        assert!(m.pmt > 0.0);
    }
}
