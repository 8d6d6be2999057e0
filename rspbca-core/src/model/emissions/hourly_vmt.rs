use super::{avg_speed_bin_id, road_type_id, EmissionsBinKey, SourceType, DEFAULT_DAY_ID};
use crate::model::{
    activity::ActivityMetrics, network::LinkRecord, speed::SpeedResult, TimePeriod,
};

/// VMT of one source type on one link during one clock hour, binned for
/// the emissions rate join.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HourlyVmt {
    pub time_period: TimePeriod,
    /// clock hour, 1-24
    pub hour: u8,
    pub zone: i64,
    pub key: EmissionsBinKey,
    pub vmt: f64,
}

/// spreads a link's period VMT evenly over the clock hours of the period and
/// splits it by MOVES source type. the overnight period is spread over its
/// ten clock hours even though its capacity assumes five.
pub fn disaggregate_hourly(
    link: &LinkRecord,
    speed: &SpeedResult,
    activity: &ActivityMetrics,
) -> Vec<HourlyVmt> {
    let road_type_id = road_type_id(link.vdf, link.area_type);
    let avg_speed_bin_id = avg_speed_bin_id(speed.mph());
    let hours = link.time_period.emissions_hours();
    let source_vmt = SourceType::ALL
        .iter()
        .map(|st| (st.id(), st.vmt(activity) / hours))
        .collect::<Vec<_>>();

    link.time_period
        .clock_hours()
        .into_iter()
        .flat_map(|hour| {
            source_vmt
                .iter()
                .map(move |(source_type_id, vmt)| HourlyVmt {
                    time_period: link.time_period,
                    hour,
                    zone: link.zone,
                    key: EmissionsBinKey {
                        road_type_id,
                        avg_speed_bin_id,
                        hour_day_id: EmissionsBinKey::hour_day_id(hour as i64, DEFAULT_DAY_ID),
                        source_type_id: *source_type_id,
                    },
                    vmt: *vmt,
                })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::disaggregate_hourly;
    use crate::model::{
        activity::ActivityMetrics, network::mock_link, parameters::test_parameters,
        speed::SpeedResult, volume::VolumeBreakdown, TimePeriod,
    };

    #[test]
    fn test_overnight_spread_over_ten_hours() {
        let mut link = mock_link();
        link.time_period = TimePeriod::Overnight;
        let params = test_parameters();
        let volumes = VolumeBreakdown::from_equivalents(&link.volumes);
        let speed = SpeedResult::compute(&link, &volumes, &params);
        let activity = ActivityMetrics::compute(&link, &volumes, &speed, &params);

        let rows = disaggregate_hourly(&link, &speed, &activity);
        assert_eq!(rows.len(), 10 * 9);
        let total: f64 = rows.iter().map(|r| r.vmt).sum();
        assert!((total - activity.all_vmt).abs() < 1e-9);
        assert!(rows.iter().any(|r| r.hour == 24 && r.key.hour_day_id == 245));
        assert!(rows.iter().any(|r| r.hour == 1 && r.key.hour_day_id == 15));
        assert!(rows.iter().all(|r| r.key.road_type_id == 5));
    }
}
