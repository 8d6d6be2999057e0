use crate::model::{
    activity::ActivityMetrics,
    cost::CostBreakdown,
    geography::{GeographyMembership, GeographyTier},
    network::LinkRecord,
    parameters::Parameters,
    speed::SpeedResult,
    volume::VolumeBreakdown,
};

/// a roadway link carried through every stage of the link pipeline:
/// volume decomposition, speed and congestion, travel activity, then costs.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkEvaluation {
    pub link: LinkRecord,
    pub membership: GeographyMembership,
    pub volumes: VolumeBreakdown,
    pub speed: SpeedResult,
    pub activity: ActivityMetrics,
    pub costs: CostBreakdown,
}

impl LinkEvaluation {
    pub fn evaluate(
        link: LinkRecord,
        membership: GeographyMembership,
        parameters: &Parameters,
    ) -> LinkEvaluation {
        let volumes = VolumeBreakdown::from_equivalents(&link.volumes);
        let speed = SpeedResult::compute(&link, &volumes, parameters);
        let activity = ActivityMetrics::compute(&link, &volumes, &speed, parameters);
        let costs = CostBreakdown::compute(&link, &activity, parameters);
        LinkEvaluation {
            link,
            membership,
            volumes,
            speed,
            activity,
            costs,
        }
    }

    pub fn in_tier(&self, tier: GeographyTier) -> bool {
        tier.contains(&self.membership)
    }

    /// daily VMT of EDA trips on the link
    pub fn eda_vmt(&self) -> f64 {
        self.membership.eda_volume * self.activity.length
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::LinkEvaluation;
    use crate::model::{
        geography::GeographyMembership,
        network::{mock_link, VehicleEquivalentVolumes},
        parameters::test_parameters,
        TimePeriod,
    };

    /// a small network: two project links (also in the corridor), one
    /// corridor-only link and two links outside of any project geography,
    /// each evaluated in two periods.
    pub(crate) fn mock_evaluations() -> Vec<LinkEvaluation> {
        let params = test_parameters();
        let project = GeographyMembership {
            project: true,
            corridor: true,
            eda: true,
            eda_volume: 10.0,
        };
        let corridor = GeographyMembership {
            corridor: true,
            ..Default::default()
        };
        let none = GeographyMembership::default();
        let memberships = [project, project, corridor, none, none];
        let mut evaluations = vec![];
        for period in [TimePeriod::Overnight, TimePeriod::EarlyAm] {
            for (idx, membership) in memberships.iter().enumerate() {
                let mut link = mock_link();
                link.i_node = idx as i64;
                link.j_node = idx as i64 + 1;
                link.time_period = period;
                link.vdf = if idx % 2 == 0 { 1 } else { 2 };
                link.volumes = VehicleEquivalentVolumes {
                    sov: 900.0 + 100.0 * idx as f64,
                    hov2: 120.0,
                    hov3: 35.5,
                    bplate: 40.0,
                    light_truck: 25.0,
                    medium_truck: 30.0,
                    heavy_truck: 90.0,
                    bus: 9.0,
                    medium_long_haul: 6.0,
                    heavy_long_haul: 45.0,
                };
                evaluations.push(LinkEvaluation::evaluate(link, *membership, &params));
            }
        }
        evaluations
    }

    #[test]
    fn test_eda_vmt() {
        let evaluations = mock_evaluations();
        assert_eq!(evaluations[0].eda_vmt(), 10.0);
        assert_eq!(evaluations[3].eda_vmt(), 0.0);
    }
}
