use crate::model::{
    activity::ActivityMetrics, cost::CostRecord, geography::GeographyTier, LinkEvaluation,
    TimePeriod,
};
use std::collections::BTreeMap;

/// activity of the links in `tier`, summed by time period. periods without
/// any links in the tier are absent.
pub fn tier_period_activity(
    evaluations: &[LinkEvaluation],
    tier: GeographyTier,
) -> BTreeMap<TimePeriod, ActivityMetrics> {
    let mut by_period: BTreeMap<TimePeriod, ActivityMetrics> = BTreeMap::new();
    for evaluation in evaluations.iter().filter(|e| e.in_tier(tier)) {
        *by_period.entry(evaluation.link.time_period).or_default() += &evaluation.activity;
    }
    by_period
}

/// roadway costs of the links in `tier`, summed over all periods.
pub fn tier_costs(evaluations: &[LinkEvaluation], tier: GeographyTier) -> CostRecord {
    evaluations
        .iter()
        .filter(|e| e.in_tier(tier))
        .fold(CostRecord::default(), |mut acc, e| {
            acc += &e.costs.cost_record();
            acc
        })
}
