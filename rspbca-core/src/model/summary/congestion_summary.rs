use crate::model::{geography::GeographyTier, LinkEvaluation, TimePeriod};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// tiers in the order they appear in the congestion report
const REPORT_ORDER: [GeographyTier; 3] = [
    GeographyTier::Project,
    GeographyTier::Corridor,
    GeographyTier::Region,
];

/// one row of congestion_factors.csv.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CongestionRow {
    /// period id, or "Total"
    pub timeperiod: String,
    #[serde(rename = "AllVMT")]
    pub all_vmt: f64,
    #[serde(rename = "CongestedVMT")]
    pub congested_vmt: f64,
    #[serde(rename = "AllVHT")]
    pub all_vht: f64,
    #[serde(rename = "CongestedVHT")]
    pub congested_vht: f64,
    #[serde(rename = "HTruckVMT")]
    pub htruck_vmt: f64,
    #[serde(rename = "CongestedHTruckVMT")]
    pub congested_htruck_vmt: f64,
    #[serde(rename = "HTruckVHT")]
    pub htruck_vht: f64,
    #[serde(rename = "CongestedHTruckVHT")]
    pub congested_htruck_vht: f64,
    pub annual_ka: f64,
    pub len: f64,
    pub lanemi: f64,
    /// only reported on the Total row
    pub edavmt: Option<f64>,
    pub edavmtshare: Option<f64>,
    pub analysis_level: String,
}

impl CongestionRow {
    fn add_link(&mut self, evaluation: &LinkEvaluation) {
        let activity = &evaluation.activity;
        let htruck = activity.heavy_truck();
        self.all_vmt += activity.all_vmt;
        self.congested_vmt += activity.all_cvmt;
        self.all_vht += activity.all_vht;
        self.congested_vht += activity.all_cvht;
        self.htruck_vmt += htruck.vmt;
        self.congested_htruck_vmt += htruck.cvmt;
        self.htruck_vht += htruck.vht;
        self.congested_htruck_vht += htruck.cvht;
        self.annual_ka += evaluation.costs.annual_ka;
        self.len += activity.length;
        self.lanemi += activity.lane_miles;
    }

    /// per-period rows and a closing Total row for each reported tier. the
    /// Total row sums every metric across periods except length and
    /// lane-miles, which are averaged since each period repeats the network.
    pub fn build(evaluations: &[LinkEvaluation], tiers: &[GeographyTier]) -> Vec<CongestionRow> {
        let mut rows = vec![];
        for tier in REPORT_ORDER.iter().filter(|t| tiers.contains(t)) {
            let level = tier.analysis_level();
            let mut by_period: BTreeMap<TimePeriod, CongestionRow> = BTreeMap::new();
            let mut edavmt = 0.0;
            for evaluation in evaluations.iter().filter(|e| e.in_tier(*tier)) {
                let period = evaluation.link.time_period;
                by_period
                    .entry(period)
                    .or_insert_with(|| CongestionRow {
                        timeperiod: period.to_string(),
                        analysis_level: level.to_string(),
                        ..Default::default()
                    })
                    .add_link(evaluation);
                // eda volumes are daily, so they are counted against a single period
                if period == TimePeriod::Overnight {
                    edavmt += evaluation.eda_vmt();
                }
            }

            let periods = by_period.len();
            let mut total = CongestionRow {
                timeperiod: String::from("Total"),
                analysis_level: level.to_string(),
                ..Default::default()
            };
            for row in by_period.values() {
                total.all_vmt += row.all_vmt;
                total.congested_vmt += row.congested_vmt;
                total.all_vht += row.all_vht;
                total.congested_vht += row.congested_vht;
                total.htruck_vmt += row.htruck_vmt;
                total.congested_htruck_vmt += row.congested_htruck_vmt;
                total.htruck_vht += row.htruck_vht;
                total.congested_htruck_vht += row.congested_htruck_vht;
                total.annual_ka += row.annual_ka;
                total.len += row.len;
                total.lanemi += row.lanemi;
            }
            if periods > 0 {
                total.len /= periods as f64;
                total.lanemi /= periods as f64;
            }
            total.edavmt = Some(edavmt);
            total.edavmtshare = Some(if total.all_vmt > 0.0 {
                edavmt / total.all_vmt
            } else {
                0.0
            });

            rows.extend(by_period.into_values());
            rows.push(total);
        }
        rows
    }
}
