use crate::model::{
    network::TransitSegmentRecord,
    parameters::Parameters,
    transit::{TransitCost, TransitMetrics, TransitMode, TransitPeriod},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// one row of trntsummary_out.csv: transit activity of a period, by mode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitSummaryRow {
    pub timeperiod: String,
    pub bus_trnt_pmt: f64,
    pub bus_trnt_pht: f64,
    pub bus_trnt_vmt_1hr: f64,
    pub bus_trnt_vht_1hr: f64,
    pub rail_trnt_pmt: f64,
    pub rail_trnt_pht: f64,
    pub rail_trnt_vmt_1hr: f64,
    pub rail_trnt_vht_1hr: f64,
}

impl TransitSummaryRow {
    fn add(&mut self, mode: TransitMode, metrics: &TransitMetrics) {
        let (pmt, pht, vmt, vht) = match mode {
            TransitMode::Bus => (
                &mut self.bus_trnt_pmt,
                &mut self.bus_trnt_pht,
                &mut self.bus_trnt_vmt_1hr,
                &mut self.bus_trnt_vht_1hr,
            ),
            TransitMode::Rail => (
                &mut self.rail_trnt_pmt,
                &mut self.rail_trnt_pht,
                &mut self.rail_trnt_vmt_1hr,
                &mut self.rail_trnt_vht_1hr,
            ),
        };
        *pmt += metrics.pmt;
        *pht += metrics.pht;
        *vmt += metrics.vmt_1hr;
        *vht += metrics.vht_1hr;
    }
}

/// transit activity by period and the region-wide monetized transit costs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitTotals {
    pub rows: Vec<TransitSummaryRow>,
    pub metrics: TransitMetrics,
    pub cost: TransitCost,
    pub segments: usize,
}

impl TransitTotals {
    pub fn compute(segments: &[TransitSegmentRecord], parameters: &Parameters) -> TransitTotals {
        let mut by_period: BTreeMap<TransitPeriod, TransitSummaryRow> = BTreeMap::new();
        let mut metrics = TransitMetrics::default();
        let mut cost = TransitCost::default();
        for segment in segments {
            let segment_metrics = TransitMetrics::compute(segment);
            by_period
                .entry(segment.period)
                .or_insert_with(|| TransitSummaryRow {
                    timeperiod: segment.period.to_string(),
                    ..Default::default()
                })
                .add(segment.mode, &segment_metrics);
            cost += &TransitCost::compute(segment, &segment_metrics, parameters);
            metrics += &segment_metrics;
        }
        log::debug!(
            "transit totals over {} segments: {:.1} pmt, ${:.0} operating, ${:.0} travel time",
            segments.len(),
            metrics.pmt,
            cost.total_trnt_op_cost(),
            cost.total_trnt_vot()
        );
        TransitTotals {
            rows: by_period.into_values().collect(),
            metrics,
            cost,
            segments: segments.len(),
        }
    }
}
