use super::tier_period_activity;
use crate::model::{
    activity::ActivityMetrics,
    geography::GeographyTier,
    volume::VehicleClass,
    LinkEvaluation,
};

/// one row of the roadway activity summary (hwysummary_out.csv): the summed
/// activity of a geography tier in one time period, or over all periods.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivitySummaryRow {
    /// period id, or the tier total label
    pub timeperiod: String,
    pub geog: String,
    pub activity: ActivityMetrics,
}

impl ActivitySummaryRow {
    /// rows for each tier: one per time period followed by the tier total.
    pub fn build(
        evaluations: &[LinkEvaluation],
        tiers: &[GeographyTier],
        rsp_id: &str,
    ) -> Vec<ActivitySummaryRow> {
        let mut rows = vec![];
        for tier in tiers {
            let geog = tier.label(rsp_id);
            let mut total = ActivityMetrics::default();
            for (period, activity) in tier_period_activity(evaluations, *tier) {
                total += &activity;
                rows.push(ActivitySummaryRow {
                    timeperiod: period.to_string(),
                    geog: geog.clone(),
                    activity,
                });
            }
            rows.push(ActivitySummaryRow {
                timeperiod: tier.total_label().to_string(),
                geog,
                activity: total,
            });
        }
        rows
    }

    pub fn header() -> Vec<String> {
        let mut header = vec![String::from("timeperiod")];
        let auto_metrics = ["vmt", "vht", "cvmt", "cvht", "pmt", "cpmt", "pht", "cpht"];
        let freight_metrics = ["vmt", "vht", "cvmt", "cvht"];
        for (classes, metrics) in [
            (&VehicleClass::AUTO[..], &auto_metrics[..]),
            (&VehicleClass::FREIGHT[..], &freight_metrics[..]),
        ] {
            header.extend(classes.iter().map(|c| c.name().to_string()));
            for class in classes {
                header.extend(metrics.iter().map(|m| format!("{}_{m}", class.name())));
            }
        }
        header.extend(["len", "lanemi", "geog"].map(String::from));
        header
    }

    /// values in [`ActivitySummaryRow::header`] order
    pub fn record(&self) -> Vec<String> {
        let mut values = vec![];
        for class in VehicleClass::AUTO {
            values.push(self.activity.class(class).volume);
        }
        for class in VehicleClass::AUTO {
            let a = self.activity.class(class);
            values.extend([a.vmt, a.vht, a.cvmt, a.cvht, a.pmt, a.cpmt, a.pht, a.cpht]);
        }
        for class in VehicleClass::FREIGHT {
            values.push(self.activity.class(class).volume);
        }
        for class in VehicleClass::FREIGHT {
            let a = self.activity.class(class);
            values.extend([a.vmt, a.vht, a.cvmt, a.cvht]);
        }
        values.extend([self.activity.length, self.activity.lane_miles]);

        let mut record = vec![self.timeperiod.clone()];
        record.extend(values.iter().map(|v| v.to_string()));
        record.push(self.geog.clone());
        record
    }
}
