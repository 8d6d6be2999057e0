use super::tier_costs;
use crate::model::{
    cost::{CostCategory, CostRecord},
    geography::GeographyTier,
    LinkEvaluation,
};

/// one row of bcasummary_out.csv: annual present-value costs of a geography
/// by category.
#[derive(Clone, Debug, PartialEq)]
pub struct BcaSummaryRow {
    pub geog: String,
    pub costs: CostRecord,
}

impl BcaSummaryRow {
    /// a row per tier. transit costs and the emissions cost are region-wide
    /// quantities and are only added to the region row.
    pub fn build(
        evaluations: &[LinkEvaluation],
        tiers: &[GeographyTier],
        rsp_id: &str,
        region_extra: &[CostRecord],
    ) -> Vec<BcaSummaryRow> {
        tiers
            .iter()
            .map(|tier| {
                let mut costs = tier_costs(evaluations, *tier);
                if *tier == GeographyTier::Region {
                    for extra in region_extra {
                        costs += extra;
                    }
                }
                BcaSummaryRow {
                    geog: tier.label(rsp_id),
                    costs,
                }
            })
            .collect()
    }

    pub fn header() -> Vec<String> {
        let mut header = vec![String::from("geog")];
        header.extend(CostCategory::ALL.iter().map(|c| c.label().to_string()));
        header.push(String::from("Total Costs"));
        header
    }

    pub fn record(&self) -> Vec<String> {
        let mut record = vec![self.geog.clone()];
        record.extend(
            CostCategory::ALL
                .iter()
                .map(|c| self.costs.get(*c).to_string()),
        );
        record.push(self.costs.total().to_string());
        record
    }
}

#[cfg(test)]
mod test {
    use super::BcaSummaryRow;
    use crate::model::{
        cost::CostRecord, geography::GeographyTier, link_evaluation::test::mock_evaluations,
        rsp_mode::RspMode, summary::tier_costs,
    };

    #[test]
    fn test_region_extras_only_on_region_row() {
        let evaluations = mock_evaluations();
        let transit = CostRecord {
            travel_time: 100.0,
            vehicle_operating: 50.0,
            ..Default::default()
        };
        let emissions = CostRecord {
            emissions: 25.0,
            ..Default::default()
        };
        let rows = BcaSummaryRow::build(
            &evaluations,
            &RspMode::Roadway.tiers(),
            "RSP35",
            &[transit, emissions],
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].geog, "region");
        let region = tier_costs(&evaluations, GeographyTier::Region);
        assert!((rows[0].costs.total() - (region.total() + 175.0)).abs() < 1e-6);
        assert_eq!(rows[0].costs.emissions, 25.0);

        let project = tier_costs(&evaluations, GeographyTier::Project);
        assert_eq!(rows[1].geog, "project_RSP35");
        assert_eq!(rows[1].costs, project);
        assert_eq!(rows[1].costs.emissions, 0.0);
    }

    #[test]
    fn test_columns() {
        let header = BcaSummaryRow::header();
        assert_eq!(header.len(), 8);
        assert_eq!(header[0], "geog");
        assert_eq!(header[1], "Total Travel Time Cost");
        assert_eq!(header[7], "Total Costs");

        let rows = BcaSummaryRow::build(&mock_evaluations(), &RspMode::NoBuild.tiers(), "RSP00", &[]);
        assert_eq!(rows.len(), 1);
        let record = rows[0].record();
        assert_eq!(record.len(), header.len());
        assert_eq!(record[7], rows[0].costs.total().to_string());
    }
}
