use super::{
    disaggregate_hourly, EdaZoneShares, EmissionsError, EmissionsMode, HourlyVmt, Pollutant,
    RateTable,
};
use crate::model::{activity::ActivityMetrics, network::LinkRecord, speed::SpeedResult};
use std::collections::BTreeMap;

const GRAMS_PER_TON: f64 = 1_000_000.0;

/// running totals of binned VMT joined against emission rates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmissionsInventory {
    pub vmt: f64,
    /// indexed by [`Pollutant::index`]
    pub grams: [f64; 4],
    /// PM2.5 grams weighted by the EDA share of the link's zone
    pub eda_pm_grams: f64,
    /// hourly VMT rows without a matching rate, by pollutant
    pub rate_misses: [usize; 4],
    /// hourly VMT rows whose zone has no EDA share
    pub zone_share_misses: usize,
    pub rows: usize,
}

impl EmissionsInventory {
    pub fn grams(&self, pollutant: Pollutant) -> f64 {
        self.grams[pollutant.index()]
    }

    pub fn tons(&self, pollutant: Pollutant) -> f64 {
        self.grams(pollutant) / GRAMS_PER_TON
    }

    pub fn misses(&self, pollutant: Pollutant) -> usize {
        self.rate_misses[pollutant.index()]
    }

    /// reports join misses for the pollutants of `mode`.
    pub fn log_misses(&self, mode: EmissionsMode) {
        for pollutant in mode.required_pollutants() {
            let misses = self.misses(*pollutant);
            if misses > 0 {
                log::warn!(
                    "{misses} of {} hourly VMT rows had no {pollutant} rate and contribute no emissions",
                    self.rows
                );
            }
        }
        if mode == EmissionsMode::EdaWeighted && self.zone_share_misses > 0 {
            log::warn!(
                "{} of {} hourly VMT rows had no EDA zone share and contribute no PM",
                self.zone_share_misses,
                self.rows
            );
        }
    }
}

/// joins hourly, binned link VMT against MOVES rate tables.
pub struct EmissionsEngine {
    mode: EmissionsMode,
    tables: BTreeMap<Pollutant, RateTable>,
    zone_shares: Option<EdaZoneShares>,
}

impl EmissionsEngine {
    /// checks that every rate table `mode` needs is present, and for the
    /// EDA-weighted mode, that zone shares were supplied.
    pub fn new(
        mode: EmissionsMode,
        tables: Vec<RateTable>,
        zone_shares: Option<EdaZoneShares>,
    ) -> Result<EmissionsEngine, EmissionsError> {
        let tables = tables
            .into_iter()
            .map(|t| (t.pollutant, t))
            .collect::<BTreeMap<_, _>>();
        for pollutant in mode.required_pollutants() {
            if !tables.contains_key(pollutant) {
                return Err(EmissionsError::MissingRateTable {
                    mode: mode.to_string(),
                    pollutant: *pollutant,
                });
            }
        }
        if mode == EmissionsMode::EdaWeighted && zone_shares.is_none() {
            return Err(EmissionsError::MissingZoneShares);
        }
        Ok(EmissionsEngine {
            mode,
            tables,
            zone_shares,
        })
    }

    pub fn mode(&self) -> EmissionsMode {
        self.mode
    }

    /// adds one hourly VMT row. a missing rate adds no mass and is counted.
    pub fn accumulate(&self, inventory: &mut EmissionsInventory, row: &HourlyVmt) {
        inventory.rows += 1;
        inventory.vmt += row.vmt;
        for pollutant in self.mode.required_pollutants() {
            let Some(table) = self.tables.get(pollutant) else {
                continue;
            };
            match table.rate(&row.key) {
                Some(rate) => inventory.grams[pollutant.index()] += row.vmt * rate,
                None => inventory.rate_misses[pollutant.index()] += 1,
            }
        }
        if let (EmissionsMode::EdaWeighted, Some(shares)) = (self.mode, &self.zone_shares) {
            let pm_rate = self
                .tables
                .get(&Pollutant::Pm25)
                .and_then(|t| t.rate(&row.key));
            match (shares.share(row.zone), pm_rate) {
                (Some(share), Some(rate)) => inventory.eda_pm_grams += row.vmt * rate * share,
                (None, _) => inventory.zone_share_misses += 1,
                (Some(_), None) => {}
            }
        }
    }

    /// bins one link's activity by hour and source type and adds it.
    pub fn add_link(
        &self,
        inventory: &mut EmissionsInventory,
        link: &LinkRecord,
        speed: &SpeedResult,
        activity: &ActivityMetrics,
    ) {
        for row in disaggregate_hourly(link, speed, activity) {
            self.accumulate(inventory, &row);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{EmissionsEngine, EmissionsInventory};
    use crate::model::emissions::{
        EdaZoneShares, EmissionsBinKey, EmissionsError, EmissionsMode, HourlyVmt, Pollutant,
        RateRow, RateTable, RegionEmissions,
    };
    use crate::model::{parameters::test_parameters, TimePeriod};

    fn key() -> EmissionsBinKey {
        EmissionsBinKey {
            road_type_id: 5,
            avg_speed_bin_id: 11,
            hour_day_id: 85,
            source_type_id: 21,
        }
    }

    fn table(pollutant: Pollutant, rate: f64) -> RateTable {
        let row = RateRow {
            hour_id: 8,
            day_id: 5,
            road_type_id: 5,
            avg_speed_bin_id: 11,
            source_type_id: 21,
            rate,
        };
        RateTable::from_rows(pollutant, vec![row])
    }

    fn all_tables() -> Vec<RateTable> {
        vec![
            table(Pollutant::Co2e, 300.0),
            table(Pollutant::Pm25, 0.01),
            table(Pollutant::Voc, 0.05),
            table(Pollutant::Nox, 0.2),
        ]
    }

    fn hourly(vmt: f64, zone: i64, hour_day_id: i64) -> HourlyVmt {
        HourlyVmt {
            time_period: TimePeriod::AmPeak,
            hour: 8,
            zone,
            key: EmissionsBinKey {
                hour_day_id,
                ..key()
            },
            vmt,
        }
    }

    #[test]
    fn test_mass_in_tons() {
        let engine = EmissionsEngine::new(EmissionsMode::RegionTotals, all_tables(), None)
            .expect("all tables present");
        let mut inventory = EmissionsInventory::default();
        engine.accumulate(&mut inventory, &hourly(1000.0, 1, 85));
        assert!((inventory.tons(Pollutant::Co2e) - 0.3).abs() < 1e-12);
        assert!((inventory.tons(Pollutant::Nox) - 0.0002).abs() < 1e-12);
        assert_eq!(inventory.misses(Pollutant::Co2e), 0);
    }

    #[test]
    fn test_join_miss_is_counted_not_fatal() {
        let engine = EmissionsEngine::new(EmissionsMode::RegionTotals, all_tables(), None)
            .expect("all tables present");
        let mut inventory = EmissionsInventory::default();
        engine.accumulate(&mut inventory, &hourly(1000.0, 1, 85));
        engine.accumulate(&mut inventory, &hourly(500.0, 1, 95));
        assert_eq!(inventory.vmt, 1500.0);
        assert!((inventory.tons(Pollutant::Co2e) - 0.3).abs() < 1e-12);
        for pollutant in Pollutant::ALL {
            assert_eq!(inventory.misses(pollutant), 1);
        }
    }

    #[test]
    fn test_region_cost_uses_unit_values() {
        let params = test_parameters();
        let engine = EmissionsEngine::new(EmissionsMode::RegionTotals, all_tables(), None)
            .expect("all tables present");
        let mut inventory = EmissionsInventory::default();
        engine.accumulate(&mut inventory, &hourly(1000.0, 1, 85));
        let region = RegionEmissions::new(&inventory, &params);
        // 0.3 tons * 50 $/ton * 300 days
        assert!((region.co2e_cost - 4500.0).abs() < 1e-6);
        let sum = region.co2e_cost + region.pm_cost + region.voc_cost + region.nox_cost;
        assert!((region.total_r_emissions - sum).abs() < 1e-9);
    }

    #[test]
    fn test_missing_table_for_mode() {
        let tables = vec![table(Pollutant::Co2e, 300.0)];
        match EmissionsEngine::new(EmissionsMode::RegionTotals, tables, None) {
            Err(EmissionsError::MissingRateTable { pollutant, .. }) => {
                assert_eq!(pollutant, Pollutant::Pm25)
            }
            other => panic!("expected MissingRateTable, found {:?}", other.err()),
        }
    }

    #[test]
    fn test_eda_weighted_requires_shares() {
        let result = EmissionsEngine::new(EmissionsMode::EdaWeighted, all_tables(), None);
        assert!(matches!(result, Err(EmissionsError::MissingZoneShares)));
    }

    #[test]
    fn test_eda_weighted_pm() {
        let shares = EdaZoneShares::from_rows(vec![(10, 0.25)]);
        let engine = EmissionsEngine::new(EmissionsMode::EdaWeighted, all_tables(), Some(shares))
            .expect("tables and shares present");
        let mut inventory = EmissionsInventory::default();
        engine.accumulate(&mut inventory, &hourly(1000.0, 10, 85));
        engine.accumulate(&mut inventory, &hourly(1000.0, 11, 85));
        assert!((inventory.grams(Pollutant::Co2e) - 600_000.0).abs() < 1e-6);
        assert!((inventory.eda_pm_grams - 2.5).abs() < 1e-9);
        assert_eq!(inventory.zone_share_misses, 1);
        // voc and nox are not needed in this mode
        assert_eq!(inventory.grams(Pollutant::Voc), 0.0);
    }
}
