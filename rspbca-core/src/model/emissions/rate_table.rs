use super::{EmissionsBinKey, Pollutant};
use std::collections::HashMap;

/// MOVES dayID for weekdays, assumed when a rate table has no dayID column.
pub const DEFAULT_DAY_ID: i64 = 5;

/// one row of a MOVES running emissions rate query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateRow {
    pub hour_id: i64,
    pub day_id: i64,
    pub road_type_id: i64,
    pub avg_speed_bin_id: i64,
    pub source_type_id: i64,
    /// grams per mile
    pub rate: f64,
}

impl RateRow {
    pub fn key(&self) -> EmissionsBinKey {
        EmissionsBinKey {
            road_type_id: self.road_type_id,
            avg_speed_bin_id: self.avg_speed_bin_id,
            hour_day_id: EmissionsBinKey::hour_day_id(self.hour_id, self.day_id),
            source_type_id: self.source_type_id,
        }
    }
}

/// grams-per-mile rates of one pollutant keyed by emissions bin.
#[derive(Clone, Debug)]
pub struct RateTable {
    pub pollutant: Pollutant,
    rates: HashMap<EmissionsBinKey, f64>,
}

impl RateTable {
    /// builds the lookup. when a bin appears more than once the first rate is kept.
    pub fn from_rows<I>(pollutant: Pollutant, rows: I) -> RateTable
    where
        I: IntoIterator<Item = RateRow>,
    {
        let mut rates = HashMap::new();
        let mut duplicates: usize = 0;
        for row in rows {
            let key = row.key();
            if rates.contains_key(&key) {
                duplicates += 1;
            } else {
                rates.insert(key, row.rate);
            }
        }
        if duplicates > 0 {
            log::warn!(
                "{pollutant} rate table has {duplicates} duplicate bins, keeping the first rate of each"
            );
        }
        RateTable { pollutant, rates }
    }

    pub fn rate(&self, key: &EmissionsBinKey) -> Option<f64> {
        self.rates.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::{RateRow, RateTable};
    use crate::model::emissions::{EmissionsBinKey, Pollutant};

    fn row(hour_id: i64, rate: f64) -> RateRow {
        RateRow {
            hour_id,
            day_id: 5,
            road_type_id: 5,
            avg_speed_bin_id: 11,
            source_type_id: 21,
            rate,
        }
    }

    #[test]
    fn test_lookup_by_hour_day() {
        let table = RateTable::from_rows(Pollutant::Co2e, vec![row(8, 250.0), row(9, 260.0)]);
        let key = EmissionsBinKey {
            road_type_id: 5,
            avg_speed_bin_id: 11,
            hour_day_id: 85,
            source_type_id: 21,
        };
        assert_eq!(table.rate(&key), Some(250.0));
        let miss = EmissionsBinKey {
            hour_day_id: 82,
            ..key
        };
        assert_eq!(table.rate(&miss), None);
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let table = RateTable::from_rows(Pollutant::Nox, vec![row(8, 1.0), row(8, 2.0)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rate(&row(8, 0.0).key()), Some(1.0));
    }
}
