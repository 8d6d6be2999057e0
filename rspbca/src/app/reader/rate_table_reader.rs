use super::{
    reader_ops::{csv_error, headers, open_csv},
    HeaderIndex,
};
use crate::app::BcaAppError;
use itertools::Itertools;
use kdam::tqdm;
use rspbca_core::model::emissions::{
    EmissionsError, Pollutant, RateRow, RateTable, DEFAULT_DAY_ID,
};
use std::{io::Read, path::Path};

/// names MOVES query outputs use for the grams-per-mile rate column
pub const RATE_COLUMNS: [&str; 4] = [
    "coalesce(rateperdistance,0)",
    "sum(coalesce(rateperdistance,0))",
    "ratePerDistance",
    "rate",
];

struct RateColumns {
    hour_id: usize,
    day_id: Option<usize>,
    road_type_id: usize,
    avg_speed_bin_id: usize,
    source_type_id: usize,
    rate: usize,
}

impl RateColumns {
    fn new(index: &HeaderIndex) -> Result<RateColumns, EmissionsError> {
        let rate = index
            .find(&RATE_COLUMNS)
            .ok_or_else(|| EmissionsError::MissingRateColumn {
                file: index.file().to_string(),
                expected: RATE_COLUMNS.iter().map(|c| format!("'{c}'")).join(", "),
            })?;
        Ok(RateColumns {
            hour_id: index.require(&["hourID"])?,
            day_id: index.find(&["dayID"]),
            road_type_id: index.require(&["roadTypeID"])?,
            avg_speed_bin_id: index.require(&["avgSpeedBinID"])?,
            source_type_id: index.require(&["sourceTypeID"])?,
            rate,
        })
    }
}

/// reads a MOVES running-rate query output for one pollutant. year and
/// month columns are ignored; without a dayID column every rate is taken
/// to be a weekday rate.
pub fn read_rate_table<R: Read>(
    mut reader: csv::Reader<R>,
    file: &str,
    pollutant: Pollutant,
) -> Result<RateTable, BcaAppError> {
    let index = HeaderIndex::new(file, &headers(&mut reader, file)?);
    let cols = RateColumns::new(&index)?;
    let mut rows = vec![];
    let desc = format!("read {pollutant} rates");
    for (idx, row) in tqdm!(reader.records().enumerate(), desc = desc) {
        let record = row.map_err(csv_error(file))?;
        rows.push(read_rate_row(&index, &cols, &record, idx + 1)?);
    }
    let table = RateTable::from_rows(pollutant, rows);
    log::info!("read {} {pollutant} rate bins from {file}", table.len());
    Ok(table)
}

pub fn read_rate_table_file(path: &Path, pollutant: Pollutant) -> Result<RateTable, BcaAppError> {
    let reader = open_csv(path)?;
    read_rate_table(reader, &path.to_string_lossy(), pollutant)
}

fn read_rate_row(
    index: &HeaderIndex,
    cols: &RateColumns,
    record: &csv::StringRecord,
    row: usize,
) -> Result<RateRow, EmissionsError> {
    let i = |idx: usize| index.i64_at(record, row, idx);
    let day_id = match cols.day_id {
        Some(idx) => i(idx)?,
        None => DEFAULT_DAY_ID,
    };
    Ok(RateRow {
        hour_id: i(cols.hour_id)?,
        day_id,
        road_type_id: i(cols.road_type_id)?,
        avg_speed_bin_id: i(cols.avg_speed_bin_id)?,
        source_type_id: i(cols.source_type_id)?,
        rate: index.f64_at(record, row, cols.rate)?,
    })
}
