use super::{
    reader_ops::{csv_error, headers, open_csv},
    HeaderIndex,
};
use crate::app::BcaAppError;
use kdam::tqdm;
use rspbca_core::model::{
    network::{NetworkTableError, TransitSegmentRecord},
    transit::{TransitMode, TransitPeriod},
};
use std::{io::Read, path::Path};
use uom::si::f64::{Length, Time};
use uom::si::{length::mile, time::minute};

/// column positions of the transit segment punch
struct TransitColumns {
    period: usize,
    mode: usize,
    length: usize,
    headway: usize,
    ridership: usize,
    travel_time: usize,
    zone: usize,
    total_capacity: Option<usize>,
    seated_capacity: Option<usize>,
}

impl TransitColumns {
    fn new(index: &HeaderIndex) -> Result<TransitColumns, NetworkTableError> {
        Ok(TransitColumns {
            period: index.require(&["timeperiod", "time_period", "scenario"])?,
            mode: index.require(&["mode"])?,
            length: index.require(&["length", "len"])?,
            headway: index.require(&["headway", "hdw", "hdwy"])?,
            ridership: index.require(&["ridership_volume", "voltr", "ridership"])?,
            travel_time: index.require(&["travel_time_per_length", "us1", "travel_time"])?,
            zone: index.require(&["zone"])?,
            total_capacity: index.find(&["tot_capacity", "total_capacity"]),
            seated_capacity: index.find(&["seated_capacity"]),
        })
    }
}

/// reads the transit segment punch. `timeperiod` holds the transit scenario
/// number (e.g. 723) and `mode` a mode name or network mode code.
pub fn read_transit_segments<R: Read>(
    mut reader: csv::Reader<R>,
    file: &str,
) -> Result<Vec<TransitSegmentRecord>, BcaAppError> {
    let index = HeaderIndex::new(file, &headers(&mut reader, file)?);
    let cols = TransitColumns::new(&index)?;
    let mut segments = vec![];
    for (idx, row) in tqdm!(reader.records().enumerate(), desc = "read transit segments") {
        let record = row.map_err(csv_error(file))?;
        segments.push(read_segment(&index, &cols, &record, idx + 1)?);
    }
    log::info!("read {} transit segments from {file}", segments.len());
    Ok(segments)
}

fn read_segment(
    index: &HeaderIndex,
    cols: &TransitColumns,
    record: &csv::StringRecord,
    row: usize,
) -> Result<TransitSegmentRecord, NetworkTableError> {
    let f = |idx: usize| index.f64_at(record, row, idx);
    let period = TransitPeriod::try_from(index.i64_at(record, row, cols.period)?).map_err(
        |msg| NetworkTableError::UnknownTimePeriod {
            file: index.file().to_string(),
            row,
            msg,
        },
    )?;
    let mode_text = index.str_at(record, cols.mode);
    let mode = mode_text
        .parse::<TransitMode>()
        .map_err(|_| NetworkTableError::UnknownTransitMode {
            file: index.file().to_string(),
            row,
            mode: mode_text.to_string(),
        })?;
    Ok(TransitSegmentRecord {
        period,
        mode,
        length: Length::new::<mile>(f(cols.length)?),
        headway: Time::new::<minute>(f(cols.headway)?),
        ridership: f(cols.ridership)?,
        total_capacity: index.optional_f64_at(record, row, cols.total_capacity)?,
        seated_capacity: index.optional_f64_at(record, row, cols.seated_capacity)?,
        travel_time: Time::new::<minute>(f(cols.travel_time)?),
        zone: index.i64_at(record, row, cols.zone)?,
    })
}

pub fn read_transit_segments_file(path: &Path) -> Result<Vec<TransitSegmentRecord>, BcaAppError> {
    let reader = open_csv(path)?;
    read_transit_segments(reader, &path.to_string_lossy())
}

#[cfg(test)]
mod test {
    use super::read_transit_segments;
    use crate::app::BcaAppError;
    use rspbca_core::model::{
        network::NetworkTableError,
        transit::{TransitMode, TransitPeriod},
    };

    #[test]
    fn test_reads_model_headers() {
        let text = "timeperiod,mode,length,hdw,voltr,@tot_capacity,@seated_capacity,us1,@zone\n\
                    723,bus,2.0,10,30,70,40,6,12\n\
                    721,M,5.5,30,120,,,9.5,301\n";
        let segments = read_transit_segments(csv::Reader::from_reader(text.as_bytes()), "trn.csv")
            .expect("valid punch");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].period, TransitPeriod::Am);
        assert_eq!(segments[0].mode, TransitMode::Bus);
        assert_eq!(segments[0].headway_minutes(), 10.0);
        assert_eq!(segments[1].period, TransitPeriod::Night);
        assert_eq!(segments[1].mode, TransitMode::Rail);
        assert_eq!(segments[1].total_capacity, 0.0);
        assert_eq!(segments[1].zone, 301);
    }

    #[test]
    fn test_unknown_mode() {
        let text = "timeperiod,mode,length,headway,ridership_volume,travel_time_per_length,zone\n\
                    723,ferry,1,10,5,3,1\n";
        let result = read_transit_segments(csv::Reader::from_reader(text.as_bytes()), "trn.csv");
        assert!(matches!(
            result,
            Err(BcaAppError::NetworkTableError {
                source: NetworkTableError::UnknownTransitMode { row: 1, .. }
            })
        ));
    }
}
