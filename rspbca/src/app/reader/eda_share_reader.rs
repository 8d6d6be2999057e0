use super::{
    open_csv,
    reader_ops::{csv_error, headers},
    HeaderIndex,
};
use crate::app::BcaAppError;
use rspbca_core::model::{emissions::EdaZoneShares, geography::GeographyError};
use std::{io::Read, path::Path};

/// reads the share of each zone's population living in an EDA
/// (columns o_zone, EDAshare).
pub fn read_eda_zone_shares<R: Read>(
    mut reader: csv::Reader<R>,
    file: &str,
) -> Result<EdaZoneShares, BcaAppError> {
    let index = HeaderIndex::new(file, &headers(&mut reader, file)?);
    let zone_col = index
        .require(&["o_zone", "zone"])
        .map_err(GeographyError::from)?;
    let share_col = index
        .require(&["EDAshare", "eda_share"])
        .map_err(GeographyError::from)?;
    let mut rows = vec![];
    for (idx, row) in reader.records().enumerate() {
        let record = row.map_err(csv_error(file))?;
        let row = idx + 1;
        let zone = index
            .i64_at(&record, row, zone_col)
            .map_err(GeographyError::from)?;
        let share = index
            .f64_at(&record, row, share_col)
            .map_err(GeographyError::from)?;
        rows.push((zone, share));
    }
    let shares = EdaZoneShares::from_rows(rows);
    log::info!("read EDA population shares for {} zones from {file}", shares.len());
    Ok(shares)
}

pub fn read_eda_zone_shares_file(path: &Path) -> Result<EdaZoneShares, BcaAppError> {
    let reader = open_csv(path)?;
    read_eda_zone_shares(reader, &path.to_string_lossy())
}

#[cfg(test)]
mod test {
    use super::read_eda_zone_shares;

    #[test]
    fn test_reads_shares() {
        let text = "o_zone,EDAshare\n1,0.25\n2,1.0\n";
        let shares = read_eda_zone_shares(csv::Reader::from_reader(text.as_bytes()), "eda.csv")
            .expect("valid shares");
        assert_eq!(shares.len(), 2);
        assert_eq!(shares.share(1), Some(0.25));
        assert_eq!(shares.share(3), None);
    }

    #[test]
    fn test_missing_share_column() {
        let text = "o_zone,share\n1,0.25\n";
        assert!(read_eda_zone_shares(csv::Reader::from_reader(text.as_bytes()), "eda.csv").is_err());
    }
}
