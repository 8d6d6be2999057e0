use super::reader_ops::{csv_error, open_csv};
use crate::app::BcaAppError;
use rspbca_core::model::parameters::{ParameterError, ParameterTable};
use std::{io::Read, path::Path};

/// reads a parameter listing. the header row is skipped, the first column
/// holds the name and the second the value; any further columns (such as
/// descriptions) are ignored.
pub fn read_parameter_table<R: Read>(
    mut reader: csv::Reader<R>,
    file: &str,
) -> Result<ParameterTable, BcaAppError> {
    let mut rows = vec![];
    for (idx, row) in reader.records().enumerate() {
        let record = row.map_err(csv_error(file))?;
        if record.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        match (record.get(0), record.get(1)) {
            (Some(name), Some(value)) if !name.trim().is_empty() => {
                rows.push((name.to_string(), value.to_string()))
            }
            _ => return Err(ParameterError::MalformedRow(idx + 1).into()),
        }
    }
    let table = ParameterTable::from_rows(rows)?;
    log::info!("read {} parameters from {file}", table.len());
    Ok(table)
}

pub fn read_parameter_table_file(path: &Path) -> Result<ParameterTable, BcaAppError> {
    let reader = open_csv(path)?;
    read_parameter_table(reader, &path.to_string_lossy())
}
