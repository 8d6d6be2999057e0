use crate::app::BcaAppError;
use std::{fs::File, path::Path};

/// opens a headed csv file. rows may have differing lengths.
pub fn open_csv(path: &Path) -> Result<csv::Reader<File>, BcaAppError> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| BcaAppError::CsvReadError {
            file: path.to_string_lossy().to_string(),
            source: e,
        })
}

pub fn read_to_string(path: &Path) -> Result<String, BcaAppError> {
    std::fs::read_to_string(path).map_err(|e| BcaAppError::FileReadError {
        file: path.to_string_lossy().to_string(),
        source: e,
    })
}

/// header row of an open reader
pub(crate) fn headers<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    file: &str,
) -> Result<csv::StringRecord, BcaAppError> {
    reader
        .headers()
        .cloned()
        .map_err(|e| BcaAppError::CsvReadError {
            file: file.to_string(),
            source: e,
        })
}

pub(crate) fn csv_error(file: &str) -> impl Fn(csv::Error) -> BcaAppError + '_ {
    move |e| BcaAppError::CsvReadError {
        file: file.to_string(),
        source: e,
    }
}
