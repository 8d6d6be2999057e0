use super::Pollutant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmissionsError {
    #[error("rate table {file} is missing required column '{column}'")]
    MissingColumn { file: String, column: String },
    #[error("rate table {file} has no recognized rate column, expected one of {expected}")]
    MissingRateColumn { file: String, expected: String },
    #[error("{file} row {row}: column '{column}' has unparseable value '{value}'")]
    InvalidValue {
        file: String,
        row: usize,
        column: String,
        value: String,
    },
    #[error("emissions mode '{mode}' requires a {pollutant} rate table")]
    MissingRateTable { mode: String, pollutant: Pollutant },
    #[error("emissions mode 'eda_weighted' requires an EDA zone share file")]
    MissingZoneShares,
}
