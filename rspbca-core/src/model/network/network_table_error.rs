use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkTableError {
    #[error("{file} is missing required column '{column}'")]
    MissingColumn { file: String, column: String },
    #[error("{file} row {row}: column '{column}' has unparseable value '{value}'")]
    InvalidValue {
        file: String,
        row: usize,
        column: String,
        value: String,
    },
    #[error("{file} row {row}: {msg}")]
    UnknownTimePeriod { file: String, row: usize, msg: String },
    #[error("{file} row {row}: unknown transit mode '{mode}', expected bus or rail")]
    UnknownTransitMode {
        file: String,
        row: usize,
        mode: String,
    },
    #[error("{file} contains no rows")]
    EmptyTable { file: String },
}
