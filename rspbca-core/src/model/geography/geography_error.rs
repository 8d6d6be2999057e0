use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeographyError {
    #[error("{file} line {line}: expected 'l=<inode>,<jnode>', found '{text}'")]
    MalformedSelectLink {
        file: String,
        line: usize,
        text: String,
    },
    #[error("{file} is missing required column '{column}'")]
    MissingColumn { file: String, column: String },
    #[error("{file} row {row}: column '{column}' has unparseable value '{value}'")]
    InvalidValue {
        file: String,
        row: usize,
        column: String,
        value: String,
    },
}
