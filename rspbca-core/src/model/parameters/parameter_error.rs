use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParameterError {
    #[error("parameter table is missing required parameter '{0}'")]
    MissingParameter(String),
    #[error("parameter '{name}' has non-numeric value '{value}'")]
    InvalidValue { name: String, value: String },
    #[error("parameter table row {0} is missing a name or value column")]
    MalformedRow(usize),
}
