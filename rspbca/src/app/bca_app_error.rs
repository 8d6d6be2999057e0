use rspbca_core::model::{
    emissions::EmissionsError, geography::GeographyError, network::NetworkTableError,
    parameters::ParameterError, rsp_mode::RunModeError,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BcaAppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid run configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failure reading {file}: {source}")]
    FileReadError {
        file: String,
        source: std::io::Error,
    },
    #[error("failure writing {file}: {source}")]
    FileWriteError {
        file: String,
        source: std::io::Error,
    },
    #[error("failure reading csv {file}: {source}")]
    CsvReadError { file: String, source: csv::Error },
    #[error("failure writing csv {file}: {source}")]
    CsvWriteError { file: String, source: csv::Error },
    #[error("failure loading parameters: {source}")]
    ParameterError {
        #[from]
        source: ParameterError,
    },
    #[error(transparent)]
    NetworkTableError {
        #[from]
        source: NetworkTableError,
    },
    #[error(transparent)]
    GeographyError {
        #[from]
        source: GeographyError,
    },
    #[error(transparent)]
    EmissionsError {
        #[from]
        source: EmissionsError,
    },
    #[error("failure detecting RSP mode: {source}")]
    RunModeError {
        #[from]
        source: RunModeError,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
