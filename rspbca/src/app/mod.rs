pub mod bca;
mod bca_app;
mod bca_app_error;
pub mod mode_ops;
pub mod reader;
mod run_configuration;
pub mod writer;

pub use bca_app::{BcaApp, BcaOperation};
pub use bca_app_error::BcaAppError;
pub use run_configuration::{GeographySource, RateTableFiles, RunConfiguration};
