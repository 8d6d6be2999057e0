mod parameter_error;
mod parameter_table;
mod parameters;

pub use parameter_error::ParameterError;
pub use parameter_table::ParameterTable;
pub use parameters::{present_value_deflator, Parameters};

#[cfg(test)]
pub(crate) use parameters::test::{test_parameters, test_table};
