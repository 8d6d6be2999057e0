use rspbca_core::model::{
    emissions::EmissionsError, geography::GeographyError, network::NetworkTableError,
};

/// a column lookup or cell parse failure, converted into the error type of
/// whichever table was being read.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    MissingColumn {
        file: String,
        column: String,
    },
    InvalidValue {
        file: String,
        row: usize,
        column: String,
        value: String,
    },
}

impl From<FieldError> for NetworkTableError {
    fn from(value: FieldError) -> Self {
        match value {
            FieldError::MissingColumn { file, column } => {
                NetworkTableError::MissingColumn { file, column }
            }
            FieldError::InvalidValue {
                file,
                row,
                column,
                value,
            } => NetworkTableError::InvalidValue {
                file,
                row,
                column,
                value,
            },
        }
    }
}

impl From<FieldError> for GeographyError {
    fn from(value: FieldError) -> Self {
        match value {
            FieldError::MissingColumn { file, column } => {
                GeographyError::MissingColumn { file, column }
            }
            FieldError::InvalidValue {
                file,
                row,
                column,
                value,
            } => GeographyError::InvalidValue {
                file,
                row,
                column,
                value,
            },
        }
    }
}

impl From<FieldError> for EmissionsError {
    fn from(value: FieldError) -> Self {
        match value {
            FieldError::MissingColumn { file, column } => {
                EmissionsError::MissingColumn { file, column }
            }
            FieldError::InvalidValue {
                file,
                row,
                column,
                value,
            } => EmissionsError::InvalidValue {
                file,
                row,
                column,
                value,
            },
        }
    }
}
