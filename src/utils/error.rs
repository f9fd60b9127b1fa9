use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Data file not found: {path}")]
    NotFound { path: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl DataError {
    /// Prefix the field path of a validation error, e.g. turning
    /// `email` into `counselorList[2].email`. Other variants pass
    /// through unchanged.
    pub fn at_field(self, prefix: &str) -> Self {
        match self {
            DataError::Validation { field, reason } => DataError::Validation {
                field: format!("{prefix}.{field}"),
                reason,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
