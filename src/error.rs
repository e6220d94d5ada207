use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("connection error: {0}")]
    Connection(String),

    /// Query and constraint failures, carried as Diesel reports them.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("application is not connected to a database")]
    NotConnected,
}

impl Error {
    /// True when the storage layer rejected a write because a foreign key
    /// did not resolve (or a still-referenced row was deleted).
    #[must_use]
    pub fn is_foreign_key_violation(&self) -> bool {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        match self {
            Error::Database(DieselError::DatabaseError(kind, info)) => {
                matches!(kind, DatabaseErrorKind::ForeignKeyViolation)
                    || info.message().contains("FOREIGN KEY constraint failed")
            }
            _ => false,
        }
    }

    /// True when a unique constraint (such as a duplicate brand name) was hit.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        match self {
            Error::Database(DieselError::DatabaseError(kind, info)) => {
                matches!(kind, DatabaseErrorKind::UniqueViolation)
                    || info.message().contains("UNIQUE constraint failed")
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
