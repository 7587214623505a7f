use thiserror::Error;

/// Result alias for every primitive operation
pub type DbResult<T> = Result<T, DbError>;

/// Errors raised by drivers, filters or the terminal call
///
/// The dispatch engine itself never constructs these: it is invocation
/// plumbing, not a fault boundary. Whatever a filter or the wrapped
/// primitive raises propagates through the chain unchanged.
#[derive(Debug, Error, Clone)]
pub enum DbError {
    #[error("driver error: {0}")]
    Driver(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("parameter error: {0}")]
    Parameter(String),

    #[error("operation rejected by filter: {0}")]
    Rejected(String),
}

impl DbError {
    pub fn driver(message: impl Into<String>) -> Self {
        DbError::Driver(message.into())
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        DbError::InvalidOperation(message.into())
    }

    pub fn parameter(message: impl Into<String>) -> Self {
        DbError::Parameter(message.into())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        DbError::Rejected(message.into())
    }
}
