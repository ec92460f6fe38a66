use thiserror::Error;

/// Errors raised at the configuration boundary.
///
/// Queries on holidays and vacations never fail; only loading a
/// configuration snapshot or parsing caller-supplied strings can.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("unknown region code '{0}'")]
    UnknownRegion(String),
    #[error("invalid ISO date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
