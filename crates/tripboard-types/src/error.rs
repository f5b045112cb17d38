use std::fmt;

use crate::domain::PointId;

/// Result type for tripboard-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Point interval is inverted (end before start)
    InvalidInterval {
        date_from: chrono::DateTime<chrono::Utc>,
        date_to: chrono::DateTime<chrono::Utc>,
    },
    /// Mutation addressed a point id the collection does not contain
    UnknownPoint(PointId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInterval { date_from, date_to } => write!(
                f,
                "invalid interval: ends {} before it starts {}",
                date_to.to_rfc3339(),
                date_from.to_rfc3339()
            ),
            Error::UnknownPoint(id) => write!(f, "unknown point: {}", id),
        }
    }
}

impl std::error::Error for Error {}
