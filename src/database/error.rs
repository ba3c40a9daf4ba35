use std::time::Duration;

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures the store can hand back to a caller. Everything in here is recoverable
/// from the caller's point of view, the data service turns all of them into the
/// degraded payload.
#[derive(Debug, Error)]
pub enum StoreError {
    /// couldn't get a connection at all: refused, dns, tls, pool timed out or closed
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// the store answered but the statement or the decode failed
    #[error("query failed: {0}")]
    Query(String),
    #[error("query exceeded the {0:?} deadline")]
    Timeout(Duration),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err.to_string()),
            _ => StoreError::Query(err.to_string()),
        }
    }
}
