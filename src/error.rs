use sea_orm::DbErr;

/// Error type returned by repository operations.
///
/// A missing row on a single-record lookup is not an error: those
/// operations return `Option::None` instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Ordered finders need at least one column to order by
    #[error("column to order by must be present")]
    UnspecifiedOrdering,

    // JSON payload that does not normalize into column values
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    // Unrecovered mapper or driver error, passed through unchanged
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Result type alias for repository operations
pub type RepoResult<T> = Result<T, Error>;
