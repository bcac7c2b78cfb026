use thiserror::Error;

/// Error kinds surfaced by session operations.
///
/// Every failure is detected at the operation boundary, before any session
/// state is touched. The message is meant to be shown to the caller verbatim.
#[derive(Error, Debug)]
pub enum ClusterError {
    /// An operation required a dataset or existing clustering state that
    /// does not exist yet.
    #[error("not initialized: {0}")]
    NotInitialized(String),

    /// Malformed parameters: unknown initialization method, bad cluster
    /// count, or a manual centroid list that does not match `k`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An initializer produced no usable centroid set. Unreachable with
    /// validated input; not retried.
    #[error("centroid initialization failed: {0}")]
    InitializationFailure(String),
}

pub type Result<T> = std::result::Result<T, ClusterError>;
