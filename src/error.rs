//! Error types for plusar
//!
//! The stream core has exactly one failure mode: asking for a value that is
//! not there. Everything else in a pipeline is total.

/// Main error type for stream and optional operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A value was requested from an empty `Optional`, either directly or
    /// through a terminal `collect()` whose pull came back absent.
    #[error("attempt to access value of an empty optional")]
    EmptyAccess,
}

/// Result type for plusar operations
pub type StreamResult<T> = Result<T, StreamError>;
