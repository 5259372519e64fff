use scylla::errors::{ExecutionError, NewSessionError, UseKeyspaceError};

/// Error type for every lexical search operation
///
/// Local faults (`InvalidInput`, `UnknownIndexKind`) are raised before a
/// statement reaches the session. Everything else comes back from the
/// session handle and is passed through untouched.
#[derive(Debug, thiserror::Error)]
pub enum LexicalSearchError {
    /// Caller supplied a malformed field list, key list or row
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Index kind name did not match any known index implementation
    #[error("Unknown index kind: {0}")]
    UnknownIndexKind(String),

    #[error("Cassandra error: {0}")]
    NewSession(#[from] NewSessionError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Keyspace error: {0}")]
    UseKeyspace(#[from] UseKeyspaceError),

    /// Result set could not be materialised into rows
    #[error("Rows error: {0}")]
    Rows(String),

    /// Failure reported by a non-scylla session handle
    #[error("Session error: {0}")]
    Session(String),

    #[cfg(feature = "config")]
    #[error("Configuration error: {0}")]
    Config(#[from] core_config::ConfigError),
}

/// Result type alias for lexical search operations
pub type LexicalSearchResult<T> = Result<T, LexicalSearchError>;
