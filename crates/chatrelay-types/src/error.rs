use thiserror::Error;

/// Errors from chat operations.
///
/// The display strings of the first three variants are part of the HTTP
/// contract and must not change.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat session not found")]
    SessionNotFound,

    #[error("Invalid role")]
    InvalidRole,

    #[error("No previous user message found for AI reply")]
    NoPriorUserMessage,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors from repository operations (used by the trait definitions in
/// chatrelay-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("environment variable {0} has an invalid value")]
    InvalidVar(&'static str),
}
