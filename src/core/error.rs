/// Campusql Error Module
///
/// This module defines the error types for the campusql demo client.
/// It provides structured error handling with proper error propagation,
/// covering driver/connection faults, SQL execution faults, configuration
/// problems, and a catch-all for anything else.
use thiserror::Error;

/// Error type for the campusql demo client.
#[derive(Error, Debug)]
pub enum CampusqlError {
    /// Database-related errors from SQLite operations
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// SQL statement errors (syntax, execution, missing tables, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic application errors for unexpected conditions
    #[error("Application error: {0}")]
    App(String),
}

/// Type alias for Result to use CampusqlError as the error type.
///
/// This provides a consistent error type across the entire application
/// instead of using `Result<T, String>` or mixed error types.
pub type Result<T> = std::result::Result<T, CampusqlError>;
