/// Core Module for campusql
///
/// This module contains the fundamental components shared by the demo
/// pipeline: the database connection handle, statement execution helpers,
/// and error handling.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{CampusqlError, Result};
