/// Database Module
///
/// This module provides the database layer for campusql, split into two
/// concerns:
/// - **Connection Management** (`connection.rs`): opening and closing the
///   session against the configured target
/// - **Statement Execution** (`query.rs`): running SQL statements and
///   collecting result rows
///
/// All operations use the standardized `CampusqlError` type for consistent
/// error propagation.
pub mod connection;
pub mod query;

pub use connection::*;
pub use query::*;
