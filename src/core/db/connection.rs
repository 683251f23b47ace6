/// Connection Management Module
///
/// This module provides the database session handle for the demo run. The
/// connection is acquired once at the start of the sequence and held for the
/// whole program lifetime; statement handles are scoped per operation.

use crate::core::{CampusqlError, Result};
use rusqlite::Connection;
use tracing::info;

/// Owned handle for the demo's single database session.
///
/// The target is fixed at construction time (a file path, or `:memory:` for
/// an in-memory database). `connect` and `disconnect` report failure through
/// `Result`; the caller decides whether a failure aborts the run.
#[derive(Debug)]
pub struct Database {
    /// Database location, e.g. "campus.db" or ":memory:"
    target: String,
    /// Active connection (None if disconnected)
    connection: Option<Connection>,
}

impl Database {
    /// Creates a disconnected handle for the given target.
    pub fn new(target: impl Into<String>) -> Self {
        Database {
            target: target.into(),
            connection: None,
        }
    }

    /// Opens a session against the configured target.
    ///
    /// Foreign key enforcement is switched on so the schema's referential
    /// constraints actually hold. Connections start in auto-commit mode and
    /// the demo never opens an explicit transaction, so every statement
    /// commits immediately.
    ///
    /// # Errors
    ///
    /// Returns `CampusqlError::Database` if the target cannot be opened or
    /// the pragma setup fails. No session is left open on failure.
    pub fn connect(&mut self) -> Result<()> {
        let conn = Connection::open(&self.target)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        debug_assert!(conn.is_autocommit());

        info!("Connection to database {} established.", self.target);
        self.connection = Some(conn);
        Ok(())
    }

    /// Closes the current session.
    ///
    /// # Errors
    ///
    /// Returns `CampusqlError::App` if there is no open session, or
    /// `CampusqlError::Database` if SQLite refuses to close it (the handle
    /// is restored in that case).
    pub fn disconnect(&mut self) -> Result<()> {
        let conn = self
            .connection
            .take()
            .ok_or_else(|| CampusqlError::App("no open connection to close".to_string()))?;

        if let Err((conn, e)) = conn.close() {
            self.connection = Some(conn);
            return Err(CampusqlError::Database(e));
        }

        info!("Connection to database {} closed.", self.target);
        Ok(())
    }

    /// Returns the live connection, or an error when disconnected.
    pub fn connection(&self) -> Result<&Connection> {
        self.connection
            .as_ref()
            .ok_or_else(|| CampusqlError::App("not connected to a database".to_string()))
    }

    /// Checks if there's an active database session.
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// The configured database location.
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_and_disconnect() {
        let mut db = Database::new(":memory:");
        assert!(!db.is_connected());

        db.connect().unwrap();
        assert!(db.is_connected());
        assert!(db.connection().is_ok());

        db.disconnect().unwrap();
        assert!(!db.is_connected());
        assert!(db.connection().is_err());
    }

    #[test]
    fn test_connect_failure_leaves_handle_disconnected() {
        let mut db = Database::new("/nonexistent/path/campus.db");
        let result = db.connect();

        assert!(result.is_err());
        match result.unwrap_err() {
            CampusqlError::Database(_) => {}
            other => panic!("Expected Database error, got {other:?}"),
        }
        assert!(!db.is_connected());
    }

    #[test]
    fn test_disconnect_without_session() {
        let mut db = Database::new(":memory:");
        let result = db.disconnect();

        assert!(result.is_err());
        match result.unwrap_err() {
            CampusqlError::App(_) => {}
            other => panic!("Expected App error, got {other:?}"),
        }
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let mut db = Database::new(":memory:");
        db.connect().unwrap();

        let enabled: i64 = db
            .connection()
            .unwrap()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_autocommit_mode() {
        let mut db = Database::new(":memory:");
        db.connect().unwrap();
        assert!(db.connection().unwrap().is_autocommit());
    }
}
