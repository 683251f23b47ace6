/// Statement Execution Module
///
/// This module provides helpers for running SQL statements against an open
/// connection: SELECTs collected into a `QueryResult`, and DDL/DML
/// statements returning their affected-row count.

use crate::core::{CampusqlError, Result};
use rusqlite::{types::ValueRef, Connection};

/// Represents the result of a SQL query execution
#[derive(Debug)]
pub struct QueryResult {
    /// Column names from the query result
    pub columns: Vec<String>,
    /// Rows of data as string values
    pub rows: Vec<Vec<String>>,
    /// Number of rows returned
    pub row_count: usize,
}

impl QueryResult {
    /// Creates a new QueryResult from column names and row data
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let row_count = rows.len();
        QueryResult {
            columns,
            rows,
            row_count,
        }
    }
}

/// Executes a SELECT statement and collects the full result set.
///
/// # Errors
///
/// Returns `CampusqlError::Query` if the SQL cannot be prepared or the
/// database operation fails.
pub fn run_query(conn: &Connection, sql: &str) -> Result<QueryResult> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| CampusqlError::Query(format!("Failed to prepare statement: {}", e)))?;

    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let column_count = stmt.column_count();

    let rows = stmt
        .query_map([], |row| {
            let mut values = Vec::new();
            for i in 0..column_count {
                let value_ref = row.get_ref(i)?;
                values.push(format_value(value_ref));
            }
            Ok(values)
        })
        .map_err(|e| CampusqlError::Query(format!("Query execution failed: {}", e)))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| CampusqlError::Query(format!("Result processing failed: {}", e)))?;

    Ok(QueryResult::new(columns, rows))
}

/// Executes a non-SELECT statement (DDL or unparameterized DML).
///
/// # Errors
///
/// Returns `CampusqlError::Query` if the statement fails.
pub fn run_statement(conn: &Connection, sql: &str) -> Result<usize> {
    conn.execute(sql, [])
        .map_err(|e| CampusqlError::Query(format!("Statement execution failed: {}", e)))
}

/// Formats a SQLite value for display
fn format_value(value: ValueRef) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).to_string(),
        ValueRef::Blob(b) => format!("<BLOB: {} bytes>", b.len()),
    }
}
