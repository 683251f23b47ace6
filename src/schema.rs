//! Schema management for the campus enrollment dataset.
//!
//! Four tables with foreign-key relationships: `student` and `faculty` stand
//! alone, `class` references `faculty`, and `enrollment` joins `student` and
//! `class` many-to-many. Creation runs in dependency order and teardown in
//! reverse, so referenced tables always exist before their dependents.
//!
//! The DDL text is compile-time constant and never interpolates external
//! input; only the seed inserts carry runtime values, and those are bound as
//! parameters.

use crate::core::db::query::run_statement;
use crate::core::Result;
use rusqlite::Connection;
use tracing::{info, warn};

const CREATE_TABLE_STUDENT: &str = "CREATE TABLE student ( \
     pkey INTEGER NOT NULL PRIMARY KEY, \
     name VARCHAR(50), \
     sex VARCHAR(7), \
     age INTEGER NOT NULL, \
     level INTEGER \
     )";

const CREATE_TABLE_FACULTY: &str = "CREATE TABLE faculty ( \
     pkey INTEGER NOT NULL PRIMARY KEY, \
     name VARCHAR(50) \
     )";

const CREATE_TABLE_CLASS: &str = "CREATE TABLE class ( \
     pkey INTEGER NOT NULL PRIMARY KEY, \
     name VARCHAR(50), \
     fkey_faculty INTEGER, \
     FOREIGN KEY(fkey_faculty) REFERENCES faculty(pkey) \
     )";

const CREATE_TABLE_ENROLLMENT: &str = "CREATE TABLE enrollment ( \
     fkey_student INTEGER, \
     fkey_class INTEGER, \
     FOREIGN KEY(fkey_student) REFERENCES student(pkey), \
     FOREIGN KEY(fkey_class) REFERENCES class(pkey) \
     )";

/// CREATE statements in dependency order: foreign-key targets first.
const CREATE_TABLES: [(&str, &str); 4] = [
    ("student", CREATE_TABLE_STUDENT),
    ("faculty", CREATE_TABLE_FACULTY),
    ("class", CREATE_TABLE_CLASS),
    ("enrollment", CREATE_TABLE_ENROLLMENT),
];

/// DROP order is the reverse: dependents before their targets.
const DROP_TABLES: [&str; 4] = ["enrollment", "class", "faculty", "student"];

/// Outcome of one statement in a multi-statement operation.
///
/// Schema creation, teardown, and seeding each issue several independent
/// statements. Every statement gets its own failure boundary and its own
/// entry in the returned outcome list, so callers can tell a fully
/// successful batch from a partial one instead of losing the tail of the
/// batch to the first error.
#[derive(Debug)]
pub struct StatementOutcome {
    /// Short label for the statement, e.g. "CREATE TABLE student"
    pub label: String,
    /// Execution result: affected-row count or the statement's error
    pub result: Result<usize>,
}

impl StatementOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Checks whether every statement in a batch succeeded.
pub fn all_succeeded(outcomes: &[StatementOutcome]) -> bool {
    outcomes.iter().all(StatementOutcome::succeeded)
}

/// Creates the four dataset tables in dependency order.
///
/// Each CREATE runs independently; a failure is recorded in that statement's
/// outcome and the remaining statements still execute.
pub fn create_schema(conn: &Connection) -> Vec<StatementOutcome> {
    CREATE_TABLES
        .iter()
        .map(|(table, sql)| {
            let label = format!("CREATE TABLE {}", table);
            let result = run_statement(conn, sql);
            match &result {
                Ok(_) => info!("{}", label),
                Err(e) => warn!("{} failed: {}", label, e),
            }
            StatementOutcome { label, result }
        })
        .collect()
}

/// Drops the four dataset tables in reverse dependency order.
///
/// Same per-statement outcome contract as [`create_schema`].
pub fn drop_schema(conn: &Connection) -> Vec<StatementOutcome> {
    DROP_TABLES
        .iter()
        .map(|table| {
            let label = format!("DROP TABLE {}", table);
            let result = run_statement(conn, &label);
            match &result {
                Ok(_) => info!("{}", label),
                Err(e) => warn!("{} failed: {}", label, e),
            }
            StatementOutcome { label, result }
        })
        .collect()
}
