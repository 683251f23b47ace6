//! Fixed seed dataset and parameterized insertion.
//!
//! The demo always loads the same 19 rows: 4 students, 4 faculties,
//! 5 classes, and 9 enrollments. Values are bound as statement parameters,
//! never concatenated into the SQL text.

use crate::core::db::query::QueryResult;
use crate::core::{CampusqlError, Result};
use crate::schema::StatementOutcome;
use rusqlite::{params, Connection};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy)]
pub struct Student {
    pub pkey: i64,
    pub name: &'static str,
    pub sex: &'static str,
    pub age: i64,
    pub level: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct Faculty {
    pub pkey: i64,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Class {
    pub pkey: i64,
    pub name: &'static str,
    pub fkey_faculty: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct Enrollment {
    pub fkey_student: i64,
    pub fkey_class: i64,
}

pub const STUDENTS: [Student; 4] = [
    Student { pkey: 1, name: "John Smith", sex: "male", age: 23, level: 2 },
    Student { pkey: 2, name: "Rebecca Milson", sex: "female", age: 27, level: 3 },
    Student { pkey: 3, name: "George Heartbreaker", sex: "male", age: 19, level: 1 },
    Student { pkey: 4, name: "Deepika Chopra", sex: "female", age: 25, level: 3 },
];

pub const FACULTIES: [Faculty; 4] = [
    Faculty { pkey: 100, name: "Engineering" },
    Faculty { pkey: 101, name: "Philosophy" },
    Faculty { pkey: 102, name: "Law and administration" },
    Faculty { pkey: 103, name: "Languages" },
];

pub const CLASSES: [Class; 5] = [
    Class { pkey: 1000, name: "Introduction to labour law", fkey_faculty: 102 },
    Class { pkey: 1001, name: "Graph algorithms", fkey_faculty: 100 },
    Class { pkey: 1002, name: "Existentialism in 20th century", fkey_faculty: 101 },
    Class { pkey: 1003, name: "English grammar", fkey_faculty: 103 },
    Class { pkey: 1004, name: "From Plato to Kant", fkey_faculty: 101 },
];

pub const ENROLLMENTS: [Enrollment; 9] = [
    Enrollment { fkey_student: 1, fkey_class: 1000 },
    Enrollment { fkey_student: 1, fkey_class: 1002 },
    Enrollment { fkey_student: 1, fkey_class: 1003 },
    Enrollment { fkey_student: 1, fkey_class: 1004 },
    Enrollment { fkey_student: 2, fkey_class: 1002 },
    Enrollment { fkey_student: 2, fkey_class: 1003 },
    Enrollment { fkey_student: 4, fkey_class: 1000 },
    Enrollment { fkey_student: 4, fkey_class: 1002 },
    Enrollment { fkey_student: 4, fkey_class: 1003 },
];

/// Inserts the fixed dataset, one outcome per row.
///
/// Tables are loaded in dependency order (students and faculties before
/// classes, classes before enrollments) so foreign keys resolve. Each insert
/// has its own failure boundary; a failed row is recorded and the remaining
/// rows are still attempted.
pub fn seed_data(conn: &Connection) -> Vec<StatementOutcome> {
    let mut outcomes = Vec::with_capacity(19);

    for student in &STUDENTS {
        outcomes.push(insert_row(
            conn,
            "INSERT INTO student VALUES(?,?,?,?,?)",
            params![student.pkey, student.name, student.sex, student.age, student.level],
            format!(
                "INSERT INTO student VALUES ( {}, {}, {}, {}, {} )",
                student.pkey, student.name, student.sex, student.age, student.level
            ),
        ));
    }

    for faculty in &FACULTIES {
        outcomes.push(insert_row(
            conn,
            "INSERT INTO faculty VALUES(?,?)",
            params![faculty.pkey, faculty.name],
            format!("INSERT INTO faculty VALUES ( {}, {} )", faculty.pkey, faculty.name),
        ));
    }

    for class in &CLASSES {
        outcomes.push(insert_row(
            conn,
            "INSERT INTO class VALUES(?,?,?)",
            params![class.pkey, class.name, class.fkey_faculty],
            format!(
                "INSERT INTO class VALUES ( {}, {}, {} )",
                class.pkey, class.name, class.fkey_faculty
            ),
        ));
    }

    for enrollment in &ENROLLMENTS {
        outcomes.push(insert_row(
            conn,
            "INSERT INTO enrollment VALUES(?,?)",
            params![enrollment.fkey_student, enrollment.fkey_class],
            format!(
                "INSERT INTO enrollment VALUES ( {}, {} )",
                enrollment.fkey_student, enrollment.fkey_class
            ),
        ));
    }

    outcomes
}

fn insert_row(
    conn: &Connection,
    sql: &str,
    values: &[&dyn rusqlite::ToSql],
    label: String,
) -> StatementOutcome {
    let result = conn
        .execute(sql, values)
        .map_err(|e| CampusqlError::Query(format!("Insert failed: {}", e)));
    match &result {
        Ok(_) => info!("{}", label),
        Err(e) => warn!("{} failed: {}", label, e),
    }
    StatementOutcome { label, result }
}

/// Row count for one of the dataset tables. Test and verification helper.
pub fn count_rows(conn: &Connection, table: &str) -> Result<i64> {
    // Table names come from the fixed schema, never from external input.
    let result: QueryResult =
        crate::core::db::query::run_query(conn, &format!("SELECT COUNT(*) FROM {}", table))?;
    result.rows[0][0]
        .parse::<i64>()
        .map_err(|e| CampusqlError::App(format!("unparseable count: {}", e)))
}
