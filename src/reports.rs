//! The fixed reporting queries.
//!
//! Five read-only reports make up the whole reporting surface. Each one
//! prepares a literal SQL constant, iterates the result set into typed rows,
//! and renders every row in the `key=value, key2=value2` stdout format. The
//! class-name lookups in [`female_existentialism_students`] and
//! [`eldest_labour_law_student`] are case- and string-exact; a name that
//! matches nothing yields an empty result, not an error.

use crate::core::{CampusqlError, Result};
use rusqlite::Connection;
use std::fmt;
use tracing::info;

const ALL_STUDENTS_SQL: &str = "SELECT pkey, name FROM student";

const UNENROLLED_STUDENTS_SQL: &str = "SELECT * FROM student s \
     WHERE s.pkey NOT IN ( \
     SELECT DISTINCT fkey_student FROM enrollment \
     )";

const FEMALE_EXISTENTIALISM_SQL: &str = "SELECT DISTINCT pkey, name \
     FROM student s \
     JOIN enrollment e ON e.fkey_student = s.pkey \
     WHERE s.sex = 'female' AND e.fkey_class = ( \
     SELECT pkey \
     FROM class \
     WHERE name = 'Existentialism in 20th century' \
     )";

const FACULTIES_WITHOUT_ENROLLMENTS_SQL: &str = "SELECT f.name \
     FROM faculty f \
     JOIN class c ON c.fkey_faculty = f.pkey \
     WHERE c.pkey NOT IN ( \
     SELECT fkey_class \
     FROM enrollment \
     )";

const ELDEST_LABOUR_LAW_SQL: &str = "SELECT MAX( s.age ) AS max_age \
     FROM student s \
     WHERE s.pkey IN ( \
     SELECT e.fkey_student \
     FROM enrollment e \
     WHERE e.fkey_class IN ( \
     SELECT c.pkey \
     FROM class c \
     WHERE c.name = 'Introduction to labour law' \
     ) \
     )";

/// A (pkey, name) pair from the student table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub pkey: i64,
    pub name: String,
}

impl fmt::Display for StudentRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pkey={}, name={}", self.pkey, self.name)
    }
}

/// A faculty name row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyRow {
    pub name: String,
}

impl fmt::Display for FacultyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name={}", self.name)
    }
}

/// Report 1: every person registered as a student, as (pkey, name).
pub fn all_students(conn: &Connection) -> Result<Vec<StudentRow>> {
    info!("{}", ALL_STUDENTS_SQL);
    collect_student_rows(conn, ALL_STUDENTS_SQL)
}

/// Report 2: students whose pkey appears in no enrollment row.
pub fn unenrolled_students(conn: &Connection) -> Result<Vec<StudentRow>> {
    info!("{}", UNENROLLED_STUDENTS_SQL);
    collect_student_rows(conn, UNENROLLED_STUDENTS_SQL)
}

/// Report 3: distinct female students enrolled in the class named exactly
/// "Existentialism in 20th century".
pub fn female_existentialism_students(conn: &Connection) -> Result<Vec<StudentRow>> {
    info!("{}", FEMALE_EXISTENTIALISM_SQL);
    collect_student_rows(conn, FEMALE_EXISTENTIALISM_SQL)
}

/// Report 4: faculties none of whose classes appear in any enrollment.
pub fn faculties_without_enrollments(conn: &Connection) -> Result<Vec<FacultyRow>> {
    info!("{}", FACULTIES_WITHOUT_ENROLLMENTS_SQL);
    let mut stmt = conn
        .prepare(FACULTIES_WITHOUT_ENROLLMENTS_SQL)
        .map_err(|e| CampusqlError::Query(format!("Failed to prepare statement: {}", e)))?;

    let rows = stmt
        .query_map([], |row| Ok(FacultyRow { name: row.get("name")? }))
        .map_err(|e| CampusqlError::Query(format!("Query execution failed: {}", e)))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| CampusqlError::Query(format!("Result processing failed: {}", e)))?;

    Ok(rows)
}

/// Report 5: the maximum age among students enrolled in the class named
/// exactly "Introduction to labour law".
///
/// The SQL aggregate produces a single row whose `max_age` is NULL when no
/// student qualifies (or the class does not exist); that case is surfaced as
/// `None` and rendered as zero output lines.
pub fn eldest_labour_law_student(conn: &Connection) -> Result<Option<i64>> {
    info!("{}", ELDEST_LABOUR_LAW_SQL);
    conn.query_row(ELDEST_LABOUR_LAW_SQL, [], |row| row.get::<_, Option<i64>>("max_age"))
        .map_err(|e| CampusqlError::Query(format!("Query execution failed: {}", e)))
}

fn collect_student_rows(conn: &Connection, sql: &str) -> Result<Vec<StudentRow>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| CampusqlError::Query(format!("Failed to prepare statement: {}", e)))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(StudentRow {
                pkey: row.get("pkey")?,
                name: row.get("name")?,
            })
        })
        .map_err(|e| CampusqlError::Query(format!("Query execution failed: {}", e)))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| CampusqlError::Query(format!("Result processing failed: {}", e)))?;

    Ok(rows)
}
