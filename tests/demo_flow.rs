//! End-to-end tests for the demo sequence: schema lifecycle, seed counts,
//! and the exact rows each report returns against the fixed dataset.

use campusql::reports;
use campusql::schema::{all_succeeded, create_schema, drop_schema};
use campusql::seed::{count_rows, seed_data};
use rusqlite::Connection;

fn open_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
    conn
}

fn seeded_connection() -> Connection {
    let conn = open_connection();
    assert!(all_succeeded(&create_schema(&conn)));
    assert!(all_succeeded(&seed_data(&conn)));
    conn
}

#[test]
fn schema_lifecycle_creates_and_drops_all_tables() {
    let conn = open_connection();

    assert!(all_succeeded(&create_schema(&conn)));
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 4);

    assert!(all_succeeded(&drop_schema(&conn)));
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 0);
}

#[test]
fn seed_produces_expected_row_counts() {
    let conn = seeded_connection();

    assert_eq!(count_rows(&conn, "student").unwrap(), 4);
    assert_eq!(count_rows(&conn, "faculty").unwrap(), 4);
    assert_eq!(count_rows(&conn, "class").unwrap(), 5);
    assert_eq!(count_rows(&conn, "enrollment").unwrap(), 9);
}

#[test]
fn report_rows_match_the_fixed_dataset() {
    let conn = seeded_connection();

    let students = reports::all_students(&conn).unwrap();
    let names: Vec<(i64, &str)> = students.iter().map(|r| (r.pkey, r.name.as_str())).collect();
    assert_eq!(
        names,
        vec![
            (1, "John Smith"),
            (2, "Rebecca Milson"),
            (3, "George Heartbreaker"),
            (4, "Deepika Chopra"),
        ]
    );

    let unenrolled = reports::unenrolled_students(&conn).unwrap();
    assert_eq!(unenrolled.len(), 1);
    assert_eq!(unenrolled[0].pkey, 3);
    assert_eq!(unenrolled[0].name, "George Heartbreaker");

    let mut females = reports::female_existentialism_students(&conn).unwrap();
    females.sort_by_key(|r| r.pkey);
    let names: Vec<(i64, &str)> = females.iter().map(|r| (r.pkey, r.name.as_str())).collect();
    assert_eq!(names, vec![(2, "Rebecca Milson"), (4, "Deepika Chopra")]);

    let faculties = reports::faculties_without_enrollments(&conn).unwrap();
    assert_eq!(faculties.len(), 1);
    assert_eq!(faculties[0].name, "Engineering");

    assert_eq!(reports::eldest_labour_law_student(&conn).unwrap(), Some(25));
}

#[test]
fn reseeding_succeeds_after_full_teardown() {
    let conn = seeded_connection();

    assert!(all_succeeded(&drop_schema(&conn)));
    assert!(all_succeeded(&create_schema(&conn)));
    assert!(all_succeeded(&seed_data(&conn)));

    assert_eq!(count_rows(&conn, "student").unwrap(), 4);
    assert_eq!(count_rows(&conn, "enrollment").unwrap(), 9);
}

#[test]
fn recreating_live_schema_surfaces_every_collision() {
    let conn = seeded_connection();

    let outcomes = create_schema(&conn);
    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(|o| !o.succeeded()));

    // The existing schema and data survive the failed re-create.
    assert_eq!(count_rows(&conn, "student").unwrap(), 4);
}
