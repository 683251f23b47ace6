//! The demo driver.
//!
//! `DemoRunner` walks the fixed linear sequence on a single connection:
//! connect, create the schema, seed it, run the five reports, drop the
//! schema, disconnect. The only branch is the connect check; a failed
//! connect skips everything else. Every later step has its own logged
//! failure boundary, so a broken step never stops the sequence from
//! reaching teardown. Statements are synchronous: each call returns only
//! once SQLite has completed it, so no settling delay is needed between
//! steps.

use crate::core::db::connection::Database;
use crate::reports;
use crate::schema::{self, StatementOutcome};
use crate::seed;
use rusqlite::Connection;
use tracing::warn;

/// Success/failure tally for one phase of the run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl PhaseSummary {
    fn from_outcomes(outcomes: &[StatementOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.succeeded()).count();
        PhaseSummary {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// What happened during a full demo run.
///
/// `connected == false` means the run aborted before touching the database;
/// otherwise every phase was attempted and its tally recorded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub connected: bool,
    pub schema_created: PhaseSummary,
    pub rows_seeded: PhaseSummary,
    pub reports: PhaseSummary,
    pub schema_dropped: PhaseSummary,
    pub disconnected: bool,
}

impl RunSummary {
    /// True when every phase ran and every statement in it succeeded.
    pub fn is_complete(&self) -> bool {
        self.connected
            && self.disconnected
            && self.schema_created.is_complete()
            && self.rows_seeded.is_complete()
            && self.reports.is_complete()
            && self.schema_dropped.is_complete()
    }
}

/// Drives the fixed demo sequence against one database handle.
#[derive(Debug)]
pub struct DemoRunner {
    db: Database,
}

impl DemoRunner {
    pub fn new(db: Database) -> Self {
        DemoRunner { db }
    }

    /// Runs the full sequence and reports what happened.
    ///
    /// Report rows are printed to stdout as they are produced; everything
    /// else goes to the log.
    pub fn run(&mut self) -> RunSummary {
        let mut summary = RunSummary::default();

        if let Err(e) = self.db.connect() {
            warn!("{}", e);
            return summary;
        }
        summary.connected = true;

        {
            // The handle stays open across the whole sequence; a connection
            // that vanishes mid-run would be a bug in this runner.
            let conn = match self.db.connection() {
                Ok(conn) => conn,
                Err(e) => {
                    warn!("{}", e);
                    return summary;
                }
            };

            summary.schema_created = PhaseSummary::from_outcomes(&schema::create_schema(conn));
            summary.rows_seeded = PhaseSummary::from_outcomes(&seed::seed_data(conn));
            summary.reports = self.run_reports(conn);
            summary.schema_dropped = PhaseSummary::from_outcomes(&schema::drop_schema(conn));
        }

        match self.db.disconnect() {
            Ok(()) => summary.disconnected = true,
            Err(e) => warn!("{}", e),
        }

        summary
    }

    /// Runs the five reports, each in its own failure boundary. A failed
    /// report logs a warning and produces no rows; the rest still run.
    fn run_reports(&self, conn: &Connection) -> PhaseSummary {
        let mut phase = PhaseSummary::default();

        match reports::all_students(conn) {
            Ok(rows) => {
                print_rows(&rows);
                phase.succeeded += 1;
            }
            Err(e) => {
                warn!("{}", e);
                phase.failed += 1;
            }
        }

        match reports::unenrolled_students(conn) {
            Ok(rows) => {
                print_rows(&rows);
                phase.succeeded += 1;
            }
            Err(e) => {
                warn!("{}", e);
                phase.failed += 1;
            }
        }

        match reports::female_existentialism_students(conn) {
            Ok(rows) => {
                print_rows(&rows);
                phase.succeeded += 1;
            }
            Err(e) => {
                warn!("{}", e);
                phase.failed += 1;
            }
        }

        match reports::faculties_without_enrollments(conn) {
            Ok(rows) => {
                print_rows(&rows);
                phase.succeeded += 1;
            }
            Err(e) => {
                warn!("{}", e);
                phase.failed += 1;
            }
        }

        match reports::eldest_labour_law_student(conn) {
            Ok(max_age) => {
                if let Some(age) = max_age {
                    println!("max_age={}", age);
                }
                phase.succeeded += 1;
            }
            Err(e) => {
                warn!("{}", e);
                phase.failed += 1;
            }
        }

        phase
    }
}

fn print_rows<T: std::fmt::Display>(rows: &[T]) {
    for row in rows {
        println!("{}", row);
    }
}
