use campusql::config;
use campusql::core::db::connection::Database;
use campusql::runner::DemoRunner;
use tracing::{info, warn};

fn main() {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt::init();

    info!("Starting campusql demo run...");

    // No CLI flags: the sequence is fixed, and the only knob is the
    // optional config file in the working directory.
    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            warn!("{}", e);
            config::Config::default()
        }
    };

    let mut runner = DemoRunner::new(Database::new(config.database_path()));
    let summary = runner.run();

    if summary.is_complete() {
        info!("Demo run completed: {:?}", summary);
    } else {
        warn!("Demo run finished with failures: {:?}", summary);
    }
}
