//! Startup smoke probe for the framedock storage core.
//!
//! # Responsibility
//! - Resolve the per-user data directory, bring up logging, open +
//!   migrate the database, and print status, independently from the
//!   GUI shell.

use framedock_core::{default_log_level, init_logging, AppService};
use std::path::PathBuf;
use std::process::ExitCode;

const APP_DIR_NAME: &str = "framedock";

fn main() -> ExitCode {
    let data_dir = match resolve_data_dir() {
        Some(dir) => dir,
        None => {
            eprintln!("error: could not determine a per-user data directory");
            return ExitCode::FAILURE;
        }
    };

    let log_dir = data_dir.join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        // Logging is diagnostics only; a failed bootstrap must not block
        // the database.
        eprintln!("warning: logging disabled: {err}");
    }

    let service = match AppService::open(&data_dir) {
        Ok(service) => service,
        Err(err) => {
            // A migration failure leaves the schema in an unknown state;
            // refuse to continue instead of running against it.
            eprintln!("error: failed to initialize database: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("framedock_core version={}", framedock_core::core_version());
    match service.db_path() {
        Some(path) => println!("database initialized at {}", path.display()),
        None => println!("database initialized in memory"),
    }

    if let Err(err) = service.close() {
        eprintln!("error: failed to close database: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// `FRAMEDOCK_DATA_DIR` overrides the platform directory for local testing.
fn resolve_data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("FRAMEDOCK_DATA_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}
