//! The check catalog and the sequential runner that executes it.
mod assertions;
mod catalog;
mod checks;
mod report;
mod runner;


pub use catalog::{CheckCase, CheckKind, INVALID_IDS, NONEXISTENT_IDS, catalog, select};
pub use report::{CheckOutcome, CheckStatus, SuiteReport};
pub use runner::{SEED_TEARDOWN_CHECK, run_suite};
