//! Core library for the `apicheck` CLI.
//!
//! This crate provides the pieces the binary is assembled from: a session
//! that binds an HTTP client to one base URL, the user model and its schema
//! checks, seed and random-user fixtures with guaranteed teardown, and the
//! catalog of conformance checks with its sequential runner. The checks can
//! be driven from the `apicheck` command line or embedded in other test
//! suites through [`suite::run_suite`].
pub mod args;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod routes;
pub mod session;
pub mod suite;
