//! Randomized model testing for the linked structures.
//!
//! Operations are generated from a seeded rng together with the result a std
//! collection gives for them, then replayed against the structure under test.

pub mod config;
pub mod logger;
pub mod tester;

pub use config::TesterConfig;
pub use tester::{run, OperationFailure};
