//! Game module tests.
//!
//! Tests are organized into separate files by category:
//! - `notation.rs` - Coordinate notation parsing and round-trips
//! - `validation.rs` - Legality pipeline and shape rules
//! - `execution.rs` - Move side effects and turn advancement
//! - `removal.rs` - Deferred capture removal and win detection
//! - `scenarios.rs` - End-to-end fixed positions
//! - `proptest.rs` - Property-based tests

mod execution;
mod removal;
