//! Testing infrastructure for irlog integration tests.
//!
//! Provides `TestRoot`, a builder for isolated storage roots with pre-seeded
//! directory-form and standalone-form incidents.

pub mod fixtures;

pub use fixtures::TestRoot;
