//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! identity toolkit test suite.
//!
//! # Modules
//!
//! - `fixtures`: Known numbers, instants, and directory documents
//! - `builders`: Builder for composing digit strings field by field
//! - `assertions`: Assertion helpers for parse outcomes
//! - `generators`: Property-based input generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
