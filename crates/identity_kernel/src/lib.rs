//! Identity Kernel - foundational types for the identity number toolkit
//!
//! This crate provides the building blocks used by the domain modules:
//! - The validated sixteen-digit identity number string and its fixed
//!   field offsets
//! - Elapsed-duration arithmetic for age and next-birthday calculations
//! - The kernel error type

pub mod digits;
pub mod temporal;
pub mod error;

pub use digits::{IdentityNumber, IDENTITY_NUMBER_LEN};
pub use temporal::{elapsed_breakdown, resolve_birth_year, two_digit_year, ElapsedBreakdown};
pub use error::KernelError;
