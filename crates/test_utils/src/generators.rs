//! Property-based Input Generators
//!
//! Proptest strategies for well-formed and malformed identity number
//! candidates.

use identity_kernel::IDENTITY_NUMBER_LEN;
use proptest::prelude::*;

/// A string of exactly `len` ASCII digits.
pub fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[0-9]{{{len}}}"))
        .expect("digit regex is valid")
}

/// Any well-formed sixteen-digit candidate.
pub fn well_formed_number() -> impl Strategy<Value = String> {
    digit_string(IDENTITY_NUMBER_LEN)
}

/// Candidates that must be rejected by the construction gate: wrong
/// lengths and digit strings polluted with a letter.
pub fn malformed_number() -> impl Strategy<Value = String> {
    prop_oneof![
        digit_string(15),
        digit_string(17),
        proptest::string::string_regex("[0-9]{0,14}").expect("regex is valid"),
        proptest::string::string_regex("[0-9]{7}[a-zA-Z][0-9]{8}").expect("regex is valid"),
    ]
}
