//! Custom Test Assertions
//!
//! Assertion helpers for parse outcomes that give more meaningful error
//! messages than standard assertions.

use domain_identity::{NikDetails, NikParse};

/// Asserts the outcome is valid and returns its payload.
///
/// # Panics
///
/// Panics with the serialized outcome when it is invalid.
pub fn assert_parse_valid(outcome: &NikParse) -> &NikDetails {
    match outcome.details() {
        Some(details) => details,
        None => panic!(
            "expected a valid parse, got {}",
            serde_json::to_string(outcome).unwrap_or_else(|_| "<unserializable>".to_string())
        ),
    }
}

/// Asserts the outcome is the minimal invalid form: `{"valid": false}`
/// and nothing else.
pub fn assert_parse_invalid(outcome: &NikParse) {
    assert!(!outcome.is_valid(), "expected an invalid parse outcome");
    let value = serde_json::to_value(outcome).expect("outcome serializes");
    assert_eq!(
        value,
        serde_json::json!({"valid": false}),
        "invalid outcome must carry no payload"
    );
}

/// Asserts every component of the decoded born date, including the
/// composed `DD-MM-YYYY` form.
pub fn assert_born_date(details: &NikDetails, date: &str, month: &str, year: &str) {
    assert_eq!(details.born.date, date, "born day mismatch");
    assert_eq!(details.born.month, month, "born month mismatch");
    assert_eq!(details.born.year, year, "born year mismatch");
    assert_eq!(
        details.born.full,
        format!("{date}-{month}-{year}"),
        "composed born date mismatch"
    );
}

/// Asserts the JSON projection carries exactly the fields of the parse
/// payload, losslessly.
pub fn assert_lossless_projection(details: &NikDetails, value: &serde_json::Value) {
    let direct = serde_json::to_value(details).expect("details serialize");
    assert_eq!(
        &direct, value,
        "JSON projection diverged from the parse payload"
    );
}
