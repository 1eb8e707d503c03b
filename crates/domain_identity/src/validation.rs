//! Diagnostic validation messages
//!
//! `validate()` answers yes or no; this module produces the itemized
//! human-readable reasons behind a "no". The wording is part of the
//! external contract and matches it verbatim.

use identity_kernel::IDENTITY_NUMBER_LEN;

use crate::region::RegionCoded;

/// Shape diagnostics for a raw candidate string.
///
/// `label` names the number kind in the messages ("NIK" or "KK number").
/// Unlike the hard construction gate, this path reports every problem it
/// finds instead of stopping at the first one.
pub fn shape_errors(raw: &str, label: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if raw.len() != IDENTITY_NUMBER_LEN {
        errors.push(format!("{label} must be exactly 16 digits"));
    }
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        errors.push(format!("{label} must contain only digits"));
    }
    errors
}

/// Region diagnostics shared by NIK and KK.
pub(crate) fn region_errors(subject: &impl RegionCoded) -> Vec<String> {
    let mut errors = Vec::new();
    if subject.province().is_none() {
        errors.push("Invalid province code".to_string());
    }
    if subject.city().is_none() {
        errors.push("Invalid city code".to_string());
    }
    if subject.sub_district().is_none() {
        errors.push("Invalid sub-district code".to_string());
    }
    errors
}
