//! The validated sixteen-digit identity number string
//!
//! NIK and KK numbers share one physical shape: exactly sixteen ASCII
//! digits. `IdentityNumber` proves that shape at construction time, so the
//! fixed-offset field accessors below can never fail and never need to be
//! guarded by callers.
//!
//! Field layout (0-indexed, inclusive offsets):
//!
//! | Offsets | Field                          |
//! |---------|--------------------------------|
//! | 0-1     | province code                  |
//! | 0-3     | city code                      |
//! | 0-5     | sub-district code              |
//! | 6-7     | day of birth (female +40)      |
//! | 8-9     | month of birth                 |
//! | 10-11   | two-digit year of birth        |
//! | 12-15   | registration sequence (NIK)    |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::KernelError;

/// Exact length of a NIK or KK number.
pub const IDENTITY_NUMBER_LEN: usize = 16;

/// Returns true when the raw string has the identity number shape:
/// exactly sixteen ASCII decimal digits.
pub fn is_well_formed(raw: &str) -> bool {
    raw.len() == IDENTITY_NUMBER_LEN && raw.bytes().all(|b| b.is_ascii_digit())
}

/// A sixteen-digit identity number, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IdentityNumber(String);

impl IdentityNumber {
    /// Builds an identity number from anything stringifiable.
    ///
    /// Integers are accepted alongside strings; the decimal rendering must
    /// still be exactly sixteen digits. Anything else is rejected here,
    /// before any field extraction can happen.
    pub fn new(value: impl ToString) -> Result<Self, KernelError> {
        let raw = value.to_string();
        if !is_well_formed(&raw) {
            return Err(KernelError::malformed(format!(
                "expected exactly {} digits, got {:?}",
                IDENTITY_NUMBER_LEN, raw
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Province code, digits 0-1.
    pub fn province_code(&self) -> &str {
        &self.0[0..2]
    }

    /// City code, digits 0-3. Extends the province code.
    pub fn city_code(&self) -> &str {
        &self.0[0..4]
    }

    /// Sub-district code, digits 0-5.
    pub fn sub_district_code(&self) -> &str {
        &self.0[0..6]
    }

    /// Raw day-of-birth field, digits 6-7, as a number.
    ///
    /// Female birth days are offset by 40 in this field; resolving the
    /// offset is the domain layer's job.
    pub fn day_field(&self) -> u32 {
        self.numeric(6, 8)
    }

    /// Month-of-birth digits 8-9, raw.
    pub fn month_field(&self) -> &str {
        &self.0[8..10]
    }

    /// Two-digit year field, digits 10-11.
    pub fn year_field(&self) -> u32 {
        self.numeric(10, 12)
    }

    /// Registration-order sequence code, digits 12-15. Meaningful for NIK
    /// only; KK numbers have no equivalent concept.
    pub fn sequence_code(&self) -> &str {
        &self.0[12..16]
    }

    fn numeric(&self, start: usize, end: usize) -> u32 {
        self.0[start..end]
            .parse()
            .expect("all characters were validated as digits at construction")
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IdentityNumber {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for IdentityNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
