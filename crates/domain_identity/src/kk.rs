//! KK (Kartu Keluarga) validation and parsing
//!
//! A family-card number encodes only the household's region. It shares
//! the region capability with NIK but carries none of the person-derived
//! facts; there is no birth date, gender, or sequence code to decode.

use std::sync::Arc;

use serde::Serialize;

use identity_kernel::{digits, IdentityNumber};
use infra_wilayah::RegionDirectory;

use crate::error::IdentityError;
use crate::region::{Address, RegionCoded};
use crate::validation;

/// A bound KK number and the directory it resolves against.
#[derive(Debug, Clone)]
pub struct Kk {
    number: IdentityNumber,
    directory: Arc<RegionDirectory>,
}

/// The decoded payload of a valid KK number.
#[derive(Debug, Clone, Serialize)]
pub struct KkDetails {
    pub number: String,
    pub address: Address,
    #[serde(rename = "postalCode")]
    pub postal_code: Option<String>,
    pub valid: bool,
}

/// Outcome of [`Kk::parse`]: `{"valid": false}` or the full payload.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum KkParse {
    Valid(KkDetails),
    Invalid { valid: bool },
}

impl KkParse {
    pub fn invalid() -> Self {
        KkParse::Invalid { valid: false }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, KkParse::Valid(_))
    }

    pub fn details(&self) -> Option<&KkDetails> {
        match self {
            KkParse::Valid(details) => Some(details),
            KkParse::Invalid { .. } => None,
        }
    }
}

impl Kk {
    /// Binds a KK number against the bundled region directory. Accepts
    /// strings or integers; non-sixteen-digit input is rejected here.
    pub fn new(value: impl ToString) -> Result<Self, IdentityError> {
        Self::with_directory(value, RegionDirectory::bundled()?)
    }

    /// Binds a KK number against a caller-supplied directory.
    pub fn with_directory(
        value: impl ToString,
        directory: Arc<RegionDirectory>,
    ) -> Result<Self, IdentityError> {
        let number = IdentityNumber::new(value)?;
        Ok(Self { number, directory })
    }

    /// The ungrouped digit string.
    pub fn raw_number(&self) -> &str {
        self.number.as_str()
    }

    /// The digits grouped four by four: `XXXX-XXXX-XXXX-XXXX`.
    pub fn formatted_number(&self) -> String {
        let raw = self.number.as_str();
        format!("{}-{}-{}-{}", &raw[0..4], &raw[4..8], &raw[8..12], &raw[12..16])
    }

    /// Format and region verdict, same rules as for NIK.
    pub fn validate(&self) -> bool {
        digits::is_well_formed(self.number.as_str()) && self.region_resolves()
    }

    /// Itemized diagnostic reasons, independent of [`Kk::validate`].
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = validation::shape_errors(self.number.as_str(), "KK number");
        errors.extend(validation::region_errors(self));
        errors
    }

    /// Full decode: region facts only, all-or-nothing.
    pub fn parse(&self) -> KkParse {
        if !self.validate() {
            return KkParse::invalid();
        }
        let Some(address) = self.address() else {
            return KkParse::invalid();
        };

        KkParse::Valid(KkDetails {
            number: self.raw_number().to_string(),
            address,
            postal_code: self.postal_code().map(str::to_string),
            valid: true,
        })
    }

    /// The parse payload as a plain JSON map, lossless against
    /// [`Kk::parse`].
    pub fn to_value(&self) -> Result<serde_json::Value, IdentityError> {
        Ok(serde_json::to_value(self.parse())?)
    }
}

impl RegionCoded for Kk {
    fn digits(&self) -> &IdentityNumber {
        &self.number
    }

    fn directory(&self) -> &RegionDirectory {
        &self.directory
    }
}
