//! NIK (Nomor Induk Kependudukan) validation and parsing

use std::sync::Arc;

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::Serialize;

use identity_kernel::{digits, IdentityNumber};
use infra_wilayah::RegionDirectory;

use crate::error::IdentityError;
use crate::facts::{self, Age, BornDate, Gender, NextBirthday};
use crate::region::{Address, RegionCoded};
use crate::validation;
use crate::zodiac::Zodiac;

/// A bound NIK: the validated digit string, the region directory it
/// resolves against, and the evaluation instant for date-derived facts.
///
/// Derived facts are computed on first access and held in write-once
/// cells for the lifetime of the instance. Recomputing any of them yields
/// the same value, so a racing first write is benign.
#[derive(Debug, Clone)]
pub struct Nik {
    number: IdentityNumber,
    directory: Arc<RegionDirectory>,
    evaluated_at: DateTime<Utc>,
    gender: OnceCell<Gender>,
    born: OnceCell<BornDate>,
    age: OnceCell<Age>,
    next_birthday: OnceCell<NextBirthday>,
}

/// The full decoded payload of a valid NIK.
#[derive(Debug, Clone, Serialize)]
pub struct NikDetails {
    pub number: String,
    #[serde(rename = "uniqueCode")]
    pub unique_code: String,
    pub gender: Gender,
    pub born: BornDate,
    pub age: Age,
    #[serde(rename = "nextBirthday")]
    pub next_birthday: NextBirthday,
    pub zodiac: Zodiac,
    pub address: Address,
    #[serde(rename = "postalCode")]
    pub postal_code: Option<String>,
    pub valid: bool,
}

/// Outcome of [`Nik::parse`].
///
/// Serializes to either `{"valid": false}` or the full payload. The
/// invalid arm deliberately carries nothing; partial payloads are never
/// produced.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum NikParse {
    Valid(NikDetails),
    Invalid { valid: bool },
}

impl NikParse {
    pub fn invalid() -> Self {
        NikParse::Invalid { valid: false }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, NikParse::Valid(_))
    }

    pub fn details(&self) -> Option<&NikDetails> {
        match self {
            NikParse::Valid(details) => Some(details),
            NikParse::Invalid { .. } => None,
        }
    }
}

impl Nik {
    /// Binds a NIK against the bundled region directory, evaluated at the
    /// current instant.
    ///
    /// Accepts strings or integers. Anything whose rendering is not
    /// exactly sixteen digits is rejected here, before any field access;
    /// a missing or corrupt region dataset is equally fatal.
    pub fn new(value: impl ToString) -> Result<Self, IdentityError> {
        Self::with_directory(value, RegionDirectory::bundled()?)
    }

    /// Binds a NIK against a caller-supplied directory.
    pub fn with_directory(
        value: impl ToString,
        directory: Arc<RegionDirectory>,
    ) -> Result<Self, IdentityError> {
        let number = IdentityNumber::new(value)?;
        Ok(Self {
            number,
            directory,
            evaluated_at: Utc::now(),
            gender: OnceCell::new(),
            born: OnceCell::new(),
            age: OnceCell::new(),
            next_birthday: OnceCell::new(),
        })
    }

    /// Rebinds the evaluation instant, dropping any cached facts so they
    /// are recomputed against the new "now".
    pub fn evaluated_at(mut self, instant: DateTime<Utc>) -> Self {
        self.evaluated_at = instant;
        self.clear_cache();
        self
    }

    /// Drops the cached derived facts; the next access recomputes them.
    pub fn clear_cache(&mut self) {
        self.gender.take();
        self.born.take();
        self.age.take();
        self.next_birthday.take();
    }

    /// The raw digit string.
    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    /// Two-digit year field, digits 10-11.
    pub fn year_field(&self) -> u32 {
        self.number.year_field()
    }

    /// Raw day field, digits 6-7, before the female offset is removed.
    pub fn day_field(&self) -> u32 {
        self.number.day_field()
    }

    /// Registration sequence code, digits 12-15.
    pub fn unique_code(&self) -> &str {
        self.number.sequence_code()
    }

    pub fn gender(&self) -> Gender {
        *self.gender.get_or_init(|| facts::gender(&self.number))
    }

    pub fn born_date(&self) -> &BornDate {
        self.born
            .get_or_init(|| facts::born_date(&self.number, self.evaluated_at))
    }

    /// Age at the evaluation instant.
    ///
    /// Fails only when the date digits describe no calendar date, which
    /// can happen on numbers whose region codes still resolve.
    pub fn age(&self) -> Result<Age, IdentityError> {
        self.age
            .get_or_try_init(|| facts::age(self.born_date(), self.evaluated_at))
            .copied()
            .map_err(Into::into)
    }

    /// Countdown to the next birthday anniversary.
    pub fn next_birthday(&self) -> Result<NextBirthday, IdentityError> {
        self.next_birthday
            .get_or_try_init(|| facts::next_birthday(self.born_date(), self.evaluated_at))
            .copied()
            .map_err(Into::into)
    }

    pub fn zodiac(&self) -> Zodiac {
        Zodiac::for_born_date(self.born_date())
    }

    /// Format and region verdict: the shape guaranteed at construction is
    /// re-asserted, and all three region prefixes must resolve.
    pub fn validate(&self) -> bool {
        digits::is_well_formed(self.number.as_str()) && self.region_resolves()
    }

    /// Itemized diagnostic reasons, independent of [`Nik::validate`].
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = validation::shape_errors(self.number.as_str(), "NIK");
        errors.extend(validation::region_errors(self));
        errors
    }

    /// Full decode.
    ///
    /// An invalid number produces the minimal outcome with no payload; a
    /// valid one produces every derived fact. Nothing in between.
    pub fn parse(&self) -> Result<NikParse, IdentityError> {
        if !self.validate() {
            return Ok(NikParse::invalid());
        }
        let Some(address) = self.address() else {
            return Ok(NikParse::invalid());
        };

        Ok(NikParse::Valid(NikDetails {
            number: self.number().to_string(),
            unique_code: self.unique_code().to_string(),
            gender: self.gender(),
            born: self.born_date().clone(),
            age: self.age()?,
            next_birthday: self.next_birthday()?,
            zodiac: self.zodiac(),
            address,
            postal_code: self.postal_code().map(str::to_string),
            valid: true,
        }))
    }

    /// The parse payload as a plain JSON map, lossless against
    /// [`Nik::parse`].
    pub fn to_value(&self) -> Result<serde_json::Value, IdentityError> {
        Ok(serde_json::to_value(self.parse()?)?)
    }
}

impl RegionCoded for Nik {
    fn digits(&self) -> &IdentityNumber {
        &self.number
    }

    fn directory(&self) -> &RegionDirectory {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const VALID_NIK: &str = "3273012501990001";
    const UNKNOWN_REGION: &str = "9999999999999999";

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn nik(raw: &str) -> Nik {
        Nik::new(raw).unwrap().evaluated_at(fixed_instant())
    }

    #[test]
    fn constructs_from_string_and_integer() {
        assert_eq!(Nik::new(VALID_NIK).unwrap().number(), VALID_NIK);
        assert_eq!(Nik::new(3273012501990001u64).unwrap().number(), VALID_NIK);
    }

    #[test]
    fn construction_rejects_malformed_input() {
        assert!(Nik::new("327301250199000").is_err());
        assert!(Nik::new("32730125019900AB").is_err());
    }

    #[test]
    fn raw_field_accessors() {
        let nik = nik(VALID_NIK);
        assert_eq!(nik.year_field(), 99);
        assert_eq!(nik.day_field(), 25);
        assert_eq!(nik.unique_code(), "0001");
    }

    #[test]
    fn validates_against_the_bundled_directory() {
        assert!(nik(VALID_NIK).validate());
        assert!(!nik(UNKNOWN_REGION).validate());
    }

    #[test]
    fn region_accessors_return_none_for_unknown_codes() {
        let nik = nik(UNKNOWN_REGION);
        assert_eq!(nik.province(), None);
        assert_eq!(nik.city(), None);
        assert_eq!(nik.sub_district(), None);
        assert_eq!(nik.postal_code(), None);
    }

    #[test]
    fn parse_produces_the_full_payload() {
        let outcome = nik(VALID_NIK).parse().unwrap();
        let details = outcome.details().expect("valid NIK parses to details");
        assert_eq!(details.number, VALID_NIK);
        assert_eq!(details.unique_code, "0001");
        assert_eq!(details.gender, Gender::Male);
        assert_eq!(details.born.full, "25-01-1999");
        assert_eq!(details.zodiac, Zodiac::Aquarius);
        assert_eq!(details.address.province, "Jawa Barat");
        assert_eq!(details.address.city, "Kota Bandung");
        assert_eq!(details.address.sub_district, "Sukasari");
        assert_eq!(details.postal_code.as_deref(), Some("40152"));
        assert!(details.valid);
    }

    #[test]
    fn parse_of_invalid_number_carries_nothing() {
        let outcome = nik(UNKNOWN_REGION).parse().unwrap();
        assert!(!outcome.is_valid());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({"valid": false})
        );
    }

    #[test]
    fn female_day_offset_is_resolved() {
        let nik = nik("3273016501990001");
        assert_eq!(nik.gender(), Gender::Female);
        assert_eq!(nik.born_date().date, "25");
    }

    #[test]
    fn derived_accessors_are_idempotent() {
        let nik = nik(VALID_NIK);
        let first_age = nik.age().unwrap();
        let first_born = nik.born_date().clone();
        assert_eq!(nik.age().unwrap(), first_age);
        assert_eq!(nik.born_date(), &first_born);
        assert_eq!(nik.next_birthday().unwrap(), nik.next_birthday().unwrap());
    }

    #[test]
    fn rebinding_the_instant_recomputes_the_born_year() {
        // Embedded year 23 reads as 2023 from 2024, but as 1923 from 2022,
        // when 23 is still the future.
        let nik = nik("3273012501230001");
        assert_eq!(nik.born_date().year, "2023");

        let nik = nik.evaluated_at(Utc.with_ymd_and_hms(2022, 6, 15, 0, 0, 0).unwrap());
        assert_eq!(nik.born_date().year, "1923");
    }

    #[test]
    fn clear_cache_leaves_values_unchanged_for_the_same_instant() {
        let mut nik = nik(VALID_NIK);
        let before = nik.born_date().clone();
        let age_before = nik.age().unwrap();
        nik.clear_cache();
        assert_eq!(nik.born_date(), &before);
        assert_eq!(nik.age().unwrap(), age_before);
    }

    #[test]
    fn validation_errors_for_unknown_region() {
        let errors = nik(UNKNOWN_REGION).validation_errors();
        assert_eq!(
            errors,
            vec![
                "Invalid province code",
                "Invalid city code",
                "Invalid sub-district code"
            ]
        );
    }

    #[test]
    fn validation_errors_empty_for_valid_number() {
        assert!(nik(VALID_NIK).validation_errors().is_empty());
    }

    #[test]
    fn to_value_is_lossless_against_parse() {
        let nik = nik(VALID_NIK);
        let value = nik.to_value().unwrap();
        let direct = serde_json::to_value(nik.parse().unwrap()).unwrap();
        assert_eq!(value, direct);
        assert_eq!(value["uniqueCode"], "0001");
        assert_eq!(value["born"]["full"], "25-01-1999");
        assert_eq!(value["gender"], "LAKI-LAKI");
        assert_eq!(value["address"]["subDistrict"], "Sukasari");
        assert_eq!(value["valid"], true);
    }
}
