//! Pre-built Test Fixtures
//!
//! Known numbers, evaluation instants, and directory documents shared
//! across the test suite. All values are fixed so assertions on derived
//! dates never depend on when the suite runs.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use infra_wilayah::RegionDirectory;

/// Fixture for identity number strings
pub struct NumberFixtures;

impl NumberFixtures {
    /// Bandung-registered male NIK, born 25 January 1999.
    pub const VALID_NIK: &'static str = "3273012501990001";

    /// The same record with the female day offset applied (raw day 65).
    pub const VALID_NIK_FEMALE: &'static str = "3273016501990001";

    /// Well-shaped number whose region codes resolve nowhere.
    pub const UNKNOWN_REGION: &'static str = "9999999999999999";

    /// Well-shaped number whose province resolves but city and
    /// sub-district do not.
    pub const PARTIAL_REGION: &'static str = "1234567890123456";

    /// A valid KK number (same region prefix as the reference NIK).
    pub const VALID_KK: &'static str = "3273012501990001";

    /// Fifteen digits: one short.
    pub const TOO_SHORT: &'static str = "327301250199000";

    /// Seventeen digits: one long.
    pub const TOO_LONG: &'static str = "32730125019900011";

    /// Sixteen characters, two of them letters.
    pub const NON_DIGIT: &'static str = "32730125019900AB";
}

/// Fixture for evaluation instants
pub struct InstantFixtures;

impl InstantFixtures {
    /// The suite's reference "now": 2024-06-15T12:00:00Z.
    pub fn mid_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// An instant whose two-digit year sits below the reference NIK's
    /// embedded 99, for century-resolution tests.
    pub fn early_2022() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap()
    }
}

/// Fixture for region directory documents
pub struct DirectoryFixtures;

impl DirectoryFixtures {
    /// Minimal in-memory wilayah document covering only the Bandung
    /// reference codes.
    pub fn minimal() -> Arc<RegionDirectory> {
        let document = r#"{
            "province": {"32": "Jawa Barat"},
            "city": {"3273": "Kota Bandung"},
            "subDistrict": {"327301": "Sukasari--40152"}
        }"#;
        Arc::new(RegionDirectory::from_json(document).expect("fixture document parses"))
    }

    /// A document whose sub-district entries carry no postal codes.
    pub fn without_postal_codes() -> Arc<RegionDirectory> {
        let document = r#"{
            "province": {"32": "Jawa Barat"},
            "city": {"3273": "Kota Bandung"},
            "subDistrict": {"327301": "Sukasari"}
        }"#;
        Arc::new(RegionDirectory::from_json(document).expect("fixture document parses"))
    }
}
