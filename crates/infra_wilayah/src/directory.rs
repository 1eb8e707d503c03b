//! The immutable region code directory

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;

use crate::error::WilayahError;

/// Delimiter between a sub-district name and its postal code in the
/// source document.
const POSTAL_DELIMITER: &str = "--";

/// Raw shape of the wilayah document.
#[derive(Debug, Deserialize)]
struct WilayahDocument {
    province: HashMap<String, String>,
    city: HashMap<String, String>,
    #[serde(rename = "subDistrict")]
    sub_district: HashMap<String, String>,
}

/// A sub-district entry, split once at load time from its
/// `name--postalCode` composite form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDistrictEntry {
    pub name: String,
    /// Absent when the composite carries no second half. Not an error.
    pub postal_code: Option<String>,
}

impl SubDistrictEntry {
    fn from_composite(raw: &str) -> Self {
        match raw.split_once(POSTAL_DELIMITER) {
            Some((name, postal)) => {
                let postal = postal.trim();
                Self {
                    name: name.trim().to_string(),
                    postal_code: (!postal.is_empty()).then(|| postal.to_string()),
                }
            }
            None => Self {
                name: raw.trim().to_string(),
                postal_code: None,
            },
        }
    }
}

/// The code domains of the directory, keyed by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionLevel {
    Province,
    City,
    SubDistrict,
}

impl RegionLevel {
    /// Width of the numeric key for this level.
    pub fn code_width(&self) -> usize {
        match self {
            RegionLevel::Province => 2,
            RegionLevel::City => 4,
            RegionLevel::SubDistrict => 6,
        }
    }
}

/// Immutable mapping from numeric region codes to human-readable names.
///
/// Loaded once at construction and never mutated; validators share a
/// directory through an `Arc`.
#[derive(Debug)]
pub struct RegionDirectory {
    provinces: HashMap<String, String>,
    cities: HashMap<String, String>,
    sub_districts: HashMap<String, SubDistrictEntry>,
}

impl RegionDirectory {
    /// Parses a directory from a JSON document string.
    pub fn from_json(source: &str) -> Result<Self, WilayahError> {
        let document: WilayahDocument =
            serde_json::from_str(source).map_err(|e| WilayahError::parse(e.to_string()))?;

        let sub_districts: HashMap<String, SubDistrictEntry> = document
            .sub_district
            .into_iter()
            .map(|(code, raw)| (code, SubDistrictEntry::from_composite(&raw)))
            .collect();

        debug!(
            provinces = document.province.len(),
            cities = document.city.len(),
            sub_districts = sub_districts.len(),
            "loaded wilayah directory"
        );

        Ok(Self {
            provinces: document.province,
            cities: document.city,
            sub_districts,
        })
    }

    /// Loads a directory from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WilayahError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(WilayahError::NotFound(path.display().to_string()));
        }
        let source = fs::read_to_string(path).map_err(|e| WilayahError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&source)
    }

    /// The dataset bundled with the crate, loaded once and shared
    /// process-wide.
    pub fn bundled() -> Result<Arc<RegionDirectory>, WilayahError> {
        static BUNDLED: Lazy<Result<Arc<RegionDirectory>, WilayahError>> = Lazy::new(|| {
            RegionDirectory::from_json(include_str!("../assets/wilayah.json")).map(Arc::new)
        });
        (*BUNDLED).clone()
    }

    /// Province name for a 2-digit code.
    pub fn province(&self, code: &str) -> Option<&str> {
        self.provinces.get(code).map(String::as_str)
    }

    /// City name for a 4-digit code.
    pub fn city(&self, code: &str) -> Option<&str> {
        self.cities.get(code).map(String::as_str)
    }

    /// Sub-district entry for a 6-digit code.
    pub fn sub_district(&self, code: &str) -> Option<&SubDistrictEntry> {
        self.sub_districts.get(code)
    }

    /// Name lookup across the three code domains.
    pub fn lookup(&self, level: RegionLevel, code: &str) -> Option<&str> {
        match level {
            RegionLevel::Province => self.province(code),
            RegionLevel::City => self.city(code),
            RegionLevel::SubDistrict => self.sub_district(code).map(|e| e.name.as_str()),
        }
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn sub_district_count(&self) -> usize {
        self.sub_districts.len()
    }
}
