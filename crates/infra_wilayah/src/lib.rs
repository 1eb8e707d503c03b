//! Wilayah Infrastructure Layer
//!
//! This crate loads the static wilayah (administrative region) document
//! that maps numeric code prefixes to region names:
//!
//! - `province`: 2-digit code to province name
//! - `city`: 4-digit code to city/regency name
//! - `subDistrict`: 6-digit code to a `name--postalCode` composite
//!
//! The document is read once at construction into an immutable
//! [`RegionDirectory`]; a missing or unparsable source is a fatal
//! configuration error. Lookups on a loaded directory never fail, they
//! return `None` for codes that resolve nowhere.
//!
//! A default dataset is bundled with the crate and shared process-wide
//! through [`RegionDirectory::bundled`].

pub mod directory;
pub mod error;

pub use directory::{RegionDirectory, RegionLevel, SubDistrictEntry};
pub use error::WilayahError;
