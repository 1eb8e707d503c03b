//! Region-coded number capability
//!
//! NIK and KK numbers share the region prefix scheme; this trait exposes
//! the directory-backed lookups over it. Person-derived facts are not
//! part of the capability and attach only to `Nik`.

use serde::Serialize;

use identity_kernel::IdentityNumber;
use infra_wilayah::RegionDirectory;

/// Resolved administrative region of a valid number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub province: String,
    pub city: String,
    #[serde(rename = "subDistrict")]
    pub sub_district: String,
}

/// A sixteen-digit number whose leading digits encode an administrative
/// region, resolved against a shared directory.
pub trait RegionCoded {
    fn digits(&self) -> &IdentityNumber;

    fn directory(&self) -> &RegionDirectory;

    /// Province name, if the 2-digit prefix resolves.
    fn province(&self) -> Option<&str> {
        self.directory().province(self.digits().province_code())
    }

    /// City name, if the 4-digit prefix resolves.
    fn city(&self) -> Option<&str> {
        self.directory().city(self.digits().city_code())
    }

    /// Sub-district name, if the 6-digit prefix resolves.
    fn sub_district(&self) -> Option<&str> {
        self.directory()
            .sub_district(self.digits().sub_district_code())
            .map(|entry| entry.name.as_str())
    }

    /// Postal code of the sub-district, when the entry carries one.
    fn postal_code(&self) -> Option<&str> {
        self.directory()
            .sub_district(self.digits().sub_district_code())
            .and_then(|entry| entry.postal_code.as_deref())
    }

    /// True when all three region prefixes resolve in the directory.
    fn region_resolves(&self) -> bool {
        self.province().is_some() && self.city().is_some() && self.sub_district().is_some()
    }

    /// The resolved address, when the region resolves completely.
    fn address(&self) -> Option<Address> {
        Some(Address {
            province: self.province()?.to_string(),
            city: self.city()?.to_string(),
            sub_district: self.sub_district()?.to_string(),
        })
    }
}
