//! Identity Number Domain
//!
//! NIK (Nomor Induk Kependudukan) and KK (Kartu Keluarga) numbers are
//! sixteen-digit strings whose leading digits encode an administrative
//! region and whose middle digits (NIK only) encode a birth date with a
//! sex-based day offset.
//!
//! # Capabilities
//!
//! Both number kinds share the region prefix scheme, exposed through the
//! [`RegionCoded`] trait. Person-derived facts (gender, born date, age,
//! next birthday, zodiac) attach only to [`Nik`]; a KK number encodes a
//! household's region, not an individual's birth date, so [`Kk`] carries
//! none of them.
//!
//! # Examples
//!
//! ```rust
//! use domain_identity::{Nik, RegionCoded};
//!
//! let nik = Nik::new("3273012501990001")?;
//! assert!(nik.validate());
//! assert_eq!(nik.province(), Some("Jawa Barat"));
//! assert_eq!(nik.born_date().full, "25-01-1999");
//! # Ok::<(), domain_identity::IdentityError>(())
//! ```

pub mod error;
pub mod facts;
pub mod kk;
pub mod nik;
pub mod region;
pub mod validation;
pub mod zodiac;

pub use error::IdentityError;
pub use facts::{Age, BornDate, Gender, NextBirthday};
pub use kk::{Kk, KkDetails, KkParse};
pub use nik::{Nik, NikDetails, NikParse};
pub use region::{Address, RegionCoded};
pub use validation::shape_errors;
pub use zodiac::Zodiac;
