//! Derived demographic facts
//!
//! Gender, born date, age, and next birthday are pure functions of the
//! digit string and an explicit evaluation instant. Nothing here touches
//! the region directory.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use identity_kernel::{elapsed_breakdown, resolve_birth_year, IdentityNumber, KernelError};

/// Offset added to the day-of-birth field for female records.
pub const FEMALE_DAY_OFFSET: u32 = 40;

/// Gender as recorded by the numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    #[serde(rename = "LAKI-LAKI")]
    Male,
    #[serde(rename = "PEREMPUAN")]
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "LAKI-LAKI",
            Gender::Female => "PEREMPUAN",
        })
    }
}

/// Infers gender from the raw day field.
///
/// Days strictly above 40 mark a female record; exactly 40 is male.
pub fn gender(number: &IdentityNumber) -> Gender {
    if number.day_field() > FEMALE_DAY_OFFSET {
        Gender::Female
    } else {
        Gender::Male
    }
}

/// Birth date decoded from the digit fields.
///
/// All components are kept as decimal strings; `full` is exactly
/// `DD-MM-YYYY`. The month digits are carried raw, so a nonsense month
/// survives into `full` and only fails later, when a calendar date is
/// actually needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BornDate {
    pub date: String,
    pub month: String,
    pub year: String,
    pub full: String,
}

impl BornDate {
    /// The born date as a calendar date, if the digits describe one.
    pub fn to_naive_date(&self) -> Result<NaiveDate, KernelError> {
        let invalid = || KernelError::invalid_birth_date(self.full.clone());
        let day: u32 = self.date.parse().map_err(|_| invalid())?;
        let month: u32 = self.month.parse().map_err(|_| invalid())?;
        let year: i32 = self.year.parse().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
    }

    /// UTC midnight of the born date as a unix timestamp.
    fn timestamp(&self) -> Result<i64, KernelError> {
        let date = self.to_naive_date()?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| KernelError::invalid_birth_date(self.full.clone()))?;
        Ok(midnight.and_utc().timestamp())
    }
}

/// Composes the born date from the digit fields.
///
/// The female day offset is removed, the day is zero-padded below 10, and
/// the two-digit year is resolved against the evaluation instant.
pub fn born_date(number: &IdentityNumber, evaluated_at: DateTime<Utc>) -> BornDate {
    let mut day = number.day_field();
    if gender(number) == Gender::Female {
        day -= FEMALE_DAY_OFFSET;
    }

    let date = format!("{day:02}");
    let month = number.month_field().to_string();
    let year = resolve_birth_year(number.year_field(), evaluated_at).to_string();
    let full = format!("{date}-{month}-{year}");

    BornDate { date, month, year, full }
}

/// Whole years, months, and days elapsed since the born date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

/// Months and days remaining until the next birthday anniversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextBirthday {
    pub month: u32,
    pub day: u32,
}

/// Age at the evaluation instant, via the elapsed-duration reading.
pub fn age(born: &BornDate, evaluated_at: DateTime<Utc>) -> Result<Age, KernelError> {
    let breakdown = elapsed_breakdown(evaluated_at.timestamp() - born.timestamp()?)?;
    Ok(Age {
        year: breakdown.year,
        month: breakdown.month,
        day: breakdown.day,
    })
}

/// Countdown to the next birthday: the same reading applied to the
/// reversed duration.
pub fn next_birthday(
    born: &BornDate,
    evaluated_at: DateTime<Utc>,
) -> Result<NextBirthday, KernelError> {
    let breakdown = elapsed_breakdown(born.timestamp()? - evaluated_at.timestamp())?;
    Ok(NextBirthday {
        month: breakdown.month,
        day: breakdown.day,
    })
}
