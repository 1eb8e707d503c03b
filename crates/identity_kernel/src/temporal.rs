//! Elapsed-duration arithmetic
//!
//! Age and next-birthday values reproduce the reference behaviour of the
//! numbering scheme's consumers exactly: the signed count of elapsed
//! seconds is reinterpreted as a UTC timestamp and read back through the
//! calendar, with `year = |utc_year - 1970|`, `month = utc_month` and
//! `day = |utc_day - 1|`. Near month and day boundaries this can differ
//! from naive calendar subtraction by one unit; downstream consumers
//! depend on the exact values, so it must not be replaced with calendar
//! subtraction.
//!
//! The "current" side of every computation is an explicit evaluation
//! instant passed by the caller, never a process-wide static.

use chrono::{DateTime, Datelike, Utc};

use crate::error::KernelError;

/// Year/month/day reading of an elapsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedBreakdown {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

/// Decomposes a signed elapsed duration in seconds.
///
/// Negative durations land before the epoch and are read the same way;
/// only durations far outside the representable calendar fail.
pub fn elapsed_breakdown(elapsed_secs: i64) -> Result<ElapsedBreakdown, KernelError> {
    let stamp = DateTime::<Utc>::from_timestamp(elapsed_secs, 0).ok_or_else(|| {
        KernelError::invalid_birth_date(format!(
            "elapsed duration of {elapsed_secs}s is outside the representable calendar"
        ))
    })?;

    Ok(ElapsedBreakdown {
        year: (stamp.year() - 1970).unsigned_abs(),
        month: stamp.month(),
        // Day-of-month starts at 1, so day zero of the elapsed reading is
        // the first day of the epoch month.
        day: stamp.day() - 1,
    })
}

/// Last two digits of the evaluation instant's UTC year.
pub fn two_digit_year(instant: DateTime<Utc>) -> u32 {
    instant.year().rem_euclid(100) as u32
}

/// Resolves a two-digit embedded year against the evaluation instant.
///
/// Values below the instant's own two-digit year belong to the 2000s;
/// everything else, including the boundary value itself, belongs to the
/// 1900s. A number that would otherwise describe a future year is assumed
/// to describe the century already reached.
pub fn resolve_birth_year(embedded: u32, instant: DateTime<Utc>) -> i32 {
    if embedded < two_digit_year(instant) {
        2000 + embedded as i32
    } else {
        1900 + embedded as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn mid_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn breakdown_of_zero_duration() {
        let b = elapsed_breakdown(0).unwrap();
        assert_eq!(b, ElapsedBreakdown { year: 0, month: 1, day: 0 });
    }

    #[test]
    fn breakdown_matches_reference_for_positive_duration() {
        // 1999-01-25T00:00:00Z to 2024-06-15T12:00:00Z
        let born = Utc.with_ymd_and_hms(1999, 1, 25, 0, 0, 0).unwrap();
        let b = elapsed_breakdown(mid_2024().timestamp() - born.timestamp()).unwrap();
        assert_eq!(b, ElapsedBreakdown { year: 25, month: 5, day: 22 });
    }

    #[test]
    fn breakdown_reads_negative_durations_through_the_pre_epoch_calendar() {
        let born = Utc.with_ymd_and_hms(1999, 1, 25, 0, 0, 0).unwrap();
        let b = elapsed_breakdown(born.timestamp() - mid_2024().timestamp()).unwrap();
        assert_eq!(b.month, 8);
        assert_eq!(b.day, 10);
    }

    #[test]
    fn two_digit_year_of_instant() {
        assert_eq!(two_digit_year(mid_2024()), 24);
        assert_eq!(
            two_digit_year(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()),
            0
        );
    }

    #[test]
    fn embedded_year_below_current_resolves_to_2000s() {
        assert_eq!(resolve_birth_year(23, mid_2024()), 2023);
        assert_eq!(resolve_birth_year(0, mid_2024()), 2000);
    }

    #[test]
    fn embedded_year_at_or_above_current_resolves_to_1900s() {
        assert_eq!(resolve_birth_year(99, mid_2024()), 1999);
        // Boundary equality resolves to the century already reached.
        assert_eq!(resolve_birth_year(24, mid_2024()), 1924);
    }
}
