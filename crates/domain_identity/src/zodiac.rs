//! Western zodiac banding over the decoded birth date

use std::fmt;

use serde::Serialize;

use crate::facts::BornDate;

/// The twelve signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Zodiac {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl Zodiac {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zodiac::Capricorn => "Capricorn",
            Zodiac::Aquarius => "Aquarius",
            Zodiac::Pisces => "Pisces",
            Zodiac::Aries => "Aries",
            Zodiac::Taurus => "Taurus",
            Zodiac::Gemini => "Gemini",
            Zodiac::Cancer => "Cancer",
            Zodiac::Leo => "Leo",
            Zodiac::Virgo => "Virgo",
            Zodiac::Libra => "Libra",
            Zodiac::Scorpio => "Scorpio",
            Zodiac::Sagittarius => "Sagittarius",
        }
    }

    /// Sign for a month/day pair.
    ///
    /// The cutover day belongs to the sign starting that month. Month
    /// values outside 1-11 take the December branch; that keeps the
    /// December-to-January wrap a plain decision table rather than a
    /// circular lookup.
    pub fn for_month_day(month: u32, day: u32) -> Zodiac {
        match month {
            1 => {
                if day >= 20 {
                    Zodiac::Aquarius
                } else {
                    Zodiac::Capricorn
                }
            }
            2 => {
                if day >= 19 {
                    Zodiac::Pisces
                } else {
                    Zodiac::Aquarius
                }
            }
            3 => {
                if day >= 21 {
                    Zodiac::Aries
                } else {
                    Zodiac::Pisces
                }
            }
            4 => {
                if day >= 20 {
                    Zodiac::Taurus
                } else {
                    Zodiac::Aries
                }
            }
            5 => {
                if day >= 21 {
                    Zodiac::Gemini
                } else {
                    Zodiac::Taurus
                }
            }
            6 => {
                if day >= 21 {
                    Zodiac::Cancer
                } else {
                    Zodiac::Gemini
                }
            }
            7 => {
                if day >= 23 {
                    Zodiac::Leo
                } else {
                    Zodiac::Cancer
                }
            }
            8 => {
                if day >= 23 {
                    Zodiac::Virgo
                } else {
                    Zodiac::Leo
                }
            }
            9 => {
                if day >= 23 {
                    Zodiac::Libra
                } else {
                    Zodiac::Virgo
                }
            }
            10 => {
                if day >= 24 {
                    Zodiac::Scorpio
                } else {
                    Zodiac::Libra
                }
            }
            11 => {
                if day >= 23 {
                    Zodiac::Sagittarius
                } else {
                    Zodiac::Scorpio
                }
            }
            _ => {
                if day >= 22 {
                    Zodiac::Capricorn
                } else {
                    Zodiac::Sagittarius
                }
            }
        }
    }

    /// Sign for a decoded born date.
    pub fn for_born_date(born: &BornDate) -> Zodiac {
        let month = born.month.parse().unwrap_or(0);
        let day = born.date.parse().unwrap_or(0);
        Self::for_month_day(month, day)
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
