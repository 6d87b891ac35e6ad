//! Month-of-year enumeration with wraparound arithmetic and calendar lengths.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

use crate::error::CalendarError;

/// Number of months in a year.
const MONTHS_PER_YEAR: i64 = Month::COUNT as i64;

/// A month of the proleptic Gregorian year.
///
/// Each variant carries its ordinal as the discriminant, January = 1 through
/// December = 12. Ordering, equality and hashing all follow the ordinal.
///
/// Serializes as its English name (`"August"`), never as the ordinal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumCount,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// All twelve months in ordinal order, January first.
    ///
    /// Indexed by ordinal minus one.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the month with the given ordinal (1 = January, 12 = December).
    ///
    /// Out-of-range values are rejected, never clamped or wrapped.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `ordinal` is not in 1..=12.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_calendar::Month;
    ///
    /// assert_eq!(Month::of(8).unwrap(), Month::August);
    /// assert!(Month::of(13).is_err());
    /// ```
    pub fn of(ordinal: i32) -> Result<Self, CalendarError> {
        u8::try_from(ordinal)
            .ok()
            .and_then(Month::from_repr)
            .ok_or(CalendarError::InvalidMonth { month: ordinal })
    }

    /// Returns an iterator over all twelve months in ordinal order.
    ///
    /// Every call starts again from January.
    pub fn all() -> impl Iterator<Item = Month> {
        Month::iter()
    }

    /// Returns the ordinal (1..=12).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 0-based position in [`Month::ALL`].
    fn index(self) -> usize {
        usize::from(self.value() - 1)
    }

    /// Returns `true` if `other` has the same ordinal as this month.
    ///
    /// Accepts either a raw ordinal or another `Month`.
    ///
    /// ```
    /// use almanac_calendar::Month;
    ///
    /// assert!(Month::March.is(3));
    /// assert!(Month::March.is(Month::March));
    /// assert!(!Month::March.is(Month::April));
    /// ```
    pub fn is(self, other: impl Into<i32>) -> bool {
        i32::from(self) == other.into()
    }

    /// Returns `true` if `other` is the same month.
    pub fn is_equal_to(self, other: Month) -> bool {
        self.value() == other.value()
    }

    /// Returns the fewest days this month can have: 28 for February.
    pub fn min_length(self) -> u8 {
        match self {
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// Returns the most days this month can have: 29 for February.
    pub fn max_length(self) -> u8 {
        match self {
            Month::February => 29,
            _ => self.min_length(),
        }
    }

    /// Returns the number of days in this month.
    ///
    /// Only February depends on `leap_year`.
    pub fn length(self, leap_year: bool) -> u8 {
        if leap_year {
            self.max_length()
        } else {
            self.min_length()
        }
    }

    /// Returns the day-of-year (1-based) on which this month starts.
    ///
    /// Computed as a running sum of [`Month::length`] over the preceding
    /// months, so the two queries always agree.
    ///
    /// ```
    /// use almanac_calendar::Month;
    ///
    /// assert_eq!(Month::January.first_day_of_year(true), 1);
    /// assert_eq!(Month::August.first_day_of_year(false), 213);
    /// assert_eq!(Month::December.first_day_of_year(true), 336);
    /// ```
    pub fn first_day_of_year(self, leap_year: bool) -> u16 {
        Month::iter()
            .take(self.index())
            .map(|m| u16::from(m.length(leap_year)))
            .sum::<u16>()
            + 1
    }

    /// Returns the month `months_to_add` steps away, wrapping around the year.
    ///
    /// Negative values step backward. Any multiple of 12 returns `self`.
    ///
    /// ```
    /// use almanac_calendar::Month;
    ///
    /// assert_eq!(Month::December.plus(1), Month::January);
    /// assert_eq!(Month::March.plus(-14), Month::January);
    /// ```
    pub fn plus(self, months_to_add: i64) -> Month {
        let shift = months_to_add.rem_euclid(MONTHS_PER_YEAR) as usize;
        Self::ALL[(self.index() + shift) % Month::COUNT]
    }

    /// Returns the month `months_to_subtract` steps earlier.
    ///
    /// Same result as `self.plus(-months_to_subtract)` for every input.
    pub fn minus(self, months_to_subtract: i64) -> Month {
        // Reducing first keeps the negation in range for i64::MIN.
        self.plus(-(months_to_subtract % MONTHS_PER_YEAR))
    }

    /// Returns the capitalized English name, e.g. `"January"`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<Month> for i32 {
    fn from(month: Month) -> Self {
        i32::from(month.value())
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.value()
    }
}

impl TryFrom<i32> for Month {
    type Error = CalendarError;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        Month::of(ordinal)
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Month::of(i32::from(ordinal))
    }
}

/// Parses an English month name, ignoring ASCII case.
impl FromStr for Month {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::all()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalendarError::UnknownMonthName {
                name: s.to_string(),
            })
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Month::all()
            .find(|m| m.name() == name)
            .ok_or_else(|| de::Error::custom(CalendarError::UnknownMonthName { name }))
    }
}
