//! Bikram Sambat date value.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::bs_to_ad::bs_to_ad;
use crate::error::CalendarError;
use crate::fmt::BS_MONTH_NAMES;
use crate::parse::parse_date;
use crate::table;

/// A date in the Bikram Sambat calendar, within the tabulated range.
///
/// Ordering is chronological: by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BsDate {
    year: i32,
    month: u8,
    day: u8,
}

impl BsDate {
    /// Creates a new `BsDate`, checking the day against the real month length.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if `year` is not tabulated,
    /// [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, and
    /// [`CalendarError::InvalidDay`] if `day` does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let lengths = table::month_lengths(year).ok_or(CalendarError::YearOutOfRange { year })?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = u32::from(lengths[month as usize - 1]);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self::from_parts(year, month as u8, day as u8))
    }

    /// Builds a date whose components are already known to be valid.
    pub(crate) fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the BS year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12, Baisakh = 1).
    pub fn month(self) -> u32 {
        u32::from(self.month)
    }

    /// Returns the day within the month (1..=32).
    pub fn day(self) -> u32 {
        u32::from(self.day)
    }

    /// Returns the romanized month name, e.g. `"Chaitra"`.
    pub fn month_name(self) -> &'static str {
        BS_MONTH_NAMES[usize::from(self.month) - 1]
    }

    /// Returns the 1-based day of the BS year.
    pub fn ordinal(self) -> u32 {
        let before: u32 = table::month_lengths(self.year)
            .map(|lengths| {
                lengths[..usize::from(self.month) - 1]
                    .iter()
                    .map(|&d| u32::from(d))
                    .sum()
            })
            .unwrap_or(0);
        before + self.day()
    }

    /// Returns the number of whole days from the epoch to this date.
    pub fn day_offset(self) -> u32 {
        table::days_before_year(self.year) + self.ordinal() - 1
    }

    /// Converts this date to the Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Never fails for a date built by [`BsDate::new`] or returned by a
    /// converter; the `Result` mirrors [`bs_to_ad`].
    pub fn to_ad(self) -> Result<NaiveDate, CalendarError> {
        bs_to_ad(self.year, self.month(), self.day())
    }
}

impl fmt::Display for BsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for BsDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let triple = parse_date(s)?;
        Self::new(triple.year, triple.month, triple.day)
    }
}
