//! Gregorian to Bikram Sambat conversion.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::date::BsDate;
use crate::epoch::day_offset;
use crate::error::CalendarError;
use crate::table::{self, MAX_DAY_DIFF, MIN_BS_YEAR};

/// A Gregorian date whose components may be left unset.
///
/// Unset components are taken from the current date when the value is
/// resolved, so `PartialAdDate::default()` means "today".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PartialAdDate {
    /// Gregorian year, or `None` for the current year.
    pub year: Option<i32>,
    /// Gregorian month (1..=12), or `None` for the current month.
    pub month: Option<u32>,
    /// Day of month (1..=31), or `None` for the current day.
    pub day: Option<u32>,
}

impl PartialAdDate {
    /// Creates a fully specified date.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }

    /// Fills unset components from `today` and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if the month is not in 1..=12
    /// and [`CalendarError::InvalidDay`] if the day is not in 1..=31 or does
    /// not exist in that Gregorian month.
    pub fn resolve(self, today: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let year = self.year.unwrap_or_else(|| today.year());
        let month = self.month.unwrap_or_else(|| today.month());
        let day = self.day.unwrap_or_else(|| today.day());

        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if !(1..=31).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day: 31,
            });
        }
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| CalendarError::InvalidDay {
            day,
            month,
            max_day: gregorian_month_len(year, month),
        })
    }
}

fn gregorian_month_len(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&d| NaiveDate::from_ymd_opt(year, month, d).is_some())
        .unwrap_or(28)
}

/// Converts a Gregorian date to its Bikram Sambat equivalent.
///
/// # Errors
///
/// Returns [`CalendarError::OffsetOutOfRange`] if `date` lies before the
/// epoch or after the last tabulated BS day.
#[tracing::instrument(level = "debug")]
pub fn ad_to_bs(date: NaiveDate) -> Result<BsDate, CalendarError> {
    let offset = day_offset(date);
    debug!(offset, "computed day offset");
    bs_from_offset(offset)
}

/// Resolves a partially specified Gregorian date against `today` and
/// converts it to Bikram Sambat.
///
/// # Errors
///
/// Returns the component errors of [`PartialAdDate::resolve`] and the range
/// errors of [`ad_to_bs`].
pub fn ad_to_bs_partial(date: PartialAdDate, today: NaiveDate) -> Result<BsDate, CalendarError> {
    ad_to_bs(date.resolve(today)?)
}

/// Resolves a day offset from the epoch into a Bikram Sambat date.
///
/// # Errors
///
/// Returns [`CalendarError::OffsetOutOfRange`] unless
/// `0 <= offset <= MAX_DAY_DIFF`.
pub fn bs_from_offset(offset: i64) -> Result<BsDate, CalendarError> {
    let out_of_range = CalendarError::OffsetOutOfRange { offset };
    let days = match u32::try_from(offset) {
        Ok(d) if d <= MAX_DAY_DIFF => d,
        _ => return Err(out_of_range),
    };

    // Find the year whose span contains the offset.
    let mut count_upto_previous_year = 0u32;
    let mut year = MIN_BS_YEAR;
    for (y, &len) in table::years().zip(table::year_totals()) {
        year = y;
        let len = u32::from(len);
        if count_upto_previous_year + len > days {
            break;
        }
        count_upto_previous_year += len;
    }

    let day_of_year = days - count_upto_previous_year + 1;
    let lengths = table::month_lengths(year).ok_or_else(|| out_of_range.clone())?;
    let (month, day) = month_and_day(lengths, day_of_year).ok_or(out_of_range)?;
    debug!(year, month, day, day_of_year, "resolved BS date");
    Ok(BsDate::from_parts(year, month, day))
}

/// Splits a 1-based day of year into a 1-based (month, day) pair.
fn month_and_day(lengths: &[u8; 12], day_of_year: u32) -> Option<(u8, u8)> {
    let mut count_upto_previous_month = 0u32;
    for (m, &len) in (1u8..).zip(lengths) {
        let len = u32::from(len);
        if day_of_year <= count_upto_previous_month + len {
            let day = (day_of_year - count_upto_previous_month) as u8;
            return Some((m, day));
        }
        count_upto_previous_month += len;
    }
    None
}
