//! Bikram Sambat to Gregorian conversion.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::epoch::epoch;
use crate::error::CalendarError;
use crate::table;

/// Largest day number accepted by [`bs_to_ad`].
///
/// The bound is deliberately loose: it is not checked against the real
/// month length, so a day past the end of a month rolls into the next one.
/// Use [`crate::BsDate::new`] for strict validation.
pub const MAX_BS_DAY: u32 = 32;

/// Converts a Bikram Sambat date to its Gregorian equivalent.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is not tabulated,
/// [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 and
/// [`CalendarError::InvalidDay`] if `day` is not in `1..=MAX_BS_DAY`.
#[tracing::instrument(level = "debug")]
pub fn bs_to_ad(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    let lengths = table::month_lengths(year).ok_or(CalendarError::YearOutOfRange { year })?;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if !(1..=MAX_BS_DAY).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day: MAX_BS_DAY,
        });
    }

    let mut day_count = table::days_before_year(year);
    day_count += lengths[..month as usize - 1]
        .iter()
        .map(|&d| u32::from(d))
        .sum::<u32>();
    day_count += day - 1;
    debug!(day_count, "computed day offset");

    epoch()
        .checked_add_days(Days::new(u64::from(day_count)))
        .ok_or(CalendarError::OffsetOutOfRange {
            offset: i64::from(day_count),
        })
}
