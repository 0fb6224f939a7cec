//! The AD/BS zero point shared by both converters.

use chrono::{Days, NaiveDate};

use crate::table::MAX_DAY_DIFF;

/// Gregorian year of the epoch.
pub const MIN_AD_YEAR: i32 = 1943;

/// Gregorian month of the epoch (1-based).
pub const MIN_AD_MONTH: u32 = 4;

/// Gregorian day of the epoch.
pub const MIN_AD_DAY: u32 = 14;

/// Returns the Gregorian date of day 0, which is BS `MIN_BS_YEAR-01-01`.
pub fn epoch() -> NaiveDate {
    // Safety: the epoch constants are a fixed, valid Gregorian date.
    NaiveDate::from_ymd_opt(MIN_AD_YEAR, MIN_AD_MONTH, MIN_AD_DAY)
        .expect("epoch constants form a valid date")
}

/// Returns the last Gregorian date covered by the table.
pub fn max_ad_date() -> NaiveDate {
    epoch()
        .checked_add_days(Days::new(u64::from(MAX_DAY_DIFF)))
        .expect("table span fits in NaiveDate")
}

/// Whole days from the epoch to `date`; negative before the epoch.
///
/// Both ends are calendar dates (midnight UTC), so the difference is always
/// an exact number of days.
pub fn day_offset(date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch()).num_days()
}
