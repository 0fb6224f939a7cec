//! `YYYY-MM-DD` date-string parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::ad_to_bs::PartialAdDate;
use crate::error::CalendarError;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})$")
        .expect("date pattern is a valid regex")
});

/// Year, month and day components of a parsed date string.
///
/// The triple carries no calendar: the converter it is handed to decides
/// whether it is read as AD or BS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTriple {
    /// Four-digit year.
    pub year: i32,
    /// Two-digit month, not yet range checked.
    pub month: u32,
    /// Two-digit day, not yet range checked.
    pub day: u32,
}

impl From<DateTriple> for PartialAdDate {
    fn from(t: DateTriple) -> Self {
        PartialAdDate::new(t.year, t.month, t.day)
    }
}

/// Parses a string of exactly four digits, `-`, two digits, `-`, two digits.
///
/// Only the shape is checked here; component ranges are validated by the
/// converters.
///
/// # Errors
///
/// Returns [`CalendarError::Malformed`] if `input` does not match the
/// pattern.
///
/// # Examples
///
/// ```
/// use nepdate_calendar::parse_date;
///
/// let t = parse_date("2079-12-28").unwrap();
/// assert_eq!((t.year, t.month, t.day), (2079, 12, 28));
/// assert!(parse_date("2079-1-28").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<DateTriple, CalendarError> {
    let malformed = || CalendarError::Malformed {
        input: input.to_string(),
    };
    let caps = DATE_PATTERN.captures(input).ok_or_else(malformed)?;
    let year = caps["year"].parse().map_err(|_| malformed())?;
    let month = caps["month"].parse().map_err(|_| malformed())?;
    let day = caps["day"].parse().map_err(|_| malformed())?;
    Ok(DateTriple { year, month, day })
}
