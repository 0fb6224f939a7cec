//! Error types for the nepdate-calendar crate.

use crate::table::{MAX_BS_YEAR, MAX_DAY_DIFF, MIN_BS_YEAR};

/// Coarse classification of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The date falls outside the tabulated BS range.
    OutOfRange,
    /// A month or day is numerically outside its valid bounds.
    InvalidComponent,
    /// The input string is not a `YYYY-MM-DD` date.
    MalformedInput,
}

/// Error type for all fallible operations in the nepdate-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when an AD date maps to a day offset outside the table.
    #[error("date out of range: day offset {offset} (must be 0..={max})", max = MAX_DAY_DIFF)]
    OffsetOutOfRange {
        /// Whole days from the epoch to the rejected date.
        offset: i64,
    },

    /// Returned when a BS year is not covered by the table.
    #[error(
        "date out of range: BS year {year} (must be {min}..={max})",
        min = MIN_BS_YEAR,
        max = MAX_BS_YEAR
    )]
    YearOutOfRange {
        /// The rejected BS year.
        year: i32,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number is outside the bounds allowed for its month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month the day was checked against.
        month: u32,
        /// The largest day accepted for that month.
        max_day: u32,
    },

    /// Returned when a string does not match `YYYY-MM-DD`.
    #[error("invalid date format: {input:?} (expected YYYY-MM-DD)")]
    Malformed {
        /// The rejected input.
        input: String,
    },
}

impl CalendarError {
    /// Returns the [`ErrorKind`] this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OffsetOutOfRange { .. } | Self::YearOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::InvalidMonth { .. } | Self::InvalidDay { .. } => ErrorKind::InvalidComponent,
            Self::Malformed { .. } => ErrorKind::MalformedInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_offset_out_of_range() {
        let err = CalendarError::OffsetOutOfRange { offset: -1 };
        assert_eq!(
            err.to_string(),
            "date out of range: day offset -1 (must be 0..=33237)"
        );
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::YearOutOfRange { year: 2091 };
        assert_eq!(
            err.to_string(),
            "date out of range: BS year 2091 (must be 2000..=2090)"
        );
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
        assert_eq!(err.kind(), ErrorKind::InvalidComponent);
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 33,
            month: 1,
            max_day: 32,
        };
        assert_eq!(err.to_string(), "invalid day: 33 for month 1 (max 32)");
        assert_eq!(err.kind(), ErrorKind::InvalidComponent);
    }

    #[test]
    fn error_malformed() {
        let err = CalendarError::Malformed {
            input: "2023/04/11".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date format: \"2023/04/11\" (expected YYYY-MM-DD)"
        );
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
