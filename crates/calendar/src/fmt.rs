//! Output formatting for BS and AD dates.

use chrono::NaiveDate;

use crate::date::BsDate;

/// Romanized BS month names, Baisakh first.
pub const BS_MONTH_NAMES: [&str; 12] = [
    "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Asoj", "Kartik", "Mangsir", "Poush", "Magh",
    "Falgun", "Chaitra",
];

/// How a date is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `2079-12-28`
    #[default]
    Iso,
    /// `28 Chaitra 2079` / `11 April 2023`
    Long,
}

/// Renders converted dates, optionally followed by their era (`BS`/`AD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    style: DateStyle,
    era_suffix: bool,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            style: DateStyle::Iso,
            era_suffix: true,
        }
    }
}

impl DateFormat {
    /// Creates the default format: ISO dates with an era suffix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date style.
    pub fn with_style(mut self, style: DateStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets whether ` BS` / ` AD` is appended.
    pub fn with_era_suffix(mut self, era_suffix: bool) -> Self {
        self.era_suffix = era_suffix;
        self
    }

    /// Returns the date style.
    pub fn style(&self) -> DateStyle {
        self.style
    }

    /// Returns whether the era suffix is appended.
    pub fn era_suffix(&self) -> bool {
        self.era_suffix
    }

    /// Formats a BS date.
    pub fn bs(&self, date: BsDate) -> String {
        let body = match self.style {
            DateStyle::Iso => date.to_string(),
            DateStyle::Long => format!("{} {} {}", date.day(), date.month_name(), date.year()),
        };
        self.suffixed(body, "BS")
    }

    /// Formats an AD date.
    pub fn ad(&self, date: NaiveDate) -> String {
        let pattern = match self.style {
            DateStyle::Iso => "%Y-%m-%d",
            DateStyle::Long => "%-d %B %Y",
        };
        self.suffixed(date.format(pattern).to_string(), "AD")
    }

    fn suffixed(&self, body: String, era: &str) -> String {
        if self.era_suffix {
            format!("{body} {era}")
        } else {
            body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bs() -> BsDate {
        BsDate::new(2079, 12, 28).unwrap()
    }

    fn ad() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, 11).unwrap()
    }

    #[test]
    fn default_is_iso_with_suffix() {
        let f = DateFormat::new();
        assert_eq!(f.style(), DateStyle::Iso);
        assert!(f.era_suffix());
        assert_eq!(f.bs(bs()), "2079-12-28 BS");
        assert_eq!(f.ad(ad()), "2023-04-11 AD");
    }

    #[test]
    fn long_style() {
        let f = DateFormat::new().with_style(DateStyle::Long);
        assert_eq!(f.bs(bs()), "28 Chaitra 2079 BS");
        assert_eq!(f.ad(ad()), "11 April 2023 AD");
    }

    #[test]
    fn without_suffix() {
        let f = DateFormat::new().with_era_suffix(false);
        assert_eq!(f.bs(bs()), "2079-12-28");
        assert_eq!(f.ad(ad()), "2023-04-11");
    }
}
