//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use nepdate_calendar::{DateFormat, DateStyle};

use crate::config::OutputToml;

/// Parses a date style name into the corresponding enum variant.
pub fn parse_style(s: &str) -> Result<DateStyle> {
    match s.to_lowercase().as_str() {
        "iso" => Ok(DateStyle::Iso),
        "long" => Ok(DateStyle::Long),
        other => bail!("unknown output style: {other:?}"),
    }
}

/// Builds a [`DateFormat`] from the TOML output configuration.
///
/// `long` comes from the `--long` flag and takes precedence over the
/// configured style.
pub fn build_date_format(output: &OutputToml, long: bool) -> Result<DateFormat> {
    let style = if long {
        DateStyle::Long
    } else {
        parse_style(&output.style)?
    };
    Ok(DateFormat::new()
        .with_style(style)
        .with_era_suffix(output.era_suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_names() {
        assert_eq!(parse_style("iso").unwrap(), DateStyle::Iso);
        assert_eq!(parse_style("LONG").unwrap(), DateStyle::Long);
        assert!(parse_style("short").is_err());
    }

    #[test]
    fn flag_overrides_config() {
        let output = OutputToml::default();
        let format = build_date_format(&output, true).unwrap();
        assert_eq!(format.style(), DateStyle::Long);
        assert!(format.era_suffix());
    }

    #[test]
    fn config_style_and_suffix() {
        let output = OutputToml {
            style: "long".to_string(),
            era_suffix: false,
        };
        let format = build_date_format(&output, false).unwrap();
        assert_eq!(format.style(), DateStyle::Long);
        assert!(!format.era_suffix());
    }

    #[test]
    fn bad_style_is_error() {
        let output = OutputToml {
            style: "roman".to_string(),
            era_suffix: true,
        };
        let err = build_date_format(&output, false).unwrap_err();
        assert!(err.to_string().contains("unknown output style"));
    }
}
