//! Date conversion command: parse the argument, convert, format.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use tracing::{debug, info, info_span};

use nepdate_calendar::{DateFormat, PartialAdDate, ad_to_bs_partial, bs_to_ad, parse_date};

use crate::cli::{Cli, Mode};
use crate::config::NepdateConfig;
use crate::convert;

/// Run the conversion selected on the command line and print the result.
pub fn run(cli: Cli) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let mode = cli
        .mode()
        .ok_or_else(|| anyhow!("exactly one of --ad, --bs or --today is required"))?;

    let config = load_config(cli.config.as_deref())?;
    let format = convert::build_date_format(&config.output, cli.long)?;

    let today = Local::now().date_naive();
    let line = convert_mode(&mode, &format, today)?;
    println!("{line}");
    Ok(())
}

/// Reads the TOML config at `path`, or returns defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<NepdateConfig> {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Ok(NepdateConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: NepdateConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Performs one conversion and returns the formatted output line.
///
/// `today` fills in the date for [`Mode::Today`].
pub fn convert_mode(mode: &Mode, format: &DateFormat, today: NaiveDate) -> Result<String> {
    match mode {
        Mode::AdToBs(input) => {
            let triple = parse_date(input)?;
            let bs = ad_to_bs_partial(triple.into(), today)
                .with_context(|| format!("cannot convert AD date {input}"))?;
            info!(ad = %input, bs = %bs, "converted AD to BS");
            Ok(format.bs(bs))
        }
        Mode::BsToAd(input) => {
            let t = parse_date(input)?;
            let ad = bs_to_ad(t.year, t.month, t.day)
                .with_context(|| format!("cannot convert BS date {input}"))?;
            info!(bs = %input, ad = %ad, "converted BS to AD");
            Ok(format.ad(ad))
        }
        Mode::Today => {
            let bs = ad_to_bs_partial(PartialAdDate::default(), today)
                .with_context(|| format!("cannot convert today's date {today}"))?;
            info!(ad = %today, bs = %bs, "converted today's date");
            Ok(format.bs(bs))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use nepdate_calendar::{CalendarError, DateStyle, ErrorKind};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, 11).unwrap()
    }

    fn kind_of(err: &anyhow::Error) -> ErrorKind {
        err.downcast_ref::<CalendarError>()
            .expect("calendar error in chain")
            .kind()
    }

    #[test]
    fn ad_to_bs_line() {
        let mode = Mode::AdToBs("2023-04-11".to_string());
        let line = convert_mode(&mode, &DateFormat::new(), today()).unwrap();
        assert_eq!(line, "2079-12-28 BS");
    }

    #[test]
    fn bs_to_ad_line() {
        let mode = Mode::BsToAd("2079-12-28".to_string());
        let line = convert_mode(&mode, &DateFormat::new(), today()).unwrap();
        assert_eq!(line, "2023-04-11 AD");
    }

    #[test]
    fn today_line() {
        let line = convert_mode(&Mode::Today, &DateFormat::new(), today()).unwrap();
        assert_eq!(line, "2079-12-28 BS");
    }

    #[test]
    fn long_format() {
        let format = DateFormat::new().with_style(DateStyle::Long);
        let mode = Mode::BsToAd("2079-12-28".to_string());
        let line = convert_mode(&mode, &format, today()).unwrap();
        assert_eq!(line, "11 April 2023 AD");
    }

    #[test]
    fn malformed_argument() {
        for input in ["2023/04/11", "20230411", "2023-4-11"] {
            let mode = Mode::AdToBs(input.to_string());
            let err = convert_mode(&mode, &DateFormat::new(), today()).unwrap_err();
            assert_eq!(kind_of(&err), ErrorKind::MalformedInput);
        }
    }

    #[test]
    fn out_of_range_has_context() {
        let mode = Mode::AdToBs("1900-01-01".to_string());
        let err = convert_mode(&mode, &DateFormat::new(), today()).unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::OutOfRange);
        assert!(format!("{err:#}").starts_with("cannot convert AD date 1900-01-01: "));

        let mode = Mode::BsToAd("2091-01-01".to_string());
        let err = convert_mode(&mode, &DateFormat::new(), today()).unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::OutOfRange);
    }

    #[test]
    fn invalid_component() {
        let mode = Mode::BsToAd("2079-13-01".to_string());
        let err = convert_mode(&mode, &DateFormat::new(), today()).unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::InvalidComponent);
    }

    #[test]
    fn load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.output.style, "iso");
    }

    #[test]
    fn load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "[output]\nstyle = \"long\"\nera_suffix = false").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.output.style, "long");
        assert!(!config.output.era_suffix);
    }

    #[test]
    fn load_config_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));
    }
}
