use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Gregorian (AD) to Bikram Sambat (BS) date converter.
#[derive(Debug, Parser)]
#[command(
    name = "nepdate",
    version,
    about = "Convert dates between the Gregorian (AD) and Bikram Sambat (BS) calendars",
    after_help = "Examples:\n  nepdate -t\n  nepdate -A 2023-04-11\n  nepdate -B 2079-12-28"
)]
#[command(group(ArgGroup::new("mode").required(true).args(["ad", "bs", "today"])))]
pub struct Cli {
    /// Convert DATE from AD to BS.
    #[arg(short = 'A', long, requires = "date")]
    pub ad: bool,

    /// Convert DATE from BS to AD.
    #[arg(short = 'B', long, requires = "date")]
    pub bs: bool,

    /// Print today's date in the BS calendar.
    #[arg(short, long, conflicts_with = "date")]
    pub today: bool,

    /// Date to convert, as YYYY-MM-DD.
    pub date: Option<String>,

    /// Path to an optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print dates in long form, e.g. "28 Chaitra 2079".
    #[arg(short, long)]
    pub long: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The conversion requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// AD date string to BS.
    AdToBs(String),
    /// BS date string to AD.
    BsToAd(String),
    /// Current local date to BS.
    Today,
}

impl Cli {
    /// Returns the selected conversion.
    ///
    /// Returns `None` only if clap's group and `requires` rules were bypassed.
    pub fn mode(&self) -> Option<Mode> {
        match (self.ad, self.bs, self.today, &self.date) {
            (true, false, false, Some(d)) => Some(Mode::AdToBs(d.clone())),
            (false, true, false, Some(d)) => Some(Mode::BsToAd(d.clone())),
            (false, false, true, None) => Some(Mode::Today),
            _ => None,
        }
    }
}
