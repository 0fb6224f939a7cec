//! # nepdate-calendar
//!
//! Date arithmetic between the Gregorian (AD) and Bikram Sambat (BS)
//! calendars.
//!
//! BS month lengths vary from year to year, so conversion goes through a
//! tabulated span of BS years and a single day offset counted from a fixed
//! epoch (AD 1943-04-14 = BS 2000-01-01).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     S["&str"] -->|"parse_date()"| T["DateTriple"]
//!     T -->|"into()"| P["PartialAdDate"]
//!     P -->|".resolve(today)"| A["NaiveDate (AD)"]
//!     A -->|"day_offset()"| O["day offset"]
//!     O -->|"bs_from_offset()"| B["BsDate"]
//!     T -->|"bs_to_ad()"| A
//!     B -->|"DateFormat::bs()"| F["String"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use nepdate_calendar::{ad_to_bs, bs_to_ad};
//!
//! let ad = NaiveDate::from_ymd_opt(2023, 4, 11).unwrap();
//! let bs = ad_to_bs(ad).unwrap();
//! assert_eq!(bs.to_string(), "2079-12-28");
//!
//! assert_eq!(bs_to_ad(2079, 12, 28).unwrap(), ad);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Per-year BS month lengths and range constants |
//! | `epoch` | The shared AD/BS zero point and day offsets |
//! | `ad_to_bs` | Gregorian to BS conversion |
//! | `bs_to_ad` | BS to Gregorian conversion |
//! | `date` | `BsDate` value type |
//! | `parse` | `YYYY-MM-DD` parsing |
//! | `fmt` | Output styles |
//! | `error` | Error types |

mod ad_to_bs;
mod bs_to_ad;
mod date;
mod epoch;
mod error;
mod fmt;
mod parse;
mod table;

pub use ad_to_bs::{PartialAdDate, ad_to_bs, ad_to_bs_partial, bs_from_offset};
pub use bs_to_ad::{MAX_BS_DAY, bs_to_ad};
pub use date::BsDate;
pub use epoch::{MIN_AD_DAY, MIN_AD_MONTH, MIN_AD_YEAR, day_offset, epoch, max_ad_date};
pub use error::{CalendarError, ErrorKind};
pub use fmt::{BS_MONTH_NAMES, DateFormat, DateStyle};
pub use parse::{DateTriple, parse_date};
pub use table::{
    MAX_BS_YEAR, MAX_DAY_DIFF, MIN_BS_YEAR, TOTAL_DAYS, days_in_month, days_in_year,
    month_lengths, years,
};
