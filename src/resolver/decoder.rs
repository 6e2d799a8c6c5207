//! Decoding of product filenames into local forecast times.
//!
//! WRF filenames embed the run date, the UTC run hour and the forecast offset as
//! `YYYY-MM-DD_HH+NN`, e.g. `t2-2024-01-10_18+09.png` is the 18 UTC run of
//! 2024-01-10, nine hours ahead. Daily air-measurement charts are stored as
//! `YYYY-MM-DD_<chart>.png` instead.

use crate::types::forecast_time::ForecastTime;
use chrono::{Duration, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref FORECAST_RUN_RE: Regex = Regex::new(r"(\d{4}-\d{2}-\d{2})_(\d{2})\+(\d{2})").unwrap();
    static ref DATE_PREFIX_RE: Regex = Regex::new(r"^(\d{4}-\d{2}-\d{2})_").unwrap();
}

/// Fixed offset from UTC, in whole hours, of the observatory's local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// Córdoba, Argentina: UTC-3, no daylight saving.
    pub const OBSERVATORY: UtcOffset = UtcOffset(-3);
    pub const UTC: UtcOffset = UtcOffset(0);

    /// Creates an offset, rejecting values outside the real-world range `-12..=14`.
    pub fn from_hours(hours: i32) -> Option<Self> {
        (-12..=14).contains(&hours).then_some(UtcOffset(hours))
    }

    pub fn hours(&self) -> i32 {
        self.0
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        UtcOffset::OBSERVATORY
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC{:+}", self.0)
    }
}

/// The parts encoded in a forecast-run filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastRun {
    /// Date the model run started (UTC).
    pub base_date: NaiveDate,
    /// UTC hour the model run started, usually 06 or 18.
    pub run_hour: u32,
    /// Hours elapsed since the run start.
    pub offset: u32,
}

impl ForecastRun {
    /// Extracts the first `YYYY-MM-DD_HH+NN` group from a filename.
    ///
    /// Returns `None` when the pattern is absent or names an impossible date.
    pub fn parse(filename: &str) -> Option<Self> {
        let caps = FORECAST_RUN_RE.captures(filename)?;
        let base_date = NaiveDate::parse_from_str(caps.get(1)?.as_str(), "%Y-%m-%d").ok()?;
        let run_hour = caps.get(2)?.as_str().parse().ok()?;
        let offset = caps.get(3)?.as_str().parse().ok()?;
        Some(ForecastRun {
            base_date,
            run_hour,
            offset,
        })
    }

    /// Converts this run into local forecast time.
    pub fn to_local(&self, utc_offset: UtcOffset) -> Option<ForecastTime> {
        offset_to_local(self.base_date, self.run_hour, self.offset, utc_offset)
    }
}

/// Computes the local date and hour of `run_hour + offset` hours after midnight UTC
/// of `base_date`.
///
/// With the observatory's UTC-3 offset, `18 + 9 = 27` UTC becomes 24 local, which
/// rolls to `00:00` of the next day; `6 + 0` becomes `03:00` of the same day, and a
/// local hour below zero rolls back to the previous day. The shift is applied in
/// whole days, so offsets spanning more than a day keep rolling forward.
///
/// Returns `None` only if the resulting date is outside chrono's representable range.
pub fn offset_to_local(
    base_date: NaiveDate,
    run_hour: u32,
    offset: u32,
    utc_offset: UtcOffset,
) -> Option<ForecastTime> {
    let local = i64::from(run_hour) + i64::from(offset) + i64::from(utc_offset.hours());
    let day_shift = local.div_euclid(24);
    let local_hour = local.rem_euclid(24) as u32;
    let local_date = base_date.checked_add_signed(Duration::days(day_shift))?;
    Some(ForecastTime::new(local_date, local_hour))
}

/// Strategy for turning a product filename into the local time it is valid for.
///
/// Each product family plugs its own strategy into an [`crate::ImageResolver`].
/// Returning `None` marks the record as undecodable; resolvers skip such records.
pub trait TimeDecoder {
    fn decode(&self, filename: &str) -> Option<ForecastTime>;
}

impl<T: TimeDecoder + ?Sized> TimeDecoder for &T {
    fn decode(&self, filename: &str) -> Option<ForecastTime> {
        (**self).decode(filename)
    }
}

/// Decodes WRF `YYYY-MM-DD_HH+NN` filenames into local time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForecastRunDecoder {
    utc_offset: UtcOffset,
}

impl ForecastRunDecoder {
    /// A decoder converting UTC runs to local time at `utc_offset`.
    pub fn new(utc_offset: UtcOffset) -> Self {
        Self { utc_offset }
    }

    pub fn utc_offset(&self) -> UtcOffset {
        self.utc_offset
    }
}

impl TimeDecoder for ForecastRunDecoder {
    fn decode(&self, filename: &str) -> Option<ForecastTime> {
        ForecastRun::parse(filename)?.to_local(self.utc_offset)
    }
}

/// Decodes daily charts stored as `YYYY-MM-DD_<name>`.
///
/// Charts carry no hour, so every chart is reported at the family's fixed
/// publication hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePrefixDecoder {
    publication_hour: u32,
}

impl DatePrefixDecoder {
    /// Air-measurement charts are refreshed daily at about 10:30 local time.
    pub const AIR_MEASUREMENT: DatePrefixDecoder = DatePrefixDecoder {
        publication_hour: 10,
    };

    /// A decoder reporting every chart at `publication_hour`, taken modulo 24.
    pub fn new(publication_hour: u32) -> Self {
        Self {
            publication_hour: publication_hour % 24,
        }
    }
}

impl TimeDecoder for DatePrefixDecoder {
    fn decode(&self, filename: &str) -> Option<ForecastTime> {
        let caps = DATE_PREFIX_RE.captures(filename)?;
        let date = NaiveDate::parse_from_str(caps.get(1)?.as_str(), "%Y-%m-%d").ok()?;
        Some(ForecastTime::new(date, self.publication_hour))
    }
}
