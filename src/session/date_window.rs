//! Selectable date ranges.

use crate::resolver::decoder::UtcOffset;
use crate::types::any_date::AnyDate;
use chrono::{Days, FixedOffset, NaiveDate, Utc};

/// The inclusive range `today - days_back ..= today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    today: NaiveDate,
    days_back: u64,
}

impl DateWindow {
    /// WRF runs are kept for a week.
    pub const WRF_DAYS: u64 = 7;
    /// Gas charts are kept for a month.
    pub const GAS_DAYS: u64 = 30;

    /// A window ending on `today` and reaching `days_back` days into the past.
    pub fn new(today: NaiveDate, days_back: u64) -> Self {
        Self { today, days_back }
    }

    /// The selectable range for WRF forecasts.
    pub fn wrf(today: NaiveDate) -> Self {
        Self::new(today, Self::WRF_DAYS)
    }

    /// The selectable range for gas charts.
    pub fn gases(today: NaiveDate) -> Self {
        Self::new(today, Self::GAS_DAYS)
    }

    /// First selectable date. Saturates at [`NaiveDate::MIN`].
    pub fn earliest(&self) -> NaiveDate {
        self.today
            .checked_sub_days(Days::new(self.days_back))
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn latest(&self) -> NaiveDate {
        self.today
    }

    /// Whether `date` can be selected. Unparseable dates cannot.
    pub fn contains(&self, date: impl AnyDate) -> bool {
        date.into_date()
            .is_some_and(|d| d >= self.earliest() && d <= self.latest())
    }

    /// Moves `date` into the window.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.earliest(), self.latest())
    }

    /// The day before `today`, the first date the WRF view shows.
    pub fn default_date(&self) -> NaiveDate {
        self.clamp(self.today.pred_opt().unwrap_or(self.today))
    }
}

/// Today's date in the given local offset.
pub fn local_today(utc_offset: UtcOffset) -> NaiveDate {
    let now = Utc::now();
    match FixedOffset::east_opt(utc_offset.hours() * 3600) {
        Some(offset) => now.with_timezone(&offset).date_naive(),
        None => now.date_naive(),
    }
}
