//! Local forecast time values derived from product filenames.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// An hour-of-day label rendered as `HH:00`.
///
/// Ordering is numeric, so `09:00` sorts before `10:00` and `24:00` (which the hour
/// selector offers as its last default entry) sorts after `23:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourLabel(u32);

impl HourLabel {
    /// Creates a label for the given hour. Hours above 48 are rejected.
    pub fn new(hour: u32) -> Option<Self> {
        (hour <= 48).then_some(HourLabel(hour))
    }

    /// The numeric hour.
    pub fn hour(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for HourLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Error returned when a string is not an `HH:00`-style hour label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid hour label '{0}', expected HH:00")]
pub struct InvalidHourLabel(pub String);

impl FromStr for HourLabel {
    type Err = InvalidHourLabel;

    /// Parses `HH:00`, `H:00` or a bare hour such as `7`. Only the hour part is
    /// significant, matching how the dashboard compares selections.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hour_part = trimmed.split(':').next().unwrap_or(trimmed);
        hour_part
            .parse::<u32>()
            .ok()
            .and_then(HourLabel::new)
            .ok_or_else(|| InvalidHourLabel(s.to_string()))
    }
}

/// The local date and hour that a forecast image is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForecastTime {
    /// Local calendar date.
    pub local_date: NaiveDate,
    /// Local hour of day, always within `0..=23`.
    pub local_hour: u32,
}

impl ForecastTime {
    pub(crate) fn new(local_date: NaiveDate, local_hour: u32) -> Self {
        debug_assert!(local_hour < 24);
        Self {
            local_date,
            local_hour,
        }
    }

    /// The local hour as an `HH:00` label.
    pub fn hour_label(&self) -> HourLabel {
        HourLabel(self.local_hour)
    }

    /// Whether this time falls on `date` at `hour`.
    pub fn matches(&self, date: NaiveDate, hour: HourLabel) -> bool {
        self.local_date == date && self.local_hour == hour.hour()
    }
}

impl fmt::Display for ForecastTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.local_date.format("%Y-%m-%d"), self.hour_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_label_formatting() {
        assert_eq!(HourLabel::new(0).unwrap().to_string(), "00:00");
        assert_eq!(HourLabel::new(7).unwrap().to_string(), "07:00");
        assert_eq!(HourLabel::new(24).unwrap().to_string(), "24:00");
        assert!(HourLabel::new(49).is_none());
    }

    #[test]
    fn test_hour_label_parsing() {
        assert_eq!("21:00".parse::<HourLabel>().unwrap().hour(), 21);
        assert_eq!("7:00".parse::<HourLabel>().unwrap().hour(), 7);
        assert_eq!(" 03 ".parse::<HourLabel>().unwrap().hour(), 3);
        assert!("noon".parse::<HourLabel>().is_err());
        assert!("99:00".parse::<HourLabel>().is_err());
    }

    #[test]
    fn test_hour_label_orders_numerically() {
        let mut labels: Vec<HourLabel> = ["10:00", "9:00", "00:00", "24:00"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        labels.sort();
        let rendered: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        assert_eq!(rendered, ["00:00", "09:00", "10:00", "24:00"]);
    }

    #[test]
    fn test_forecast_time_display_and_match() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
        let time = ForecastTime::new(date, 0);
        assert_eq!(time.to_string(), "2024-01-11 00:00");
        assert!(time.matches(date, HourLabel::new(0).unwrap()));
        assert!(!time.matches(date, HourLabel::new(24).unwrap()));
    }
}
