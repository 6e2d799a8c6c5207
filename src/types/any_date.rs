use chrono::{DateTime, NaiveDate, TimeZone};

/// Anything that can name a calendar date: a `NaiveDate`, a zoned `DateTime`
/// (its local date), or an ISO `YYYY-MM-DD` string.
pub trait AnyDate {
    fn into_date(self) -> Option<NaiveDate>;
}

impl AnyDate for NaiveDate {
    fn into_date(self) -> Option<NaiveDate> {
        Some(self)
    }
}

impl<Tz: TimeZone> AnyDate for DateTime<Tz> {
    fn into_date(self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl AnyDate for &str {
    fn into_date(self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d").ok()
    }
}

impl AnyDate for String {
    fn into_date(self) -> Option<NaiveDate> {
        self.as_str().into_date()
    }
}
