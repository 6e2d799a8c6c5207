//! Time-indexed lookup over product records.
//!
//! An [`ImageResolver`] pairs a record list with the [`TimeDecoder`] for its product
//! family, so WRF forecasts and date-stamped charts share the same filtering and
//! selection logic.

pub mod availability;
pub mod decoder;
pub mod selection;

use crate::resolver::decoder::{ForecastRunDecoder, TimeDecoder, UtcOffset};
use crate::types::forecast_time::{ForecastTime, HourLabel};
use crate::types::product::ProductRecord;
use chrono::NaiveDate;

/// Answers "which hours exist" and "which image to show" for a record listing.
///
/// The decoder `D` turns filenames into local times. It defaults to the WRF
/// forecast-run decoder; use [`DatePrefixDecoder`](crate::DatePrefixDecoder) for
/// date-stamped charts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageResolver<D = ForecastRunDecoder> {
    decoder: D,
}

impl ImageResolver<ForecastRunDecoder> {
    /// Resolver for WRF forecast filenames at the given local offset.
    pub fn forecast(utc_offset: UtcOffset) -> Self {
        Self::new(ForecastRunDecoder::new(utc_offset))
    }
}

impl<D: TimeDecoder> ImageResolver<D> {
    /// Creates a resolver around any [`TimeDecoder`].
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// The decoder used to read filenames.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Local date and hour encoded in `filename`, or `None` if it does not match.
    pub fn decode(&self, filename: &str) -> Option<ForecastTime> {
        self.decoder.decode(filename)
    }

    /// Records whose filename decodes to the local `date`, in listing order.
    ///
    /// Records with undecodable filenames are skipped.
    pub fn filter_by_date<'a>(
        &self,
        records: &'a [ProductRecord],
        date: NaiveDate,
    ) -> Vec<&'a ProductRecord> {
        availability::filter_by_date(&self.decoder, records, date)
    }

    /// The distinct local hours available on `date`, ascending.
    ///
    /// # Returns
    ///
    /// An empty `Vec` when no record decodes to `date`.
    pub fn available_hours(&self, records: &[ProductRecord], date: NaiveDate) -> Vec<HourLabel> {
        availability::available_hours(&self.decoder, records, date)
    }

    /// The first record, in listing order, that is valid at `date` and `hour`.
    ///
    /// # Arguments
    ///
    /// * `records` - The listing, usually the merged current/previous/next day fetch.
    /// * `date` - Local date selected by the user.
    /// * `hour` - Local hour selected by the user.
    ///
    /// # Returns
    ///
    /// `None` if no record matches.
    pub fn resolve<'a>(
        &self,
        records: &'a [ProductRecord],
        date: NaiveDate,
        hour: HourLabel,
    ) -> Option<&'a ProductRecord> {
        selection::resolve_record(&self.decoder, records, date, hour)
    }

    /// The image URL of the record picked by [`ImageResolver::resolve`].
    ///
    /// The locally stored image is preferred over the external one. Returns `None`
    /// when nothing matches or the matching record carries no image.
    pub fn image_at<'a>(
        &self,
        records: &'a [ProductRecord],
        date: NaiveDate,
        hour: HourLabel,
    ) -> Option<&'a str> {
        selection::resolve_image(&self.decoder, records, date, hour)
    }
}
