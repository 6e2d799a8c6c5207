//! The result of a WRF listing request, indexed by local forecast hour.

use crate::resolver::ImageResolver;
use crate::types::forecast_time::HourLabel;
use crate::types::product::ProductRecord;
use crate::types::variable::WrfVariable;
use chrono::NaiveDate;

/// WRF records gathered for one variable around one local date.
///
/// The records may include runs listed under the neighbouring days; lookups only
/// ever return records whose decoded local date equals [`WrfForecast::date`].
#[derive(Debug, Clone)]
pub struct WrfForecast {
    date: NaiveDate,
    variable: &'static WrfVariable,
    records: Vec<ProductRecord>,
    resolver: ImageResolver,
}

impl WrfForecast {
    /// Wraps fetched `records` for one local `date` and `variable`.
    ///
    /// `records` may include products of the neighbouring days; only those that
    /// `resolver` decodes to `date` are ever returned.
    pub fn new(
        date: NaiveDate,
        variable: &'static WrfVariable,
        records: Vec<ProductRecord>,
        resolver: ImageResolver,
    ) -> Self {
        Self {
            date,
            variable,
            records,
            resolver,
        }
    }

    /// The selected local date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn variable(&self) -> &'static WrfVariable {
        self.variable
    }

    /// Every fetched record, including those valid on other local dates.
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Records valid on the selected local date.
    pub fn records_for_date(&self) -> Vec<&ProductRecord> {
        self.resolver.filter_by_date(&self.records, self.date)
    }

    /// Distinct local hours with a product, ascending.
    pub fn available_hours(&self) -> Vec<HourLabel> {
        self.resolver.available_hours(&self.records, self.date)
    }

    /// `true` when no record is valid on the selected date.
    pub fn is_empty(&self) -> bool {
        self.available_hours().is_empty()
    }

    /// The record shown at the local `hour`, the first match in listing order.
    pub fn record_at(&self, hour: HourLabel) -> Option<&ProductRecord> {
        self.resolver.resolve(&self.records, self.date, hour)
    }

    /// The image URL for the local `hour`.
    ///
    /// # Returns
    ///
    /// The stored image when the record has one, otherwise its external URL.
    /// `None` when no record is valid at `hour`.
    pub fn image_at(&self, hour: HourLabel) -> Option<&str> {
        self.resolver.image_at(&self.records, self.date, hour)
    }
}
