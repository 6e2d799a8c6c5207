use crate::resolver::decoder::TimeDecoder;
use crate::types::forecast_time::HourLabel;
use crate::types::product::ProductRecord;
use chrono::NaiveDate;

/// Finds the first record valid at `date` and `hour` in local time.
///
/// Returns `None` for an empty list, for an hour with no product, and when every
/// candidate is undecodable.
pub fn resolve_record<'a, D: TimeDecoder>(
    decoder: &D,
    records: &'a [ProductRecord],
    date: NaiveDate,
    hour: HourLabel,
) -> Option<&'a ProductRecord> {
    records.iter().find(|record| {
        decoder
            .decode(&record.filename)
            .is_some_and(|time| time.matches(date, hour))
    })
}

/// Resolves the image reference to display for `date` and `hour`.
///
/// See [`ProductRecord::preferred_image`] for the local-before-external rule.
pub fn resolve_image<'a, D: TimeDecoder>(
    decoder: &D,
    records: &'a [ProductRecord],
    date: NaiveDate,
    hour: HourLabel,
) -> Option<&'a str> {
    resolve_record(decoder, records, date, hour).and_then(ProductRecord::preferred_image)
}
