use crate::resolver::decoder::TimeDecoder;
use crate::types::forecast_time::HourLabel;
use crate::types::product::ProductRecord;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Keeps only the records whose decoded local date is `date`.
///
/// Undecodable records are dropped. Applying the filter to its own output with the
/// same date returns the same records.
pub fn filter_by_date<'a, D: TimeDecoder>(
    decoder: &D,
    records: &'a [ProductRecord],
    date: NaiveDate,
) -> Vec<&'a ProductRecord> {
    records
        .iter()
        .filter(|record| {
            decoder
                .decode(&record.filename)
                .is_some_and(|time| time.local_date == date)
        })
        .collect()
}

/// Distinct local hours available on `date`, ascending by numeric hour.
///
/// The result does not depend on the order of `records`.
pub fn available_hours<D: TimeDecoder>(
    decoder: &D,
    records: &[ProductRecord],
    date: NaiveDate,
) -> Vec<HourLabel> {
    records
        .iter()
        .filter_map(|record| decoder.decode(&record.filename))
        .filter(|time| time.local_date == date)
        .map(|time| time.hour_label())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Picks the hour to show after the available hours changed.
///
/// Keeps `selected` when it is still available, otherwise falls back to the first
/// available hour, or to no selection at all when nothing is available.
pub fn fallback_hour(available: &[HourLabel], selected: Option<HourLabel>) -> Option<HourLabel> {
    match selected {
        Some(hour) if available.contains(&hour) => Some(hour),
        _ => available.first().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::decoder::ForecastRunDecoder;

    fn records(names: &[&str]) -> Vec<ProductRecord> {
        names.iter().map(|n| ProductRecord::new(*n)).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn labels(hours: &[HourLabel]) -> Vec<String> {
        hours.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn test_scenario_across_the_day_boundary() {
        let decoder = ForecastRunDecoder::default();
        let recs = records(&[
            "t2-2024-01-10_18+06.png",
            "t2-2024-01-10_18+09.png",
            "t2-2024-01-10_06+20.png",
        ]);

        let on_eleventh = filter_by_date(&decoder, &recs, date(2024, 1, 11));
        assert_eq!(on_eleventh.len(), 1);
        assert_eq!(on_eleventh[0].filename, "t2-2024-01-10_18+09.png");
        assert_eq!(
            labels(&available_hours(&decoder, &recs, date(2024, 1, 11))),
            ["00:00"]
        );

        assert_eq!(
            labels(&available_hours(&decoder, &recs, date(2024, 1, 10))),
            ["21:00", "23:00"]
        );
    }

    #[test]
    fn test_sorted_numerically_and_deduplicated_regardless_of_order() {
        let decoder = ForecastRunDecoder::default();
        let forward = records(&[
            "t2-2024-01-10_06+06.png",  // 09:00
            "t2-2024-01-10_06+13.png",  // 16:00
            "ppn-2024-01-10_06+13.png", // 16:00 again
            "t2-2024-01-10_06+04.png",  // 07:00
            "t2-2024-01-09_18+09.png",  // 00:00 on the 10th
        ]);
        let mut backward = forward.clone();
        backward.reverse();

        let expected = ["00:00", "07:00", "09:00", "16:00"];
        assert_eq!(labels(&available_hours(&decoder, &forward, date(2024, 1, 10))), expected);
        assert_eq!(labels(&available_hours(&decoder, &backward, date(2024, 1, 10))), expected);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let decoder = ForecastRunDecoder::default();
        let recs = records(&[
            "t2-2024-01-10_18+06.png",
            "t2-2024-01-10_18+09.png",
            "t2-2024-01-10_06+20.png",
            "not-a-forecast.png",
        ]);
        let target = date(2024, 1, 10);
        let once: Vec<ProductRecord> = filter_by_date(&decoder, &recs, target)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<ProductRecord> = filter_by_date(&decoder, &once, target)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_undecodable_records_are_excluded() {
        let decoder = ForecastRunDecoder::default();
        let recs = records(&["FWI.png", "CO2_webvisualizer_v4.png", "t2-2024-13-01_06+00.png"]);
        assert!(available_hours(&decoder, &recs, date(2024, 1, 10)).is_empty());
        assert!(available_hours(&decoder, &[], date(2024, 1, 10)).is_empty());
    }

    #[test]
    fn test_fallback_hour() {
        let available: Vec<HourLabel> = ["03:00", "12:00", "21:00"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let noon = "12:00".parse().ok();
        let one = "01:00".parse().ok();

        assert_eq!(fallback_hour(&available, noon), noon);
        assert_eq!(fallback_hour(&available, one), Some(available[0]));
        assert_eq!(fallback_hour(&available, None), Some(available[0]));
        assert_eq!(fallback_hour(&[], noon), None);
    }
}
