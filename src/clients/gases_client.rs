//! Provides the `GasesClient` for the daily greenhouse-gas charts.

use crate::products::query::ProductQuery;
use crate::types::family::ProductFamily;
use crate::types::gas::{find_chart, GasChart, GasType};
use crate::{Observatory, ObservatoryError};
use chrono::NaiveDate;
use log::info;

/// Client for the CO₂ and CH₄ charts, obtained via [`Observatory::gases()`].
pub struct GasesClient<'a> {
    observatory: &'a Observatory,
}

impl<'a> GasesClient<'a> {
    pub(crate) fn new(observatory: &'a Observatory) -> Self {
        Self { observatory }
    }

    /// Fetches the charts published for `date`, one entry per [`GasType`] in
    /// [`GasType::ALL`] order. Gases without a chart have `record: None`.
    pub async fn for_date(&self, date: NaiveDate) -> Result<Vec<GasChart>, ObservatoryError> {
        let query = ProductQuery::new(ProductFamily::AirMeasurement).on(date);
        let records = self.observatory.loader().fetch(&query).await?;

        let charts: Vec<GasChart> = GasType::ALL
            .iter()
            .map(|&gas| GasChart {
                gas,
                record: find_chart(gas, &records, date).cloned(),
            })
            .collect();
        info!(
            "{} of {} gas charts available for {}",
            charts.iter().filter(|c| c.is_available()).count(),
            charts.len(),
            date
        );
        Ok(charts)
    }
}
