//! Provides the `WrfClient` for requesting WRF forecast maps.
//!
//! This client is obtained via [`Observatory::wrf()`] and returns a
//! [`WrfForecast`] that can be queried by local hour.

use crate::products::query::ProductQuery;
use crate::types::family::ProductFamily;
use crate::types::forecast::WrfForecast;
use crate::types::variable::WrfVariable;
use crate::{Observatory, ObservatoryError};
use bon::bon;
use chrono::NaiveDate;
use log::debug;

/// A client builder for WRF forecast maps.
///
/// Calling `.date(..)` starts the request; `.variable(..)` and
/// `.include_neighbours(..)` are optional, and `.call().await` executes it.
pub struct WrfClient<'a> {
    observatory: &'a Observatory,
}

#[bon]
impl<'a> WrfClient<'a> {
    pub(crate) fn new(observatory: &'a Observatory) -> Self {
        Self { observatory }
    }

    /// Fetches the forecast maps of one variable valid on a local date.
    ///
    /// # Arguments
    ///
    /// * `date` - The local date to show.
    /// * `variable` - WRF variable id such as `"t2"` or `"wspd10"`. Defaults to `t2`.
    /// * `include_neighbours` - Also list the previous and next day, so runs that
    ///   cross local midnight are found. Defaults to the `fetch_neighbour_days`
    ///   config value.
    ///
    /// # Errors
    ///
    /// * [`ObservatoryError::UnknownVariable`] if `variable` is not in the catalogue.
    /// * [`ObservatoryError::Products`] if the listing for `date` itself fails.
    ///   Failures for the neighbouring days are logged and ignored.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use observatory::{Observatory, ObservatoryError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ObservatoryError> {
    /// let observatory = Observatory::new().await?;
    /// let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// let forecast = observatory.wrf().date(date).variable("ppn").call().await?;
    /// println!("{} hours available", forecast.available_hours().len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = date)]
    #[doc(hidden)]
    pub async fn build_date(
        &self,
        #[builder(start_fn)] date: NaiveDate,
        variable: Option<&str>,
        include_neighbours: Option<bool>,
    ) -> Result<WrfForecast, ObservatoryError> {
        let variable = match variable {
            Some(id) => WrfVariable::find(id)
                .ok_or_else(|| ObservatoryError::UnknownVariable(id.to_string()))?,
            None => WrfVariable::default_variable(),
        };
        let include_neighbours =
            include_neighbours.unwrap_or(self.observatory.config().fetch_neighbour_days);
        debug!(
            "Fetching WRF {} for {} (neighbours: {})",
            variable, date, include_neighbours
        );

        let query = ProductQuery::new(ProductFamily::Wrf)
            .on(date)
            .with_variable(variable.id);
        let loader = self.observatory.loader();
        let records = if include_neighbours {
            loader.fetch_around(&query).await?
        } else {
            loader.fetch(&query).await?
        };

        Ok(WrfForecast::new(
            date,
            variable,
            records,
            self.observatory.resolver(),
        ))
    }
}
