//! Main entry point of the crate.
//!
//! An [`Observatory`] owns the HTTP client and configuration and hands out the
//! per-family clients: [`Observatory::wrf`], [`Observatory::gases`] and
//! [`Observatory::static_products`].

use crate::clients::gases_client::GasesClient;
use crate::clients::static_client::StaticClient;
use crate::clients::wrf_client::WrfClient;
use crate::config::ObservatoryConfig;
use crate::error::ObservatoryError;
use crate::products::loader::ProductLoader;
use crate::products::query::ProductQuery;
use crate::resolver::decoder::UtcOffset;
use crate::resolver::ImageResolver;
use crate::types::family::ProductFamily;
use crate::types::product::ProductRecord;
use bon::bon;
use chrono::NaiveDate;
use reqwest::Client;

/// Client for the observatory's product backend.
///
/// Create one with [`Observatory::new()`], which reads the default config file, or
/// with [`Observatory::with_config()`].
///
/// # Examples
///
/// ```no_run
/// # use observatory::{Observatory, ObservatoryError};
/// # async fn run() -> Result<(), ObservatoryError> {
/// let observatory = Observatory::new().await?;
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let forecast = observatory.wrf().date(date).variable("t2").call().await?;
/// for hour in forecast.available_hours() {
///     println!("{} -> {:?}", hour, forecast.image_at(hour));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Observatory {
    config: ObservatoryConfig,
    utc_offset: UtcOffset,
    loader: ProductLoader,
}

#[bon]
impl Observatory {
    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ObservatoryError::Config`] for an out-of-range UTC offset or a zero
    /// request timeout,
    /// [`ObservatoryError::Products`] for an unusable base URL and
    /// [`ObservatoryError::HttpClient`] if the HTTP client cannot be built.
    pub fn with_config(config: ObservatoryConfig) -> Result<Self, ObservatoryError> {
        let utc_offset = config.utc_offset()?;
        let client = Client::builder()
            .timeout(config.request_timeout()?)
            .build()
            .map_err(ObservatoryError::HttpClient)?;
        let loader = ProductLoader::new(client, &config.base_url)?;
        Ok(Self {
            config,
            utc_offset,
            loader,
        })
    }

    /// Creates a client from the config file in the default location, or from the
    /// defaults if that file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ObservatoryError::Config`] if the file exists but cannot be read,
    /// parsed or validated, and otherwise the same errors as
    /// [`Observatory::with_config()`].
    pub async fn new() -> Result<Self, ObservatoryError> {
        let config = ObservatoryConfig::load_default().await?;
        Self::with_config(config)
    }

    /// The configuration this client was created with.
    pub fn config(&self) -> &ObservatoryConfig {
        &self.config
    }

    /// The validated offset used to convert forecast runs to local time.
    pub fn utc_offset(&self) -> UtcOffset {
        self.utc_offset
    }

    /// Resolver for WRF forecast records in this observatory's local time.
    pub fn resolver(&self) -> ImageResolver {
        ImageResolver::forecast(self.utc_offset)
    }

    /// The underlying listing loader, for requests the family clients do not cover.
    pub fn loader(&self) -> &ProductLoader {
        &self.loader
    }

    /// Lists raw product records of one family.
    ///
    /// # Arguments
    ///
    /// * `family` - The product family to list.
    /// * `date` - Optional publication date. Ignored for undated families.
    /// * `variable` - Optional WRF variable id. Sent as given, without validation.
    ///
    /// # Errors
    ///
    /// Returns [`ObservatoryError::Products`] if the request fails, the backend
    /// answers with an error status or the body is not a product listing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use observatory::{Observatory, ObservatoryError, ProductFamily};
    /// # async fn run(observatory: Observatory) -> Result<(), ObservatoryError> {
    /// let records = observatory
    ///     .products()
    ///     .family(ProductFamily::FireWeatherIndex)
    ///     .call()
    ///     .await?;
    /// println!("{} FWI records", records.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn products(
        &self,
        family: ProductFamily,
        date: Option<NaiveDate>,
        variable: Option<&str>,
    ) -> Result<Vec<ProductRecord>, ObservatoryError> {
        let mut query = ProductQuery::new(family);
        query.date = date;
        query.variable = variable.map(str::to_string);
        Ok(self.loader.fetch(&query).await?)
    }

    /// Access WRF forecast maps.
    pub fn wrf(&self) -> WrfClient<'_> {
        WrfClient::new(self)
    }

    /// Access the daily CO₂ and CH₄ charts.
    pub fn gases(&self) -> GasesClient<'_> {
        GasesClient::new(self)
    }

    /// Access the undated products (FWI map, wind-route animation).
    pub fn static_products(&self) -> StaticClient<'_> {
        StaticClient::new(self)
    }
}
