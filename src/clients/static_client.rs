//! Provides the `StaticClient` for the undated products.

use crate::products::query::ProductQuery;
use crate::types::family::ProductFamily;
use crate::types::product::ProductRecord;
use crate::{Observatory, ObservatoryError};

/// Client for single-image products, obtained via [`Observatory::static_products()`].
pub struct StaticClient<'a> {
    observatory: &'a Observatory,
}

impl<'a> StaticClient<'a> {
    pub(crate) fn new(observatory: &'a Observatory) -> Self {
        Self { observatory }
    }

    /// The current Fire Weather Index map.
    pub async fn fire_weather_index(&self) -> Result<Option<ProductRecord>, ObservatoryError> {
        self.latest(ProductFamily::FireWeatherIndex, "FWI.png").await
    }

    /// The current wind-gust animation over provincial roads.
    pub async fn wind_routes(&self) -> Result<Option<ProductRecord>, ObservatoryError> {
        self.latest(ProductFamily::WindRoutes, "rafagas_rutas.gif").await
    }

    // Prefers the record with the published filename, otherwise the first one listed.
    async fn latest(
        &self,
        family: ProductFamily,
        filename: &str,
    ) -> Result<Option<ProductRecord>, ObservatoryError> {
        let mut records = self
            .observatory
            .loader()
            .fetch(&ProductQuery::new(family))
            .await?;
        let index = records
            .iter()
            .position(|r| r.filename == filename)
            .unwrap_or(0);
        Ok((index < records.len()).then(|| records.swap_remove(index)))
    }
}
