use crate::products::error::ProductsError;
use crate::products::query::ProductQuery;
use crate::types::product::{ProductListing, ProductRecord};
use chrono::NaiveDate;
use log::{info, warn};
use reqwest::{Client, Url};
use std::collections::HashSet;

/// Fetches product listings from the backend's `productos/` endpoint.
#[derive(Debug, Clone)]
pub struct ProductLoader {
    client: Client,
    endpoint: Url,
}

impl ProductLoader {
    /// Creates a loader for the API rooted at `base_url` (e.g. `http://host/api/`).
    ///
    /// A missing trailing slash is added so the endpoint resolves below the base path.
    pub fn new(client: Client, base_url: &str) -> Result<Self, ProductsError> {
        let invalid = |reason: String| ProductsError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join("productos/").map_err(|e| invalid(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    /// The listing endpoint, `<base_url>productos/`.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The full request URL for `query`.
    pub fn url_for(&self, query: &ProductQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(query.params());
        url
    }

    /// Lists the records matching `query`.
    ///
    /// Accepts both a bare JSON array and a paginated `{"results": [...]}` body.
    ///
    /// # Errors
    ///
    /// * [`ProductsError::NetworkRequest`] if the request cannot be sent.
    /// * [`ProductsError::HttpStatus`] for a 4xx or 5xx response.
    /// * [`ProductsError::ResponseBody`] if the body cannot be read.
    /// * [`ProductsError::JsonParse`] if the body is not a product listing.
    pub async fn fetch(&self, query: &ProductQuery) -> Result<Vec<ProductRecord>, ProductsError> {
        let url = self.url_for(query);
        let url_str = url.to_string();
        info!("Requesting products from {}", url_str);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProductsError::NetworkRequest(url_str.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url_str, e);
                return Err(if let Some(status) = e.status() {
                    ProductsError::HttpStatus {
                        url: url_str,
                        status,
                        source: e,
                    }
                } else {
                    ProductsError::NetworkRequest(url_str, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| ProductsError::ResponseBody(url_str.clone(), e))?;
        let listing: ProductListing = serde_json::from_slice(&body)
            .map_err(|e| ProductsError::JsonParse(url_str.clone(), e))?;
        let records = listing.into_records();

        info!("Received {} products from {}", records.len(), url_str);
        Ok(records)
    }

    /// Lists the records for the query's date together with those of the previous
    /// and next day, fetched concurrently.
    ///
    /// Local time lags UTC, so late runs of one day are listed under the next. A
    /// failing neighbour request is logged and counts as empty; a failing request
    /// for the query's own date is returned as the error. Records keep the order
    /// current, previous, next and duplicate filenames keep their first occurrence.
    pub async fn fetch_around(
        &self,
        query: &ProductQuery,
    ) -> Result<Vec<ProductRecord>, ProductsError> {
        let Some(date) = query.date else {
            return self.fetch(query).await;
        };

        let (current, previous, next) = tokio::join!(
            self.fetch(query),
            self.fetch_neighbour(query, date.pred_opt()),
            self.fetch_neighbour(query, date.succ_opt()),
        );

        let mut seen = HashSet::new();
        let merged: Vec<ProductRecord> = current?
            .into_iter()
            .chain(previous)
            .chain(next)
            .filter(|record| seen.insert(record.filename.clone()))
            .collect();
        info!("Merged {} products around {}", merged.len(), date);
        Ok(merged)
    }

    async fn fetch_neighbour(
        &self,
        query: &ProductQuery,
        date: Option<NaiveDate>,
    ) -> Vec<ProductRecord> {
        let Some(date) = date else {
            return Vec::new();
        };
        match self.fetch(&query.for_date(date)).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Ignoring failed neighbour listing for {}: {}", date, e);
                Vec::new()
            }
        }
    }
}
