//! Query parameters for the `productos/` listing endpoint.

use crate::types::family::ProductFamily;
use chrono::NaiveDate;

/// Parameters of one product-listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub family: ProductFamily,
    pub date: Option<NaiveDate>,
    pub variable: Option<String>,
}

impl ProductQuery {
    /// An undated query listing every product of `family`.
    pub fn new(family: ProductFamily) -> Self {
        Self {
            family,
            date: None,
            variable: None,
        }
    }

    /// Restricts the listing to records published for `date`.
    ///
    /// Undated families ignore the date when the request is built.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Restricts the listing to one WRF variable id, such as `"t2"`.
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = Some(variable.into());
        self
    }

    /// Same query moved to another date.
    pub fn for_date(&self, date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..self.clone()
        }
    }

    /// Query-string pairs in the order the backend documents them.
    ///
    /// `fecha` is only sent for dated families.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("tipo", self.family.query_id().to_string())];
        if let Some(date) = self.date.filter(|_| self.family.is_dated()) {
            params.push(("fecha", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(variable) = &self.variable {
            params.push(("variable", variable.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrf_params() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let query = ProductQuery::new(ProductFamily::Wrf).on(date).with_variable("t2");
        assert_eq!(
            query.params(),
            vec![
                ("tipo", "wrf_cba".to_string()),
                ("fecha", "2024-01-10".to_string()),
                ("variable", "t2".to_string()),
            ]
        );
    }

    #[test]
    fn test_undated_family_drops_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let query = ProductQuery::new(ProductFamily::FireWeatherIndex).on(date);
        assert_eq!(query.params(), vec![("tipo", "FWI".to_string())]);
    }

    #[test]
    fn test_for_date_keeps_family_and_variable() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let second = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
        let query = ProductQuery::new(ProductFamily::Wrf).on(first).with_variable("ppn");
        let moved = query.for_date(second);
        assert_eq!(moved.date, Some(second));
        assert_eq!(moved.variable.as_deref(), Some("ppn"));
        assert_eq!(moved.family, ProductFamily::Wrf);
    }
}
