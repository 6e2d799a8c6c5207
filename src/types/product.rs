//! Defines the product record returned by the observatory's product-listing endpoint.
//!
//! The backend serializes records with Spanish field names (`nombre_archivo`,
//! `imagen_url`, `url_imagen`, `ultima_fecha`). Those are the canonical wire names,
//! but the camelCase names (`filename`, `imageUrl`, ...) are accepted as aliases so
//! fixtures and other producers can use either.

use serde::{Deserialize, Deserializer, Serialize};

/// A single pre-rendered product image as listed by the backend.
///
/// For forecast families the `filename` encodes the run date, run hour and forecast
/// offset as `YYYY-MM-DD_HH+NN` (e.g. `t2-2024-01-10_18+09.png`). The record itself
/// carries no decoded time; use an [`crate::ImageResolver`] to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Backend primary key, if the listing includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Encoded product filename.
    #[serde(rename = "nombre_archivo", alias = "filename")]
    pub filename: String,
    /// Reference to the copy stored by the backend. Preferred when present.
    #[serde(rename = "imagen_url", alias = "imageUrl", default)]
    pub image_url: Option<String>,
    /// Reference to the externally hosted original.
    #[serde(rename = "url_imagen", alias = "externalImageUrl", default)]
    pub external_image_url: Option<String>,
    /// Last time the backend saw this product, as reported by the backend.
    #[serde(
        rename = "ultima_fecha",
        alias = "lastUpdated",
        default,
        deserialize_with = "deserialize_last_updated"
    )]
    pub last_updated: Option<String>,
    /// Variable identifier (WRF products only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    /// Product family name (`tipo`) the record belongs to.
    #[serde(
        rename = "tipo_producto_nombre",
        alias = "family",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub family: Option<String>,
}

impl ProductRecord {
    /// Creates a record with only a filename set.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            id: None,
            filename: filename.into(),
            image_url: None,
            external_image_url: None,
            last_updated: None,
            variable: None,
            family: None,
        }
    }

    /// Sets the locally stored image reference.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Sets the externally hosted image reference.
    pub fn with_external_image_url(mut self, url: impl Into<String>) -> Self {
        self.external_image_url = Some(url.into());
        self
    }

    /// Returns the image reference to display for this record.
    ///
    /// The locally stored copy wins over the external original; the external one is
    /// only used when the local reference is absent (or empty). Returns `None` when
    /// the record has no usable image at all.
    pub fn preferred_image(&self) -> Option<&str> {
        non_empty(self.image_url.as_deref()).or_else(|| non_empty(self.external_image_url.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// The two response shapes of the listing endpoint: a plain array, or a paginated
/// object with a `results` array (other pagination keys are ignored).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProductListing {
    Paginated { results: Vec<ProductRecord> },
    Plain(Vec<ProductRecord>),
}

impl ProductListing {
    pub(crate) fn into_records(self) -> Vec<ProductRecord> {
        match self {
            ProductListing::Paginated { results } => results,
            ProductListing::Plain(records) => records,
        }
    }
}

// The list serializer sends `"2024-01-10 21:00:00"`, the detail serializer sends
// `{"fecha": ..., "hora": ..., "fecha_creacion": ...}`. Both collapse to one string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLastUpdated {
    Text(String),
    Parts { fecha: String, hora: Option<String> },
}

fn deserialize_last_updated<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawLastUpdated>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        RawLastUpdated::Text(text) => text,
        RawLastUpdated::Parts { fecha, hora: Some(hora) } => format!("{} {}", fecha, hora),
        RawLastUpdated::Parts { fecha, hora: None } => fecha,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "id": 7,
            "url_imagen": "https://yaku.ohmc.ar/public/wrf/img/CBA/2024_01/10_18/t2/t2-2024-01-10_18+09.png",
            "imagen_url": "http://localhost:8000/media/productos/t2-2024-01-10_18+09.png",
            "tipo_producto_nombre": "wrf_cba",
            "variable": "t2",
            "nombre_archivo": "t2-2024-01-10_18+09.png",
            "ultima_fecha": "2024-01-11 00:00:00"
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.filename, "t2-2024-01-10_18+09.png");
        assert_eq!(record.variable.as_deref(), Some("t2"));
        assert_eq!(record.family.as_deref(), Some("wrf_cba"));
        assert_eq!(record.last_updated.as_deref(), Some("2024-01-11 00:00:00"));
        assert_eq!(
            record.preferred_image(),
            Some("http://localhost:8000/media/productos/t2-2024-01-10_18+09.png")
        );
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let json = r#"{
            "filename": "rh2-2024-03-02_06+12.png",
            "externalImageUrl": "https://example.org/rh2.png",
            "lastUpdated": null
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.filename, "rh2-2024-03-02_06+12.png");
        assert!(record.image_url.is_none());
        assert!(record.last_updated.is_none());
        assert_eq!(record.preferred_image(), Some("https://example.org/rh2.png"));
    }

    #[test]
    fn test_last_updated_object_form() {
        let json = r#"{
            "nombre_archivo": "FWI.png",
            "ultima_fecha": {"fecha": "2024-01-10", "hora": "10:30:00", "fecha_creacion": "2024-01-10T13:31:00Z"}
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.last_updated.as_deref(), Some("2024-01-10 10:30:00"));
    }

    #[test]
    fn test_preferred_image_fallbacks() {
        let both = ProductRecord::new("a")
            .with_image_url("local.png")
            .with_external_image_url("remote.png");
        assert_eq!(both.preferred_image(), Some("local.png"));

        let external_only = ProductRecord::new("a").with_external_image_url("remote.png");
        assert_eq!(external_only.preferred_image(), Some("remote.png"));

        let empty_local = ProductRecord::new("a")
            .with_image_url("")
            .with_external_image_url("remote.png");
        assert_eq!(empty_local.preferred_image(), Some("remote.png"));

        assert_eq!(ProductRecord::new("a").preferred_image(), None);
    }

    #[test]
    fn test_listing_shapes() {
        let plain = r#"[{"nombre_archivo": "a"}, {"nombre_archivo": "b"}]"#;
        let listing: ProductListing = serde_json::from_str(plain).unwrap();
        assert_eq!(listing.into_records().len(), 2);

        let paginated = r#"{"count": 1, "next": null, "previous": null, "results": [{"nombre_archivo": "a"}]}"#;
        let listing: ProductListing = serde_json::from_str(paginated).unwrap();
        let records = listing.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "a");
    }
}
