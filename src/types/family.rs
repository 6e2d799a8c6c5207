//! Defines the product families (`tipo`) published by the observatory backend.

use std::fmt;
use std::str::FromStr;

/// A family of products, identified on the wire by its `tipo` query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductFamily {
    /// Hourly WRF model output for Córdoba. Filenames encode run date, run hour and offset.
    Wrf,
    /// Daily greenhouse gas charts (CO₂, CH₄) from the Picarro analyzer.
    AirMeasurement,
    /// Fire Weather Index map. A single, undated image.
    FireWeatherIndex,
    /// Wind gust animation over provincial roads. A single, undated image.
    WindRoutes,
}

impl ProductFamily {
    /// The value sent as the `tipo` query parameter.
    pub fn query_id(&self) -> &'static str {
        match self {
            ProductFamily::Wrf => "wrf_cba",
            ProductFamily::AirMeasurement => "MedicionAire",
            ProductFamily::FireWeatherIndex => "FWI",
            ProductFamily::WindRoutes => "rutas_caminera",
        }
    }

    /// Whether listings of this family are filtered by date.
    pub fn is_dated(&self) -> bool {
        matches!(self, ProductFamily::Wrf | ProductFamily::AirMeasurement)
    }
}

impl fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_id())
    }
}

/// Error returned when a string names no known product family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown product family '{0}'")]
pub struct UnknownFamily(pub String);

impl FromStr for ProductFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrf_cba" => Ok(ProductFamily::Wrf),
            "MedicionAire" => Ok(ProductFamily::AirMeasurement),
            "FWI" => Ok(ProductFamily::FireWeatherIndex),
            "rutas_caminera" => Ok(ProductFamily::WindRoutes),
            other => Err(UnknownFamily(other.to_string())),
        }
    }
}
