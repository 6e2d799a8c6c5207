use crate::config::error::ConfigError;
use crate::products::error::ProductsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObservatoryError {
    #[error(transparent)]
    Products(#[from] ProductsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Unknown WRF variable '{0}'")]
    UnknownVariable(String),
}
