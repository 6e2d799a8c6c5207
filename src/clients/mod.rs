pub mod gases_client;
pub mod static_client;
pub mod wrf_client;
