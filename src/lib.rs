mod clients;
mod config;
mod error;
mod observatory;
mod products;
mod resolver;
mod session;
mod types;
mod viewer;

#[cfg(test)]
mod test_utils;

pub use error::ObservatoryError;
pub use observatory::*;

pub use config::error::ConfigError;
pub use config::{ObservatoryConfig, DEFAULT_BASE_URL};

pub use clients::gases_client::*;
pub use clients::static_client::*;
pub use clients::wrf_client::*;

pub use products::error::ProductsError;
pub use products::loader::ProductLoader;
pub use products::query::ProductQuery;

pub use resolver::availability::{available_hours, fallback_hour, filter_by_date};
pub use resolver::decoder::{
    offset_to_local, DatePrefixDecoder, ForecastRun, ForecastRunDecoder, TimeDecoder, UtcOffset,
};
pub use resolver::selection::{resolve_image, resolve_record};
pub use resolver::ImageResolver;

pub use types::any_date::AnyDate;
pub use types::family::{ProductFamily, UnknownFamily};
pub use types::forecast::WrfForecast;
pub use types::forecast_time::{ForecastTime, HourLabel, InvalidHourLabel};
pub use types::gas::{find_chart, GasChart, GasType};
pub use types::product::ProductRecord;
pub use types::variable::{WrfVariable, WRF_VARIABLES};

pub use session::date_window::{local_today, DateWindow};
pub use session::forecast_session::{ForecastSession, ImageView, LoadOutcome, PendingLoad};
pub use session::navigator::{default_hours, HourNavigator, SHORTCUT_HOURS};
pub use session::sequencer::{RequestSequencer, RequestTicket};

pub use viewer::modal::{ModalGuard, Overflow, ScrollLock};
pub use viewer::{Cursor, ImageViewer, Point, ViewerAction, MAX_SCALE, MIN_SCALE, ZOOM_STEP};
