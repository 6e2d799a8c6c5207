pub mod date_window;
pub mod forecast_session;
pub mod navigator;
pub mod sequencer;
