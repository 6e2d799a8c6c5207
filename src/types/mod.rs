pub mod any_date;
pub mod family;
pub mod forecast;
pub mod forecast_time;
pub mod gas;
pub mod product;
pub mod variable;
