pub mod app_config;
pub mod csv;
pub mod report;
pub mod service;

pub use service::{DayReport, MarketService};
