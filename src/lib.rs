pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::{router, AppState};
pub use crate::config::AppConfig;
pub use crate::core::counter::{CounterBackend, VisitorCounter};
pub use crate::domain::model::{CounterSource, PortfolioRecord, VisitorCount};
pub use crate::utils::error::{DashboardError, Result};
