use std::sync::Arc;

use axum::body::Bytes;

use crate::app::view::render_dashboard;
use crate::config::AppConfig;
use crate::core::counter::VisitorCounter;
use crate::domain::model::PortfolioRecord;
use crate::utils::error::Result;

/// Portfolio content serialized once at startup. Every response for these
/// routes is a clone of the same bytes.
#[derive(Debug)]
pub struct RenderedContent {
    pub portfolio: Bytes,
    pub projects: Bytes,
    pub skills: Bytes,
    pub dashboard: Bytes,
}

impl RenderedContent {
    pub fn render(portfolio: &PortfolioRecord) -> Result<Self> {
        Ok(Self {
            portfolio: Bytes::from(serde_json::to_vec(portfolio)?),
            projects: Bytes::from(serde_json::to_vec(&portfolio.projects)?),
            skills: Bytes::from(serde_json::to_vec(&portfolio.skills)?),
            dashboard: Bytes::from(render_dashboard(portfolio)),
        })
    }
}

/// Everything a handler may touch, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct AppState {
    pub content: Arc<RenderedContent>,
    pub counter: VisitorCounter,
    pub region: Arc<str>,
}

impl AppState {
    pub fn new(portfolio: PortfolioRecord, counter: VisitorCounter, config: &AppConfig) -> Result<Self> {
        let content = RenderedContent::render(&portfolio)?;

        Ok(Self {
            content: Arc::new(content),
            counter,
            region: Arc::from(config.region.as_str()),
        })
    }

    pub fn aws_available(&self) -> bool {
        self.counter.is_available()
    }
}
