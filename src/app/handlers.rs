use std::any::Any;
use std::net::SocketAddr;

use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::app::error::ApiError;
use crate::app::state::AppState;
use crate::core::contact::{confirmation_message, parse_submission};
use crate::domain::model::{iso_timestamp, VisitorCount};
use crate::utils::error::DashboardError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub region: String,
    pub aws_available: bool,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub message: String,
}

fn json_bytes(body: Bytes) -> Response {
    ([(CONTENT_TYPE, "application/json")], body).into_response()
}

pub async fn dashboard(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.content.dashboard.clone())
}

pub async fn portfolio(State(state): State<AppState>) -> Response {
    json_bytes(state.content.portfolio.clone())
}

pub async fn projects(State(state): State<AppState>) -> Response {
    json_bytes(state.content.projects.clone())
}

pub async fn skills(State(state): State<AppState>) -> Response {
    json_bytes(state.content.skills.clone())
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: iso_timestamp(Utc::now()),
        version: env!("CARGO_PKG_VERSION"),
        region: state.region.to_string(),
        aws_available: state.aws_available(),
    })
}

pub async fn visitor_count(State(state): State<AppState>) -> Json<VisitorCount> {
    let visit = state.counter.record_visit().await;
    tracing::debug!("Visitor count {} from {:?}", visit.count, visit.source);
    Json(visit)
}

pub async fn contact(
    connect_info: Option<ConnectInfo<SocketAddr>>,
    body: Bytes,
) -> Result<Json<ContactResponse>, ApiError> {
    let source_ip = connect_info.map(|ConnectInfo(addr)| addr.ip().to_string());
    let submission = parse_submission(&body, source_ip, Utc::now())?;

    let logged = serde_json::to_string_pretty(&submission)
        .map_err(|e| ApiError::ContactProcessing(DashboardError::from(e)))?;
    tracing::info!("Contact form submission: {}", logged);

    Ok(Json(ContactResponse {
        status: "success",
        message: confirmation_message(&submission),
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Turns a handler panic into the generic 500 envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);
    ApiError::Internal.into_response()
}
