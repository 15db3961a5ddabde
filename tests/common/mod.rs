#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use portfolio_dashboard::domain::model::CounterRecord;
use portfolio_dashboard::domain::ports::CounterStore;
use portfolio_dashboard::{
    router, AppConfig, AppState, CounterBackend, DashboardError, PortfolioRecord, Result,
    VisitorCounter,
};
use tower::ServiceExt;

/// A store whose every call fails, like a table without permissions.
pub struct BrokenStore;

#[async_trait]
impl CounterStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<CounterRecord>> {
        Err(DashboardError::CounterStoreError {
            message: "AccessDeniedException".to_string(),
        })
    }

    async fn put(&self, _record: CounterRecord) -> Result<()> {
        Err(DashboardError::CounterStoreError {
            message: "AccessDeniedException".to_string(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "broken"
    }
}

pub fn state_with(backend: CounterBackend) -> AppState {
    AppState::new(
        PortfolioRecord::builtin(),
        VisitorCounter::new(backend),
        &AppConfig::default(),
    )
    .unwrap()
}

pub fn app_with(backend: CounterBackend) -> Router {
    router(state_with(backend))
}

pub fn app_with_store(store: Arc<dyn CounterStore>) -> Router {
    app_with(CounterBackend::Remote(store))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}
