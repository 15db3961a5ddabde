pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod view;

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/portfolio", get(handlers::portfolio))
        .route("/api/projects", get(handlers::projects))
        .route("/api/skills", get(handlers::skills))
        .route("/api/health", get(handlers::health))
        .route("/api/visitor-count", get(handlers::visitor_count))
        .route("/api/contact", post(handlers::contact));

    with_middleware(routes, state)
}

/// Wraps routes in the 404 fallback, panic catching, tracing and CORS.
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    routes
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
