//! HTTP surface: `/fetch-reviews`, `/health`, and the optional static front-end.

pub mod handlers;

use crate::core::export::{ExportSettings, ReviewExporter};
use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub exporter: Arc<ReviewExporter>,
    pub settings: Arc<ExportSettings>,
}

impl AppState {
    pub fn new(exporter: ReviewExporter, settings: ExportSettings) -> Self {
        Self {
            exporter: Arc::new(exporter),
            settings: Arc::new(settings),
        }
    }
}

/// Build application router
///
/// Unknown paths fall through to `static_dir` when one is given.
pub fn build_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let router = Router::new()
        .route("/fetch-reviews", get(handlers::fetch_reviews))
        .route("/health", get(handlers::health))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}
