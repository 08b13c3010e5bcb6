use crate::server::AppState;
use crate::utils::error::{ErrorCategory, ExportError, Result};
use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::StreamExt;
use serde::Deserialize;
use serde_json::json;
use tokio_util::io::ReaderStream;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Raw query parameters for `/fetch-reviews`; validated into an `ExportRequest`.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewQuery {
    #[serde(rename = "appId")]
    pub app_id: Option<String>,
    pub rating: Option<String>,
    pub limit: Option<String>,
}

impl IntoResponse for ExportError {
    fn into_response(self) -> Response {
        let status = match self.category() {
            ErrorCategory::ClientInput => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(
                "❌ Review export failed: {} (Category: {:?})",
                self,
                self.category()
            );
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.user_friendly_message(),
        )
            .into_response()
    }
}

/// GET /fetch-reviews?appId=..&rating=..&limit=..
///
/// Streams the filtered reviews as an `.xlsx` attachment. The report file is
/// removed once the body is finished or dropped.
pub async fn fetch_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewQuery>,
) -> Result<Response> {
    let request = state
        .settings
        .build_request(query.app_id, query.rating, query.limit)?;

    let report = state.exporter.run(&request).await?;

    let file = tokio::fs::File::open(report.path()).await?;
    let length = file.metadata().await?.len();
    let disposition = format!("attachment; filename=\"{}\"", report.download_name());

    // report 跟著 body 走，body 結束或被丟棄時檔案才刪除
    let stream = ReaderStream::new(file).map(move |chunk| {
        let _keep = &report;
        chunk
    });

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CONTENT_LENGTH, length.to_string()),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "review-exporter",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
