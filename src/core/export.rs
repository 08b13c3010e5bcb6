use crate::core::filter::filter_reviews;
use crate::core::rating::parse_ratings;
use crate::core::report_file::ReportFile;
use crate::domain::model::{ExportRequest, SortOrder};
use crate::domain::ports::{ConfigProvider, ReportWriter, ReviewSource};
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::validate_required_field;
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_LIMIT: u32 = 100;
pub const MAX_LIMIT: u32 = 5000;
pub const DEFAULT_RATING: &str = "1";

/// Settings the request handler is built with.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
    pub default_limit: u32,
    pub max_limit: u32,
    pub default_rating: String,
}

impl ExportSettings {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
            default_rating: DEFAULT_RATING.to_string(),
        }
    }

    pub fn from_provider<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            output_dir: PathBuf::from(config.output_dir()),
            default_limit: config.default_limit(),
            max_limit: config.max_limit(),
            default_rating: config.default_rating().to_string(),
        }
    }

    /// 驗證查詢參數並套用預設值與上限
    pub fn build_request(
        &self,
        app_id: Option<String>,
        rating: Option<String>,
        limit: Option<String>,
    ) -> Result<ExportRequest> {
        let app_id = validate_required_field("appId", &app_id)
            .map_err(|_| ExportError::invalid_request("appId is required"))?
            .to_string();

        // 只有缺少參數時才用預設值，`rating=` 原樣保留
        let rating_spec = rating.unwrap_or_else(|| self.default_rating.clone());

        let requested = match limit.as_deref().map(str::trim) {
            None | Some("") => self.default_limit,
            Some(raw) => match raw.parse::<u64>() {
                Ok(n) => n.min(u64::from(u32::MAX)) as u32,
                Err(_) => {
                    return Err(ExportError::invalid_request(
                        "limit must be a non-negative integer",
                    ))
                }
            },
        };

        Ok(ExportRequest {
            app_id,
            rating_spec,
            limit: requested.min(self.max_limit),
        })
    }
}

/// Runs fetch, filter and write for one request.
pub struct ReviewExporter {
    source: Arc<dyn ReviewSource>,
    writer: Arc<dyn ReportWriter>,
    output_dir: PathBuf,
}

impl ReviewExporter {
    pub fn new(
        source: Arc<dyn ReviewSource>,
        writer: Arc<dyn ReportWriter>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source,
            writer,
            output_dir: output_dir.into(),
        }
    }

    pub async fn run(&self, request: &ExportRequest) -> Result<ReportFile> {
        tracing::info!(
            "Exporting reviews for {} (rating {}, limit {})",
            request.app_id,
            request.rating_spec,
            request.limit
        );

        // Fetch
        let reviews = self
            .source
            .fetch_reviews(&request.app_id, SortOrder::Newest, request.limit)
            .await?;
        tracing::debug!("Fetched {} reviews", reviews.len());

        // Filter
        let allowed = parse_ratings(&request.rating_spec);
        let fetched = reviews.len();
        let filtered = filter_reviews(reviews, &allowed);
        tracing::debug!("Kept {} of {} reviews", filtered.len(), fetched);

        // Write
        let report = ReportFile::create(
            &self.output_dir,
            &format!("{}_{}", request.file_stem(), request.limit),
            &request.download_file_name(),
        )
        .await?;
        self.writer.write(&filtered, report.path()).await?;

        tracing::info!(
            "📁 Report {} ready with {} reviews",
            report.download_name(),
            filtered.len()
        );
        Ok(report)
    }
}
