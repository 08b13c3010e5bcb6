pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::toml_config::TomlConfig;

pub use crate::adapters::{HttpReviewSource, XlsxReportWriter};
pub use crate::core::{
    export::{ExportSettings, ReviewExporter},
    filter::filter_reviews,
    rating::parse_ratings,
    report_file::ReportFile,
};
pub use crate::domain::model::{ExportRequest, RatingSet, ReviewRecord, SortOrder};
pub use crate::server::{build_router, AppState};
pub use crate::utils::error::{ExportError, Result};
