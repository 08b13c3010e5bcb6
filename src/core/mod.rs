pub mod export;
pub mod filter;
pub mod rating;
pub mod report_file;

pub use crate::domain::model::{ExportRequest, RatingSet, ReviewRecord, SortOrder};
pub use crate::domain::ports::{ConfigProvider, ReportWriter, ReviewSource};
pub use crate::utils::error::Result;
