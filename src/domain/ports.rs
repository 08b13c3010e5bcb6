use crate::domain::model::{ReviewRecord, SortOrder};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// 評論來源：依 app id 取得最新的評論
#[async_trait]
pub trait ReviewSource: Send + Sync {
    async fn fetch_reviews(
        &self,
        app_id: &str,
        sort: SortOrder,
        count: u32,
    ) -> Result<Vec<ReviewRecord>>;
}

/// 報表輸出：把評論寫成表格檔
#[async_trait]
pub trait ReportWriter: Send + Sync {
    async fn write(&self, reviews: &[ReviewRecord], output_path: &Path) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn source_endpoint(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn default_limit(&self) -> u32;
    fn max_limit(&self) -> u32;
    fn default_rating(&self) -> &str;
    fn request_timeout_seconds(&self) -> u64;
    fn lang(&self) -> Option<&str>;
    fn country(&self) -> Option<&str>;
    fn static_dir(&self) -> Option<&str>;
}
