use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// A report file owned by one request.
///
/// The file is deleted when the value is dropped. A failed delete is logged and
/// otherwise ignored.
#[derive(Debug)]
pub struct ReportFile {
    path: PathBuf,
    download_name: String,
}

impl ReportFile {
    /// 在輸出目錄建立唯一檔名，避免同名請求互相覆蓋
    pub async fn create(output_dir: &Path, stem: &str, download_name: &str) -> Result<Self> {
        tokio::fs::create_dir_all(output_dir).await?;

        let file = tempfile::Builder::new()
            .prefix(&format!("{}_", stem))
            .suffix(".xlsx")
            .tempfile_in(output_dir)?;

        // 刪除時機由 Drop 控制
        let path = file.into_temp_path().keep().map_err(std::io::Error::from)?;

        Ok(Self {
            path,
            download_name: download_name.to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn download_name(&self) -> &str {
        &self.download_name
    }
}

impl Drop for ReportFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!("🧹 Removed report file {}", self.path.display()),
            Err(e) => tracing::warn!(
                "Failed to remove report file {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_report_file_removed_on_drop() {
        let dir = TempDir::new().unwrap();
        let report = ReportFile::create(dir.path(), "com_example_app_1", "com_example_app_1_stars.xlsx")
            .await
            .unwrap();

        let path = report.path().to_path_buf();
        assert!(path.exists());
        assert!(path.starts_with(dir.path()));
        let file_name = path.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("com_example_app_1_"));
        assert!(file_name.ends_with(".xlsx"));
        assert_eq!(report.download_name(), "com_example_app_1_stars.xlsx");

        drop(report);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_same_stem_gets_distinct_paths() {
        let dir = TempDir::new().unwrap();
        let first = ReportFile::create(dir.path(), "app_1", "app_1_stars.xlsx").await.unwrap();
        let second = ReportFile::create(dir.path(), "app_1", "app_1_stars.xlsx").await.unwrap();
        assert_ne!(first.path(), second.path());
    }

    #[tokio::test]
    async fn test_creates_missing_output_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("downloads").join("reports");
        let report = ReportFile::create(&nested, "app_1", "app_1_stars.xlsx").await.unwrap();
        assert!(report.path().starts_with(&nested));
    }

    #[tokio::test]
    async fn test_drop_tolerates_already_deleted_file() {
        let dir = TempDir::new().unwrap();
        let report = ReportFile::create(dir.path(), "app_1", "app_1_stars.xlsx").await.unwrap();
        std::fs::remove_file(report.path()).unwrap();
        drop(report);
    }
}
