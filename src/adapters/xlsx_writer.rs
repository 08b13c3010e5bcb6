use crate::core::{ReportWriter, ReviewRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

pub const SHEET_NAME: &str = "Filtered Reviews";

/// (header, width)
const COLUMNS: [(&str, f64); 4] = [("User", 30.0), ("Rating", 10.0), ("Review", 100.0), ("Date", 20.0)];

/// Writes reviews to an `.xlsx` workbook with a single worksheet.
#[derive(Debug, Clone, Default)]
pub struct XlsxReportWriter;

impl XlsxReportWriter {
    pub fn new() -> Self {
        Self
    }

    fn build_workbook(reviews: &[ReviewRecord]) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, (header, width)) in COLUMNS.iter().enumerate() {
            let col = col as u16;
            worksheet.set_column_width(col, *width)?;
            worksheet.write_string_with_format(0, col, *header, &header_format)?;
        }

        for (index, review) in reviews.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_string(row, 0, &review.user_name)?;
            worksheet.write_number(row, 1, review.score as f64)?;
            worksheet.write_string(row, 2, &review.text)?;
            worksheet.write_datetime_with_format(row, 3, &review.date.naive_utc(), &date_format)?;
        }

        Ok(workbook)
    }
}

#[async_trait]
impl ReportWriter for XlsxReportWriter {
    async fn write(&self, reviews: &[ReviewRecord], output_path: &Path) -> Result<()> {
        let reviews = reviews.to_vec();
        let output_path: PathBuf = output_path.to_path_buf();

        // 序列化與寫檔屬於阻塞工作
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut workbook = Self::build_workbook(&reviews)?;
            workbook.save(&output_path)?;
            tracing::debug!(
                "Wrote {} rows to {}",
                reviews.len(),
                output_path.display()
            );
            Ok(())
        })
        .await?
    }
}
