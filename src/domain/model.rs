use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// 單筆使用者評論，欄位名稱與評論爬蟲服務的 JSON 一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub user_name: String,
    #[serde(default)]
    pub user_image: Option<String>,
    pub score: i64,
    #[serde(default)]
    pub text: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub thumbs_up: Option<u64>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub reply_text: Option<String>,
    #[serde(default)]
    pub reply_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
        }
    }
}

/// The ratings a rating spec expands to.
///
/// Ranges keep only their bounds, so `"1-1000000"` is as cheap as `"1-5"`.
/// `Single(None)` is the not-a-number value of a non-numeric spec and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingSet {
    Range(RangeInclusive<i64>),
    Single(Option<i64>),
}

impl RatingSet {
    pub fn contains(&self, score: i64) -> bool {
        match self {
            RatingSet::Range(range) => range.contains(&score),
            RatingSet::Single(value) => *value == Some(score),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RatingSet::Range(range) => range.is_empty(),
            RatingSet::Single(_) => false,
        }
    }

    /// 展開成有序序列；`None` 代表無法解析的值
    pub fn to_vec(&self) -> Vec<Option<i64>> {
        match self {
            RatingSet::Range(range) => range.clone().map(Some).collect(),
            RatingSet::Single(value) => vec![*value],
        }
    }
}

/// A validated `/fetch-reviews` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub app_id: String,
    pub rating_spec: String,
    /// Already clamped to the configured cap.
    pub limit: u32,
}

impl ExportRequest {
    /// `<appId>_<rating>_stars.xlsx` with unsafe characters replaced by `_`.
    pub fn download_file_name(&self) -> String {
        format!("{}_stars.xlsx", self.file_stem())
    }

    pub fn file_stem(&self) -> String {
        let app_id: String = self
            .app_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let rating: String = self
            .rating_spec
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}_{}", app_id, rating)
    }
}
