use crate::core::{ReviewRecord, ReviewSource, SortOrder};
use crate::utils::error::{ExportError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// 爬蟲服務可能回傳分頁物件或單純陣列
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReviewsResponse {
    Page {
        data: Vec<ReviewRecord>,
        #[serde(rename = "nextPaginationToken", default)]
        next_pagination_token: Option<String>,
    },
    List(Vec<ReviewRecord>),
}

/// Review source backed by an HTTP review-scraper service.
///
/// Sends `GET <endpoint>?appId=..&sort=newest&num=..` and expects review JSON back.
pub struct HttpReviewSource {
    endpoint: String,
    client: Client,
    lang: Option<String>,
    country: Option<String>,
}

impl HttpReviewSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
            lang: None,
            country: None,
        })
    }

    pub fn with_locale(mut self, lang: Option<String>, country: Option<String>) -> Self {
        self.lang = lang;
        self.country = country;
        self
    }
}

#[async_trait]
impl ReviewSource for HttpReviewSource {
    async fn fetch_reviews(
        &self,
        app_id: &str,
        sort: SortOrder,
        count: u32,
    ) -> Result<Vec<ReviewRecord>> {
        let mut query = vec![
            ("appId", app_id.to_string()),
            ("sort", sort.as_str().to_string()),
            ("num", count.to_string()),
        ];
        if let Some(lang) = &self.lang {
            query.push(("lang", lang.clone()));
        }
        if let Some(country) = &self.country {
            query.push(("country", country.clone()));
        }

        tracing::debug!("Requesting reviews from {} for {}", self.endpoint, app_id);
        let response = self.client.get(&self.endpoint).query(&query).send().await?;

        let status = response.status();
        tracing::debug!("Review source response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExportError::SourceError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.bytes().await?;
        let mut reviews = match serde_json::from_slice::<ReviewsResponse>(&body)? {
            ReviewsResponse::Page {
                data,
                next_pagination_token,
            } => {
                if next_pagination_token.is_some() {
                    tracing::debug!("Review source has more pages; using the first");
                }
                data
            }
            ReviewsResponse::List(data) => data,
        };

        reviews.truncate(count as usize);
        Ok(reviews)
    }
}
