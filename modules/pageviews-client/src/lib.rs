pub mod error;

pub use error::{PageviewsError, Result};

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

const BASE_URL: &str = "https://wikimedia.org/api/rest_v1/metrics/pageviews/per-article";

/// One day of view counts for one article.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyViews {
    pub timestamp: String,
    pub views: u64,
}

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    #[serde(default)]
    items: Vec<DailyViews>,
}

pub struct PageviewsClient {
    client: reqwest::Client,
    project: String,
}

impl PageviewsClient {
    /// `project` is the metrics project slug, e.g. "en.wikipedia".
    pub fn new(project: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            project: project.to_string(),
        }
    }

    /// Daily view counts for an article, inclusive of both endpoints.
    /// Articles with no recorded views in the range come back as an empty
    /// series (the API answers 404 for those, which is data, not failure).
    pub async fn daily_views(
        &self,
        title: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyViews>> {
        let mut url = url::Url::parse(BASE_URL)
            .map_err(|e| PageviewsError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| PageviewsError::Url(BASE_URL.to_string()))?
            .push(&self.project)
            .push("all-access")
            .push("all-agents")
            .push(&title.replace(' ', "_"))
            .push("daily")
            .push(&start.format("%Y%m%d").to_string())
            .push(&end.format("%Y%m%d").to_string());

        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(title, "No pageview data in range");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(PageviewsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let series: SeriesResponse = resp.json().await?;
        Ok(series.items)
    }
}

/// Sum a daily series into one rolling total.
pub fn total_views(series: &[DailyViews]) -> u64 {
    series.iter().map(|d| d.views).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_parses_and_sums() {
        let raw = r#"{ "items": [
            { "project": "en.wikipedia", "article": "Rust_(programming_language)",
              "granularity": "daily", "timestamp": "2025070100",
              "access": "all-access", "agent": "all-agents", "views": 4210 },
            { "project": "en.wikipedia", "article": "Rust_(programming_language)",
              "granularity": "daily", "timestamp": "2025070200",
              "access": "all-access", "agent": "all-agents", "views": 3987 }
        ] }"#;
        let series: SeriesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(total_views(&series.items), 8197);
    }
}
