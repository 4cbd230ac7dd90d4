pub mod error;

pub use error::{Result, WikidataError};

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

const API_URL: &str = "https://www.wikidata.org/w/api.php";

#[derive(Debug, Deserialize)]
struct EntitiesResponse {
    #[serde(default)]
    entities: HashMap<String, Entity>,
}

#[derive(Debug, Deserialize)]
struct Entity {
    /// Sitelinks keyed by wiki slug ("enwiki", "dewiki", ...). Each value
    /// carries the linked title; only the key count matters here.
    sitelinks: Option<HashMap<String, serde_json::Value>>,
}

pub struct WikidataClient {
    client: reqwest::Client,
}

impl WikidataClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Number of wiki editions linked to an entity. Unknown entities and
    /// entities without sitelinks count as 0.
    pub async fn sitelink_count(&self, entity_id: &str) -> Result<u32> {
        let params = [
            ("action", "wbgetentities"),
            ("format", "json"),
            ("origin", "*"),
            ("props", "sitelinks"),
            ("ids", entity_id),
        ];

        let resp = self.client.get(API_URL).query(&params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(WikidataError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let entities: EntitiesResponse = resp.json().await?;
        let count = entities
            .entities
            .get(entity_id)
            .and_then(|e| e.sitelinks.as_ref())
            .map(|links| links.len() as u32)
            .unwrap_or(0);

        tracing::debug!(entity_id, count, "Fetched sitelink count");
        Ok(count)
    }
}

impl Default for WikidataClient {
    fn default() -> Self {
        Self::new()
    }
}
