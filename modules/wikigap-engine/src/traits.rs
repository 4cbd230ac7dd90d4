// Trait abstractions for the engine's external data sources.
//
// CategoryLister — paginated category member listing (traversal).
// ArticleSignals — the three per-article enrichment fetches.
// SuggestionSource — category/contribution lookups for the suggester.
//
// These enable deterministic testing with MockLister and MockSignals:
// no network, no live wiki. `cargo test` in seconds.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};

use mediawiki_client::{ArticleMetadata, MediaWikiClient, MemberPage};
use pageviews_client::{total_views, PageviewsClient};
use wikidata_client::WikidataClient;
use wikigap_common::Config;

// ---------------------------------------------------------------------------
// CategoryLister — the category listing source
// ---------------------------------------------------------------------------

#[async_trait]
pub trait CategoryLister: Send + Sync {
    /// One page of members of a category. `continue_token` from the previous
    /// page resumes the listing; `None` starts over.
    async fn members(&self, category: &str, continue_token: Option<&str>) -> Result<MemberPage>;
}

#[async_trait]
impl CategoryLister for MediaWikiClient {
    async fn members(&self, category: &str, continue_token: Option<&str>) -> Result<MemberPage> {
        Ok(self.category_members(category, continue_token).await?)
    }
}

// ---------------------------------------------------------------------------
// ArticleSignals — the three enrichment sources
// ---------------------------------------------------------------------------

#[async_trait]
pub trait ArticleSignals: Send + Sync {
    /// Content length, thumbnail, page URL, and the wikibase key.
    async fn metadata(&self, title: &str) -> Result<ArticleMetadata>;

    /// Total views over a rolling window of `window_days` ending today.
    async fn rolling_views(&self, title: &str, window_days: i64) -> Result<u64>;

    /// Language editions linked to a wikibase entity.
    async fn language_count(&self, wikibase_item: &str) -> Result<u32>;
}

/// Live implementation backed by the three public data services.
pub struct LiveSignals {
    wiki: MediaWikiClient,
    pageviews: PageviewsClient,
    wikidata: WikidataClient,
}

impl LiveSignals {
    pub fn new(config: &Config) -> Self {
        Self {
            wiki: MediaWikiClient::new(&config.wiki_host),
            pageviews: PageviewsClient::new(&config.metrics_project),
            wikidata: WikidataClient::new(),
        }
    }
}

#[async_trait]
impl ArticleSignals for LiveSignals {
    async fn metadata(&self, title: &str) -> Result<ArticleMetadata> {
        Ok(self.wiki.article_metadata(title).await?)
    }

    async fn rolling_views(&self, title: &str, window_days: i64) -> Result<u64> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(window_days);
        let series = self.pageviews.daily_views(title, start, end).await?;
        Ok(total_views(&series))
    }

    async fn language_count(&self, wikibase_item: &str) -> Result<u32> {
        Ok(self.wikidata.sitelink_count(wikibase_item).await?)
    }
}

// ---------------------------------------------------------------------------
// SuggestionSource — lookups for the category suggester
// ---------------------------------------------------------------------------

#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Categories an article belongs to.
    async fn article_categories(&self, title: &str) -> Result<Vec<String>>;

    /// Titles of pages a user recently edited.
    async fn user_contributions(&self, username: &str, limit: u32) -> Result<Vec<String>>;
}

#[async_trait]
impl SuggestionSource for MediaWikiClient {
    async fn article_categories(&self, title: &str) -> Result<Vec<String>> {
        Ok(self.article_categories(title).await?)
    }

    async fn user_contributions(&self, username: &str, limit: u32) -> Result<Vec<String>> {
        Ok(self.user_contributions(username, limit).await?)
    }
}
