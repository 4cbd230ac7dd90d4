//! Test doubles for the data-source seams. Deterministic, in-memory, no
//! network; shared by the unit tests and the integration tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use async_trait::async_trait;

use mediawiki_client::{ArticleMetadata, CategoryMember, MemberPage, NS_ARTICLE, NS_CATEGORY};

use crate::observer::RunObserver;
use crate::traits::{ArticleSignals, CategoryLister, SuggestionSource};

pub fn article(title: &str) -> CategoryMember {
    CategoryMember {
        ns: NS_ARTICLE,
        title: title.to_string(),
    }
}

pub fn subcat(title: &str) -> CategoryMember {
    CategoryMember {
        ns: NS_CATEGORY,
        title: title.to_string(),
    }
}

// ---------------------------------------------------------------------------
// MockLister — in-memory category graph with pagination
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockLister {
    graph: HashMap<String, Vec<CategoryMember>>,
    failing: HashSet<String>,
    page_size: usize,
    calls: Arc<AtomicU32>,
}

impl MockLister {
    pub fn new() -> Self {
        Self {
            page_size: usize::MAX,
            ..Self::default()
        }
    }

    pub fn category(mut self, name: &str, members: Vec<CategoryMember>) -> Self {
        self.graph.insert(name.to_string(), members);
        self
    }

    /// Split listings into pages of `size` to exercise continuation tokens.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    pub fn fail_category(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Handle to the call counter that stays readable after the mock is
    /// boxed into a Discoverer.
    pub fn call_counter(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl CategoryLister for MockLister {
    async fn members(&self, category: &str, continue_token: Option<&str>) -> Result<MemberPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(category) {
            bail!("listing source unavailable");
        }

        let all = self.graph.get(category).cloned().unwrap_or_default();
        let offset: usize = continue_token
            .map(|t| t.parse().expect("mock continuation token"))
            .unwrap_or(0);
        let end = all.len().min(offset.saturating_add(self.page_size));

        Ok(MemberPage {
            members: all[offset..end].to_vec(),
            continue_token: (end < all.len()).then(|| end.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// MockSignals — per-article enrichment fixtures
// ---------------------------------------------------------------------------

/// Shared fetch counters for MockSignals.
#[derive(Default)]
pub struct SignalCalls {
    pub metadata: AtomicU32,
    pub views: AtomicU32,
    pub languages: AtomicU32,
}

impl SignalCalls {
    pub fn total(&self) -> u32 {
        self.metadata.load(Ordering::SeqCst)
            + self.views.load(Ordering::SeqCst)
            + self.languages.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct MockSignals {
    metadata: HashMap<String, ArticleMetadata>,
    views: HashMap<String, u64>,
    languages: HashMap<String, u32>,
    fail_metadata: HashSet<String>,
    fail_views: HashSet<String>,
    fail_languages: HashSet<String>,
    calls: Arc<SignalCalls>,
}

impl MockSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an article with its three signals. `language` pairs a
    /// wikibase key with the sitelink count behind it; `None` leaves the
    /// article without a cross-reference key.
    pub fn article(
        mut self,
        title: &str,
        content_length: u64,
        views: u64,
        language: Option<(&str, u32)>,
    ) -> Self {
        let wikibase_item = language.map(|(key, count)| {
            self.languages.insert(key.to_string(), count);
            key.to_string()
        });
        self.metadata.insert(
            title.to_string(),
            ArticleMetadata {
                content_length,
                thumbnail_url: None,
                page_url: Some(format!("https://en.wikipedia.org/wiki/{title}")),
                wikibase_item,
            },
        );
        self.views.insert(title.to_string(), views);
        self
    }

    pub fn fail_metadata(mut self, title: &str) -> Self {
        self.fail_metadata.insert(title.to_string());
        self
    }

    pub fn fail_views(mut self, title: &str) -> Self {
        self.fail_views.insert(title.to_string());
        self
    }

    pub fn fail_languages(mut self, title: &str) -> Self {
        self.fail_languages.insert(title.to_string());
        self
    }

    pub fn metadata_calls(&self) -> u32 {
        self.calls.metadata.load(Ordering::SeqCst)
    }

    pub fn views_calls(&self) -> u32 {
        self.calls.views.load(Ordering::SeqCst)
    }

    pub fn language_calls(&self) -> u32 {
        self.calls.languages.load(Ordering::SeqCst)
    }

    /// Handle to the fetch counters that stays readable after the mock is
    /// boxed into a Discoverer.
    pub fn call_counts(&self) -> Arc<SignalCalls> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl ArticleSignals for MockSignals {
    async fn metadata(&self, title: &str) -> Result<ArticleMetadata> {
        self.calls.metadata.fetch_add(1, Ordering::SeqCst);
        if self.fail_metadata.contains(title) {
            bail!("metadata source unavailable");
        }
        // Unknown titles behave like missing pages: zero length, no extras.
        Ok(self.metadata.get(title).cloned().unwrap_or_default())
    }

    async fn rolling_views(&self, title: &str, _window_days: i64) -> Result<u64> {
        self.calls.views.fetch_add(1, Ordering::SeqCst);
        if self.fail_views.contains(title) {
            bail!("metrics source unavailable");
        }
        Ok(self.views.get(title).copied().unwrap_or(0))
    }

    async fn language_count(&self, wikibase_item: &str) -> Result<u32> {
        self.calls.languages.fetch_add(1, Ordering::SeqCst);
        if self.fail_languages.contains(wikibase_item) {
            bail!("knowledge-base source unavailable");
        }
        Ok(self.languages.get(wikibase_item).copied().unwrap_or(0))
    }
}

// ---------------------------------------------------------------------------
// MockSuggestionSource
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockSuggestionSource {
    categories: HashMap<String, Vec<String>>,
    contribs: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
}

impl MockSuggestionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn article_with_categories(mut self, title: &str, categories: &[&str]) -> Self {
        self.categories.insert(
            title.to_string(),
            categories.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    pub fn contributions(mut self, username: &str, titles: &[&str]) -> Self {
        self.contribs.insert(
            username.to_string(),
            titles.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    pub fn fail_article(mut self, title: &str) -> Self {
        self.failing.insert(title.to_string());
        self
    }
}

#[async_trait]
impl SuggestionSource for MockSuggestionSource {
    async fn article_categories(&self, title: &str) -> Result<Vec<String>> {
        if self.failing.contains(title) {
            bail!("category lookup unavailable");
        }
        Ok(self.categories.get(title).cloned().unwrap_or_default())
    }

    async fn user_contributions(&self, username: &str, _limit: u32) -> Result<Vec<String>> {
        Ok(self.contribs.get(username).cloned().unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// RecordingObserver — captures the progress/debug streams
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingObserver {
    pub progress: Mutex<Vec<f64>>,
    pub lines: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunObserver for RecordingObserver {
    fn progress(&self, percent: f64) {
        self.progress.lock().unwrap().push(percent);
    }

    fn debug(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
