use serde::Serialize;

/// A fetched enrichment signal. Keeps "zero because the source has no value"
/// distinct from "zero because the fetch failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal<T> {
    Value(T),
    /// The source has no value for this article (e.g. no wikibase key, so no
    /// language lookup was attempted).
    Absent,
    /// The fetch errored out; the value degrades to zero.
    Failed,
}

impl<T: Default> Signal<T> {
    pub fn or_zero(self) -> T {
        match self {
            Signal::Value(v) => v,
            Signal::Absent | Signal::Failed => T::default(),
        }
    }
}

impl<T> Signal<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Signal::Failed)
    }
}

/// A discovered article with all three enrichment signals resolved.
/// Immutable once produced; articles that resolve to a content length of 0
/// never leave the enrichment pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedArticle {
    pub title: String,
    pub content_length: u64,
    pub views: u64,
    pub language_count: u32,
    pub image_url: Option<String>,
    pub page_url: Option<String>,
}

/// An enriched article with its composite desirability score attached.
#[derive(Debug, Clone, Serialize)]
pub struct RankedArticle {
    #[serde(flatten)]
    pub article: EnrichedArticle,
    pub score: f64,
}

/// Per-call knobs for one discovery run.
#[derive(Debug, Clone)]
pub struct DiscoverTask {
    /// Hard ceiling on distinct articles discovered by traversal.
    pub cap: usize,
    /// Number of articles enriched concurrently per batch.
    pub batch_size: usize,
    /// Size of the ranked shortlist handed back to the caller.
    pub top_k: usize,
    /// Rolling pageview window, ending today.
    pub view_window_days: i64,
}

impl Default for DiscoverTask {
    fn default() -> Self {
        Self {
            cap: 10_000,
            batch_size: 50,
            top_k: 20,
            view_window_days: 30,
        }
    }
}
