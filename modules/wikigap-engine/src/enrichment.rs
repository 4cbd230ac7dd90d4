//! Batch enrichment: attach size, pageview, and language-breadth signals to
//! discovered articles.
//!
//! Candidates are processed in fixed-size batches. Within a batch every
//! article is enriched concurrently; within one article the metadata and
//! views fetches run concurrently and the language lookup follows, since it
//! needs the wikibase key from metadata. A batch fully completes before the
//! next one starts, which keeps the number of in-flight requests bounded.

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use wikigap_common::{DiscoverTask, EnrichedArticle, Signal};

use mediawiki_client::ArticleMetadata;

use crate::discover::DiscoveryStats;
use crate::observer::RunReporter;
use crate::traits::ArticleSignals;

const ENRICHMENT_PROGRESS_BASE: f64 = 50.0;

/// The three signals for one candidate, before the drop rule is applied.
pub(crate) struct SignalSet {
    pub title: String,
    pub metadata: Signal<ArticleMetadata>,
    pub views: Signal<u64>,
    pub languages: Signal<u32>,
}

impl SignalSet {
    fn failed_fetches(&self) -> u32 {
        [
            self.metadata.is_failed(),
            self.views.is_failed(),
            self.languages.is_failed(),
        ]
        .iter()
        .filter(|failed| **failed)
        .count() as u32
    }

    /// Collapse into an article, or `None` when the resolved content length
    /// is 0 — deleted, redirect, or unfetchable pages carry no signal.
    fn into_enriched(self) -> Option<EnrichedArticle> {
        let views = self.views.or_zero();
        let language_count = self.languages.or_zero();
        let metadata = self.metadata.or_zero();
        if metadata.content_length == 0 {
            return None;
        }
        Some(EnrichedArticle {
            title: self.title,
            content_length: metadata.content_length,
            views,
            language_count,
            image_url: metadata.thumbnail_url,
            page_url: metadata.page_url,
        })
    }
}

/// Enrich `candidates` batch by batch, dropping articles without content.
pub(crate) async fn enrich(
    signals: &dyn ArticleSignals,
    candidates: &[String],
    task: &DiscoverTask,
    reporter: &RunReporter<'_>,
    stats: &mut DiscoveryStats,
) -> Vec<EnrichedArticle> {
    let total = candidates.len();
    let mut survivors = Vec::new();
    let mut processed = 0usize;

    for batch in candidates.chunks(task.batch_size.max(1)) {
        let outcomes: Vec<SignalSet> = stream::iter(
            batch
                .iter()
                .map(|title| enrich_one(signals, title, task.view_window_days)),
        )
        .buffer_unordered(batch.len())
        .collect()
        .await;

        processed += batch.len();
        for outcome in outcomes {
            stats.signal_fetch_failures += outcome.failed_fetches();
            match outcome.into_enriched() {
                Some(article) => {
                    debug!(
                        title = %article.title,
                        length = article.content_length,
                        views = article.views,
                        languages = article.language_count,
                        "Enriched article"
                    );
                    stats.articles_enriched += 1;
                    survivors.push(article);
                }
                None => stats.articles_dropped += 1,
            }
        }

        reporter.progress(
            ENRICHMENT_PROGRESS_BASE + processed as f64 / total as f64 * 50.0,
        );
        reporter.debug(&format!("Enriched {processed}/{total} articles"));
    }

    survivors
}

async fn enrich_one(signals: &dyn ArticleSignals, title: &str, window_days: i64) -> SignalSet {
    let (metadata_result, views_result) = tokio::join!(
        signals.metadata(title),
        signals.rolling_views(title, window_days),
    );

    let metadata = match metadata_result {
        Ok(m) => Signal::Value(m),
        Err(e) => {
            warn!(title, error = %e, "Metadata fetch failed");
            Signal::Failed
        }
    };

    let views = match views_result {
        Ok(v) => Signal::Value(v),
        Err(e) => {
            warn!(title, error = %e, "Views fetch failed");
            Signal::Failed
        }
    };

    // The language lookup is keyed by the wikibase item from metadata; with
    // no key resolved there is nothing to look up.
    let languages = match &metadata {
        Signal::Value(ArticleMetadata {
            wikibase_item: Some(item),
            ..
        }) => match signals.language_count(item).await {
            Ok(count) => Signal::Value(count),
            Err(e) => {
                warn!(title, wikibase_item = %item, error = %e, "Language count fetch failed");
                Signal::Failed
            }
        },
        _ => Signal::Absent,
    };

    SignalSet {
        title: title.to_string(),
        metadata,
        views,
        languages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NullObserver;
    use crate::testing::MockSignals;

    fn task() -> DiscoverTask {
        DiscoverTask::default()
    }

    async fn run(
        signals: &MockSignals,
        candidates: &[&str],
        task: &DiscoverTask,
    ) -> (Vec<EnrichedArticle>, DiscoveryStats) {
        let mut stats = DiscoveryStats::default();
        let reporter = RunReporter::new(&NullObserver);
        let candidates: Vec<String> = candidates.iter().map(|c| c.to_string()).collect();
        let enriched = enrich(signals, &candidates, task, &reporter, &mut stats).await;
        (enriched, stats)
    }

    #[tokio::test]
    async fn signals_are_assembled_per_article() {
        let signals = MockSignals::new().article("Topic", 2000, 350, Some(("Q1", 6)));

        let (enriched, stats) = run(&signals, &["Topic"], &task()).await;

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].content_length, 2000);
        assert_eq!(enriched[0].views, 350);
        assert_eq!(enriched[0].language_count, 6);
        assert_eq!(stats.signal_fetch_failures, 0);
    }

    #[tokio::test]
    async fn failed_metadata_drops_article_despite_views() {
        // Metadata fetch fails, views resolve to 500: the content length
        // degrades to 0 and the article is dropped entirely.
        let signals = MockSignals::new()
            .article("Ghost", 2000, 500, None)
            .fail_metadata("Ghost");

        let (enriched, stats) = run(&signals, &["Ghost"], &task()).await;

        assert!(enriched.is_empty());
        assert_eq!(stats.articles_dropped, 1);
        assert_eq!(stats.signal_fetch_failures, 1);
    }

    #[tokio::test]
    async fn zero_length_article_is_dropped_without_failures() {
        let signals = MockSignals::new().article("Redirect", 0, 900, Some(("Q9", 3)));

        let (enriched, stats) = run(&signals, &["Redirect"], &task()).await;

        assert!(enriched.is_empty());
        assert_eq!(stats.articles_dropped, 1);
        assert_eq!(stats.signal_fetch_failures, 0);
    }

    #[tokio::test]
    async fn failed_views_degrade_to_zero_but_keep_the_article() {
        let signals = MockSignals::new()
            .article("Quiet", 1200, 777, Some(("Q2", 2)))
            .fail_views("Quiet");

        let (enriched, stats) = run(&signals, &["Quiet"], &task()).await;

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].views, 0);
        assert_eq!(stats.signal_fetch_failures, 1);
    }

    #[tokio::test]
    async fn missing_wikibase_key_means_no_language_lookup() {
        let signals = MockSignals::new().article("Local", 800, 40, None);

        let (enriched, stats) = run(&signals, &["Local"], &task()).await;

        assert_eq!(enriched[0].language_count, 0);
        // Absent is not a failure.
        assert_eq!(stats.signal_fetch_failures, 0);
        assert_eq!(signals.language_calls(), 0);
    }

    #[tokio::test]
    async fn batches_process_every_candidate() {
        let mut signals = MockSignals::new();
        let titles: Vec<String> = (0..120).map(|i| format!("Article {i}")).collect();
        for title in &titles {
            signals = signals.article(title, 1000, 10, None);
        }
        let candidates: Vec<&str> = titles.iter().map(String::as_str).collect();

        let task = DiscoverTask {
            batch_size: 50,
            ..DiscoverTask::default()
        };
        let (enriched, stats) = run(&signals, &candidates, &task).await;

        assert_eq!(enriched.len(), 120);
        assert_eq!(stats.articles_enriched, 120);
    }
}
