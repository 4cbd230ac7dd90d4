//! The one operation this engine exposes: crawl, enrich, rank.

use tracing::info;

use wikigap_common::{catalog, Config, DiscoverTask, RankedArticle, WikigapError};

use crate::enrichment;
use crate::observer::{RunObserver, RunReporter};
use crate::ranking;
use crate::traits::{ArticleSignals, CategoryLister, LiveSignals};
use crate::traversal;

use mediawiki_client::MediaWikiClient;

/// Counters for one discovery run.
#[derive(Debug, Default)]
pub struct DiscoveryStats {
    pub categories_visited: u32,
    pub listing_pages: u32,
    pub listing_failures: u32,
    pub articles_discovered: u32,
    pub articles_enriched: u32,
    pub articles_dropped: u32,
    pub signal_fetch_failures: u32,
}

impl std::fmt::Display for DiscoveryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Discovery Run Complete ===")?;
        writeln!(f, "Categories visited:    {}", self.categories_visited)?;
        writeln!(f, "Listing pages fetched: {}", self.listing_pages)?;
        writeln!(f, "Listing failures:      {}", self.listing_failures)?;
        writeln!(f, "Articles discovered:   {}", self.articles_discovered)?;
        writeln!(f, "Articles enriched:     {}", self.articles_enriched)?;
        writeln!(f, "Articles dropped:      {} (no content)", self.articles_dropped)?;
        writeln!(f, "Signal fetch failures: {}", self.signal_fetch_failures)?;
        Ok(())
    }
}

/// Owns the data-source seams and runs the full pipeline. Everything is
/// recomputed from scratch per call; nothing persists between runs.
pub struct Discoverer {
    lister: Box<dyn CategoryLister>,
    signals: Box<dyn ArticleSignals>,
}

impl Discoverer {
    pub fn new(config: &Config) -> Self {
        Self {
            lister: Box::new(MediaWikiClient::new(&config.wiki_host)),
            signals: Box::new(LiveSignals::new(config)),
        }
    }

    /// Swap in alternative data sources (tests, other wikis).
    pub fn with_sources(
        lister: Box<dyn CategoryLister>,
        signals: Box<dyn ArticleSignals>,
    ) -> Self {
        Self { lister, signals }
    }

    /// Discover up to `task.cap` articles under `categories`, enrich them,
    /// and return the `task.top_k` best contribution targets.
    ///
    /// `categories` entries may be catalog names ("Physics") or raw
    /// "Category:..." refs. Empty input or a zero cap is a caller error and
    /// makes no external calls.
    pub async fn discover(
        &self,
        categories: &[String],
        task: &DiscoverTask,
        observer: &dyn RunObserver,
    ) -> Result<Vec<RankedArticle>, WikigapError> {
        if categories.is_empty() || task.cap == 0 {
            return Err(WikigapError::NoInput);
        }

        let reporter = RunReporter::new(observer);
        let mut stats = DiscoveryStats::default();

        let roots: Vec<String> = categories
            .iter()
            .map(|name| catalog::resolve(name).to_string())
            .collect();

        let candidates =
            traversal::traverse(&*self.lister, &roots, task.cap, &reporter, &mut stats).await;
        info!(articles = candidates.len(), "Traversal complete");
        reporter.debug(&format!("Found {} unique articles", candidates.len()));

        if candidates.is_empty() {
            if stats.listing_pages == 0 && stats.listing_failures > 0 {
                return Err(WikigapError::Backend(
                    "category listing source unreachable".to_string(),
                ));
            }
            reporter.progress(100.0);
            info!("{stats}");
            return Ok(Vec::new());
        }

        let enriched =
            enrichment::enrich(&*self.signals, &candidates, task, &reporter, &mut stats).await;

        let ranked = ranking::rank(enriched, task.top_k);
        reporter.progress(100.0);
        info!("{stats}");

        Ok(ranked)
    }
}
