//! Breadth-first category-graph traversal.
//!
//! Each root category gets its own FIFO worklist and visited set; the
//! discovered article set is shared across all roots, so an article reachable
//! from two roots is reported once. The cap is a hard ceiling — traversal
//! stops the moment it is hit, even mid-pagination.

use std::collections::{HashSet, VecDeque};

use tracing::{info, warn};

use crate::discover::DiscoveryStats;
use crate::observer::RunReporter;
use crate::traits::CategoryLister;

/// Traversal owns the first half of the run's 0–100 progress range;
/// enrichment owns the second.
const TRAVERSAL_PROGRESS_SHARE: f64 = 50.0;

/// Walk the category hierarchy under `roots` and collect up to `cap` distinct
/// article titles, in discovery order.
pub(crate) async fn traverse(
    lister: &dyn CategoryLister,
    roots: &[String],
    cap: usize,
    reporter: &RunReporter<'_>,
    stats: &mut DiscoveryStats,
) -> Vec<String> {
    let mut discovered: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    'roots: for root in roots {
        info!(category = %root, "Traversing category");
        reporter.debug(&format!("Searching for category: {root}"));

        let mut worklist: VecDeque<String> = VecDeque::from([root.clone()]);
        let mut visited: HashSet<String> = HashSet::new();

        while let Some(current) = worklist.pop_front() {
            if discovered.len() >= cap {
                break 'roots;
            }
            if !visited.insert(current.clone()) {
                continue;
            }
            stats.categories_visited += 1;

            let mut continue_token: Option<String> = None;
            loop {
                let page = match lister.members(&current, continue_token.as_deref()).await {
                    Ok(page) => {
                        stats.listing_pages += 1;
                        page
                    }
                    Err(e) => {
                        warn!(category = %current, error = %e, "Listing fetch failed, treating as empty");
                        reporter.debug(&format!("No members found for {current}"));
                        stats.listing_failures += 1;
                        break;
                    }
                };

                for member in page.members {
                    if member.is_subcategory() {
                        if !visited.contains(&member.title) {
                            worklist.push_back(member.title);
                        }
                    } else if member.is_article() && seen.insert(member.title.clone()) {
                        discovered.push(member.title);
                        if discovered.len() >= cap {
                            break;
                        }
                    }
                }

                reporter.progress(
                    discovered.len().min(cap) as f64 / cap as f64 * TRAVERSAL_PROGRESS_SHARE,
                );

                continue_token = page.continue_token;
                if continue_token.is_none() || discovered.len() >= cap {
                    break;
                }
            }
        }
    }

    stats.articles_discovered = discovered.len() as u32;
    discovered
}
