//! Category suggestions: given articles a user already cares about (their
//! inventory, or their recent edits), surface the categories those articles
//! cluster in as candidate discovery roots.

use std::collections::HashMap;

use tracing::{info, warn};

use wikigap_common::{Config, WikigapError};

use crate::traits::SuggestionSource;

use mediawiki_client::MediaWikiClient;

/// Maintenance categories ("All articles with...", "Wikipedia articles
/// needing...", short-description tracking) are noise, not topics.
const IGNORED_WORDS: &[&str] = &["articles", "wikipedia", "description"];

const MAX_SUGGESTIONS: usize = 10;

/// How many recent edits to sample for edit-history suggestions.
const EDIT_HISTORY_SAMPLE: u32 = 100;

pub struct CategorySuggester {
    source: Box<dyn SuggestionSource>,
}

impl CategorySuggester {
    pub fn new(config: &Config) -> Self {
        Self {
            source: Box::new(MediaWikiClient::new(&config.wiki_host)),
        }
    }

    pub fn with_source(source: Box<dyn SuggestionSource>) -> Self {
        Self { source }
    }

    /// Suggest categories from a list of article titles.
    pub async fn from_inventory(&self, articles: &[String]) -> Result<Vec<String>, WikigapError> {
        if articles.is_empty() {
            return Err(WikigapError::NoInput);
        }
        Ok(self.count_categories(articles).await)
    }

    /// Suggest categories from a user's recent edits.
    pub async fn from_edit_history(&self, username: &str) -> Result<Vec<String>, WikigapError> {
        if username.trim().is_empty() {
            return Err(WikigapError::NoInput);
        }

        let edited = self
            .source
            .user_contributions(username, EDIT_HISTORY_SAMPLE)
            .await
            .map_err(|e| WikigapError::Backend(e.to_string()))?;
        info!(username, edits = edited.len(), "Fetched edit history");

        Ok(self.count_categories(&edited).await)
    }

    async fn count_categories(&self, articles: &[String]) -> Vec<String> {
        let mut counts: HashMap<String, u32> = HashMap::new();

        for title in articles {
            let categories = match self.source.article_categories(title).await {
                Ok(c) => c,
                Err(e) => {
                    warn!(title = %title, error = %e, "Category lookup failed, skipping article");
                    continue;
                }
            };
            for category in categories {
                if is_maintenance_category(&category) {
                    continue;
                }
                *counts.entry(category).or_insert(0) += 1;
            }
        }

        top_categories(counts)
    }
}

fn is_maintenance_category(title: &str) -> bool {
    let lowered = title.to_lowercase();
    IGNORED_WORDS.iter().any(|word| lowered.contains(word))
}

/// Most frequent first; equal counts order lexicographically.
fn top_categories(counts: HashMap<String, u32>) -> Vec<String> {
    let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(MAX_SUGGESTIONS);
    ranked.into_iter().map(|(title, _)| title).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSuggestionSource;

    #[tokio::test]
    async fn inventory_suggestions_rank_by_frequency() {
        let source = MockSuggestionSource::new()
            .article_with_categories("A", &["Category:Jazz", "Category:Music"])
            .article_with_categories("B", &["Category:Music"])
            .article_with_categories("C", &["Category:Music", "Category:Jazz"]);

        let suggester = CategorySuggester::with_source(Box::new(source));
        let suggestions = suggester
            .from_inventory(&["A".into(), "B".into(), "C".into()])
            .await
            .unwrap();

        assert_eq!(suggestions[0], "Category:Music");
        assert_eq!(suggestions[1], "Category:Jazz");
    }

    #[tokio::test]
    async fn maintenance_categories_are_filtered() {
        let source = MockSuggestionSource::new().article_with_categories(
            "A",
            &[
                "Category:All articles with unsourced statements",
                "Category:Wikipedia semi-protected pages",
                "Category:Articles with short description",
                "Category:Physics",
            ],
        );

        let suggester = CategorySuggester::with_source(Box::new(source));
        let suggestions = suggester.from_inventory(&["A".into()]).await.unwrap();

        assert_eq!(suggestions, vec!["Category:Physics"]);
    }

    #[tokio::test]
    async fn empty_inventory_is_a_caller_error() {
        let suggester = CategorySuggester::with_source(Box::new(MockSuggestionSource::new()));
        let result = suggester.from_inventory(&[]).await;
        assert!(matches!(result, Err(WikigapError::NoInput)));
    }

    #[tokio::test]
    async fn failed_article_lookups_are_skipped() {
        let source = MockSuggestionSource::new()
            .article_with_categories("Good", &["Category:History"])
            .fail_article("Bad");

        let suggester = CategorySuggester::with_source(Box::new(source));
        let suggestions = suggester
            .from_inventory(&["Bad".into(), "Good".into()])
            .await
            .unwrap();

        assert_eq!(suggestions, vec!["Category:History"]);
    }

    #[tokio::test]
    async fn edit_history_walks_user_contributions() {
        let source = MockSuggestionSource::new()
            .contributions("Editor", &["A", "B"])
            .article_with_categories("A", &["Category:Chemistry"])
            .article_with_categories("B", &["Category:Chemistry", "Category:Biology"]);

        let suggester = CategorySuggester::with_source(Box::new(source));
        let suggestions = suggester.from_edit_history("Editor").await.unwrap();

        assert_eq!(suggestions[0], "Category:Chemistry");
        assert_eq!(suggestions.len(), 2);
    }

    #[tokio::test]
    async fn at_most_ten_suggestions_come_back() {
        let categories: Vec<String> = (0..15).map(|i| format!("Category:T{i:02}")).collect();
        let refs: Vec<&str> = categories.iter().map(String::as_str).collect();
        let source = MockSuggestionSource::new().article_with_categories("A", &refs);

        let suggester = CategorySuggester::with_source(Box::new(source));
        let suggestions = suggester.from_inventory(&["A".into()]).await.unwrap();

        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    }
}
