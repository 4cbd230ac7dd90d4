//! Composite scoring and top-K selection.

use std::cmp::Ordering;

use wikigap_common::{EnrichedArticle, RankedArticle};

/// Desirability of an article as a contribution target: raw demand (views)
/// normalized by how much content already exists, dampened by the log of
/// language breadth. The `+ 1` keeps articles absent from the knowledge base
/// from zeroing out entirely.
///
/// Callers guarantee `content_length > 0`; zero-length articles are dropped
/// during enrichment.
pub fn score(article: &EnrichedArticle) -> f64 {
    let ratio = article.views as f64 / article.content_length as f64;
    ratio * (article.language_count as f64 + 1.0).ln()
}

/// Score and order `articles`, highest first, returning at most `k`. Equal
/// scores order lexicographically by title so the output is reproducible.
pub fn rank(articles: Vec<EnrichedArticle>, k: usize) -> Vec<RankedArticle> {
    let mut ranked: Vec<RankedArticle> = articles
        .into_iter()
        .map(|article| {
            let score = score(&article);
            RankedArticle { article, score }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.article.title.cmp(&b.article.title))
    });
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enriched(title: &str, views: u64, content_length: u64, language_count: u32) -> EnrichedArticle {
        EnrichedArticle {
            title: title.to_string(),
            content_length,
            views,
            language_count,
            image_url: None,
            page_url: None,
        }
    }

    #[test]
    fn demand_heavy_article_outranks_balanced_one() {
        // A: (1000/2000)·ln(5) ≈ 0.805, B: (500/500)·ln(2) ≈ 0.693.
        let a = enriched("A", 1000, 2000, 4);
        let b = enriched("B", 500, 500, 1);

        let ranked = rank(vec![b, a], 20);

        assert_eq!(ranked[0].article.title, "A");
        assert_eq!(ranked[1].article.title, "B");
        assert!((ranked[0].score - 0.8047).abs() < 1e-3);
        assert!((ranked[1].score - 0.6931).abs() < 1e-3);
    }

    #[test]
    fn output_is_sorted_and_truncated_to_k() {
        let articles: Vec<_> = (1..=30)
            .map(|i| enriched(&format!("T{i:02}"), i * 100, 1000, 3))
            .collect();

        let ranked = rank(articles, 20);

        assert_eq!(ranked.len(), 20);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn k_larger_than_input_returns_everything() {
        let ranked = rank(vec![enriched("Only", 10, 100, 1)], 20);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(rank(Vec::new(), 20).is_empty());
    }

    #[test]
    fn equal_scores_break_ties_by_title() {
        let a = enriched("Zebra", 100, 1000, 2);
        let b = enriched("Aardvark", 100, 1000, 2);

        let ranked = rank(vec![a, b], 20);

        assert_eq!(ranked[0].article.title, "Aardvark");
        assert_eq!(ranked[1].article.title, "Zebra");
    }

    #[test]
    fn ranking_is_idempotent() {
        let articles = vec![
            enriched("One", 300, 900, 5),
            enriched("Two", 800, 400, 0),
            enriched("Three", 50, 5000, 12),
        ];

        let first = rank(articles.clone(), 2);
        let second = rank(articles, 2);

        let titles = |r: &[RankedArticle]| {
            r.iter().map(|x| x.article.title.clone()).collect::<Vec<_>>()
        };
        assert_eq!(titles(&first), titles(&second));
    }

    #[test]
    fn no_language_editions_zeroes_the_score() {
        let article = enriched("Lonely", 500, 500, 0);
        // ln(0 + 1) = 0; the + 1 guards the log, not the product.
        assert_eq!(score(&article), 0.0);
    }
}
