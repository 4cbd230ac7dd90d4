use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wikigap_common::{Config, DiscoverTask};
use wikigap_engine::{CategorySuggester, Discoverer, RunObserver};

#[derive(Parser)]
#[command(
    name = "wikigap",
    about = "Find under-served, high-demand articles in wiki category trees"
)]
struct Cli {
    /// Catalog names ("Physics") or raw "Category:..." refs.
    categories: Vec<String>,

    /// Hard ceiling on discovered articles.
    #[arg(long, default_value_t = 10_000)]
    cap: usize,

    /// Size of the ranked shortlist.
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Language edition, e.g. "he". Defaults to the environment config.
    #[arg(long)]
    lang: Option<String>,

    /// Suggest discovery categories from this user's recent edits instead of
    /// running a discovery.
    #[arg(long)]
    suggest_user: Option<String>,
}

/// Forwards the engine's trace lines into the log stream.
struct TraceObserver;

impl RunObserver for TraceObserver {
    fn debug(&self, line: &str) {
        tracing::debug!("{line}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("wikigap_engine=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.lang {
        Some(lang) => Config::for_language(lang),
        None => Config::from_env(),
    };

    if let Some(username) = &cli.suggest_user {
        let suggester = CategorySuggester::new(&config);
        let suggestions = suggester.from_edit_history(username).await?;
        info!(username = %username, count = suggestions.len(), "Category suggestions ready");
        for suggestion in suggestions {
            println!("{suggestion}");
        }
        return Ok(());
    }

    let task = DiscoverTask {
        cap: cli.cap,
        top_k: cli.top,
        ..DiscoverTask::default()
    };

    let discoverer = Discoverer::new(&config);
    let ranked = discoverer
        .discover(&cli.categories, &task, &TraceObserver)
        .await?;

    for (index, entry) in ranked.iter().enumerate() {
        println!(
            "{:>2}. {:<60} {:>8.3}  ({} views / {} bytes / {} languages)",
            index + 1,
            entry.article.title,
            entry.score,
            entry.article.views,
            entry.article.content_length,
            entry.article.language_count,
        );
    }

    Ok(())
}
