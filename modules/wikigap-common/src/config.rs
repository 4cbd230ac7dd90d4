use std::env;

/// Application configuration loaded from environment variables.
/// Every field has a default aimed at the English-language wiki; deployments
/// targeting another edition override both together.
#[derive(Debug, Clone)]
pub struct Config {
    /// Wiki host for the Action API, e.g. "en.wikipedia.org".
    pub wiki_host: String,
    /// Project slug for the pageview metrics API, e.g. "en.wikipedia".
    pub metrics_project: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            wiki_host: env::var("WIKIGAP_WIKI_HOST")
                .unwrap_or_else(|_| "en.wikipedia.org".to_string()),
            metrics_project: env::var("WIKIGAP_METRICS_PROJECT")
                .unwrap_or_else(|_| "en.wikipedia".to_string()),
        }
    }

    /// Config for a specific language edition, e.g. `for_language("he")`.
    pub fn for_language(lang: &str) -> Self {
        Self {
            wiki_host: format!("{lang}.wikipedia.org"),
            metrics_project: format!("{lang}.wikipedia"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_language("en")
    }
}
