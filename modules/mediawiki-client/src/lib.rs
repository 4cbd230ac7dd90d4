pub mod error;
pub mod types;

pub use error::{MediaWikiError, Result};
pub use types::{ArticleMetadata, CategoryMember, MemberPage, NS_ARTICLE, NS_CATEGORY};

use std::time::Duration;

use serde::de::DeserializeOwned;

use types::{ContribsResponse, MemberListResponse, PagesResponse};

/// Page size for category member listings. 500 is the anonymous-request
/// maximum the Action API allows.
const MEMBER_PAGE_SIZE: &str = "500";

pub struct MediaWikiClient {
    client: reqwest::Client,
    api_url: String,
}

impl MediaWikiClient {
    /// `host` is the wiki to talk to, e.g. "en.wikipedia.org".
    pub fn new(host: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_url: format!("https://{}/w/api.php", host.trim_end_matches('/')),
        }
    }

    /// One page of members of a category. Pass the token from the previous
    /// page to continue; `None` starts from the beginning.
    pub async fn category_members(
        &self,
        category: &str,
        continue_token: Option<&str>,
    ) -> Result<MemberPage> {
        let mut params = vec![
            ("action", "query"),
            ("format", "json"),
            ("origin", "*"),
            ("list", "categorymembers"),
            ("cmtitle", category),
            ("cmlimit", MEMBER_PAGE_SIZE),
        ];
        if let Some(token) = continue_token {
            params.push(("cmcontinue", token));
        }

        let resp: MemberListResponse = self.get_json(&params).await?;

        let members = resp
            .query
            .map(|q| q.category_members)
            .unwrap_or_default();
        let continue_token = resp.continuation.and_then(|c| c.cmcontinue);
        tracing::debug!(
            category,
            members = members.len(),
            has_more = continue_token.is_some(),
            "Fetched category member page"
        );

        Ok(MemberPage {
            members,
            continue_token,
        })
    }

    /// Article metadata: content length, thumbnail, canonical page URL, and
    /// the wikibase cross-reference key. Missing pages and redirects come
    /// back with a content length of 0.
    pub async fn article_metadata(&self, title: &str) -> Result<ArticleMetadata> {
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("origin", "*"),
            ("prop", "info|pageimages|pageprops"),
            ("inprop", "url"),
            ("pithumbsize", "100"),
            ("titles", title),
        ];

        let resp: PagesResponse = self.get_json(&params).await?;

        let page = resp
            .query
            .and_then(|q| q.pages.into_values().next())
            .ok_or_else(|| {
                MediaWikiError::Parse(format!("no page entry in metadata response for {title}"))
            })?;

        Ok(ArticleMetadata {
            content_length: page.length.unwrap_or(0),
            thumbnail_url: page.thumbnail.map(|t| t.source),
            page_url: page.full_url,
            wikibase_item: page.page_props.and_then(|p| p.wikibase_item),
        })
    }

    /// Titles of the categories an article belongs to.
    pub async fn article_categories(&self, title: &str) -> Result<Vec<String>> {
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("origin", "*"),
            ("prop", "categories"),
            ("cllimit", "max"),
            ("titles", title),
        ];

        let resp: PagesResponse = self.get_json(&params).await?;

        let categories = resp
            .query
            .map(|q| {
                q.pages
                    .into_values()
                    .flat_map(|p| p.categories)
                    .map(|c| c.title)
                    .collect()
            })
            .unwrap_or_default();

        Ok(categories)
    }

    /// Titles of pages a user recently edited, newest first.
    pub async fn user_contributions(&self, username: &str, limit: u32) -> Result<Vec<String>> {
        let limit = limit.to_string();
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("origin", "*"),
            ("list", "usercontribs"),
            ("ucuser", username),
            ("uclimit", limit.as_str()),
        ];

        let resp: ContribsResponse = self.get_json(&params).await?;

        let titles = resp
            .query
            .map(|q| q.user_contribs.into_iter().map(|c| c.title).collect())
            .unwrap_or_default();

        Ok(titles)
    }

    async fn get_json<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let resp = self
            .client
            .get(&self.api_url)
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(MediaWikiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }
}
