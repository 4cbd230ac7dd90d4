use std::collections::HashMap;

use serde::Deserialize;

/// MediaWiki namespace id for categories.
pub const NS_CATEGORY: i32 = 14;

/// MediaWiki namespace id for main-space articles.
pub const NS_ARTICLE: i32 = 0;

// --- Client-facing types ---

/// One page of category members plus the continuation token, if more remain.
#[derive(Debug, Clone, Default)]
pub struct MemberPage {
    pub members: Vec<CategoryMember>,
    pub continue_token: Option<String>,
}

/// A single member of a category: either a subcategory or an article,
/// distinguished by namespace.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMember {
    pub ns: i32,
    pub title: String,
}

impl CategoryMember {
    pub fn is_subcategory(&self) -> bool {
        self.ns == NS_CATEGORY
    }

    pub fn is_article(&self) -> bool {
        self.ns == NS_ARTICLE
    }
}

/// Metadata for one article. `content_length` is 0 for missing pages and
/// redirects, which carry no body of their own.
#[derive(Debug, Clone, Default)]
pub struct ArticleMetadata {
    pub content_length: u64,
    pub thumbnail_url: Option<String>,
    pub page_url: Option<String>,
    /// Wikibase entity id (e.g. "Q42"), the cross-reference key into Wikidata.
    pub wikibase_item: Option<String>,
}

// --- Wire envelopes (action=query responses) ---

#[derive(Debug, Deserialize)]
pub(crate) struct MemberListResponse {
    pub query: Option<MemberListQuery>,
    #[serde(rename = "continue")]
    pub continuation: Option<Continuation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MemberListQuery {
    #[serde(rename = "categorymembers", default)]
    pub category_members: Vec<CategoryMember>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Continuation {
    pub cmcontinue: Option<String>,
}

/// `prop=...&titles=...` responses key pages by page id, with "-1" for
/// missing titles.
#[derive(Debug, Deserialize)]
pub(crate) struct PagesResponse {
    pub query: Option<PagesQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PagesQuery {
    #[serde(default)]
    pub pages: HashMap<String, PageInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageInfo {
    pub length: Option<u64>,
    #[serde(rename = "fullurl")]
    pub full_url: Option<String>,
    pub thumbnail: Option<Thumbnail>,
    #[serde(rename = "pageprops")]
    pub page_props: Option<PageProps>,
    #[serde(default)]
    pub categories: Vec<PageCategory>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageProps {
    pub wikibase_item: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageCategory {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContribsResponse {
    pub query: Option<ContribsQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContribsQuery {
    #[serde(rename = "usercontribs", default)]
    pub user_contribs: Vec<UserContrib>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserContrib {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_list_parses_continuation() {
        let raw = r#"{
            "continue": { "cmcontinue": "page|ABC|123", "continue": "-||" },
            "query": { "categorymembers": [
                { "pageid": 9316, "ns": 0, "title": "Physics" },
                { "pageid": 691185, "ns": 14, "title": "Category:Physicists" }
            ] }
        }"#;
        let resp: MemberListResponse = serde_json::from_str(raw).unwrap();
        let members = resp.query.unwrap().category_members;
        assert!(members[0].is_article());
        assert!(members[1].is_subcategory());
        assert_eq!(
            resp.continuation.unwrap().cmcontinue.as_deref(),
            Some("page|ABC|123")
        );
    }

    #[test]
    fn pages_response_tolerates_missing_title() {
        let raw = r#"{
            "query": { "pages": {
                "-1": { "ns": 0, "title": "No Such Page", "missing": "" }
            } }
        }"#;
        let resp: PagesResponse = serde_json::from_str(raw).unwrap();
        let pages = resp.query.unwrap().pages;
        let page = pages.get("-1").unwrap();
        assert_eq!(page.length, None);
        assert!(page.page_props.is_none());
    }
}
