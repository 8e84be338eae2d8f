//! Open Library client
//!
//! One HTTP GET per operation against the Open Library search endpoint,
//! with defensive normalization: any subset of the hit fields may be
//! absent.

use super::{RemoteCatalog, RemoteResult};
use crate::error::RemoteError;
use crate::types::Book;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
const COVER_BASE_URL: &str = "https://covers.openlibrary.org";
const USER_AGENT: &str = concat!("shelfside/", env!("CARGO_PKG_VERSION"));
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Result-count caps, per operation.
const SEARCH_LIMIT: u32 = 20;
const RECOMMENDATION_LIMIT: u32 = 10;

/// Client for the Open Library search API.
pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new() -> RemoteResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> RemoteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn fetch_page(&self, url: &str) -> RemoteResult<SearchPage> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        // Decode from text so a transport failure and a malformed payload
        // stay distinguishable.
        let body = response.text().await?;
        let page: SearchPage = serde_json::from_str(&body)?;
        Ok(page)
    }
}

#[async_trait]
impl RemoteCatalog for OpenLibraryClient {
    async fn search(&self, query: &str) -> RemoteResult<Vec<Book>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/search.json?title={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            SEARCH_LIMIT
        );
        let page = self.fetch_page(&url).await?;
        Ok(normalize_docs(page.docs))
    }

    async fn recommendations(&self) -> RemoteResult<Vec<Book>> {
        let url = format!(
            "{}/search.json?q={}&sort=rating&limit={}",
            self.base_url,
            urlencoding::encode("subject:fiction"),
            RECOMMENDATION_LIMIT
        );
        let page = self.fetch_page(&url).await?;
        Ok(normalize_docs(page.docs))
    }
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author_name: Vec<String>,
    #[serde(default)]
    cover_i: Option<i64>,
}

/// Map a batch of hits to books. Ids are the 1-based position within the
/// batch and are provisional; the store assigns canonical ids on insert.
/// Hits without a usable title are dropped - a book's name is never empty.
fn normalize_docs(docs: Vec<SearchDoc>) -> Vec<Book> {
    docs.into_iter()
        .filter_map(|doc| {
            let name = doc
                .title
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())?;
            let author = if doc.author_name.is_empty() {
                "Unknown".to_string()
            } else {
                doc.author_name.join(", ")
            };
            Some((name, author, doc.cover_i))
        })
        .enumerate()
        .map(|(index, (name, author, cover_i))| {
            let mut book = Book::new(index as u64 + 1, name, author);
            book.cover_image = cover_i.map(cover_url);
            book
        })
        .collect()
}

fn cover_url(cover_id: i64) -> String {
    format!("{}/b/id/{}-M.jpg", COVER_BASE_URL, cover_id)
}
