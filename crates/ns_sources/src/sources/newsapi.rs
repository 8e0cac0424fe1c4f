use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ns_core::{Article, ArticleSource, Error, Result};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

pub const NEWSAPI_BASE_URL: &str = "https://newsapi.org/v2";

/// NewsAPI caps `pageSize` at 100.
const MAX_PAGE_SIZE: usize = 100;

#[derive(Deserialize)]
struct HeadlinesResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    #[serde(default)]
    source: Option<RawSource>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct RawSource {
    #[serde(default)]
    name: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Article {
            title: raw.title.unwrap_or_default(),
            description: raw.description,
            url: raw.url.as_deref().and_then(|url| Url::parse(url).ok()),
            source: raw.source.and_then(|source| source.name),
            published_at: raw.published_at.as_deref().and_then(parse_published_at),
            content: raw.content,
        }
    }
}

fn parse_published_at(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Top-headlines client for newsapi.org.
pub struct NewsApiSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for NewsApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSource")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl NewsApiSource {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, NEWSAPI_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ArticleSource for NewsApiSource {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch_top_headlines(&self, country: &str, limit: usize) -> Result<Vec<Article>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let page_size = limit.min(MAX_PAGE_SIZE).to_string();

        let response = self.client
            .get(format!("{}/top-headlines", self.base_url))
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("country", country),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Source(format!("NewsAPI returned {}: {}", status, body)));
        }

        let headlines = response
            .json::<HeadlinesResponse>()
            .await
            .map_err(|e| Error::Source(format!("Failed to parse NewsAPI response: {}", e)))?;

        let articles: Vec<Article> = headlines
            .articles
            .into_iter()
            .take(limit)
            .map(Article::from)
            .collect();
        tracing::debug!(country, count = articles.len(), "Fetched top headlines");
        Ok(articles)
    }
}
