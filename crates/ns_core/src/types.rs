use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Maximum number of characters of the input text used as a summary title.
pub const TITLE_CHARS: usize = 60;

/// A news article as returned by an article source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<Url>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            url: None,
            source: None,
            published_at: None,
            content: None,
        }
    }

    /// Text to summarize: the first non-blank of content, description and title.
    pub fn summary_input(&self) -> Option<&str> {
        [
            self.content.as_deref(),
            self.description.as_deref(),
            Some(self.title.as_str()),
        ]
        .into_iter()
        .flatten()
        .find(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestItem {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub url: Option<Url>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl DigestItem {
    pub fn from_article(article: &Article, summary: String) -> Self {
        Self {
            title: article.title.clone(),
            summary,
            url: article.url.clone(),
            source: article.source.clone(),
            published_at: article.published_at,
        }
    }
}

/// The dated collection of per-article summaries. Items keep source article order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Digest {
    pub date: NaiveDate,
    pub items: Vec<DigestItem>,
}

impl Digest {
    pub fn new(date: NaiveDate, items: Vec<DigestItem>) -> Self {
        Self { date, items }
    }
}

/// Response of the summarize entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub url: Option<Url>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Summary {
    pub fn from_text(text: &str, summary: String) -> Self {
        Self {
            title: text.chars().take(TITLE_CHARS).collect(),
            summary,
            url: None,
            source: None,
            published_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_input_priority() {
        let mut article = Article::new("Headline");
        assert_eq!(article.summary_input(), Some("Headline"));

        article.description = Some("   ".to_string());
        assert_eq!(article.summary_input(), Some("Headline"));

        article.description = Some("Short description.".to_string());
        assert_eq!(article.summary_input(), Some("Short description."));

        article.content = Some("Full content.".to_string());
        assert_eq!(article.summary_input(), Some("Full content."));
    }

    #[test]
    fn test_summary_input_blank_article() {
        let mut article = Article::new(" ");
        article.content = Some(String::new());
        assert_eq!(article.summary_input(), None);
    }

    #[test]
    fn test_summary_title_is_char_bounded() {
        let text = "é".repeat(100);
        let summary = Summary::from_text(&text, "s".to_string());
        assert_eq!(summary.title.chars().count(), TITLE_CHARS);

        let summary = Summary::from_text("short", "s".to_string());
        assert_eq!(summary.title, "short");
    }

    #[test]
    fn test_digest_document_field_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let mut article = Article::new("Title");
        article.url = Some(Url::parse("https://example.com/a").unwrap());
        let digest = Digest::new(date, vec![DigestItem::from_article(&article, "Sum.".to_string())]);

        let value = serde_json::to_value(&digest).unwrap();
        assert_eq!(value["date"], "2024-03-09");
        assert_eq!(value["items"][0]["title"], "Title");
        assert_eq!(value["items"][0]["summary"], "Sum.");
        assert_eq!(value["items"][0]["url"], "https://example.com/a");
        assert!(value["items"][0]["published_at"].is_null());
    }
}
