use async_trait::async_trait;
use chrono::Utc;
use ns_core::{Article, ArticleSource, Result};
use url::Url;

/// Fixed example articles, used when no live news source is configured.
#[derive(Debug, Clone, Default)]
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }

    fn example(title: &str, description: &str, url: &str, content: &[&str]) -> Article {
        Article {
            title: title.to_string(),
            description: Some(description.to_string()),
            url: Url::parse(url).ok(),
            source: Some("ExampleNews".to_string()),
            published_at: Some(Utc::now()),
            content: Some(content.join(" ")),
        }
    }
}

#[async_trait]
impl ArticleSource for SampleSource {
    fn name(&self) -> &str {
        "Sample"
    }

    async fn fetch_top_headlines(&self, _country: &str, limit: usize) -> Result<Vec<Article>> {
        let articles = vec![
            Self::example(
                "AI breakthroughs reshape productivity",
                "Researchers announce new models improving code generation.",
                "https://example.com/ai-breakthroughs",
                &[
                    "Artificial intelligence continues to transform industries.",
                    "New breakthroughs in large language models improve reasoning and coding.",
                    "Experts expect productivity gains across sectors.",
                ],
            ),
            Self::example(
                "Climate initiatives gather momentum",
                "Global agreements aim to reduce emissions.",
                "https://example.com/climate-initiatives",
                &[
                    "Nations commit to ambitious climate targets.",
                    "Renewable energy adoption rises as costs fall.",
                    "Businesses invest in sustainable technologies.",
                ],
            ),
        ];
        Ok(articles.into_iter().take(limit).collect())
    }
}
