use async_trait::async_trait;
use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Returns the name of the news source
    fn name(&self) -> &str;

    /// Fetch top headlines for `country`, returning at most `limit` articles
    async fn fetch_top_headlines(&self, country: &str, limit: usize) -> Result<Vec<Article>>;
}
