use std::sync::Arc;

use ns_core::{ArticleSource, Result, Settings};

pub mod newsapi;
pub mod sample;

pub use newsapi::NewsApiSource;
pub use sample::SampleSource;

/// Picks the live NewsAPI source when a key is configured and the sample
/// source otherwise.
pub fn create_source(settings: &Settings) -> Result<Arc<dyn ArticleSource>> {
    let source: Arc<dyn ArticleSource> = match settings.news_api_key.clone() {
        Some(api_key) => Arc::new(NewsApiSource::new(api_key)?),
        None => {
            tracing::warn!("No NEWS_API_KEY configured, serving sample articles");
            Arc::new(SampleSource::new())
        }
    };
    tracing::info!("📰 Article source initialized (using {})", source.name());
    Ok(source)
}
