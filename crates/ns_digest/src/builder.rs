use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use ns_core::config::DEFAULT_DIGEST_LIMIT;
use ns_core::{Article, ArticleSource, Digest, DigestItem, DigestStore, Error, Result, Settings};
use ns_inference::SummarizationService;
use tracing::{debug, info, warn};

/// An article left out of a digest, with the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedArticle {
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct DigestOutcome {
    pub digest: Digest,
    /// Articles omitted while building. Empty when the digest came from the store.
    pub skipped: Vec<SkippedArticle>,
    /// `false` when an already stored digest was returned.
    pub generated: bool,
}

pub struct DigestBuilder {
    store: Arc<dyn DigestStore>,
    source: Arc<dyn ArticleSource>,
    summarizer: SummarizationService,
    country: String,
    limit: usize,
    concurrency: usize,
}

impl fmt::Debug for DigestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestBuilder")
            .field("source", &self.source.name())
            .field("summarizer", &self.summarizer)
            .field("country", &self.country)
            .field("limit", &self.limit)
            .field("concurrency", &self.concurrency)
            .finish()
    }
}

impl DigestBuilder {
    pub fn new(
        store: Arc<dyn DigestStore>,
        source: Arc<dyn ArticleSource>,
        summarizer: SummarizationService,
    ) -> Self {
        Self {
            store,
            source,
            summarizer,
            country: "us".to_string(),
            limit: DEFAULT_DIGEST_LIMIT,
            concurrency: 4,
        }
    }

    pub fn from_settings(
        settings: &Settings,
        store: Arc<dyn DigestStore>,
        source: Arc<dyn ArticleSource>,
        summarizer: SummarizationService,
    ) -> Self {
        Self::new(store, source, summarizer)
            .with_country(settings.provider_country.clone())
            .with_limit(settings.digest_limit)
            .with_concurrency(settings.summary_concurrency)
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn store(&self) -> &Arc<dyn DigestStore> {
        &self.store
    }

    /// Returns the stored digest for `date`, building and storing it first if
    /// there is none. A stored digest is returned untouched, without fetching
    /// or summarizing anything.
    pub async fn build_or_get(&self, date: NaiveDate, max_sentences: usize) -> Result<DigestOutcome> {
        if max_sentences == 0 {
            return Err(Error::InvalidInput("max_sentences must be positive".to_string()));
        }

        if let Some(digest) = self.store.get(date).await? {
            debug!(%date, items = digest.items.len(), "Digest already stored");
            return Ok(DigestOutcome {
                digest,
                skipped: Vec::new(),
                generated: false,
            });
        }

        self.generate(date, max_sentences).await
    }

    /// Builds a fresh digest for `date` and stores it, replacing any digest
    /// already stored for that date.
    pub async fn generate(&self, date: NaiveDate, max_sentences: usize) -> Result<DigestOutcome> {
        info!(%date, source = self.source.name(), "📰 Generating digest");
        let mut articles = self
            .source
            .fetch_top_headlines(&self.country, self.limit)
            .await?;
        if articles.len() > self.limit {
            warn!(
                returned = articles.len(),
                limit = self.limit,
                "Article source ignored the limit, truncating"
            );
            articles.truncate(self.limit);
        }

        // `buffered` yields results in input order regardless of completion order
        let results: Vec<std::result::Result<DigestItem, SkippedArticle>> = stream::iter(
            articles.iter().cloned().map(|article| async move {
                self.summarize_article(&article, max_sentences).await
            }),
        )
        .buffered(self.concurrency)
        .collect()
        .await;

        let mut items = Vec::with_capacity(results.len());
        let mut skipped = Vec::new();
        for result in results {
            match result {
                Ok(item) => items.push(item),
                Err(skip) => {
                    warn!(title = %skip.title, reason = %skip.reason, "Article skipped");
                    skipped.push(skip);
                }
            }
        }

        let digest = Digest::new(date, items);
        self.store.put(&digest).await?;
        info!(
            %date,
            items = digest.items.len(),
            skipped = skipped.len(),
            "✅ Digest stored"
        );

        Ok(DigestOutcome {
            digest,
            skipped,
            generated: true,
        })
    }

    async fn summarize_article(
        &self,
        article: &Article,
        max_sentences: usize,
    ) -> std::result::Result<DigestItem, SkippedArticle> {
        let skip = |reason: String| SkippedArticle {
            title: article.title.clone(),
            reason,
        };

        let text = article
            .summary_input()
            .ok_or_else(|| skip("no content, description or title to summarize".to_string()))?;

        let summary = self
            .summarizer
            .summarize(text, max_sentences)
            .await
            .map_err(|e| skip(e.to_string()))?;
        if summary.trim().is_empty() {
            return Err(skip("summarization produced no text".to_string()));
        }

        Ok(DigestItem::from_article(article, summary))
    }
}
