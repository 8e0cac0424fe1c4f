use std::fmt;
use std::sync::Arc;

use ns_core::{Error, RemoteSummarizer, Result, Settings, Summary};

use crate::frequency::FrequencySummarizer;
use crate::models::create_remote;

/// Summarizes text with the remote model when one is configured and falls back
/// to the frequency summarizer whenever the remote yields nothing.
#[derive(Clone)]
pub struct SummarizationService {
    remote: Option<Arc<dyn RemoteSummarizer>>,
    fallback: FrequencySummarizer,
}

impl fmt::Debug for SummarizationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummarizationService")
            .field("remote", &self.remote.as_ref().map(|r| r.name().to_string()))
            .finish()
    }
}

impl SummarizationService {
    pub fn new(remote: Option<Arc<dyn RemoteSummarizer>>) -> Self {
        Self {
            remote,
            fallback: FrequencySummarizer::new(),
        }
    }

    pub fn without_remote() -> Self {
        Self::new(None)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(create_remote(settings)?))
    }

    pub fn remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn summarize(&self, text: &str, max_sentences: usize) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::InvalidInput("text is required".to_string()));
        }
        if max_sentences == 0 {
            return Err(Error::InvalidInput("max_sentences must be positive".to_string()));
        }

        if let Some(remote) = &self.remote {
            if let Some(summary) = remote.try_summarize(text, max_sentences).await {
                let summary = summary.trim();
                if !summary.is_empty() {
                    tracing::debug!(model = remote.name(), "Remote summary accepted");
                    return Ok(summary.to_string());
                }
            }
            tracing::debug!(model = remote.name(), "Remote summary unavailable, using frequency summarizer");
        }

        Ok(self.fallback.summarize(text, max_sentences))
    }

    /// Summarize entry point: the summary plus a title made of the first
    /// characters of `text`.
    pub async fn summarize_titled(&self, text: &str, max_sentences: usize) -> Result<Summary> {
        let summary = self.summarize(text, max_sentences).await?;
        Ok(Summary::from_text(text, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DummyModel;

    const TEXTS: &[&str] = &[
        "Cats are great. Cats sleep a lot. Dogs bark loudly. Cats also purr softly.",
        "Short text.",
        "No punctuation here",
        "Markets rose. Bonds fell! Oil prices climbed? Analysts expect volatility. Markets may cool.",
        "It is. So it was. Markets rallied. Then it was over.",
    ];

    #[tokio::test]
    async fn test_rejects_blank_text() {
        let service = SummarizationService::without_remote();
        for text in ["", "   ", "\n\t"] {
            assert!(matches!(service.summarize(text, 3).await, Err(Error::InvalidInput(_))));
        }
    }

    #[tokio::test]
    async fn test_rejects_blank_text_before_remote() {
        let remote = Arc::new(DummyModel::replying("ignored"));
        let service = SummarizationService::new(Some(remote.clone()));
        assert!(matches!(service.summarize(" ", 3).await, Err(Error::InvalidInput(_))));
        assert_eq!(remote.calls(), 0);
    }

    #[tokio::test]
    async fn test_rejects_zero_sentences() {
        let service = SummarizationService::without_remote();
        assert!(matches!(service.summarize("Some text.", 0).await, Err(Error::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_unconfigured_matches_fallback() {
        let service = SummarizationService::without_remote();
        assert!(!service.remote_configured());
        let fallback = FrequencySummarizer::new();
        for text in TEXTS {
            for n in 1..4 {
                assert_eq!(service.summarize(text, n).await.unwrap(), fallback.summarize(text, n));
            }
        }
    }

    #[tokio::test]
    async fn test_failing_remote_matches_fallback() {
        let remote = Arc::new(DummyModel::failing());
        let service = SummarizationService::new(Some(remote.clone()));
        let fallback = FrequencySummarizer::new();
        for text in TEXTS {
            assert_eq!(service.summarize(text, 2).await.unwrap(), fallback.summarize(text, 2));
        }
        assert_eq!(remote.calls(), TEXTS.len());
    }

    #[tokio::test]
    async fn test_remote_result_short_circuits() {
        let remote = Arc::new(DummyModel::replying("Remote summary, taken verbatim"));
        let service = SummarizationService::new(Some(remote.clone()));
        let summary = service.summarize(TEXTS[0], 1).await.unwrap();
        assert_eq!(summary, "Remote summary, taken verbatim");
        assert_eq!(remote.calls(), 1);
    }

    #[tokio::test]
    async fn test_summarize_titled() {
        let service = SummarizationService::without_remote();
        let text = "A".repeat(80) + ". Second sentence.";
        let summary = service.summarize_titled(&text, 3).await.unwrap();
        assert_eq!(summary.title, "A".repeat(60));
        assert_eq!(summary.summary, text);
        assert!(summary.url.is_none());

        assert!(matches!(service.summarize_titled("", 3).await, Err(Error::InvalidInput(_))));
    }
}
