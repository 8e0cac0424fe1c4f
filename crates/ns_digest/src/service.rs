use std::sync::Arc;

use chrono::{Local, NaiveDate};
use ns_core::{Digest, Error, Result};

use crate::builder::{DigestBuilder, DigestOutcome};

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Digest entry points. Only today's digest is built on demand; any other
/// date must already be stored.
#[derive(Debug, Clone)]
pub struct DigestService {
    builder: Arc<DigestBuilder>,
    summary_sentences: usize,
    today: fn() -> NaiveDate,
}

impl DigestService {
    pub fn new(builder: Arc<DigestBuilder>, summary_sentences: usize) -> Self {
        Self {
            builder,
            summary_sentences,
            today: local_today,
        }
    }

    /// Replaces the local-time clock used to decide what "today" is.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today_date(&self) -> NaiveDate {
        (self.today)()
    }

    pub fn builder(&self) -> &Arc<DigestBuilder> {
        &self.builder
    }

    /// Today's digest, built and stored first if missing.
    pub async fn today(&self) -> Result<Digest> {
        Ok(self.today_outcome().await?.digest)
    }

    pub async fn today_outcome(&self) -> Result<DigestOutcome> {
        self.builder
            .build_or_get(self.today_date(), self.summary_sentences)
            .await
    }

    /// The stored digest for `date`. Never builds.
    pub async fn get(&self, date: NaiveDate) -> Result<Digest> {
        self.builder
            .store()
            .get(date)
            .await?
            .ok_or(Error::NotFound(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_inference::SummarizationService;
    use ns_sources::SampleSource;
    use ns_storage::MemoryStorage;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn service() -> DigestService {
        let builder = DigestBuilder::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(SampleSource::new()),
            SummarizationService::without_remote(),
        );
        DigestService::new(Arc::new(builder), 3).with_clock(fixed_today)
    }

    #[tokio::test]
    async fn test_today_builds_then_reads() {
        let service = service();
        let first = service.today().await.unwrap();
        assert_eq!(first.date, fixed_today());
        assert_eq!(first.items.len(), 2);

        let outcome = service.today_outcome().await.unwrap();
        assert!(!outcome.generated);
        assert_eq!(outcome.digest, first);

        assert_eq!(service.get(fixed_today()).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_get_never_builds() {
        let service = service();
        let yesterday = fixed_today().pred_opt().unwrap();
        assert!(matches!(service.get(yesterday).await, Err(Error::NotFound(d)) if d == yesterday));
        assert!(matches!(service.get(fixed_today()).await, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_default_clock_is_local() {
        let service = DigestService::new(
            Arc::new(DigestBuilder::new(
                Arc::new(MemoryStorage::new()),
                Arc::new(SampleSource::new()),
                SummarizationService::without_remote(),
            )),
            3,
        );
        let before = Local::now().date_naive();
        let today = service.today_date();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }
}
