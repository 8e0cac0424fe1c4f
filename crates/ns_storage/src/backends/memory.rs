use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use ns_core::{Digest, DigestStore, Result};
use tokio::sync::RwLock;

use crate::StorageBackend;

/// Process-local digest store. Contents are lost on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    digests: Arc<RwLock<HashMap<NaiveDate, Digest>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.digests.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.digests.read().await.is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn kind(&self) -> &'static str {
        "memory"
    }
}

#[async_trait]
impl DigestStore for MemoryStorage {
    async fn get(&self, date: NaiveDate) -> Result<Option<Digest>> {
        Ok(self.digests.read().await.get(&date).cloned())
    }

    async fn put(&self, digest: &Digest) -> Result<()> {
        self.digests.write().await.insert(digest.date, digest.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_core::DigestItem;

    fn digest(date: NaiveDate, summary: &str) -> Digest {
        Digest::new(
            date,
            vec![DigestItem {
                title: "Title".to_string(),
                summary: summary.to_string(),
                url: None,
                source: None,
                published_at: None,
            }],
        )
    }

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemoryStorage::new();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(storage.get(date).await.unwrap().is_none());

        storage.put(&digest(date, "first")).await.unwrap();
        assert_eq!(storage.get(date).await.unwrap(), Some(digest(date, "first")));

        storage.put(&digest(date, "second")).await.unwrap();
        assert_eq!(storage.get(date).await.unwrap(), Some(digest(date, "second")));
        assert_eq!(storage.len().await, 1);

        let other = date.succ_opt().unwrap();
        assert!(storage.get(other).await.unwrap().is_none());
    }
}
