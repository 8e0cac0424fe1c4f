use async_trait::async_trait;
use chrono::NaiveDate;
use crate::types::Digest;
use crate::Result;

#[async_trait]
pub trait DigestStore: Send + Sync {
    /// Returns the digest stored for `date`, if any
    async fn get(&self, date: NaiveDate) -> Result<Option<Digest>>;

    /// Stores `digest`, replacing any digest already stored for its date.
    /// Implementations must never leave a partially written digest behind.
    async fn put(&self, digest: &Digest) -> Result<()>;
}
