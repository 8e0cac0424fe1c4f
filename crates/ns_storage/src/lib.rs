use std::sync::Arc;

use ns_core::{DigestStore, Error, Result, Settings};

pub mod backends;

pub use backends::*;

pub trait StorageBackend: DigestStore {
    /// Short backend name used in logs and configuration
    fn kind(&self) -> &'static str;
}

/// Opens the digest store named by `settings.storage`.
pub async fn create_storage(settings: &Settings) -> Result<Arc<dyn DigestStore>> {
    let storage: Arc<dyn DigestStore> = match settings.storage.as_str() {
        "memory" => Arc::new(MemoryStorage::new()),
        "file" => Arc::new(FileStorage::new_with_path(settings.daily_dir()).await?),
        #[cfg(feature = "sqlite")]
        "sqlite" => Arc::new(SQLiteStorage::new_with_path(settings.data_dir.join("digests.db")).await?),
        other => {
            return Err(Error::Config(format!(
                "Unknown storage backend '{}'. Available: {}",
                other,
                available_backends().join(", ")
            )))
        }
    };
    tracing::info!("💾 Digest storage initialized (using {})", settings.storage);
    Ok(storage)
}

pub fn available_backends() -> Vec<&'static str> {
    let mut backends = vec!["file", "memory"];
    if cfg!(feature = "sqlite") {
        backends.push("sqlite");
    }
    backends
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_storage, StorageBackend};
}
