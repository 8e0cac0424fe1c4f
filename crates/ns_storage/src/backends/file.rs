use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use ns_core::{Digest, DigestStore, Error, Result};
use tokio::fs;
use uuid::Uuid;

use crate::StorageBackend;

/// Stores each digest as a pretty-printed JSON document named
/// `digest_YYYY-MM-DD.json`.
///
/// Writes go to a uniquely named temporary file in the same directory which is
/// then renamed over the target, so readers only ever see complete documents
/// and concurrent writers for one date resolve to the last rename.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub async fn new_with_path(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| Error::Storage(format!("Failed to create digest directory {}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("digest_{}.json", date.format("%Y-%m-%d")))
    }

    fn temp_path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!(".digest_{}.{}.tmp", date.format("%Y-%m-%d"), Uuid::new_v4()))
    }
}

impl StorageBackend for FileStorage {
    fn kind(&self) -> &'static str {
        "file"
    }
}

#[async_trait]
impl DigestStore for FileStorage {
    async fn get(&self, date: NaiveDate) -> Result<Option<Digest>> {
        let path = self.path_for(date);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let digest: Digest = serde_json::from_str(&content)
            .map_err(|e| Error::Storage(format!("Failed to parse digest {}: {}", path.display(), e)))?;
        if digest.date != date {
            return Err(Error::Storage(format!(
                "Digest file {} holds date {}",
                path.display(),
                digest.date
            )));
        }
        Ok(Some(digest))
    }

    async fn put(&self, digest: &Digest) -> Result<()> {
        let json = serde_json::to_string_pretty(digest)?;
        let temp_path = self.temp_path_for(digest.date);

        if let Err(e) = fs::write(&temp_path, json).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(Error::Storage(format!("Failed to write {}: {}", temp_path.display(), e)));
        }
        if let Err(e) = fs::rename(&temp_path, self.path_for(digest.date)).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(Error::Storage(format!("Failed to replace digest for {}: {}", digest.date, e)));
        }

        tracing::debug!(date = %digest.date, items = digest.items.len(), "Digest written");
        Ok(())
    }
}
