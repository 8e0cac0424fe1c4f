use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use ns_core::{Digest, DigestStore, Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Row;

use crate::StorageBackend;

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS digests (
        date TEXT PRIMARY KEY,
        document TEXT NOT NULL,
        stored_at TEXT NOT NULL
    )
    "#,
    // Add future migrations here
];

/// Digest store keeping one JSON document per date in a SQLite table.
pub struct SQLiteStorage {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

impl SQLiteStorage {
    pub async fn new_with_path(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create database directory: {}", e)))?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| Error::Storage(format!("Failed to connect to database: {}", e)))?;

        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&pool)
                .await
                .map_err(|e| Error::Storage(format!("Failed to run migration {}: {}", i, e)))?;
        }

        Ok(Self {
            pool: Arc::new(pool),
            db_path,
        })
    }

    pub fn get_db_path(&self) -> &PathBuf {
        &self.db_path
    }
}

impl StorageBackend for SQLiteStorage {
    fn kind(&self) -> &'static str {
        "sqlite"
    }
}

#[async_trait]
impl DigestStore for SQLiteStorage {
    async fn get(&self, date: NaiveDate) -> Result<Option<Digest>> {
        let row = sqlx::query("SELECT document FROM digests WHERE date = ?")
            .bind(date.format("%Y-%m-%d").to_string())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| Error::Storage(format!("Failed to load digest for {}: {}", date, e)))?;

        match row {
            Some(row) => {
                let document: String = row.get("document");
                Ok(Some(serde_json::from_str(&document)?))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, digest: &Digest) -> Result<()> {
        let document = serde_json::to_string(digest)?;

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO digests (date, document, stored_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(digest.date.format("%Y-%m-%d").to_string())
        .bind(document)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&*self.pool)
        .await
        .map_err(|e| Error::Storage(format!("Failed to store digest for {}: {}", digest.date, e)))?;

        Ok(())
    }
}
