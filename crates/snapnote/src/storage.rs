//! Storage layer for ingested text.
//!
//! This module provides the append-only flat-file store behind the
//! ingest endpoint. Every record is written as one line separator
//! followed by the record text; the file is created on first open and
//! only ever grows. All appends go through one mutex-guarded handle, so
//! concurrent requests serialize at the file instead of relying on
//! platform append atomicity.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Append-only store for ingested text records.
#[derive(Debug)]
pub struct TextStore {
    /// Path to the storage file.
    path: PathBuf,
    /// The open append handle; the mutex is the write discipline.
    file: Mutex<File>,
}

impl TextStore {
    /// Open or create the storage file at the given path.
    ///
    /// Creates parent directories if they don't exist. The file is
    /// opened in append mode; existing records are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if directories or the file cannot be created.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| Error::DirectoryCreate {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
        }

        debug!("Opening storage file at {}", path.display());
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|source| Error::StoreOpen {
                path: path.clone(),
                source,
            })?;

        info!("Storage file opened at {}", path.display());
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Get the path to the storage file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record to the store.
    ///
    /// Writes a line separator followed by the record text as a single
    /// write, then flushes. Appends from concurrent tasks are serialized
    /// by the store's mutex in lock-acquisition order.
    ///
    /// # Errors
    ///
    /// Returns an error if the write or flush fails.
    pub async fn append(&self, text: &str) -> Result<()> {
        let mut record = Vec::with_capacity(text.len() + 1);
        record.push(b'\n');
        record.extend_from_slice(text.as_bytes());

        let mut file = self.file.lock().await;
        file.write_all(&record)
            .await
            .map_err(|source| Error::StoreAppend {
                path: self.path.clone(),
                source,
            })?;
        file.flush().await.map_err(|source| Error::StoreAppend {
            path: self.path.clone(),
            source,
        })?;

        debug!(bytes = record.len(), "Appended record");
        Ok(())
    }

    /// Get statistics about the store.
    ///
    /// The record count is the number of separator bytes in the file,
    /// which matches the line count any line-oriented consumer sees;
    /// records containing embedded newlines count once per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn stats(&self) -> Result<StoreStats> {
        let contents = tokio::fs::read(&self.path).await?;
        let records = contents.iter().filter(|&&b| b == b'\n').count() as u64;

        let metadata = tokio::fs::metadata(&self.path).await?;
        let modified = metadata.modified().ok().map(DateTime::<Utc>::from);

        Ok(StoreStats {
            records,
            size_bytes: metadata.len(),
            modified,
        })
    }
}

/// Statistics about the storage file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of records appended (separator count).
    pub records: u64,
    /// Size of the storage file in bytes.
    pub size_bytes: u64,
    /// Last modification time of the storage file.
    pub modified: Option<DateTime<Utc>>,
}
