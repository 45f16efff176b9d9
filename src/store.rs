use crate::record::IpoRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read record file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse record file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of the record file: the record plus when it was scraped.
#[derive(Debug, Deserialize)]
struct StoredRecord {
    #[serde(flatten)]
    record: IpoRecord,
    #[serde(default)]
    scraped_at: Option<String>,
}

/// Summary counts over the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub total_ipos: usize,
    pub upcoming: usize,
    pub listed: usize,
    pub last_sync: Option<String>,
}

/// In-memory set of IPO records, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<IpoRecord>,
    last_sync: Option<String>,
}

impl RecordStore {
    pub fn new(records: Vec<IpoRecord>) -> Self {
        Self {
            records,
            last_sync: None,
        }
    }

    /// Reads a JSON array of records. `last_sync` is the latest `scraped_at`
    /// timestamp in the file (RFC 3339 text, compared as text).
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let content = fs::read_to_string(path).await?;
        let stored: Vec<StoredRecord> = serde_json::from_str(&content)?;

        let last_sync = stored
            .iter()
            .filter_map(|entry| entry.scraped_at.clone())
            .max();
        let records = stored.into_iter().map(|entry| entry.record).collect();

        Ok(Self { records, last_sync })
    }

    pub fn stats(&self) -> StoreStats {
        let count_status = |wanted: &str| {
            self.records
                .iter()
                .filter(|record| {
                    record
                        .status
                        .as_deref()
                        .is_some_and(|status| status.eq_ignore_ascii_case(wanted))
                })
                .count()
        };

        StoreStats {
            total_ipos: self.records.len(),
            upcoming: count_status("upcoming"),
            listed: count_status("listed"),
            last_sync: self.last_sync.clone(),
        }
    }

    /// First record whose name contains `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&IpoRecord> {
        let needle = name.to_lowercase();
        self.records
            .iter()
            .find(|record| record.ipo_name.to_lowercase().contains(&needle))
    }

    pub fn all(&self) -> &[IpoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
