//! Flat-file JSON storage implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ventas_core::SaleRecord;

use crate::error::{Result, StoreError};
use crate::Store;

/// Store backed by a single pretty-printed JSON array on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file path.
    ///
    /// The file is not touched until the first `append`; a store over a
    /// nonexistent path simply reads as empty.
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn read_all(&self) -> Result<Vec<SaleRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&contents) {
            Ok(records) => Ok(records),
            Err(e) => {
                // Malformed data is recovered as an empty record set rather
                // than surfaced; the next append rewrites the file.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "backing file is not a valid record array, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn append(&self, record: &SaleRecord) -> Result<()> {
        let mut records = self.read_all()?;
        records.push(record.clone());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_vec_pretty(&records)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| StoreError::Io(e.to_string()))?;

        tracing::debug!(
            path = %self.path.display(),
            customer_id = %record.customer_id,
            records = records.len(),
            "record appended"
        );

        Ok(())
    }
}
