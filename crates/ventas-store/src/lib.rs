//! Flat-file storage layer for the ventas service.
//!
//! Sale records live in a single JSON document: one array, one object per
//! record, append order preserved. There is no index, no transaction log and
//! no locking — an append is a whole-file read-modify-write, and concurrent
//! writers can lose updates. That trade-off is deliberate for the volumes
//! this service sees.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use ventas_core::SaleRecord;
//! use ventas_store::{JsonFileStore, Store};
//!
//! let store = JsonFileStore::new("data/ventas.json");
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! store.append(&SaleRecord::new("C1", 20.0, date)).unwrap();
//! let records = store.read_all().unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod json;

pub use error::{Result, StoreError};
pub use json::JsonFileStore;

use ventas_core::SaleRecord;

/// The storage trait defining all record operations.
///
/// This abstracts the storage layer so handlers and tests can swap the
/// flat-file implementation for an in-memory one.
pub trait Store: Send + Sync {
    /// Read every sale record, in insertion order.
    ///
    /// A missing or unreadable-as-JSON backing file is treated as an empty
    /// record set, never as an error.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures other than the file being
    /// absent.
    fn read_all(&self) -> Result<Vec<SaleRecord>>;

    /// Append one record and rewrite the backing file.
    ///
    /// Creates the containing directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its directory cannot be written.
    fn append(&self, record: &SaleRecord) -> Result<()>;
}
