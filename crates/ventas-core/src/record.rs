//! Sale record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One customer transaction.
///
/// Records are immutable once stored: they are never updated or deleted, only
/// appended. The serde renames match the keys of the persisted JSON file,
/// which predates this implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// The customer the sale belongs to.
    #[serde(rename = "cliente_id")]
    pub customer_id: String,

    /// Sale amount.
    pub total: f64,

    /// Day of the sale (`YYYY-MM-DD` on disk).
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
}

impl SaleRecord {
    /// Create a new sale record.
    #[must_use]
    pub fn new(customer_id: impl Into<String>, total: f64, date: NaiveDate) -> Self {
        Self {
            customer_id: customer_id.into(),
            total,
            date,
        }
    }
}
