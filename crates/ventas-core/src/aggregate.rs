//! Derived per-customer aggregate.

use chrono::NaiveDate;

use crate::SaleRecord;

/// Number of features fed to the classifier.
pub const FEATURE_DIM: usize = 3;

/// The RFM view of one customer, recomputed on demand from that customer's
/// sale records. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerAggregate {
    /// Number of recorded sales.
    pub purchase_count: usize,

    /// Sum of all sale totals.
    pub total_spent: f64,

    /// Days between `today` and the most recent sale.
    ///
    /// Negative when the most recent record carries a future date; record
    /// dates are not validated on write, so the value is passed through
    /// signed rather than clamped.
    pub days_since_last_purchase: i64,
}

impl CustomerAggregate {
    /// Compute the aggregate from one customer's records.
    ///
    /// The slice must already be filtered to a single customer; `today` is
    /// passed explicitly so recency is deterministic under test. Returns
    /// `None` for an empty slice — a customer with no records has no
    /// aggregate.
    #[must_use]
    pub fn from_records(records: &[SaleRecord], today: NaiveDate) -> Option<Self> {
        let last = records.iter().map(|r| r.date).max()?;

        Some(Self {
            purchase_count: records.len(),
            total_spent: records.iter().map(|r| r.total).sum(),
            days_since_last_purchase: (today - last).num_days(),
        })
    }

    /// The classifier input vector, in the fixed order
    /// `[days_since_last_purchase, purchase_count, total_spent]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn features(&self) -> [f64; FEATURE_DIM] {
        [
            self.days_since_last_purchase as f64,
            self.purchase_count as f64,
            self.total_spent,
        ]
    }
}
