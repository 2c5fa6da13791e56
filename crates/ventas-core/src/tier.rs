//! Customer loyalty tiers.

use serde::{Deserialize, Serialize};

/// The closed set of loyalty tiers a customer can be classified into.
///
/// The classifier emits a probability per tier, in the declaration order
/// below. Display labels keep the Spanish wording of the customer-facing
/// pages; `key` is the stable machine identifier (also used as a CSS class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// A prospect with little purchase history.
    Potential,
    /// A customer buying at a regular clip.
    Active,
    /// A customer buying often.
    Frequent,
    /// Top-spend customer.
    Vip,
}

impl Tier {
    /// All tiers, indexed by classifier output position.
    pub const ALL: [Self; 4] = [Self::Potential, Self::Active, Self::Frequent, Self::Vip];

    /// Number of tiers (the classifier's output arity).
    pub const COUNT: usize = Self::ALL.len();

    /// Tier for a classifier output index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Customer-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Potential => "Cliente Potencial",
            Self::Active => "Cliente Activo",
            Self::Frequent => "Cliente Frecuente",
            Self::Vip => "Cliente VIP",
        }
    }

    /// Stable machine key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Potential => "potencial",
            Self::Active => "activo",
            Self::Frequent => "frecuente",
            Self::Vip => "vip",
        }
    }
}
