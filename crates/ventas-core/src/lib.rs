//! Core types for the ventas sales-registration service.
//!
//! This crate provides the domain types shared across the workspace:
//!
//! - **Records**: `SaleRecord`, one customer transaction as persisted on disk
//! - **Aggregates**: `CustomerAggregate`, the derived RFM view of a customer
//! - **Tiers**: `Tier`, the closed set of four loyalty labels
//!
//! # Persisted shape
//!
//! Sale records are stored with the Spanish field names the data file has
//! always used (`cliente_id`, `total`, `fecha`); the Rust types carry English
//! names and map via serde renames. Amounts are plain JSON numbers, dates are
//! `YYYY-MM-DD` strings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod record;
pub mod tier;

pub use aggregate::CustomerAggregate;
pub use record::SaleRecord;
pub use tier::Tier;
