//! `comptalite-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model and the fixed-rate tax derivation shared by every record
//! type in the ledger.

pub mod error;
pub mod tax;

pub use error::{LedgerError, LedgerResult};
pub use tax::{IMPOT_RATE, TPS_RATE, TVQ_RATE, TaxBreakdown};
