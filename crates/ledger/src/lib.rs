//! Bookkeeping domain module.
//!
//! This crate contains the record types (factures and dépenses), the
//! in-memory ledger that owns the two collections, and the dashboard
//! metrics derived from them — implemented purely as deterministic domain
//! logic (no IO, no rendering, no storage).

pub mod command;
pub mod depense;
pub mod facture;
pub mod ledger;
pub mod metrics;

pub use command::{CommandOutcome, LedgerCommand};
pub use depense::{Depense, NewDepense};
pub use facture::{Facture, FactureId, FactureStatus, NewFacture};
pub use ledger::Ledger;
pub use metrics::DashboardMetrics;
