use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use comptalite_core::{LedgerResult, TaxBreakdown};

/// Facture identifier: the record's positional index in the ledger.
///
/// No delete operation exists, so the index is a stable surrogate key for the
/// lifetime of the session. If deletion is ever added, switch to generated
/// monotonic ids instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactureId(pub usize);

impl FactureId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl core::fmt::Display for FactureId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<usize> for FactureId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Payment status of a facture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactureStatus {
    Payee,
    Impayee,
}

impl FactureStatus {
    /// Label used on the dashboard and in exports.
    pub fn label(&self) -> &'static str {
        match self {
            FactureStatus::Payee => "Payée",
            FactureStatus::Impayee => "Impayée",
        }
    }
}

impl core::fmt::Display for FactureStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Input for creating or replacing a facture (derived fields excluded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFacture {
    /// May be empty; no validation is applied to the client name.
    pub client: String,
    pub date: NaiveDate,
    /// Pre-tax amount, must be non-negative.
    pub montant_ht: f64,
    pub statut: FactureStatus,
}

/// An issued invoice with its derived tax breakdown.
///
/// Invariant: `tps`, `tvq` and `total` are always the fixed-rate derivation
/// of `montant_ht`; the only constructor recomputes them, so they can never
/// drift from the source amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facture {
    pub client: String,
    pub date: NaiveDate,
    pub montant_ht: f64,
    pub tps: f64,
    pub tvq: f64,
    pub total: f64,
    pub statut: FactureStatus,
}

impl Facture {
    /// Build a facture, deriving the tax fields from the pre-tax amount.
    ///
    /// Fails with `InvalidAmount` on a negative (or non-finite) amount.
    pub fn new(input: NewFacture) -> LedgerResult<Self> {
        let taxes = TaxBreakdown::from_montant_ht(input.montant_ht)?;
        Ok(Self {
            client: input.client,
            date: input.date,
            montant_ht: taxes.montant_ht,
            tps: taxes.tps,
            tvq: taxes.tvq,
            total: taxes.total,
            statut: input.statut,
        })
    }
}
