//! Fixed-rate sales-tax derivation.
//!
//! Every record in the ledger carries the same derived breakdown: the two
//! Québec sales taxes (TPS and TVQ) computed from the pre-tax amount, plus the
//! tax-inclusive total. The derived fields are never set independently; the
//! only way to obtain them is [`TaxBreakdown::from_montant_ht`].

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// TPS (federal sales tax) rate: 5%.
pub const TPS_RATE: f64 = 0.05;

/// TVQ (provincial sales tax) rate: 9.975%.
pub const TVQ_RATE: f64 = 0.09975;

/// Projected income tax rate applied to net revenue.
pub const IMPOT_RATE: f64 = 0.32;

/// Derived tax amounts for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Pre-tax amount the breakdown was derived from.
    pub montant_ht: f64,
    pub tps: f64,
    pub tvq: f64,
    /// `montant_ht + tps + tvq`.
    pub total: f64,
}

impl TaxBreakdown {
    /// Derive the breakdown from a pre-tax amount.
    ///
    /// Rejects negative and non-finite amounts with
    /// [`LedgerError::InvalidAmount`]. Zero is valid and yields an all-zero
    /// breakdown.
    pub fn from_montant_ht(montant_ht: f64) -> LedgerResult<Self> {
        if !montant_ht.is_finite() || montant_ht < 0.0 {
            return Err(LedgerError::invalid_amount(montant_ht));
        }

        let tps = montant_ht * TPS_RATE;
        let tvq = montant_ht * TVQ_RATE;
        Ok(Self {
            montant_ht,
            tps,
            tvq,
            total: montant_ht + tps + tvq,
        })
    }
}
