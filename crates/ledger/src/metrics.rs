use serde::{Deserialize, Serialize};

use comptalite_core::IMPOT_RATE;

use crate::depense::Depense;
use crate::facture::Facture;

/// Aggregate totals shown on the dashboard.
///
/// Derived on demand from the two collections; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Σ facture.montant_ht
    pub revenus_ht: f64,
    pub tps_collectee: f64,
    pub tvq_collectee: f64,
    /// Σ depense.montant_ht
    pub depenses_ht: f64,
    pub tps_payee: f64,
    pub tvq_payee: f64,
    /// 32% of net revenue, clamped at zero when expenses exceed revenue.
    pub impot_previsionnel: f64,
}

impl DashboardMetrics {
    /// Pure function of the two collections.
    pub fn compute(factures: &[Facture], depenses: &[Depense]) -> Self {
        let revenus_ht: f64 = factures.iter().map(|f| f.montant_ht).sum();
        let tps_collectee: f64 = factures.iter().map(|f| f.tps).sum();
        let tvq_collectee: f64 = factures.iter().map(|f| f.tvq).sum();
        let depenses_ht: f64 = depenses.iter().map(|d| d.montant_ht).sum();
        let tps_payee: f64 = depenses.iter().map(|d| d.tps).sum();
        let tvq_payee: f64 = depenses.iter().map(|d| d.tvq).sum();

        let impot_previsionnel = IMPOT_RATE * (revenus_ht - depenses_ht).max(0.0);

        Self {
            revenus_ht,
            tps_collectee,
            tvq_collectee,
            depenses_ht,
            tps_payee,
            tvq_payee,
            impot_previsionnel,
        }
    }
}
