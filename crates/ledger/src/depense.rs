use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use comptalite_core::{LedgerResult, TaxBreakdown};

/// Input for recording a dépense (derived fields excluded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDepense {
    /// May be empty; no validation is applied to the supplier name.
    pub fournisseur: String,
    pub categorie: String,
    pub date: NaiveDate,
    /// Pre-tax amount, must be non-negative.
    pub montant_ht: f64,
}

/// A recorded expense with its derived tax breakdown.
///
/// Same derivation invariant as [`crate::Facture`]: the tax fields are always
/// recomputed from `montant_ht` by the constructor. Dépenses have no status
/// and no update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depense {
    pub fournisseur: String,
    pub categorie: String,
    pub date: NaiveDate,
    pub montant_ht: f64,
    pub tps: f64,
    pub tvq: f64,
    pub total: f64,
}

impl Depense {
    /// Build a dépense, deriving the tax fields from the pre-tax amount.
    ///
    /// Fails with `InvalidAmount` on a negative (or non-finite) amount.
    pub fn new(input: NewDepense) -> LedgerResult<Self> {
        let taxes = TaxBreakdown::from_montant_ht(input.montant_ht)?;
        Ok(Self {
            fournisseur: input.fournisseur,
            categorie: input.categorie,
            date: input.date,
            montant_ht: taxes.montant_ht,
            tps: taxes.tps,
            tvq: taxes.tvq,
            total: taxes.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn new_depense_derives_taxes_from_amount() {
        let depense = Depense::new(NewDepense {
            fournisseur: "Bureau en Gros".to_string(),
            categorie: "Fournitures".to_string(),
            date: test_date(),
            montant_ht: 200.0,
        })
        .unwrap();

        assert_eq!(depense.montant_ht, 200.0);
        assert_eq!(depense.tps, 10.0);
        assert_eq!(depense.tvq, 200.0 * 0.09975);
        assert_eq!(depense.total, 229.95);
    }

    #[test]
    fn zero_amount_yields_zero_derived_fields() {
        let depense = Depense::new(NewDepense {
            fournisseur: String::new(),
            categorie: String::new(),
            date: test_date(),
            montant_ht: 0.0,
        })
        .unwrap();

        assert_eq!(depense.tps, 0.0);
        assert_eq!(depense.tvq, 0.0);
        assert_eq!(depense.total, 0.0);
    }

    #[test]
    fn negative_amount_is_rejected() {
        let result = Depense::new(NewDepense {
            fournisseur: "X".to_string(),
            categorie: "Y".to_string(),
            date: test_date(),
            montant_ht: -1.0,
        });
        assert!(result.is_err());
    }
}
