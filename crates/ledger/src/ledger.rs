use comptalite_core::{LedgerError, LedgerResult};

use crate::depense::{Depense, NewDepense};
use crate::facture::{Facture, FactureId, NewFacture};
use crate::metrics::DashboardMetrics;

/// In-memory ledger owning the two record collections.
///
/// The ledger is constructed once per session and owned by it exclusively —
/// no globals, no sharing, one strictly sequential writer. State lives only
/// for the lifetime of the process; there is no durable storage.
///
/// Records are identified by their positional index. Neither collection
/// supports deletion, so indices never shift.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    factures: Vec<Facture>,
    depenses: Vec<Depense>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factures(&self) -> &[Facture] {
        &self.factures
    }

    pub fn depenses(&self) -> &[Depense] {
        &self.depenses
    }

    pub fn facture(&self, id: FactureId) -> Option<&Facture> {
        self.factures.get(id.index())
    }

    /// True when `id` refers to an existing facture.
    pub fn contains_facture(&self, id: FactureId) -> bool {
        id.index() < self.factures.len()
    }

    /// Append a new facture, deriving its tax fields from the pre-tax amount.
    ///
    /// Returns the id (positional index) assigned to the record. Fails with
    /// `InvalidAmount` on a negative amount.
    pub fn create_facture(&mut self, input: NewFacture) -> LedgerResult<FactureId> {
        let facture = Facture::new(input)?;
        self.factures.push(facture);
        Ok(FactureId::new(self.factures.len() - 1))
    }

    /// Append a new dépense, deriving its tax fields from the pre-tax amount.
    ///
    /// Returns the positional index assigned to the record.
    pub fn create_depense(&mut self, input: NewDepense) -> LedgerResult<usize> {
        let depense = Depense::new(input)?;
        self.depenses.push(depense);
        Ok(self.depenses.len() - 1)
    }

    /// Replace the facture at `id` wholesale, recomputing every derived field
    /// from the new amount. Partial updates are not supported.
    ///
    /// Fails with `NotFound` when `id` is out of bounds and `InvalidAmount`
    /// on a negative amount; the existing record is untouched in both cases.
    pub fn update_facture(&mut self, id: FactureId, input: NewFacture) -> LedgerResult<&Facture> {
        if !self.contains_facture(id) {
            return Err(LedgerError::not_found(id.index(), self.factures.len()));
        }
        let facture = Facture::new(input)?;
        self.factures[id.index()] = facture;
        Ok(&self.factures[id.index()])
    }

    /// Compute the dashboard metrics from the current collections.
    ///
    /// Pure with respect to the ledger: no side effects, safe to call on
    /// every render.
    pub fn dashboard_metrics(&self) -> DashboardMetrics {
        DashboardMetrics::compute(&self.factures, &self.depenses)
    }
}
