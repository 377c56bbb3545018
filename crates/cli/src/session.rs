//! Four-page routing session.
//!
//! The session owns the ledger and the current page. Every transition is
//! user-triggered; none is automatic. Entering the modification page requires
//! a valid facture id — an invalid id surfaces `NotFound` and the session
//! stays on the dashboard, the only recovery the original offers.

use thiserror::Error;

use comptalite_core::{LedgerError, LedgerResult};
use comptalite_ledger::{
    CommandOutcome, Facture, FactureId, Ledger, LedgerCommand, NewDepense, NewFacture,
};

/// Current page of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    AjouterFacture,
    AjouterDepense,
    /// Editing the facture at this id; the id was validated on entry.
    ModifierFacture(FactureId),
}

/// Shell-layer error: domain failures plus misuse of the edit flow.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A modification was submitted while no facture was selected.
    #[error("no facture selected for modification")]
    NoSelection,
}

/// One user session: the ledger plus the page being shown.
///
/// Constructed once at startup and owned by the shell; the ledger is reached
/// only through this handle. All state dies with the process.
#[derive(Debug, Default)]
pub struct Session {
    ledger: Ledger,
    page: Page,
}

impl Session {
    /// Start a session on the dashboard with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The facture under edit, when on the modification page.
    pub fn editing(&self) -> Option<&Facture> {
        match self.page {
            Page::ModifierFacture(id) => self.ledger.facture(id),
            _ => None,
        }
    }

    /// Navigate to the dashboard (always available).
    pub fn goto_dashboard(&mut self) {
        self.page = Page::Dashboard;
    }

    /// Navigate to the "ajouter facture" form.
    pub fn goto_ajouter_facture(&mut self) {
        self.page = Page::AjouterFacture;
    }

    /// Navigate to the "ajouter dépense" form.
    pub fn goto_ajouter_depense(&mut self) {
        self.page = Page::AjouterDepense;
    }

    /// Enter the modification page for an existing facture.
    ///
    /// An invalid id fails with `NotFound` and leaves the session on the
    /// dashboard.
    pub fn select_facture(&mut self, id: FactureId) -> LedgerResult<()> {
        if !self.ledger.contains_facture(id) {
            self.page = Page::Dashboard;
            return Err(LedgerError::not_found(
                id.index(),
                self.ledger.factures().len(),
            ));
        }
        self.page = Page::ModifierFacture(id);
        Ok(())
    }

    /// Submit the "ajouter facture" form and return to the dashboard.
    pub fn submit_facture(&mut self, input: NewFacture) -> Result<FactureId, SessionError> {
        let outcome = self.ledger.apply(LedgerCommand::CreateFacture(input))?;
        self.page = Page::Dashboard;
        match outcome {
            CommandOutcome::FactureCreated(id) => {
                tracing::info!(%id, "facture créée");
                Ok(id)
            }
            _ => unreachable!("CreateFacture yields FactureCreated"),
        }
    }

    /// Submit the "ajouter dépense" form and return to the dashboard.
    pub fn submit_depense(&mut self, input: NewDepense) -> Result<usize, SessionError> {
        let outcome = self.ledger.apply(LedgerCommand::CreateDepense(input))?;
        self.page = Page::Dashboard;
        match outcome {
            CommandOutcome::DepenseCreated(index) => {
                tracing::info!(index, "dépense ajoutée");
                Ok(index)
            }
            _ => unreachable!("CreateDepense yields DepenseCreated"),
        }
    }

    /// Submit the modification form for the selected facture and return to
    /// the dashboard.
    pub fn submit_modification(&mut self, input: NewFacture) -> Result<FactureId, SessionError> {
        let Page::ModifierFacture(id) = self.page else {
            return Err(SessionError::NoSelection);
        };
        self.ledger
            .apply(LedgerCommand::UpdateFacture { id, facture: input })?;
        self.page = Page::Dashboard;
        tracing::info!(%id, "facture modifiée");
        Ok(id)
    }

    /// Abandon the current form and return to the dashboard.
    pub fn cancel(&mut self) {
        self.page = Page::Dashboard;
    }
}
