//! Command form of the ledger operations.
//!
//! Commands represent intent: a request to mutate the ledger. They are
//! transient (never persisted) and are applied synchronously — the caller
//! decides when to redraw from the returned outcome, the ledger only mutates
//! data. Rejected commands leave the ledger untouched.

use serde::{Deserialize, Serialize};

use comptalite_core::LedgerResult;

use crate::depense::NewDepense;
use crate::facture::{FactureId, NewFacture};
use crate::ledger::Ledger;

/// A request to mutate the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerCommand {
    CreateFacture(NewFacture),
    CreateDepense(NewDepense),
    UpdateFacture { id: FactureId, facture: NewFacture },
}

/// What an accepted command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    FactureCreated(FactureId),
    DepenseCreated(usize),
    FactureUpdated(FactureId),
}

impl Ledger {
    /// Apply one command, returning what happened.
    ///
    /// Strictly sequential: each command fully completes (including the tax
    /// recomputation) before the next is accepted.
    pub fn apply(&mut self, command: LedgerCommand) -> LedgerResult<CommandOutcome> {
        match command {
            LedgerCommand::CreateFacture(input) => {
                let id = self.create_facture(input)?;
                Ok(CommandOutcome::FactureCreated(id))
            }
            LedgerCommand::CreateDepense(input) => {
                let index = self.create_depense(input)?;
                Ok(CommandOutcome::DepenseCreated(index))
            }
            LedgerCommand::UpdateFacture { id, facture } => {
                self.update_facture(id, facture)?;
                Ok(CommandOutcome::FactureUpdated(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facture::FactureStatus;
    use chrono::NaiveDate;
    use comptalite_core::LedgerError;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn create_cmd(montant_ht: f64) -> LedgerCommand {
        LedgerCommand::CreateFacture(NewFacture {
            client: "Acme".to_string(),
            date: test_date(),
            montant_ht,
            statut: FactureStatus::Impayee,
        })
    }

    #[test]
    fn apply_routes_to_the_matching_operation() {
        let mut ledger = Ledger::new();

        let outcome = ledger.apply(create_cmd(100.0)).unwrap();
        assert_eq!(outcome, CommandOutcome::FactureCreated(FactureId::new(0)));

        let outcome = ledger
            .apply(LedgerCommand::CreateDepense(NewDepense {
                fournisseur: "Fournisseur".to_string(),
                categorie: "Transport".to_string(),
                date: test_date(),
                montant_ht: 40.0,
            }))
            .unwrap();
        assert_eq!(outcome, CommandOutcome::DepenseCreated(0));

        let outcome = ledger
            .apply(LedgerCommand::UpdateFacture {
                id: FactureId::new(0),
                facture: NewFacture {
                    client: "Acme".to_string(),
                    date: test_date(),
                    montant_ht: 150.0,
                    statut: FactureStatus::Payee,
                },
            })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::FactureUpdated(FactureId::new(0)));
        assert_eq!(ledger.factures()[0].montant_ht, 150.0);
    }

    #[test]
    fn rejected_command_leaves_ledger_untouched() {
        let mut ledger = Ledger::new();
        ledger.apply(create_cmd(100.0)).unwrap();
        let before = ledger.clone();

        let err = ledger
            .apply(LedgerCommand::UpdateFacture {
                id: FactureId::new(9),
                facture: NewFacture {
                    client: "Globex".to_string(),
                    date: test_date(),
                    montant_ht: 1.0,
                    statut: FactureStatus::Payee,
                },
            })
            .unwrap_err();

        assert_eq!(err, LedgerError::NotFound { id: 9, count: 1 });
        assert_eq!(ledger, before);
    }
}
