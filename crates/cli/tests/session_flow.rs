//! End-to-end session flow: forms in, dashboard metrics and CSV out.

use chrono::NaiveDate;

use comptalite_cli::session::{Page, Session};
use comptalite_core::LedgerError;
use comptalite_export::{write_depenses, write_factures};
use comptalite_ledger::{FactureId, FactureStatus, NewDepense, NewFacture};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn bookkeeping_month_end_to_end() {
    let mut session = Session::new();

    // One paid invoice.
    session.goto_ajouter_facture();
    let id = session
        .submit_facture(NewFacture {
            client: "Acme".to_string(),
            date: date(2024, 1, 15),
            montant_ht: 1000.0,
            statut: FactureStatus::Payee,
        })
        .unwrap();
    assert_eq!(id, FactureId::new(0));
    assert_eq!(session.page(), Page::Dashboard);

    let facture = &session.ledger().factures()[0];
    assert_eq!(facture.tps, 50.0);
    assert_eq!(facture.tvq, 99.75);
    assert_eq!(facture.total, 1149.75);

    // One expense.
    session.goto_ajouter_depense();
    session
        .submit_depense(NewDepense {
            fournisseur: "Bureau en Gros".to_string(),
            categorie: "Fournitures".to_string(),
            date: date(2024, 1, 20),
            montant_ht: 200.0,
        })
        .unwrap();

    let depense = &session.ledger().depenses()[0];
    assert_eq!(depense.tps, 10.0);
    assert_eq!(depense.tvq, 200.0 * 0.09975);
    assert_eq!(depense.total, 229.95);

    // Dashboard totals.
    let metrics = session.ledger().dashboard_metrics();
    assert_eq!(metrics.revenus_ht, 1000.0);
    assert_eq!(metrics.tps_collectee, 50.0);
    assert_eq!(metrics.tvq_collectee, 99.75);
    assert_eq!(metrics.tps_payee, 10.0);
    assert_eq!(metrics.tvq_payee, 200.0 * 0.09975);
    assert_eq!(metrics.impot_previsionnel, 256.0);

    // Edit the invoice: mark it unpaid with a corrected amount.
    session.select_facture(id).unwrap();
    assert_eq!(session.page(), Page::ModifierFacture(id));
    session
        .submit_modification(NewFacture {
            client: "Acme".to_string(),
            date: date(2024, 1, 15),
            montant_ht: 1200.0,
            statut: FactureStatus::Impayee,
        })
        .unwrap();

    let facture = &session.ledger().factures()[0];
    assert_eq!(facture.montant_ht, 1200.0);
    assert_eq!(facture.tps, 60.0);
    assert_eq!(facture.statut, FactureStatus::Impayee);

    // Export both collections.
    let mut factures_csv = Vec::new();
    write_factures(&mut factures_csv, session.ledger().factures()).unwrap();
    let factures_csv = String::from_utf8(factures_csv).unwrap();
    assert!(factures_csv.contains("Acme,2024-01-15,1200.00,60.00,119.70,1379.70,Impayée"));

    let mut depenses_csv = Vec::new();
    write_depenses(&mut depenses_csv, session.ledger().depenses()).unwrap();
    let depenses_csv = String::from_utf8(depenses_csv).unwrap();
    assert!(depenses_csv.contains("Bureau en Gros,Fournitures,2024-01-20,200.00,10.00,19.95,229.95"));
}

#[test]
fn invalid_edit_id_only_offers_the_dashboard() {
    let mut session = Session::new();
    session
        .submit_facture(NewFacture {
            client: "Acme".to_string(),
            date: date(2024, 2, 1),
            montant_ht: 100.0,
            statut: FactureStatus::Payee,
        })
        .unwrap();
    session
        .submit_facture(NewFacture {
            client: "Globex".to_string(),
            date: date(2024, 2, 2),
            montant_ht: 200.0,
            statut: FactureStatus::Impayee,
        })
        .unwrap();

    let err = session.select_facture(FactureId::new(5)).unwrap_err();
    assert_eq!(err, LedgerError::NotFound { id: 5, count: 2 });
    assert_eq!(session.page(), Page::Dashboard);

    // The ledger is untouched by the failed selection.
    assert_eq!(session.ledger().factures().len(), 2);
}
