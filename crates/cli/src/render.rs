//! Text rendering of the four pages.
//!
//! Pure string builders; the binary decides when to print them. Amounts are
//! shown with two decimals, matching the export format.

use comptalite_ledger::{Depense, Facture, Ledger};

use crate::session::{Page, Session};

/// Render the page the session is currently on.
pub fn render(session: &Session) -> String {
    match session.page() {
        Page::Dashboard => render_dashboard(session.ledger()),
        Page::AjouterFacture => render_ajouter_facture(),
        Page::AjouterDepense => render_ajouter_depense(),
        Page::ModifierFacture(id) => match session.editing() {
            Some(facture) => render_modifier_facture(id.index(), facture),
            None => String::new(),
        },
    }
}

/// Dashboard: metric block plus both record tables.
pub fn render_dashboard(ledger: &Ledger) -> String {
    let m = ledger.dashboard_metrics();
    let mut out = String::new();

    out.push_str("=== Comptabilité ===\n\n");
    out.push_str(&format!("Revenus HT            {:>12.2}\n", m.revenus_ht));
    out.push_str(&format!("TPS collectée         {:>12.2}\n", m.tps_collectee));
    out.push_str(&format!("TVQ collectée         {:>12.2}\n", m.tvq_collectee));
    out.push_str(&format!("TPS payée/déduite     {:>12.2}\n", m.tps_payee));
    out.push_str(&format!("TVQ payée/déduite     {:>12.2}\n", m.tvq_payee));
    out.push_str(&format!(
        "Impôt prévisionnel (32%) {:>9.2}\n",
        m.impot_previsionnel
    ));

    out.push_str("\nFactures\n");
    if ledger.factures().is_empty() {
        out.push_str("Aucune facture enregistrée.\n");
    } else {
        for (id, facture) in ledger.factures().iter().enumerate() {
            out.push_str(&facture_row(id, facture));
        }
    }

    out.push_str("\nDépenses\n");
    if ledger.depenses().is_empty() {
        out.push_str("Aucune dépense enregistrée.\n");
    } else {
        for (id, depense) in ledger.depenses().iter().enumerate() {
            out.push_str(&depense_row(id, depense));
        }
    }

    out
}

fn facture_row(id: usize, f: &Facture) -> String {
    format!(
        "[{id}] {} | {} | HT {:.2} | TPS {:.2} | TVQ {:.2} | Total {:.2} | {}\n",
        f.client, f.date, f.montant_ht, f.tps, f.tvq, f.total, f.statut
    )
}

fn depense_row(id: usize, d: &Depense) -> String {
    format!(
        "[{id}] {} | {} | {} | HT {:.2} | TPS {:.2} | TVQ {:.2} | Total {:.2}\n",
        d.fournisseur, d.categorie, d.date, d.montant_ht, d.tps, d.tvq, d.total
    )
}

pub fn render_ajouter_facture() -> String {
    "=== Ajouter une facture ===\n".to_string()
}

pub fn render_ajouter_depense() -> String {
    "=== Ajouter une dépense ===\n".to_string()
}

pub fn render_modifier_facture(id: usize, facture: &Facture) -> String {
    format!(
        "=== Modifier la facture [{id}] ===\n{}",
        facture_row(id, facture)
    )
}
