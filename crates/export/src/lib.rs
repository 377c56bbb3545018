//! Spreadsheet export of the two ledger collections.
//!
//! Each collection serializes to its own CSV file with the column headers the
//! dashboard uses. Export is one-directional (no import path) and
//! whole-collection: a writer either produces the complete file or fails.
//! Dates serialize as `YYYY-MM-DD`, amounts with two decimals.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use comptalite_ledger::{Depense, Facture, Ledger};

/// Column headers for the facture export.
pub const FACTURE_COLUMNS: [&str; 7] = [
    "Client",
    "Date",
    "Montant HT",
    "TPS (5%)",
    "TVQ (9,975%)",
    "Total",
    "Statut",
];

/// Column headers for the dépense export.
pub const DEPENSE_COLUMNS: [&str; 7] = [
    "Fournisseur",
    "Catégorie",
    "Date",
    "Montant HT",
    "TPS (5%)",
    "TVQ (9,975%)",
    "Total",
];

/// Export-layer error (IO and CSV plumbing, not domain failures).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn montant(value: f64) -> String {
    format!("{value:.2}")
}

/// Write the facture collection as CSV, header row included.
pub fn write_factures<W: Write>(writer: W, factures: &[Facture]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(FACTURE_COLUMNS)?;
    for facture in factures {
        csv.write_record([
            facture.client.clone(),
            facture.date.format("%Y-%m-%d").to_string(),
            montant(facture.montant_ht),
            montant(facture.tps),
            montant(facture.tvq),
            montant(facture.total),
            facture.statut.label().to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the dépense collection as CSV, header row included.
pub fn write_depenses<W: Write>(writer: W, depenses: &[Depense]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(DEPENSE_COLUMNS)?;
    for depense in depenses {
        csv.write_record([
            depense.fournisseur.clone(),
            depense.categorie.clone(),
            depense.date.format("%Y-%m-%d").to_string(),
            montant(depense.montant_ht),
            montant(depense.tps),
            montant(depense.tvq),
            montant(depense.total),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Export every non-empty collection to `dir` (`factures.csv`,
/// `depenses.csv`), returning the paths written.
///
/// Empty collections are skipped, matching the dashboard which only offers a
/// download once records exist.
pub fn export_to_dir(dir: &Path, ledger: &Ledger) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::new();

    if !ledger.factures().is_empty() {
        let path = dir.join("factures.csv");
        write_factures(File::create(&path)?, ledger.factures())?;
        tracing::info!(path = %path.display(), records = ledger.factures().len(), "exported factures");
        written.push(path);
    }
    if !ledger.depenses().is_empty() {
        let path = dir.join("depenses.csv");
        write_depenses(File::create(&path)?, ledger.depenses())?;
        tracing::info!(path = %path.display(), records = ledger.depenses().len(), "exported depenses");
        written.push(path);
    }

    Ok(written)
}
