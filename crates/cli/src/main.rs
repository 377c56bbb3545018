use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use comptalite_cli::forms;
use comptalite_cli::render;
use comptalite_cli::session::{Page, Session};
use comptalite_ledger::{FactureId, NewDepense, NewFacture};

const AIDE: &str = "\
Commandes:
  facture            ajouter une facture
  depense            ajouter une dépense
  modifier <id>      modifier la facture <id>
  export <dossier>   exporter les collections en CSV
  json               afficher les métriques en JSON
  aide               afficher cette aide
  quitter            quitter (les données ne sont pas conservées)";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();

    let stdin = io::stdin();
    run(&mut stdin.lock(), &mut io::stdout())
}

fn run(input: &mut dyn BufRead, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut session = Session::new();
    writeln!(out, "{AIDE}\n")?;

    loop {
        writeln!(out, "{}", render::render(&session))?;
        let Some(line) = ask(input, out, "> ")? else {
            break;
        };
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => {}
            "quitter" | "q" => break,
            "aide" | "?" => writeln!(out, "{AIDE}")?,
            "facture" => {
                session.goto_ajouter_facture();
                facture_form(input, out, &mut session)?;
            }
            "depense" => {
                session.goto_ajouter_depense();
                depense_form(input, out, &mut session)?;
            }
            "modifier" => match arg.parse::<usize>() {
                Ok(id) => match session.select_facture(FactureId::new(id)) {
                    Ok(()) => facture_form(input, out, &mut session)?,
                    // Invalid id: inline error, back on the dashboard.
                    Err(e) => writeln!(out, "Erreur: {e}")?,
                },
                Err(_) => writeln!(out, "Usage: modifier <id>")?,
            },
            "export" => {
                let dir = if arg.is_empty() { "." } else { arg };
                match comptalite_export::export_to_dir(Path::new(dir), session.ledger()) {
                    Ok(paths) if paths.is_empty() => {
                        writeln!(out, "Rien à exporter (collections vides).")?
                    }
                    Ok(paths) => {
                        for path in paths {
                            writeln!(out, "Écrit: {}", path.display())?;
                        }
                    }
                    Err(e) => writeln!(out, "Erreur d'export: {e}")?,
                }
            }
            "json" => {
                let metrics = session.ledger().dashboard_metrics();
                writeln!(out, "{}", serde_json::to_string_pretty(&metrics)?)?;
            }
            other => writeln!(out, "Commande inconnue « {other} » (aide pour la liste)")?,
        }
    }

    Ok(())
}

/// Prompt and read one line; `None` means end of input.
fn ask(input: &mut dyn BufRead, out: &mut dyn Write, prompt: &str) -> anyhow::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask for one field until it parses; `annuler` (or end of input) gives `None`.
fn field<T>(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> anyhow::Result<Option<T>> {
    loop {
        let Some(raw) = ask(input, out, prompt)? else {
            return Ok(None);
        };
        if raw.trim().eq_ignore_ascii_case("annuler") {
            return Ok(None);
        }
        match parse(&raw) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

/// Shared facture form, used by both the add and the modify pages.
fn facture_form(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    session: &mut Session,
) -> anyhow::Result<()> {
    writeln!(out, "{}", render::render(session))?;
    writeln!(out, "(annuler pour revenir au tableau de bord)")?;
    let today = Local::now().date_naive();

    let form = (|| -> anyhow::Result<Option<NewFacture>> {
        let Some(client) = field(input, out, "Client: ", |s| Ok(s.trim().to_string()))? else {
            return Ok(None);
        };
        let Some(date) = field(input, out, "Date [AAAA-MM-JJ]: ", |s| {
            forms::parse_date(s, today)
        })?
        else {
            return Ok(None);
        };
        let Some(montant_ht) = field(input, out, "Montant HT: ", forms::parse_montant)? else {
            return Ok(None);
        };
        let Some(statut) = field(input, out, "Statut [payée/impayée]: ", forms::parse_statut)?
        else {
            return Ok(None);
        };
        Ok(Some(NewFacture {
            client,
            date,
            montant_ht,
            statut,
        }))
    })()?;

    match form {
        Some(facture) => {
            let result = match session.page() {
                Page::ModifierFacture(_) => session.submit_modification(facture).map(|_| ()),
                _ => session.submit_facture(facture).map(|_| ()),
            };
            match result {
                Ok(()) => writeln!(out, "Facture enregistrée.")?,
                Err(e) => {
                    writeln!(out, "Erreur: {e}")?;
                    session.cancel();
                }
            }
        }
        None => session.cancel(),
    }
    Ok(())
}

fn depense_form(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    session: &mut Session,
) -> anyhow::Result<()> {
    writeln!(out, "{}", render::render(session))?;
    writeln!(out, "(annuler pour revenir au tableau de bord)")?;
    let today = Local::now().date_naive();

    let form = (|| -> anyhow::Result<Option<NewDepense>> {
        let Some(fournisseur) = field(input, out, "Fournisseur: ", |s| Ok(s.trim().to_string()))?
        else {
            return Ok(None);
        };
        let Some(categorie) = field(input, out, "Catégorie: ", |s| Ok(s.trim().to_string()))?
        else {
            return Ok(None);
        };
        let Some(date) = field(input, out, "Date [AAAA-MM-JJ]: ", |s| {
            forms::parse_date(s, today)
        })?
        else {
            return Ok(None);
        };
        let Some(montant_ht) = field(input, out, "Montant HT: ", forms::parse_montant)? else {
            return Ok(None);
        };
        Ok(Some(NewDepense {
            fournisseur,
            categorie,
            date,
            montant_ht,
        }))
    })()?;

    match form {
        Some(depense) => match session.submit_depense(depense) {
            Ok(_) => writeln!(out, "Dépense ajoutée.")?,
            Err(e) => {
                writeln!(out, "Erreur: {e}")?;
                session.cancel();
            }
        },
        None => session.cancel(),
    }
    Ok(())
}
