//! Form input parsing.
//!
//! Mirrors the input widgets of the original form tool: the date defaults to
//! today when left blank, the amount widget refuses negatives before the
//! value ever reaches the ledger, and the status is a two-option select.

use chrono::NaiveDate;

use comptalite_ledger::FactureStatus;

/// Parse a `YYYY-MM-DD` date; blank input falls back to `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| format!("date invalide « {input} » (attendu AAAA-MM-JJ)"))
}

/// Parse a non-negative pre-tax amount. This is the widget-level guard; the
/// ledger re-checks on its own.
pub fn parse_montant(input: &str) -> Result<f64, String> {
    let input = input.trim();
    let value: f64 = input
        .parse()
        .map_err(|_| format!("montant invalide « {input} »"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("le montant doit être positif ou nul ({input})"));
    }
    Ok(value)
}

/// Parse the status select; blank input defaults to `Payée`.
pub fn parse_statut(input: &str) -> Result<FactureStatus, String> {
    match input.trim().to_lowercase().as_str() {
        "" | "payee" | "payée" | "p" => Ok(FactureStatus::Payee),
        "impayee" | "impayée" | "i" => Ok(FactureStatus::Impayee),
        other => Err(format!("statut invalide « {other} » (payée/impayée)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    #[test]
    fn blank_date_defaults_to_today() {
        assert_eq!(parse_date("", today()).unwrap(), today());
        assert_eq!(parse_date("  ", today()).unwrap(), today());
    }

    #[test]
    fn iso_dates_parse() {
        assert_eq!(
            parse_date("2023-12-31", today()).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
        assert!(parse_date("31/12/2023", today()).is_err());
    }

    #[test]
    fn montant_rejects_negatives_and_garbage() {
        assert_eq!(parse_montant("1000.00").unwrap(), 1000.0);
        assert_eq!(parse_montant("0").unwrap(), 0.0);
        assert!(parse_montant("-1").is_err());
        assert!(parse_montant("abc").is_err());
        assert!(parse_montant("nan").is_err());
    }

    #[test]
    fn statut_accepts_both_spellings() {
        assert_eq!(parse_statut("Payée").unwrap(), FactureStatus::Payee);
        assert_eq!(parse_statut("impayee").unwrap(), FactureStatus::Impayee);
        assert_eq!(parse_statut("").unwrap(), FactureStatus::Payee);
        assert!(parse_statut("inconnue").is_err());
    }
}
