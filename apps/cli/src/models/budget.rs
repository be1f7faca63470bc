//! Budget normalization — converts marketplace budgets into canonical UAH.

use serde::{Deserialize, Serialize};

/// Display sentinel for listings that carry no budget.
pub const UNKNOWN_BUDGET: &str = "unknown";

/// A listing budget: either fully known (amount + currency + UAH value) or
/// unknown (all fields empty, `raw` = sentinel). `uah` being `None` is
/// distinct from zero — the ranker treats budget presence as its own key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub raw: String,
    pub uah: Option<f64>,
}

impl Budget {
    pub fn unknown() -> Self {
        Self {
            amount: None,
            currency: None,
            raw: UNKNOWN_BUDGET.to_string(),
            uah: None,
        }
    }

    /// Normalizes a raw (amount, currency) pair. Total — never fails:
    /// absent amounts yield the unknown budget, unrecognized currencies
    /// pass through unconverted (policy, not a bug).
    pub fn normalize(amount: Option<f64>, currency: Option<&str>) -> Self {
        let Some(amount) = amount else {
            return Self {
                currency: currency.map(str::to_string),
                ..Self::unknown()
            };
        };

        let raw = match currency {
            Some(cur) if !cur.is_empty() => format!("{amount} {cur}"),
            _ => format!("{amount}"),
        };

        Self {
            amount: Some(amount),
            currency: currency.map(str::to_string),
            raw,
            uah: Some(to_uah(amount, currency)),
        }
    }
}

/// Fixed conversion table into UAH. Kept intentionally static — this tool
/// ranks listings, it does not do accounting.
fn to_uah(amount: f64, currency: Option<&str>) -> f64 {
    let cur = currency.unwrap_or("").trim().to_uppercase();
    match cur.as_str() {
        "" | "UAH" | "ГРН" => amount,
        "USD" | "$" => amount * 40.0,
        "EUR" | "€" => amount * 43.0,
        "PLN" => amount * 10.0,
        // Unrecognized currency codes pass through unconverted.
        _ => amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_amount_yields_unknown() {
        let b = Budget::normalize(None, Some("USD"));
        assert_eq!(b.amount, None);
        assert_eq!(b.uah, None);
        assert_eq!(b.raw, UNKNOWN_BUDGET);
    }

    #[test]
    fn test_uah_passthrough_is_exact() {
        let b = Budget::normalize(Some(5000.0), Some("UAH"));
        assert_eq!(b.uah, Some(5000.0));
        assert_eq!(b.raw, "5000 UAH");
    }

    #[test]
    fn test_hryvnia_alias_passthrough() {
        let b = Budget::normalize(Some(1200.0), Some("ГРН"));
        assert_eq!(b.uah, Some(1200.0));
    }

    #[test]
    fn test_missing_currency_treated_as_canonical() {
        let b = Budget::normalize(Some(750.0), None);
        assert_eq!(b.uah, Some(750.0));
        assert_eq!(b.raw, "750");
    }

    #[test]
    fn test_usd_conversion() {
        let b = Budget::normalize(Some(100.0), Some("usd"));
        assert_eq!(b.uah, Some(4000.0));
    }

    #[test]
    fn test_eur_and_pln_conversion() {
        assert_eq!(Budget::normalize(Some(10.0), Some("EUR")).uah, Some(430.0));
        assert_eq!(Budget::normalize(Some(10.0), Some("PLN")).uah, Some(100.0));
    }

    #[test]
    fn test_unrecognized_currency_passes_through_unconverted() {
        let b = Budget::normalize(Some(300.0), Some("GBP"));
        assert_eq!(b.uah, Some(300.0));
        assert_eq!(b.currency.as_deref(), Some("GBP"));
    }

    #[test]
    fn test_unknown_is_distinct_from_zero() {
        let unknown = Budget::normalize(None, None);
        let zero = Budget::normalize(Some(0.0), Some("UAH"));
        assert_ne!(unknown.uah, zero.uah);
    }
}
