use serde::{Deserialize, Serialize};

use crate::models::verdict::{Category, DomainCategory, Workload};

/// A fully tuned, rankable record: one classifier verdict merged with its
/// source listing plus the manual-tuning outputs. This is the unit that is
/// sorted, persisted and displayed, and the shape stage 2 reads back from
/// the recommended artifact — hence the camelCase wire names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TunedRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub budget_str: String,
    #[serde(default, rename = "budgetUAH")]
    pub budget_uah: Option<f64>,
    pub fit: bool,
    /// Raw classifier score, kept for traceability.
    #[serde(default)]
    pub score: i64,
    /// Adjusted score — the only score that participates in ranking.
    pub final_score: i64,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub domain_category: Option<DomainCategory>,
    #[serde(default)]
    pub workload: Option<Workload>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub is_merchant: bool,
    #[serde(default)]
    pub is_managerial: bool,
}
