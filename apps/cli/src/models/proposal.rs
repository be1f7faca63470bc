//! Stage-2 models: drafted proposals with hour/cost estimates.

use serde::{Deserialize, Serialize};

use crate::models::verdict::{lenient_id, Category, DomainCategory, Workload};

/// One work-breakdown entry of an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub hours: f64,
}

/// A completed estimate. UA-market fields come from the model (with totals
/// computed locally when omitted); EU/US fields are always derived by the
/// configured price multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub hours_min: Option<f64>,
    pub hours_max: Option<f64>,
    #[serde(rename = "hourlyRateUAH")]
    pub hourly_rate_uah: f64,
    #[serde(rename = "totalMinUAH")]
    pub total_min_uah: Option<f64>,
    #[serde(rename = "totalMaxUAH")]
    pub total_max_uah: Option<f64>,
    #[serde(rename = "hourlyRateUAH_EUUS")]
    pub hourly_rate_eu_us: f64,
    #[serde(rename = "totalMinUAH_EUUS")]
    pub total_min_eu_us: Option<f64>,
    #[serde(rename = "totalMaxUAH_EUUS")]
    pub total_max_eu_us: Option<f64>,
    pub phases: Vec<Phase>,
}

/// Estimate fields exactly as the model emitted them (snake_case per the
/// prompt schema). Untrusted — everything defaulted.
#[derive(Debug, Default, Deserialize)]
pub struct RawEstimate {
    #[serde(default)]
    pub hours_min: Option<f64>,
    #[serde(default)]
    pub hours_max: Option<f64>,
    #[serde(default)]
    pub hourly_rate_uah: Option<f64>,
    #[serde(default)]
    pub total_min_uah: Option<f64>,
    #[serde(default)]
    pub total_max_uah: Option<f64>,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

/// One proposal object as the model emitted it.
#[derive(Debug, Deserialize)]
pub struct RawProposal {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub proposal: String,
    #[serde(default)]
    pub estimate: RawEstimate,
}

/// The stage-2 output record: the tuned-record context plus the drafted
/// proposal text and the completed estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: Category,
    pub domain_category: Option<DomainCategory>,
    pub workload: Option<Workload>,
    pub final_score: i64,
    pub budget_str: String,
    #[serde(rename = "budgetUAH")]
    pub budget_uah: Option<f64>,
    pub reason: String,
    pub proposal: String,
    pub estimate: Estimate,
}
