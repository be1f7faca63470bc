//! Classifier verdict model. The parsed model response is an untrusted
//! external payload: every field is validated and coerced against the
//! documented enums and ranges before it becomes a `Verdict`.

use serde::{Deserialize, Deserializer, Serialize};

/// Listing category assigned by the classifier (and possibly rewritten by
/// the priority tuner). Wire names match the prompt schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CorePaid,
    CoreNoprice,
    SiteFull,
    Managerial,
    LowPriorityCards,
    #[default]
    Other,
}

impl Category {
    pub fn from_wire(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "core_paid" => Self::CorePaid,
            "core_noprice" => Self::CoreNoprice,
            "site_full" => Self::SiteFull,
            "managerial" => Self::Managerial,
            "low_priority_cards" => Self::LowPriorityCards,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CorePaid => "core_paid",
            Self::CoreNoprice => "core_noprice",
            Self::SiteFull => "site_full",
            Self::Managerial => "managerial",
            Self::LowPriorityCards => "low_priority_cards",
            Self::Other => "other",
        }
    }
}

/// Domain the listing belongs to, regardless of its priority category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainCategory {
    Ads,
    Analytics,
    CrmEmail,
    Seo,
    DevSite,
    Management,
    ContentLow,
    Other,
}

impl DomainCategory {
    pub fn from_wire(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "ads" => Self::Ads,
            "analytics" => Self::Analytics,
            "crm_email" => Self::CrmEmail,
            "seo" => Self::Seo,
            "dev_site" => Self::DevSite,
            "management" => Self::Management,
            "content_low" => Self::ContentLow,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ads => "ads",
            Self::Analytics => "analytics",
            Self::CrmEmail => "crm_email",
            Self::Seo => "seo",
            Self::DevSite => "dev_site",
            Self::Management => "management",
            Self::ContentLow => "content_low",
            Self::Other => "other",
        }
    }
}

/// Rough size bucket of the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workload {
    Tiny,
    Small,
    Medium,
    Large,
}

impl Workload {
    /// Unknown strings map to `None` rather than a bucket — a malformed
    /// workload never discards an otherwise-usable verdict.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tiny" => Some(Self::Tiny),
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// One verdict object exactly as the model emitted it. Everything is
/// optional/defaulted so that one malformed field never rejects the row.
#[derive(Debug, Deserialize)]
pub struct RawVerdict {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub fit: bool,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "domainCategory")]
    pub domain_category: Option<String>,
    #[serde(default)]
    pub workload: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// A validated verdict, pre-tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub id: String,
    pub fit: bool,
    /// Clamped to 0..=10; absent scores default to 0.
    pub score: i64,
    pub category: Category,
    pub domain_category: Option<DomainCategory>,
    pub workload: Option<Workload>,
    pub reason: String,
}

impl From<RawVerdict> for Verdict {
    fn from(raw: RawVerdict) -> Self {
        let score = raw
            .score
            .filter(|s| s.is_finite())
            .map(|s| s.round() as i64)
            .unwrap_or(0)
            .clamp(0, 10);

        Self {
            id: raw.id,
            fit: raw.fit,
            score,
            category: raw
                .category
                .as_deref()
                .map(Category::from_wire)
                .unwrap_or_default(),
            domain_category: raw.domain_category.as_deref().map(DomainCategory::from_wire),
            workload: raw.workload.as_deref().and_then(Workload::from_wire),
            reason: raw.reason.unwrap_or_default(),
        }
    }
}

/// Accepts an id as either a JSON string or a number — models are not
/// consistent about quoting numeric ids.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
