use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::budget::Budget;

/// Status texts that mean the listing is no longer taking bids. Very soft
/// gate: only explicitly closed/finished listings are cut; anything
/// unrecognized passes (fail-open).
static CLOSED_STATUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)закр|closed|заверш|done|finished").expect("valid regex"));

/// A marketplace listing, immutable once fetched within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub budget: Budget,
    pub status: String,
    pub accepting_bids: bool,
    pub url: String,
    pub published_at: Option<String>,
}

/// Derives the accepting-bids flag from a raw status text.
pub fn status_accepts_bids(status: &str) -> bool {
    !CLOSED_STATUS.is_match(status)
}
