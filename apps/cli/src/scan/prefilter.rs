//! Deterministic keyword prefilter. Exists purely to cut down expensive
//! classifier calls, so it is permissive by design: the classifier, not
//! this filter, is the authority on fit.

use crate::models::listing::Listing;
use crate::scan::keywords::{
    CATALOG_CONTEXT, CATALOG_FILL, HIGH_PRIORITY_KEYWORDS, LOW_PRIORITY_EXCLUDE_KEYWORDS,
    RESCUE_TERMS,
};

/// Applies the four gates (status, exclusion-with-rescue, relevance,
/// minimum budget) in order, preserving the input ordering.
pub fn prefilter(listings: Vec<Listing>, min_budget_uah: f64) -> Vec<Listing> {
    listings
        .into_iter()
        .filter(|p| passes(p, min_budget_uah))
        .collect()
}

fn passes(listing: &Listing, min_budget_uah: f64) -> bool {
    // Gate 1: only explicitly closed listings are cut.
    if !listing.accepting_bids {
        return false;
    }

    let text = format!("{} \n {}", listing.title, listing.description).to_lowercase();

    // Pure catalog-fill: catalog terms without any ads/analytics/CRM
    // context. Kept on purpose — surfaced at low priority for review.
    let is_pure_catalog = CATALOG_FILL.is_match(&text) && !CATALOG_CONTEXT.is_match(&text);

    // Gate 2: low-value keyword without a rescue term.
    let has_bad_keyword = LOW_PRIORITY_EXCLUDE_KEYWORDS.iter().any(|k| text.contains(k));
    if has_bad_keyword && !RESCUE_TERMS.is_match(&text) {
        return false;
    }

    // Gate 3: at least one relevant keyword, or pure catalog-fill.
    let has_good_keyword = HIGH_PRIORITY_KEYWORDS.iter().any(|k| text.contains(k));
    if !has_good_keyword && !is_pure_catalog {
        return false;
    }

    // Gate 4: budget is either sufficient or not stated at all.
    listing.budget.uah.map_or(true, |uah| uah >= min_budget_uah)
}
