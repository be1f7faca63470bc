//! Manual priority tuning — deterministic post-processing of the
//! classifier's verdict. Merchant/Shopping work gets boosted, manager
//! roles get demoted a notch, and a few category calls are overridden by
//! local rules. The explicit field-by-field merge here is the only place a
//! `TunedRecord` is created, so every field's provenance (model-supplied,
//! locally computed, defaulted) is visible in one function.

use crate::models::listing::Listing;
use crate::models::record::TunedRecord;
use crate::models::verdict::{Category, DomainCategory, Verdict};
use crate::scan::keywords::{CATALOG_FILL, MANAGERIAL_SIGNAL, MERCHANT_SIGNAL, SITE_BUILD_SIGNAL};

/// Merges one listing with its verdict and applies the override rules.
pub fn tune(listing: &Listing, verdict: &Verdict) -> TunedRecord {
    let text_all = format!(
        "{}\n{}\n{}",
        listing.title, listing.description, verdict.reason
    )
    .to_lowercase();

    let is_merchant = MERCHANT_SIGNAL.is_match(&text_all);
    // Title only — incidental description mentions must not demote.
    let is_managerial = MANAGERIAL_SIGNAL.is_match(&listing.title.to_lowercase());
    let is_cards = CATALOG_FILL.is_match(&text_all);
    let is_site_build = SITE_BUILD_SIGNAL.is_match(&text_all);

    let mut final_score = verdict.score;

    // Boost Merchant / Shopping / PMax. Monotonic and capped: scores that
    // are already 9+ stay put, so reapplying the rule changes nothing.
    if is_merchant && verdict.fit && final_score < 9 {
        final_score = (final_score + 2).min(10);
    }

    // Demote manager roles, but never below medium fit.
    if is_managerial && verdict.fit {
        final_score = (final_score - 1).max(5);
    }

    // Category overrides, in precedence order: catalog-fill wins outright;
    // site-build only fills in an unspecific "other"; managerial last.
    let category = if is_cards {
        Category::LowPriorityCards
    } else if is_site_build && verdict.category == Category::Other {
        Category::SiteFull
    } else if is_managerial {
        Category::Managerial
    } else {
        verdict.category
    };

    // Domain stays the model's call; backfill only when it was omitted.
    let domain_category = verdict.domain_category.or({
        if is_merchant {
            Some(DomainCategory::Ads)
        } else if is_site_build {
            Some(DomainCategory::DevSite)
        } else if is_managerial {
            Some(DomainCategory::Management)
        } else {
            None
        }
    });

    TunedRecord {
        id: listing.id.clone(),
        title: listing.title.clone(),
        description: listing.description.clone(),
        url: listing.url.clone(),
        budget_str: listing.budget.raw.clone(),
        budget_uah: listing.budget.uah,
        fit: verdict.fit,
        score: verdict.score,
        final_score,
        category,
        domain_category,
        workload: verdict.workload,
        reason: verdict.reason.clone(),
        is_merchant,
        is_managerial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::budget::Budget;
    use crate::models::listing::status_accepts_bids;
    use crate::models::verdict::Workload;

    fn listing(id: &str, title: &str, description: &str, budget: Budget, status: &str) -> Listing {
        Listing {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            budget,
            status: status.into(),
            accepting_bids: status_accepts_bids(status),
            url: String::new(),
            published_at: None,
        }
    }

    fn verdict(fit: bool, score: i64, category: Category) -> Verdict {
        Verdict {
            id: "1".into(),
            fit,
            score,
            category,
            domain_category: None,
            workload: Some(Workload::Small),
            reason: String::new(),
        }
    }

    #[test]
    fn test_merchant_boost_scenario_a() {
        // Scenario A: Shopping feed listing, fit, score 8 → finalScore 10.
        let l = listing(
            "1",
            "Google Shopping feed setup",
            "",
            Budget::normalize(Some(5000.0), Some("UAH")),
            "Триває",
        );
        let tuned = tune(&l, &verdict(true, 8, Category::CorePaid));
        assert_eq!(tuned.final_score, 10);
        assert_eq!(tuned.category, Category::CorePaid);
        assert!(tuned.is_merchant);
        assert_eq!(tuned.score, 8); // raw score retained
    }

    #[test]
    fn test_merchant_boost_skipped_at_nine_and_above() {
        let l = listing("1", "merchant center audit", "", Budget::unknown(), "Триває");
        assert_eq!(tune(&l, &verdict(true, 9, Category::CorePaid)).final_score, 9);
        assert_eq!(tune(&l, &verdict(true, 10, Category::CorePaid)).final_score, 10);
    }

    #[test]
    fn test_merchant_boost_requires_fit() {
        let l = listing("1", "google shopping", "", Budget::unknown(), "Триває");
        assert_eq!(tune(&l, &verdict(false, 4, Category::Other)).final_score, 4);
    }

    #[test]
    fn test_merchant_boost_never_decreases_score() {
        let l = listing("1", "pmax setup", "", Budget::unknown(), "Триває");
        for score in 0..=10 {
            let tuned = tune(&l, &verdict(true, score, Category::CorePaid));
            assert!(tuned.final_score >= score);
        }
    }

    #[test]
    fn test_managerial_demotion_scenario_b() {
        // Scenario B: manager role, fit, score 7 → finalScore 6, managerial.
        let l = listing("2", "Marketing Manager needed", "", Budget::unknown(), "Відкритий");
        let tuned = tune(&l, &verdict(true, 7, Category::Other));
        assert_eq!(tuned.final_score, 6);
        assert_eq!(tuned.category, Category::Managerial);
        assert!(tuned.is_managerial);
    }

    #[test]
    fn test_managerial_demotion_floored_at_five() {
        let l = listing("2", "Marketing Manager", "", Budget::unknown(), "Триває");
        assert_eq!(tune(&l, &verdict(true, 5, Category::Other)).final_score, 5);
        // Below the floor the demotion actually raises — bounded, by rule.
        assert_eq!(tune(&l, &verdict(true, 3, Category::Other)).final_score, 5);
    }

    #[test]
    fn test_managerial_signal_ignores_description_mentions() {
        let l = listing(
            "3",
            "Google Ads setup",
            "You will report to our marketing manager",
            Budget::unknown(),
            "Триває",
        );
        let tuned = tune(&l, &verdict(true, 8, Category::CorePaid));
        assert!(!tuned.is_managerial);
        assert_eq!(tuned.final_score, 8);
    }

    #[test]
    fn test_catalog_fill_override_wins_over_managerial() {
        let l = listing(
            "4",
            "Content Manager: наповнення карток товарів",
            "",
            Budget::unknown(),
            "Триває",
        );
        let tuned = tune(&l, &verdict(true, 6, Category::Managerial));
        assert_eq!(tuned.category, Category::LowPriorityCards);
    }

    #[test]
    fn test_catalog_fill_category_is_idempotent() {
        let l = listing("4", "наповнення карток товарів", "", Budget::unknown(), "Триває");
        let first = tune(&l, &verdict(true, 5, Category::Other));
        assert_eq!(first.category, Category::LowPriorityCards);
        let again = tune(&l, &verdict(true, 5, first.category));
        assert_eq!(again.category, Category::LowPriorityCards);
    }

    #[test]
    fn test_site_build_only_replaces_other() {
        let l = listing(
            "5",
            "Створення інтернет-магазину",
            "",
            Budget::unknown(),
            "Триває",
        );
        let from_other = tune(&l, &verdict(true, 6, Category::Other));
        assert_eq!(from_other.category, Category::SiteFull);
        // A more specific classifier category is not overridden.
        let specific = tune(&l, &verdict(true, 6, Category::CorePaid));
        assert_eq!(specific.category, Category::CorePaid);
    }

    #[test]
    fn test_domain_backfill_priority_order() {
        // merchant → ads even when site-build also matches
        let both = listing(
            "6",
            "Створення сайту + google shopping feed",
            "",
            Budget::unknown(),
            "Триває",
        );
        let tuned = tune(&both, &verdict(true, 7, Category::Other));
        assert_eq!(tuned.domain_category, Some(DomainCategory::Ads));

        let manager = listing("7", "Lead Generation Manager", "", Budget::unknown(), "Триває");
        let tuned = tune(&manager, &verdict(true, 7, Category::Other));
        assert_eq!(tuned.domain_category, Some(DomainCategory::Management));
    }

    #[test]
    fn test_domain_from_model_never_overwritten() {
        let l = listing("8", "google shopping feed", "", Budget::unknown(), "Триває");
        let mut v = verdict(true, 7, Category::CorePaid);
        v.domain_category = Some(DomainCategory::Analytics);
        let tuned = tune(&l, &v);
        assert_eq!(tuned.domain_category, Some(DomainCategory::Analytics));
    }

    #[test]
    fn test_final_score_always_within_bounds() {
        let merchant = listing("9", "pmax + manager", "", Budget::unknown(), "Триває");
        for fit in [true, false] {
            for score in 0..=10 {
                let tuned = tune(&merchant, &verdict(fit, score, Category::Other));
                assert!((0..=10).contains(&tuned.final_score));
            }
        }
    }
}
