//! Ranking: a total preorder over tuned records, descending desirability.
//! fit first, then adjusted score, then budget presence, then budget size.

use std::cmp::Ordering;

use crate::models::record::TunedRecord;

/// The four-key comparator. Unknown budgets lose the presence key first,
/// and count as 0 only in the final magnitude tie-break.
pub fn priority_cmp(a: &TunedRecord, b: &TunedRecord) -> Ordering {
    b.fit
        .cmp(&a.fit)
        .then_with(|| b.final_score.cmp(&a.final_score))
        .then_with(|| b.budget_uah.is_some().cmp(&a.budget_uah.is_some()))
        .then_with(|| {
            b.budget_uah
                .unwrap_or(0.0)
                .total_cmp(&a.budget_uah.unwrap_or(0.0))
        })
}

/// Sorts in place. `sort_by` is stable, so fully-equal keys keep their
/// relative input order.
pub fn sort_by_priority(records: &mut [TunedRecord]) {
    records.sort_by(priority_cmp);
}
