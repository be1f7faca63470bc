//! Local selection of stage-1 records for drafting. Explicit ids bypass
//! the count cap; the domain/workload allow-lists and the cap only apply
//! when no ids were given.

use std::collections::HashSet;

use crate::models::record::TunedRecord;

#[derive(Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Explicit listing ids. When present, the `top` cap does not apply.
    pub ids: Option<Vec<String>>,
    /// Domain-category allow-list (wire names, lowercase). Empty = no filter.
    pub domain: Vec<String>,
    /// Workload allow-list (wire names, lowercase). Empty = no filter.
    pub workload: Vec<String>,
    /// Cap on the number of records when no ids were given. 0 = no cap.
    pub top: usize,
}

pub fn select(records: Vec<TunedRecord>, args: &SelectionArgs) -> Vec<TunedRecord> {
    let mut result: Vec<TunedRecord> = records.into_iter().filter(|r| r.fit).collect();

    if !args.domain.is_empty() {
        let set: HashSet<&str> = args.domain.iter().map(String::as_str).collect();
        result.retain(|r| {
            r.domain_category
                .map(|d| set.contains(d.as_str()))
                .unwrap_or(false)
        });
    }

    if !args.workload.is_empty() {
        let set: HashSet<&str> = args.workload.iter().map(String::as_str).collect();
        result.retain(|r| r.workload.map(|w| set.contains(w.as_str())).unwrap_or(false));
    }

    match &args.ids {
        Some(ids) if !ids.is_empty() => {
            let set: HashSet<&str> = ids.iter().map(String::as_str).collect();
            result.retain(|r| set.contains(r.id.as_str()));
        }
        _ => {
            if args.top > 0 && result.len() > args.top {
                result.truncate(args.top);
            }
        }
    }

    result
}
