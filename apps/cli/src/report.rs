//! Operator-facing console report. This goes to stdout on purpose — the
//! report is the product of a run, while `tracing` carries diagnostics.

use crate::models::proposal::ProposalRecord;
use crate::models::record::TunedRecord;
use crate::models::verdict::Category;
use crate::scan::ranking::sort_by_priority;

fn domain_str(record: &TunedRecord) -> &str {
    record.domain_category.map(|d| d.as_str()).unwrap_or("-")
}

fn workload_str(record: &TunedRecord) -> &str {
    record.workload.map(|w| w.as_str()).unwrap_or("-")
}

fn print_group_entry(record: &TunedRecord, marker: &str) {
    println!("[{}/10] {} ID: {}", record.final_score, marker, record.id);
    println!(
        "Domain: {} | Workload: {}",
        domain_str(record),
        workload_str(record)
    );
    println!("Title: {}", record.title);
    println!("Budget: {}", record.budget_str);
    println!("Link: {}", record.url);
    if !record.reason.is_empty() {
        println!("Reason: {}", record.reason);
    }
    println!("---");
}

/// Full stage-1 report: the model feedback dump for everything that
/// reached the classifier, then the grouped recommendations.
pub fn print_scan_report(records: &[TunedRecord]) {
    println!("\n=== MODEL FEEDBACK FOR ALL PROJECTS SENT TO THE CLASSIFIER ===\n");
    for r in records {
        let flag = if r.is_merchant {
            " [Merchant/Shopping ↑]"
        } else if r.is_managerial {
            " [Manager role ↓]"
        } else {
            ""
        };
        println!("#id={}", r.id);
        println!("[fit={} | score={}/10]{}", r.fit, r.final_score, flag);
        println!(
            "Category: {} | Domain: {} | Workload: {}",
            r.category.as_str(),
            domain_str(r),
            workload_str(r)
        );
        println!("Title: {}", r.title);
        println!("Budget: {}", r.budget_str);
        println!("Link: {}", r.url);
        if !r.reason.is_empty() {
            println!("Reason: {}", r.reason);
        }
        println!("---");
    }

    let (with_budget, no_budget, site_builds, catalog_fill) = group_records(records);

    if !with_budget.is_empty() {
        println!("\n=== RECOMMENDED PROJECTS WITH A BUDGET (top priority) ===\n");
        for r in &with_budget {
            print_group_entry(r, "✅");
        }
    }

    if !no_budget.is_empty() {
        println!("\n=== RECOMMENDED PROJECTS WITHOUT A STATED BUDGET (top priority) ===\n");
        for r in &no_budget {
            print_group_entry(r, "✅");
        }
    }

    if !site_builds.is_empty() {
        println!("\n=== SEPARATE: FULL SITE / STORE BUILDS (worth a look) ===\n");
        for r in &site_builds {
            print_group_entry(r, "🧩");
        }
    }

    if !catalog_fill.is_empty() {
        println!("\n=== LOW PRIORITY: CATALOG / PRODUCT-CARD FILLING ===\n");
        for r in &catalog_fill {
            print_group_entry(r, "⚠️");
        }
    }
}

type Groups = (
    Vec<TunedRecord>,
    Vec<TunedRecord>,
    Vec<TunedRecord>,
    Vec<TunedRecord>,
);

/// Splits records into the display groups: recommended-with-budget,
/// recommended-without-budget, site builds, catalog-fill. Unfit records
/// only surface in the catalog-fill group.
fn group_records(records: &[TunedRecord]) -> Groups {
    let mut with_budget = Vec::new();
    let mut no_budget = Vec::new();
    let mut site_builds = Vec::new();
    let mut catalog_fill = Vec::new();

    for r in records {
        if r.category == Category::LowPriorityCards {
            catalog_fill.push(r.clone());
            continue;
        }
        if !r.fit {
            continue;
        }
        if r.category == Category::SiteFull {
            site_builds.push(r.clone());
            continue;
        }
        if r.budget_uah.is_some() {
            with_budget.push(r.clone());
        } else {
            no_budget.push(r.clone());
        }
    }

    for group in [
        &mut with_budget,
        &mut no_budget,
        &mut site_builds,
        &mut catalog_fill,
    ] {
        sort_by_priority(group);
    }

    (with_budget, no_budget, site_builds, catalog_fill)
}

/// Stage-2 report: one block per drafted proposal.
pub fn print_proposal_report(proposals: &[ProposalRecord], eu_us_multiplier: f64) {
    for p in proposals {
        println!("========================================");
        println!(
            "ID: {} | score={} | domain={} | workload={}",
            p.id,
            p.final_score,
            p.domain_category.map(|d| d.as_str()).unwrap_or("-"),
            p.workload.map(|w| w.as_str()).unwrap_or("-")
        );
        println!("Title: {}", p.title);
        println!("URL: {}", p.url);
        println!("Budget on platform: {}", p.budget_str);
        if let (Some(h_min), Some(h_max)) = (p.estimate.hours_min, p.estimate.hours_max) {
            println!(
                "UA: {}-{} h, ~{}-{} UAH",
                h_min,
                h_max,
                p.estimate.total_min_uah.unwrap_or(0.0),
                p.estimate.total_max_uah.unwrap_or(0.0)
            );
            println!(
                "EU/US (x{}): ~{}-{} UAH",
                eu_us_multiplier,
                p.estimate.total_min_eu_us.unwrap_or(0.0),
                p.estimate.total_max_eu_us.unwrap_or(0.0)
            );
        }
        println!("\nProposal draft:\n");
        println!("{}", p.proposal);
        println!();
    }
}
