// Stage 1: fetch → prefilter → seen gate → batched classification →
// manual tuning → ranking → artifacts → report.
// Batches run strictly one at a time; the seen set is only flushed after
// every batch has succeeded.

pub mod classifier;
pub mod keywords;
pub mod prefilter;
pub mod prompts;
pub mod ranking;
pub mod seen;
pub mod tuning;

use std::path::Path;

use tracing::info;

use crate::artifacts;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::CompletionBackend;
use crate::marketplace::MarketplaceClient;
use crate::models::record::TunedRecord;
use crate::report;
use crate::scan::seen::{SeenSet, SEEN_FILE};

pub async fn run_scan(
    config: &Config,
    backend: &dyn CompletionBackend,
    full_mode: bool,
) -> Result<(), AppError> {
    let out_dir = Path::new(&config.output_dir);
    let mut seen = SeenSet::load(out_dir.join(SEEN_FILE));

    info!("(History) Projects already seen: {}", seen.len());
    info!(
        "Mode: {}",
        if full_mode {
            "FULL (seen history ignored for selection)"
        } else {
            "NORMAL (already-seen ids filtered out)"
        }
    );
    info!(
        "Parameters: max_projects_to_load={}, min_budget_uah={}, model={}",
        config.max_projects_to_load, config.min_budget_uah, config.model_stage1
    );

    let marketplace = MarketplaceClient::new(config.freelancehunt_token.clone());
    let all_projects = marketplace
        .fetch_projects(config.max_projects_to_load)
        .await?;

    let prefiltered = crate::scan::prefilter::prefilter(all_projects, config.min_budget_uah);
    info!("{} project(s) passed the prefilter", prefiltered.len());

    let selected: Vec<_> = if full_mode {
        prefiltered
    } else {
        prefiltered
            .into_iter()
            .filter(|p| !seen.contains(&p.id))
            .collect()
    };
    info!("{} project(s) selected for classification", selected.len());

    if selected.is_empty() {
        info!("No new projects to analyze");
        return Ok(());
    }

    let mut records: Vec<TunedRecord> = Vec::new();

    for (index, batch) in selected.chunks(config.batch_size.max(1)).enumerate() {
        info!(
            "Evaluating batch {} ({} project(s))...",
            index + 1,
            batch.len()
        );

        let verdicts =
            classifier::evaluate_batch(backend, &config.model_stage1, batch).await?;

        for (listing, verdict) in classifier::match_verdicts(batch, verdicts) {
            records.push(tuning::tune(listing, &verdict));
        }

        // Commit this batch to the in-memory set only after it parsed.
        for listing in batch {
            seen.insert(&listing.id);
        }
    }

    // Single flush at end of run — a fatal error above persists nothing.
    seen.save()?;

    ranking::sort_by_priority(&mut records);

    let timestamp = artifacts::timestamp();
    let all_path = out_dir.join(format!("results-{timestamp}.json"));
    let recommended: Vec<TunedRecord> = records.iter().filter(|r| r.fit).cloned().collect();
    let recommended_path = out_dir.join(format!(
        "{}{timestamp}.json",
        artifacts::RECOMMENDED_PREFIX
    ));

    artifacts::write_json(&all_path, &records)?;
    artifacts::write_json(&recommended_path, &recommended)?;

    report::print_scan_report(&records);

    info!("Full ranked results saved to {}", all_path.display());
    info!(
        "Recommended (fit=true) results saved to {}",
        recommended_path.display()
    );

    Ok(())
}
