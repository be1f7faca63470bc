// Stage 2: load a recommended artifact → local selection → batched
// drafting → estimate completion and EU/US re-pricing → artifact + report.

pub mod drafter;
pub mod pricing;
pub mod prompts;
pub mod selection;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::artifacts;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::CompletionBackend;
use crate::models::proposal::ProposalRecord;
use crate::report;
use crate::propose::selection::SelectionArgs;

/// CLI-level inputs for a propose run; unset fields fall back to config.
#[derive(Debug, Default)]
pub struct ProposeArgs {
    pub file: Option<PathBuf>,
    pub top: Option<usize>,
    pub ids: Option<Vec<String>>,
    pub domain: Option<Vec<String>>,
    pub workload: Option<Vec<String>>,
    pub batch_size: Option<usize>,
}

pub async fn run_propose(
    config: &Config,
    backend: &dyn CompletionBackend,
    args: ProposeArgs,
) -> Result<(), AppError> {
    let out_dir = Path::new(&config.output_dir);

    let input_path = match args.file {
        Some(path) => path,
        None => artifacts::latest_recommended(out_dir)?.ok_or_else(|| {
            AppError::Config(format!(
                "No {}*.json files found in {} — run a scan first or pass --file",
                artifacts::RECOMMENDED_PREFIX,
                out_dir.display()
            ))
        })?,
    };
    info!("Input file: {}", input_path.display());

    let all_records = artifacts::load_records(&input_path)?;
    info!("{} recommended record(s) in the file", all_records.len());

    let selection = SelectionArgs {
        ids: args.ids,
        domain: args.domain.unwrap_or_else(|| config.domain_stage2.clone()),
        workload: args
            .workload
            .unwrap_or_else(|| config.workload_stage2.clone()),
        top: args.top.unwrap_or(config.top_stage2),
    };
    let selected = selection::select(all_records, &selection);

    if selected.is_empty() {
        info!("Nothing left after filtering");
        return Ok(());
    }

    let batch_size = args.batch_size.unwrap_or(config.batch_size_stage2).max(1);
    info!(
        "Drafting proposals for {} record(s) (batch_size={batch_size})",
        selected.len()
    );

    let system = prompts::draft_system(config.base_hourly_rate_uah, config.min_hourly_rate_uah);
    let user_header =
        prompts::draft_user_header(config.base_hourly_rate_uah, config.min_hourly_rate_uah);

    let mut proposals: Vec<ProposalRecord> = Vec::new();

    for (index, batch) in selected.chunks(batch_size).enumerate() {
        info!(
            "Drafting batch {} ({} record(s))...",
            index + 1,
            batch.len()
        );

        let raw = drafter::draft_batch(
            backend,
            &config.model_stage2,
            &system,
            &user_header,
            batch,
        )
        .await?;

        for (record, item) in drafter::match_proposals(batch, raw) {
            let estimate = pricing::complete_estimate(
                item.estimate,
                config.base_hourly_rate_uah,
                config.eu_us_price_multiplier,
            );
            proposals.push(ProposalRecord {
                id: record.id.clone(),
                title: record.title.clone(),
                description: record.description.clone(),
                url: record.url.clone(),
                category: record.category,
                domain_category: record.domain_category,
                workload: record.workload,
                final_score: record.final_score,
                budget_str: record.budget_str.clone(),
                budget_uah: record.budget_uah,
                reason: record.reason.clone(),
                proposal: item.proposal,
                estimate,
            });
        }
    }

    let out_path = out_dir.join(format!("proposals-{}.json", artifacts::timestamp()));
    artifacts::write_json(&out_path, &proposals)?;
    info!(
        "Saved {} proposal(s) to {}",
        proposals.len(),
        out_path.display()
    );

    report::print_proposal_report(&proposals, config.eu_us_price_multiplier);

    Ok(())
}
