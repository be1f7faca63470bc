mod artifacts;
mod cli;
mod config;
mod errors;
mod llm_client;
mod marketplace;
mod models;
mod propose;
mod report;
mod scan;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::propose::ProposeArgs;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Load configuration first — missing credentials abort before any
    // network activity.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting leadscout v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.openai_api_key.clone());

    match args.command {
        Command::Scan { full } => {
            info!("LLM model (stage 1): {}", config.model_stage1);
            scan::run_scan(&config, &llm, full).await?;
        }
        Command::Propose {
            file,
            top,
            ids,
            domain,
            workload,
            batch_size,
        } => {
            info!("LLM model (stage 2): {}", config.model_stage2);
            // CLI lists arrive pre-split by clap; normalize like the env
            // defaults so filters compare on lowercase wire names.
            let normalize = |list: Option<Vec<String>>| {
                list.map(|items| {
                    items
                        .iter()
                        .flat_map(|item| config::parse_csv_list(item))
                        .collect::<Vec<_>>()
                })
            };
            propose::run_propose(
                &config,
                &llm,
                ProposeArgs {
                    file,
                    top,
                    ids,
                    domain: normalize(domain),
                    workload: normalize(workload),
                    batch_size,
                },
            )
            .await?;
        }
    }

    Ok(())
}
