use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "leadscout", version, about = "Freelance-project scout for a marketer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch, filter, score and rank marketplace listings (stage 1)
    Scan {
        /// Ignore the seen-projects history when selecting listings.
        /// The history is still updated at the end of the run.
        #[arg(long)]
        full: bool,
    },
    /// Draft proposals and estimates for recommended listings (stage 2)
    Propose {
        /// Recommended-results file to read; defaults to the latest one
        /// in the output directory
        #[arg(long)]
        file: Option<PathBuf>,
        /// Cap on the number of records to draft (ignored with --ids)
        #[arg(long)]
        top: Option<usize>,
        /// Comma-separated listing ids; bypasses --top
        #[arg(long, value_delimiter = ',')]
        ids: Option<Vec<String>>,
        /// Comma-separated domain-category allow-list
        #[arg(long, value_delimiter = ',')]
        domain: Option<Vec<String>>,
        /// Comma-separated workload allow-list
        #[arg(long, value_delimiter = ',')]
        workload: Option<Vec<String>>,
        /// Records per model request
        #[arg(long = "batch-size")]
        batch_size: Option<usize>,
    },
}
