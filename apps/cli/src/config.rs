use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Built once at startup and passed by reference into every component —
/// nothing reads ambient configuration after this point.
#[derive(Debug, Clone)]
pub struct Config {
    pub freelancehunt_token: String,
    pub openai_api_key: String,
    /// Model for the stage-1 classifier (cheaper).
    pub model_stage1: String,
    /// Model for stage-2 proposal drafting.
    pub model_stage2: String,
    pub max_projects_to_load: usize,
    pub min_budget_uah: f64,
    pub batch_size: usize,
    pub base_hourly_rate_uah: f64,
    pub min_hourly_rate_uah: f64,
    pub eu_us_price_multiplier: f64,
    pub top_stage2: usize,
    pub batch_size_stage2: usize,
    /// Default domain-category allow-list for stage 2 (empty = no filter).
    pub domain_stage2: Vec<String>,
    /// Default workload allow-list for stage 2 (empty = no filter).
    pub workload_stage2: Vec<String>,
    /// Directory for result artifacts and the seen-projects file.
    pub output_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            freelancehunt_token: require_env("FREELANCEHUNT_TOKEN")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            model_stage1: env_or("OPENAI_MODEL", "gpt-5-mini"),
            model_stage2: env_or("OPENAI_MODEL_STAGE2", "gpt-5.1"),
            max_projects_to_load: parse_env("MAX_PROJECTS_TO_LOAD", 400)?,
            min_budget_uah: parse_env("MIN_BUDGET_UAH", 1000.0)?,
            batch_size: parse_env("BATCH_SIZE", 8)?,
            base_hourly_rate_uah: parse_env("BASE_HOURLY_RATE_UAH", 800.0)?,
            min_hourly_rate_uah: parse_env("MIN_HOURLY_RATE_UAH", 500.0)?,
            eu_us_price_multiplier: parse_env("EU_US_PRICE_MULTIPLIER", 1.5)?,
            top_stage2: parse_env("TOP_STAGE2", 5)?,
            batch_size_stage2: parse_env("BATCH_SIZE_STAGE2", 3)?,
            domain_stage2: csv_env("DOMAIN_STAGE2"),
            workload_stage2: csv_env("WORKLOAD_STAGE2"),
            output_dir: env_or("OUTPUT_DIR", "."),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => v
            .parse::<T>()
            .with_context(|| format!("'{key}' must be a valid number")),
        Err(_) => Ok(default),
    }
}

/// Parses a comma-separated env var into lowercase trimmed entries.
/// Absent or empty vars yield an empty list (meaning: no filter).
fn csv_env(key: &str) -> Vec<String> {
    std::env::var(key)
        .map(|v| parse_csv_list(&v))
        .unwrap_or_default()
}

pub fn parse_csv_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_list_trims_and_lowercases() {
        let parsed = parse_csv_list(" Ads, ANALYTICS ,crm_email ");
        assert_eq!(parsed, vec!["ads", "analytics", "crm_email"]);
    }

    #[test]
    fn test_parse_csv_list_drops_empty_entries() {
        let parsed = parse_csv_list("ads,,seo,");
        assert_eq!(parsed, vec!["ads", "seo"]);
    }

    #[test]
    fn test_parse_csv_list_empty_input() {
        assert!(parse_csv_list("").is_empty());
        assert!(parse_csv_list("  ,  ").is_empty());
    }
}
