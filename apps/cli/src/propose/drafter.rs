//! Stage-2 drafting: one model call per chunk, lenient array parse, id
//! matching with the same silent-drop rule as the classifier.

use tracing::{error, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::truncate_chars;
use crate::llm_client::{extract_json_array, CompletionBackend};
use crate::models::proposal::RawProposal;
use crate::models::record::TunedRecord;

/// Character budget for one description inside a drafting request.
const DESCRIPTION_BUDGET: usize = 900;

fn batch_lines(batch: &[TunedRecord]) -> String {
    batch
        .iter()
        .map(|r| {
            [
                format!("#id={}", r.id),
                format!("Title: {}", r.title),
                format!("AI category: {}", r.category.as_str()),
                format!(
                    "Domain category: {}",
                    r.domain_category.map(|d| d.as_str()).unwrap_or("-")
                ),
                format!(
                    "Workload: {}",
                    r.workload.map(|w| w.as_str()).unwrap_or("-")
                ),
                format!("Score: {}", r.final_score),
                format!(
                    "Budget: {} (~{} UAH)",
                    r.budget_str,
                    r.budget_uah
                        .map(|u| u.to_string())
                        .unwrap_or_else(|| "unknown".to_string())
                ),
                format!("URL: {}", r.url),
                format!(
                    "Description: {}",
                    truncate_chars(&r.description, DESCRIPTION_BUDGET)
                ),
                "---".to_string(),
            ]
            .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sends one chunk to the drafter model. Parse failures are fatal for the
/// run, same as stage 1.
pub async fn draft_batch(
    backend: &dyn CompletionBackend,
    model: &str,
    system: &str,
    user_header: &str,
    batch: &[TunedRecord],
) -> Result<Vec<RawProposal>, AppError> {
    let user_prompt = format!("{user_header}{}", batch_lines(batch));

    let text = backend.complete(model, system, &user_prompt).await?;

    let array = extract_json_array(&text).ok_or_else(|| {
        error!("Drafter response contained no JSON array:\n{text}");
        AppError::ModelParse("JSON array not found in model response".into())
    })?;

    let proposals: Vec<RawProposal> = serde_json::from_str(array).map_err(|e| {
        error!("Drafter response did not decode:\n{text}");
        AppError::ModelParse(format!("invalid proposal array: {e}"))
    })?;

    Ok(proposals)
}

/// Pairs proposals with their source records; unknown ids are dropped.
pub fn match_proposals<'a>(
    batch: &'a [TunedRecord],
    proposals: Vec<RawProposal>,
) -> Vec<(&'a TunedRecord, RawProposal)> {
    proposals
        .into_iter()
        .filter_map(|p| match batch.iter().find(|r| r.id == p.id) {
            Some(record) => Some((record, p)),
            None => {
                warn!("Dropping proposal for unknown listing id '{}'", p.id);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::models::verdict::{Category, DomainCategory, Workload};
    use async_trait::async_trait;

    struct FixedBackend(String);

    #[async_trait]
    impl CompletionBackend for FixedBackend {
        async fn complete(&self, _: &str, _: &str, _: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    fn record(id: &str) -> TunedRecord {
        TunedRecord {
            id: id.into(),
            title: "GA4 audit".into(),
            description: "Set up GA4 events".into(),
            url: format!("https://freelancehunt.com/project/{id}.html"),
            budget_str: "5000 UAH".into(),
            budget_uah: Some(5000.0),
            fit: true,
            score: 8,
            final_score: 8,
            category: Category::CorePaid,
            domain_category: Some(DomainCategory::Analytics),
            workload: Some(Workload::Small),
            reason: String::new(),
            is_merchant: false,
            is_managerial: false,
        }
    }

    #[tokio::test]
    async fn test_draft_batch_parses_proposals() {
        let backend = FixedBackend(
            r#"[{"id":"1","proposal":"Hi","estimate":{"hours_min":2,"hours_max":4}}]"#.into(),
        );
        let batch = vec![record("1")];
        let proposals = draft_batch(&backend, "m", "sys", "header\n", &batch)
            .await
            .unwrap();
        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].proposal, "Hi");
        assert_eq!(proposals[0].estimate.hours_min, Some(2.0));
    }

    #[tokio::test]
    async fn test_draft_batch_parse_failure_is_fatal() {
        let backend = FixedBackend("Sorry, I cannot help with that.".into());
        let batch = vec![record("1")];
        let err = draft_batch(&backend, "m", "sys", "header\n", &batch)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ModelParse(_)));
    }

    #[test]
    fn test_match_proposals_drops_unknown_ids() {
        let batch = vec![record("1")];
        let proposals: Vec<RawProposal> = serde_json::from_str(
            r#"[{"id":"1","proposal":"a"},{"id":"999","proposal":"b"}]"#,
        )
        .unwrap();
        let matched = match_proposals(&batch, proposals);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].1.proposal, "a");
    }

    #[test]
    fn test_batch_lines_carry_stage1_context() {
        let lines = batch_lines(&[record("42")]);
        assert!(lines.contains("#id=42"));
        assert!(lines.contains("AI category: core_paid"));
        assert!(lines.contains("Domain category: analytics"));
        assert!(lines.contains("Workload: small"));
        assert!(lines.contains("Budget: 5000 UAH (~5000 UAH)"));
    }
}
