//! Batch classification. Listings go to the model in consecutive chunks;
//! each response is parsed leniently (first `[` to last `]`), every verdict
//! is matched back to its source listing by id, and unmatched verdicts are
//! dropped silently — no verdict may survive without its listing, since
//! pricing and display depend on listing fields the model does not return.

use tracing::{error, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{truncate_chars, JSON_ARRAY_ONLY};
use crate::llm_client::{extract_json_array, CompletionBackend};
use crate::models::listing::Listing;
use crate::models::verdict::{RawVerdict, Verdict};
use crate::scan::prompts::{CLASSIFY_SYSTEM, CLASSIFY_USER_HEADER};

/// Character budget for one description inside a request.
const DESCRIPTION_BUDGET: usize = 900;

/// Builds the per-listing request lines appended to the schema header.
fn batch_lines(batch: &[Listing]) -> String {
    batch
        .iter()
        .map(|p| {
            [
                format!("#id={}", p.id),
                format!("Title: {}", p.title),
                format!("Budget: {}", p.budget.raw),
                format!(
                    "Description: {}",
                    truncate_chars(&p.description, DESCRIPTION_BUDGET)
                ),
                "---".to_string(),
            ]
            .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sends one chunk to the classifier and returns the coerced verdicts.
/// A response with no decodable JSON array is fatal for the whole run.
pub async fn evaluate_batch(
    backend: &dyn CompletionBackend,
    model: &str,
    batch: &[Listing],
) -> Result<Vec<Verdict>, AppError> {
    let system = format!("{CLASSIFY_SYSTEM} {JSON_ARRAY_ONLY}");
    let user_prompt = format!("{CLASSIFY_USER_HEADER}{}", batch_lines(batch));

    let text = backend.complete(model, &system, &user_prompt).await?;

    let array = extract_json_array(&text).ok_or_else(|| {
        error!("Classifier response contained no JSON array:\n{text}");
        AppError::ModelParse("JSON array not found in model response".into())
    })?;

    let raw: Vec<RawVerdict> = serde_json::from_str(array).map_err(|e| {
        error!("Classifier response did not decode:\n{text}");
        AppError::ModelParse(format!("invalid verdict array: {e}"))
    })?;

    Ok(raw.into_iter().map(Verdict::from).collect())
}

/// Pairs verdicts with their source listings in verdict order. Verdicts
/// referencing ids outside the batch are dropped (model hallucination
/// allowance, not a defect signal).
pub fn match_verdicts<'a>(batch: &'a [Listing], verdicts: Vec<Verdict>) -> Vec<(&'a Listing, Verdict)> {
    verdicts
        .into_iter()
        .filter_map(|v| match batch.iter().find(|p| p.id == v.id) {
            Some(listing) => Some((listing, v)),
            None => {
                warn!("Dropping verdict for unknown listing id '{}'", v.id);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::models::budget::Budget;
    use crate::models::verdict::Category;
    use async_trait::async_trait;

    /// Scripted backend: returns canned responses in order.
    struct ScriptedBackend {
        responses: std::sync::Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: std::sync::Mutex::new(
                    responses.into_iter().rev().map(String::from).collect(),
                ),
            }
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(&self, _: &str, _: &str, _: &str) -> Result<String, LlmError> {
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| "[]".to_string()))
        }
    }

    fn listing(id: &str, title: &str) -> Listing {
        Listing {
            id: id.into(),
            title: title.into(),
            description: "desc".into(),
            budget: Budget::unknown(),
            status: "Триває".into(),
            accepting_bids: true,
            url: format!("https://freelancehunt.com/project/{id}.html"),
            published_at: None,
        }
    }

    #[tokio::test]
    async fn test_evaluate_batch_parses_array_with_prose() {
        let backend = ScriptedBackend::new(vec![
            "Sure, here you go:\n[{\"id\":\"1\",\"fit\":true,\"score\":8,\"category\":\"core_paid\"}]",
        ]);
        let batch = vec![listing("1", "Google Ads")];
        let verdicts = evaluate_batch(&backend, "m", &batch).await.unwrap();
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].score, 8);
        assert_eq!(verdicts[0].category, Category::CorePaid);
    }

    #[tokio::test]
    async fn test_evaluate_batch_no_array_is_fatal() {
        let backend = ScriptedBackend::new(vec!["I could not process these projects."]);
        let batch = vec![listing("1", "Google Ads")];
        let err = evaluate_batch(&backend, "m", &batch).await.unwrap_err();
        assert!(matches!(err, AppError::ModelParse(_)));
    }

    #[tokio::test]
    async fn test_evaluate_batch_undecodable_array_is_fatal() {
        let backend = ScriptedBackend::new(vec!["[{\"id\": }]"]);
        let batch = vec![listing("1", "Google Ads")];
        let err = evaluate_batch(&backend, "m", &batch).await.unwrap_err();
        assert!(matches!(err, AppError::ModelParse(_)));
    }

    #[test]
    fn test_match_verdicts_drops_unknown_ids() {
        let batch = vec![listing("1", "A"), listing("2", "B")];
        let verdicts = vec![
            Verdict {
                id: "2".into(),
                fit: true,
                score: 7,
                category: Category::Other,
                domain_category: None,
                workload: None,
                reason: String::new(),
            },
            Verdict {
                id: "999".into(),
                fit: true,
                score: 9,
                category: Category::Other,
                domain_category: None,
                workload: None,
                reason: String::new(),
            },
        ];
        let matched = match_verdicts(&batch, verdicts);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].0.id, "2");
    }

    #[test]
    fn test_batch_lines_truncate_long_descriptions() {
        let mut l = listing("1", "A");
        l.description = "x".repeat(2000);
        let lines = batch_lines(&[l]);
        assert!(lines.contains('…'));
        // header + 900 chars + ellipsis, far below the raw 2000
        assert!(lines.len() < 1100);
    }

    #[test]
    fn test_batch_lines_carry_id_title_budget() {
        let lines = batch_lines(&[listing("42", "GA4 audit")]);
        assert!(lines.contains("#id=42"));
        assert!(lines.contains("Title: GA4 audit"));
        assert!(lines.contains("Budget: unknown"));
    }
}
