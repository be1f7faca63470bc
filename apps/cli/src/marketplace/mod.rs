//! Freelancehunt project fetcher. Pages through `/v2/projects` until the
//! API reports no next page or the configured cap is reached. The wire
//! payload is treated leniently: attributes we do not recognize are
//! ignored, missing ones fall back to sensible defaults.

use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::budget::Budget;
use crate::models::listing::{status_accepts_bids, Listing};

const API_BASE: &str = "https://api.freelancehunt.com";
const PAGE_SIZE: usize = 50;

#[derive(Debug, Deserialize)]
struct ProjectsPage {
    #[serde(default)]
    data: Vec<ProjectItem>,
    #[serde(default)]
    links: PageLinks,
}

#[derive(Debug, Default, Deserialize)]
struct PageLinks {
    #[serde(default)]
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectItem {
    #[serde(deserialize_with = "crate::models::verdict::lenient_id")]
    id: String,
    #[serde(default)]
    attributes: ProjectAttributes,
    #[serde(default)]
    links: ItemLinks,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectAttributes {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    budget: Option<WireBudget>,
    #[serde(default)]
    status: Option<WireStatus>,
    #[serde(default)]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireBudget {
    #[serde(default)]
    amount: Option<f64>,
    #[serde(default)]
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireStatus {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ItemLinks {
    #[serde(default, rename = "self")]
    self_link: Option<SelfLink>,
}

/// The API has shipped both a plain URL and a `{ "web": ... }` object here.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SelfLink {
    Object { web: String },
    Plain(String),
}

pub struct MarketplaceClient {
    client: reqwest::Client,
    token: String,
}

impl MarketplaceClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            token,
        }
    }

    /// Fetches up to `limit` listings across consecutive pages. A
    /// non-success response logs status and body and terminates fetching
    /// early — already-fetched listings still proceed through the pipeline.
    pub async fn fetch_projects(&self, limit: usize) -> Result<Vec<Listing>, AppError> {
        info!("Fetching projects from Freelancehunt...");
        let mut listings: Vec<Listing> = Vec::new();
        let mut page = 1u32;
        let mut has_next = true;

        while listings.len() < limit && has_next {
            let url =
                format!("{API_BASE}/v2/projects?page[number]={page}&page[size]={PAGE_SIZE}");

            let response = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .header("accept", "application/json")
                .send()
                .await
                .map_err(|e| AppError::Marketplace(format!("request failed: {e}")))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!("Freelancehunt returned {}: {}", status, body);
                break;
            }

            let parsed: ProjectsPage = response
                .json()
                .await
                .map_err(|e| AppError::Marketplace(format!("invalid response body: {e}")))?;

            listings.extend(parsed.data.into_iter().map(map_listing));

            has_next = parsed.links.next.is_some();
            page += 1;
        }

        listings.truncate(limit);
        info!("Fetched {} projects across {} page(s)", listings.len(), page - 1);
        Ok(listings)
    }
}

fn map_listing(item: ProjectItem) -> Listing {
    let id = item.id;
    let attrs = item.attributes;

    let title = attrs
        .name
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| format!("Untitled #{id}"));
    let description = attrs.description.unwrap_or_default();

    let budget = match attrs.budget {
        Some(b) => Budget::normalize(b.amount, b.currency.as_deref()),
        None => Budget::unknown(),
    };

    let status = attrs
        .status
        .and_then(|s| s.name)
        .unwrap_or_default()
        .trim()
        .to_string();
    let accepting_bids = status_accepts_bids(&status);

    let url = match item.links.self_link {
        Some(SelfLink::Object { web }) => web,
        Some(SelfLink::Plain(url)) => url,
        None => format!("https://freelancehunt.com/project/{id}.html"),
    };

    Listing {
        id,
        title,
        description,
        budget,
        status,
        accepting_bids,
        url,
        published_at: attrs.published_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_from(json: &str) -> ProjectItem {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_map_full_item() {
        let item = item_from(
            r#"{
                "id": 123,
                "attributes": {
                    "name": "Google Shopping feed setup",
                    "description": "Need PMax feed work",
                    "budget": {"amount": 5000, "currency": "UAH"},
                    "status": {"name": "Триває"},
                    "published_at": "2026-08-01T10:00:00+03:00"
                },
                "links": {"self": {"web": "https://freelancehunt.com/project/123.html"}}
            }"#,
        );
        let listing = map_listing(item);
        assert_eq!(listing.id, "123");
        assert_eq!(listing.title, "Google Shopping feed setup");
        assert_eq!(listing.budget.uah, Some(5000.0));
        assert!(listing.accepting_bids);
        assert_eq!(listing.url, "https://freelancehunt.com/project/123.html");
    }

    #[test]
    fn test_map_sparse_item_falls_back() {
        let item = item_from(r#"{"id": "77"}"#);
        let listing = map_listing(item);
        assert_eq!(listing.title, "Untitled #77");
        assert_eq!(listing.description, "");
        assert_eq!(listing.budget.uah, None);
        assert!(listing.accepting_bids);
        assert_eq!(listing.url, "https://freelancehunt.com/project/77.html");
    }

    #[test]
    fn test_closed_status_clears_accepting_bids() {
        let item = item_from(
            r#"{"id": 1, "attributes": {"status": {"name": "Проєкт закрито"}}}"#,
        );
        assert!(!map_listing(item).accepting_bids);
    }

    #[test]
    fn test_plain_self_link_accepted() {
        let item = item_from(
            r#"{"id": 2, "links": {"self": "https://freelancehunt.com/project/2.html"}}"#,
        );
        assert_eq!(
            map_listing(item).url,
            "https://freelancehunt.com/project/2.html"
        );
    }

    #[test]
    fn test_page_without_next_link_stops_pagination() {
        let page: ProjectsPage = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(page.links.next.is_none());
    }
}
