//! Remote trivia source client.
//! Talks to a jservice-style API over HTTPS: a paged category listing plus a
//! per-category clue fetch. Network errors are retried a bounded number of
//! times before the call fails; a failed call never yields partial data.
//! Latency: one round-trip per call, network dependent.

use crate::error::TriviaError;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://jservice.io/api";
const MAX_API_RETRIES: u32 = 2; // Retries for network/API errors
const TIMEOUT_SECS: u64 = 10;

// *************** Wire Types ***************

/// One entry of the catalog listing.
#[derive(Clone, Debug, Deserialize)]
pub struct CategorySummary {
    pub id: u64,
    pub title: String,
}

/// Full clue data for one category. The API may return fewer or more clues
/// than a board column holds; the assembler shapes it afterwards.
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryDetail {
    pub id: u64,
    pub title: String,
    pub clues: Vec<ClueEntry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClueEntry {
    pub question: String,
    pub answer: String,
}

// *************** Source Contract ***************

/// The two remote calls the assembler relies on. Implemented by
/// `JServiceClient` against the real API and by in-memory fakes in tests.
pub trait TriviaSource {
    /// Returns up to `count` category summaries starting at `offset`.
    async fn list_categories(
        &self,
        count: usize,
        offset: usize,
    ) -> Result<Vec<CategorySummary>, TriviaError>;

    /// Returns the full clue data for one category.
    async fn get_category(&self, id: u64) -> Result<CategoryDetail, TriviaError>;
}

// *************** HTTP Client ***************

pub struct JServiceClient {
    client: Client,
    base_url: String,
}

impl JServiceClient {
    pub fn new(base_url: &str) -> Result<Self, TriviaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TriviaError> {
        let mut last_error = None;

        for attempt in 1..=MAX_API_RETRIES + 1 {
            match self.try_get_json(url).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("GET {url} attempt {attempt}/{} failed: {e}", MAX_API_RETRIES + 1);
                    last_error = Some(e);
                    if attempt <= MAX_API_RETRIES {
                        tokio::time::sleep(Duration::from_millis(500)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    async fn try_get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TriviaError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(TriviaError::SourceUnavailable(format!(
                "API error {} for {url}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

impl TriviaSource for JServiceClient {
    async fn list_categories(
        &self,
        count: usize,
        offset: usize,
    ) -> Result<Vec<CategorySummary>, TriviaError> {
        let url = format!("{}/categories?count={count}&offset={offset}", self.base_url);
        self.get_json(&url).await
    }

    async fn get_category(&self, id: u64) -> Result<CategoryDetail, TriviaError> {
        let url = format!("{}/category?id={id}", self.base_url);
        self.get_json(&url).await
    }
}

// *************** Tests ***************

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_category_listing() {
        // Extra fields like clues_count are present on the wire and ignored.
        let json = r#"[
            {"id": 11496, "title": "top of the charts", "clues_count": 5},
            {"id": 11497, "title": "books & authors", "clues_count": 10}
        ]"#;
        let listing: Vec<CategorySummary> = serde_json::from_str(json).unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].id, 11496);
        assert_eq!(listing[1].title, "books & authors");
    }

    #[test]
    fn test_decode_category_detail() {
        let json = r#"{
            "id": 21,
            "title": "math",
            "clues_count": 2,
            "clues": [
                {"id": 1, "question": "2+2", "answer": "4", "value": 200, "airdate": "2014-02-04"},
                {"id": 2, "question": "1+1", "answer": "2", "value": 400, "airdate": "2014-02-04"}
            ]
        }"#;
        let detail: CategoryDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id, 21);
        assert_eq!(detail.title, "math");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[0].question, "2+2");
        assert_eq!(detail.clues[1].answer, "2");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = JServiceClient::new("http://localhost:3000/api/").unwrap();
        assert_eq!(client.base_url, "http://localhost:3000/api");
    }

    #[tokio::test]
    #[ignore = "requires network access to the trivia API"]
    async fn test_live_list_categories() {
        // Run with: cargo test test_live_list_categories -- --ignored
        let client = JServiceClient::new(DEFAULT_API_URL).unwrap();
        let listing = client.list_categories(6, 0).await.unwrap();
        assert!(!listing.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires network access to the trivia API"]
    async fn test_live_get_category() {
        let client = JServiceClient::new(DEFAULT_API_URL).unwrap();
        let listing = client.list_categories(1, 0).await.unwrap();
        let detail = client.get_category(listing[0].id).await.unwrap();
        assert_eq!(detail.id, listing[0].id);
    }
}
