//! PubMed E-utilities client.
//!
//! Two JSON endpoints (`retmode=json`): `esearch.fcgi` turns a free-text
//! query into an ordered list of PMIDs, `esummary.fcgi` returns per-article
//! metadata. Every request is a single attempt; there is no retry layer.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{Article, Author};
use crate::utils::HttpClient;

/// NCBI E-utilities base URL
const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Errors from the E-utilities endpoints
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected JSON shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Non-success status from the API
    #[error("API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Client for the PubMed search and summary endpoints.
///
/// Calls are issued one at a time; `fetch_details` awaits each summary to
/// completion before starting the next, so result order always matches the
/// input order.
#[derive(Debug, Clone)]
pub struct PubMedClient {
    client: Arc<HttpClient>,
    base_url: String,
}

impl PubMedClient {
    /// Create a client pointed at the NCBI servers
    pub fn new() -> Self {
        Self {
            client: Arc::new(HttpClient::new()),
            base_url: EUTILS_BASE_URL.to_string(),
        }
    }

    /// Create a client pointed at a different host (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(HttpClient::new()),
            base_url: base_url.into(),
        }
    }

    /// Build the esearch URL
    fn build_search_url(&self, query: &str, max_results: usize) -> String {
        let params = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("term".to_string(), query.to_string()),
            ("retmode".to_string(), "json".to_string()),
            ("retmax".to_string(), max_results.to_string()),
        ];
        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}/esearch.fcgi?{}", self.base_url, query_string)
    }

    /// Build the esummary URL for one PMID
    fn build_summary_url(&self, pmid: &str) -> String {
        let params = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("id".to_string(), pmid.to_string()),
            ("retmode".to_string(), "json".to_string()),
        ];
        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}/esummary.fcgi?{}", self.base_url, query_string)
    }

    /// Search PubMed, returning PMIDs in the order the API ranked them.
    ///
    /// A missing id list in the response parses as an empty result; callers
    /// treat "no ids" and "search failed" the same way apart from logging.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<String>, FetchError> {
        let url = self.build_search_url(query, max_results);
        tracing::debug!("esearch: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to search PubMed: {}", e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Api(format!(
                "esearch returned status: {}",
                response.status()
            )));
        }

        let json = response.text().await?;

        let parsed = Self::parse_search_response(&json)?;
        let mut ids = parsed.esearchresult.idlist;
        // retmax is enforced server-side, but the length guarantee is ours
        ids.truncate(max_results);
        Ok(ids)
    }

    /// Fetch summaries for each PMID in turn.
    ///
    /// A failed id is logged and skipped, so the result can be shorter than
    /// the input; the surviving articles keep the input order.
    pub async fn fetch_details(&self, ids: &[String]) -> Vec<Article> {
        let mut articles = Vec::with_capacity(ids.len());
        for pmid in ids {
            match self.fetch_summary(pmid).await {
                Ok(article) => articles.push(article),
                Err(e) => {
                    tracing::warn!("Failed to fetch details for PubMed ID {}: {}", pmid, e);
                }
            }
        }
        articles
    }

    /// Fetch and flatten the esummary record for one PMID.
    pub async fn fetch_summary(&self, pmid: &str) -> Result<Article, FetchError> {
        let url = self.build_summary_url(pmid);
        tracing::debug!("esummary: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to fetch summary: {}", e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Api(format!(
                "esummary returned status: {}",
                response.status()
            )));
        }

        let json = response.text().await?;

        Self::parse_summary_response(pmid, &json)
    }

    /// Parse the esearch response JSON
    fn parse_search_response(json: &str) -> Result<EsearchResponse, FetchError> {
        serde_json::from_str(json)
            .map_err(|e| FetchError::Parse(format!("Failed to parse esearch JSON: {}", e)))
    }

    /// Parse one esummary response into an [`Article`].
    ///
    /// Every field is optional; a response without a record object for the
    /// PMID yields an article with no metadata and zero authors.
    fn parse_summary_response(pmid: &str, json: &str) -> Result<Article, FetchError> {
        let envelope: EsummaryResponse = serde_json::from_str(json)?;

        let record: SummaryRecord = match envelope.result.get(pmid) {
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                FetchError::Parse(format!("Malformed esummary record for {}: {}", pmid, e))
            })?,
            None => SummaryRecord::default(),
        };

        let doi = record
            .articleids
            .into_iter()
            .find(|entry| entry.idtype == "doi")
            .map(|entry| entry.value);

        let authors = record
            .authors
            .into_iter()
            .map(|author| Author {
                name: author.name,
                affiliation: author.affiliation,
            })
            .collect();

        Ok(Article {
            pmid: pmid.to_string(),
            title: record.title,
            pub_date: record.pubdate,
            authors,
            doi,
        })
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}

/// esearch envelope
#[derive(Debug, Default, Deserialize)]
struct EsearchResponse {
    #[serde(default)]
    esearchresult: EsearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct EsearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// esummary envelope.
///
/// Records are keyed by PMID next to a "uids" array, so the map stays
/// untyped until the requested record is picked out.
#[derive(Debug, Default, Deserialize)]
struct EsummaryResponse {
    #[serde(default)]
    result: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    pubdate: Option<String>,
    #[serde(default)]
    authors: Vec<SummaryAuthor>,
    #[serde(default)]
    articleids: Vec<ArticleIdEntry>,
}

#[derive(Debug, Deserialize)]
struct SummaryAuthor {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    affiliation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleIdEntry {
    #[serde(default)]
    idtype: String,
    #[serde(default)]
    value: String,
}
