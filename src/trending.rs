//! Client for the hosted search-analytics sink.
//!
//! The sink is an Appwrite-style document store: one document per normalized
//! search term, holding a search count and the top result's id/title/poster.
//! The app only ever increments counts and reads the top-N by count; all
//! concurrency control is the sink's problem.

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::api::Movie;
use crate::config::TrendingConfig;

/// A trending record as stored in the sink.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingMovie {
    #[serde(rename = "$id", default)]
    pub document_id: String,
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub movie_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendingMovie>,
}

/// Lowercased, whitespace-trimmed analytics key, so "Dune" and " dune "
/// increment the same record.
pub fn normalize_search_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Whether a completed list fetch should produce an analytics record:
/// only user searches (non-empty query) that found at least one result.
pub fn should_record_search(query: &str, result_count: usize) -> bool {
    !query.is_empty() && result_count > 0
}

/// The one analytics record a completed list fetch yields, if any.
///
/// `applied` is whether the response survived the staleness check; discarded
/// responses record nothing. Empty queries and empty result lists record
/// nothing either. At most one record per applied fetch, carrying the query
/// and its top result.
pub fn search_record(
    query: &str,
    applied: bool,
    result_count: usize,
    top_result: Option<Movie>,
) -> Option<(String, Movie)> {
    if !applied || !should_record_search(query, result_count) {
        return None;
    }
    top_result.map(|top| (query.to_string(), top))
}

#[derive(Clone)]
pub struct TrendingClient {
    endpoint: String,
    project_id: String,
    api_key: String,
    database_id: String,
    collection_id: String,
    client: Client,
}

impl TrendingClient {
    pub fn new(config: &TrendingConfig) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
            database_id: config.database_id.clone(),
            collection_id: config.collection_id.clone(),
            client: Client::new(),
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, self.collection_id
        )
    }

    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
    }

    async fn list_documents(&self, queries: &[String]) -> Result<Vec<TrendingMovie>> {
        let mut url = self.documents_url();
        for (i, query) in queries.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            url.push(sep);
            url.push_str("queries[]=");
            url.push_str(&urlencoding::encode(query));
        }

        let response = self
            .with_headers(self.client.get(&url))
            .send()
            .await
            .context("Failed to query trending sink")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Trending sink returned {}", status);
        }

        let list: DocumentList = response
            .json()
            .await
            .context("Failed to parse trending documents")?;

        Ok(list.documents)
    }

    /// Top `limit` records ordered by descending search count.
    pub async fn get_trending(&self, limit: usize) -> Result<Vec<TrendingMovie>> {
        self.list_documents(&[
            "orderDesc(\"count\")".to_string(),
            format!("limit({})", limit),
        ])
        .await
    }

    /// Increment the count for `term`, creating the record on first sight.
    /// Not idempotent: concurrent increments race under the sink's own rules.
    pub async fn record_search(&self, term: &str, top_result: &Movie) -> Result<()> {
        let key = normalize_search_term(term);
        if key.is_empty() {
            return Ok(());
        }

        let existing = self
            .list_documents(&[
                format!("equal(\"search_term\", [\"{}\"])", key.replace('"', "\\\"")),
                "limit(1)".to_string(),
            ])
            .await?;

        let response = if let Some(doc) = existing.first() {
            let url = format!("{}/{}", self.documents_url(), doc.document_id);
            let body = serde_json::json!({
                "data": { "count": doc.count + 1 }
            });
            self.with_headers(self.client.patch(&url))
                .json(&body)
                .send()
                .await
                .context("Failed to increment search count")?
        } else {
            let body = serde_json::json!({
                "documentId": "unique()",
                "data": {
                    "search_term": key,
                    "count": 1,
                    "movie_id": top_result.id,
                    "title": top_result.title,
                    "poster_url": top_result.poster_url(),
                    "created_at": Utc::now().to_rfc3339(),
                }
            });
            self.with_headers(self.client.post(&self.documents_url()))
                .json(&body)
                .send()
                .await
                .context("Failed to create search record")?
        };

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Trending sink write returned {}", status);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_search_term("  Dune "), "dune");
        assert_eq!(normalize_search_term("DUNE"), "dune");
        assert_eq!(normalize_search_term("dune"), "dune");
    }

    #[test]
    fn test_normalize_whitespace_only_is_empty() {
        assert_eq!(normalize_search_term("   "), "");
    }

    #[test]
    fn test_record_only_for_nonempty_search_with_results() {
        assert!(should_record_search("dune", 3));
        assert!(!should_record_search("dune", 0));
        assert!(!should_record_search("", 3));
        assert!(!should_record_search("", 0));
    }

    #[test]
    fn test_search_record_decision() {
        let top = Movie {
            id: 693134,
            title: "Dune: Part Two".to_string(),
            ..Default::default()
        };

        let record = search_record("dune", true, 3, Some(top.clone()));
        let (term, movie) = record.expect("applied search with results records");
        assert_eq!(term, "dune");
        assert_eq!(movie.id, 693134);

        // Stale responses record nothing even with results in hand
        assert!(search_record("dune", false, 3, Some(top.clone())).is_none());
        // Empty result lists and empty queries record nothing
        assert!(search_record("dune", true, 0, None).is_none());
        assert!(search_record("", true, 3, Some(top)).is_none());
    }

    #[test]
    fn test_documents_url_layout() {
        let client = TrendingClient::new(&TrendingConfig {
            endpoint: "https://cloud.example.com/v1/".to_string(),
            project_id: "proj".to_string(),
            api_key: "key".to_string(),
            database_id: "db".to_string(),
            collection_id: "metrics".to_string(),
            limit: 5,
        });
        assert_eq!(
            client.documents_url(),
            "https://cloud.example.com/v1/databases/db/collections/metrics/documents"
        );
    }

    #[test]
    fn test_document_id_parses_from_dollar_field() {
        let doc: TrendingMovie = serde_json::from_str(
            r#"{"$id":"abc","search_term":"dune","count":4,"movie_id":693134,"title":"Dune"}"#,
        )
        .unwrap();
        assert_eq!(doc.document_id, "abc");
        assert_eq!(doc.count, 4);
        assert!(doc.poster_url.is_none());
    }
}
