//! Counter store backed by an Appwrite database collection.
//!
//! Each document holds `searchTerm`, `count`, `movie_id`, `title` and
//! `poster_url`. The REST API is used directly; queries are sent as JSON
//! encoded `queries[]` parameters.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

use super::store::{CounterStore, TrendingError, TrendingResult};
use crate::config::AppwriteConfig;
use crate::schemas::{Movie, TrendingEntry};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendingEntry>,
}

pub struct AppwriteStore {
    http: reqwest::Client,
    documents_url: String,
}

impl AppwriteStore {
    pub fn new(config: &AppwriteConfig) -> TrendingResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-appwrite-project", header_value(&config.project_id)?);
        if let Some(key) = &config.api_key {
            let mut value = header_value(key)?;
            value.set_sensitive(true);
            headers.insert("x-appwrite-key", value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TrendingError::Network(e.to_string()))?;

        Ok(Self {
            http,
            documents_url: documents_url(config),
        })
    }

    async fn list_documents(&self, queries: &[Value]) -> TrendingResult<Vec<TrendingEntry>> {
        let params: Vec<(&str, String)> =
            queries.iter().map(|q| ("queries[]", q.to_string())).collect();

        let response = self
            .http
            .get(&self.documents_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| TrendingError::Network(e.to_string()))?;

        let body = read_success_body(response).await?;
        let list: DocumentList =
            serde_json::from_str(&body).map_err(|e| TrendingError::Parse(e.to_string()))?;
        Ok(list.documents)
    }

    async fn create_document(&self, query: &str, movie: &Movie) -> TrendingResult<()> {
        let entry = TrendingEntry::first_search("", query, movie);
        let body = json!({
            "documentId": "unique()",
            "data": {
                "searchTerm": entry.search_term,
                "count": entry.count,
                "movie_id": entry.movie_id,
                "title": entry.title,
                "poster_url": entry.poster_url,
            }
        });

        let response = self
            .http
            .post(&self.documents_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TrendingError::Network(e.to_string()))?;
        read_success_body(response).await.map(|_| ())
    }

    async fn update_count(&self, document_id: &str, count: u64) -> TrendingResult<()> {
        let url = format!(
            "{}/{}",
            self.documents_url,
            urlencoding::encode(document_id)
        );
        let response = self
            .http
            .patch(&url)
            .json(&json!({ "data": { "count": count } }))
            .send()
            .await
            .map_err(|e| TrendingError::Network(e.to_string()))?;
        read_success_body(response).await.map(|_| ())
    }
}

#[async_trait]
impl CounterStore for AppwriteStore {
    async fn find_or_increment(&self, query: &str, movie: &Movie) -> TrendingResult<()> {
        let existing = self.list_documents(&[equal_query("searchTerm", query)]).await?;

        match existing.into_iter().next() {
            Some(doc) => {
                debug!(search_term = query, count = doc.count + 1, "incrementing search count");
                self.update_count(&doc.id, doc.count + 1).await
            }
            None => {
                debug!(search_term = query, movie_id = movie.id, "creating search count");
                self.create_document(query, movie).await
            }
        }
    }

    async fn list_top(&self, n: usize) -> TrendingResult<Vec<TrendingEntry>> {
        self.list_documents(&[limit_query(n), order_desc_query("count")])
            .await
    }
}

fn header_value(value: &str) -> TrendingResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| TrendingError::Backend(format!("invalid header value: {e}")))
}

async fn read_success_body(response: reqwest::Response) -> TrendingResult<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TrendingError::Network(e.to_string()))?;

    if status.is_success() {
        Ok(body)
    } else {
        Err(TrendingError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

// Appwrite errors look like {"message": "...", "code": 404, "type": "..."}
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}

fn documents_url(config: &AppwriteConfig) -> String {
    format!(
        "{}/databases/{}/collections/{}/documents",
        config.endpoint.trim_end_matches('/'),
        config.database_id,
        config.collection_id
    )
}

fn equal_query(attribute: &str, value: &str) -> Value {
    json!({ "method": "equal", "attribute": attribute, "values": [value] })
}

fn limit_query(n: usize) -> Value {
    json!({ "method": "limit", "values": [n] })
}

fn order_desc_query(attribute: &str) -> Value {
    json!({ "method": "orderDesc", "attribute": attribute })
}
