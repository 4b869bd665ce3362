//! REST Client
//!
//! reqwest-backed `RecordStore` implementation speaking the backend's
//! JSON contract, rough edges included: an empty list may arrive as
//! `null`, and error bodies are keyed `error` on one backend and
//! `message` on the other.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use super::resource::RestResource;
use crate::config::Config;
use crate::controller::RecordStore;
use crate::error::{SyncError, SyncResult};

/// HTTP client for one record collection
pub struct RestClient<R> {
    http: reqwest::Client,
    base_url: String,
    _record: PhantomData<R>,
}

impl<R: RestResource> RestClient<R> {
    /// Client for the configured backend
    pub fn new(config: &Config) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    /// Client reusing an existing connection pool
    pub fn with_http(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            _record: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, R::COLLECTION)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, R::COLLECTION, id)
    }
}

#[async_trait]
impl<R: RestResource> RecordStore<R> for RestClient<R> {
    async fn list(&self, filter: Option<&str>) -> SyncResult<Vec<R>> {
        let mut request = self.http.get(self.collection_url());
        if let Some(category) = filter {
            request = request.query(&[("category", category)]);
        }
        let response = check(request.send().await?).await?;
        // A nil slice on the backend serializes as null, not []
        let records: Option<Vec<R>> = response.json().await?;
        Ok(records.unwrap_or_default())
    }

    async fn find(&self, id: &str) -> SyncResult<Option<R>> {
        let response = self.http.get(self.record_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check(response).await?;
        Ok(Some(response.json().await?))
    }

    async fn categories(&self) -> SyncResult<Vec<String>> {
        if !R::HAS_CATEGORY_INDEX {
            return Ok(Vec::new());
        }
        let url = format!("{}/categories", self.base_url);
        let response = check(self.http.get(url).send().await?).await?;
        let categories: Option<Vec<String>> = response.json().await?;
        Ok(categories.unwrap_or_default())
    }

    async fn create(&self, draft: &R::Draft) -> SyncResult<R> {
        let request = self.http.post(self.collection_url()).json(draft);
        let response = check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> SyncResult<()> {
        let request = self.http.put(self.record_url(id)).json(draft);
        // The success body differs between backends; both shapes are ignored
        check(request.send().await?).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> SyncResult<()> {
        check(self.http.delete(self.record_url(id)).send().await?).await?;
        Ok(())
    }
}

/// Pass 2xx responses through; turn anything else into a rejection
pub(super) async fn check(response: Response) -> SyncResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    log::debug!("{} answered {status}", response.url());
    let body = response.bytes().await.unwrap_or_default();
    Err(SyncError::rejected(
        status.as_u16(),
        rejection_message(status, &body),
    ))
}

/// Extract a readable rejection: the `error` key, then `message`, then
/// the bare HTTP status
fn rejection_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .iter()
                .find_map(|key| value.get(key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| status.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_tries_both_keys() {
        let status = StatusCode::BAD_REQUEST;
        assert_eq!(
            rejection_message(status, br#"{"error": "Title and amount are required"}"#),
            "Title and amount are required"
        );
        assert_eq!(
            rejection_message(status, br#"{"message": "task not found"}"#),
            "task not found"
        );
        // The error key wins when a body carries both
        assert_eq!(
            rejection_message(status, br#"{"error": "first", "message": "second"}"#),
            "first"
        );
        assert_eq!(rejection_message(status, b"not json"), "400 Bad Request");
        assert_eq!(rejection_message(status, b""), "400 Bad Request");
    }
}
