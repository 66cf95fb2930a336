use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, Url};
use serde_json::Value;
use tracing::{debug, warn};

use super::error::{extract_detail, Operation, RequestError};
use super::value::parse_value;
use crate::config::{ConfigError, Settings};
use crate::models::{Acknowledgement, ConfigEntry, WriteRequest};

pub const API_KEY_HEADER: &str = "X-API-Key";

/// The three calls the dashboard makes against the configuration service.
#[async_trait]
pub trait ConfigApi: Send + Sync {
    /// `GET /api/configs`
    async fn list_entries(&self) -> Result<Vec<ConfigEntry>, RequestError>;

    /// `POST /api/configs`; `raw_value` goes through [`parse_value`].
    async fn write_entry(
        &self,
        key: &str,
        raw_value: &str,
        description: &str,
    ) -> Result<ConfigEntry, RequestError>;

    /// `DELETE /api/configs/cache/{key}`
    async fn clear_cache(&self, key: &str) -> Result<Acknowledgement, RequestError>;
}

/// reqwest-backed [`ConfigApi`]. One round trip per call, no retries and
/// no client-side timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: Url, api_key: Option<HeaderValue>) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        if let Some(mut key) = api_key {
            key.set_sensitive(true);
            headers.insert(API_KEY_HEADER, key);
        }
        let client = Client::builder().default_headers(headers).build()?;
        Ok(HttpTransport {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let url = settings.parsed_base_url()?;
        let key = settings.api_key_header()?;
        Ok(HttpTransport::new(url, key)?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn configs_url(&self) -> String {
        format!("{}/api/configs", self.base_url)
    }

    fn cache_url(&self, key: &str) -> String {
        format!("{}/api/configs/cache/{}", self.base_url, urlencoding::encode(key))
    }
}

#[async_trait]
impl ConfigApi for HttpTransport {
    async fn list_entries(&self) -> Result<Vec<ConfigEntry>, RequestError> {
        let op = Operation::List;
        let url = self.configs_url();
        debug!(%url, "fetching configs");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| RequestError::Network { op, source })?;
        let body = read_success(op, resp).await?;
        serde_json::from_slice(&body).map_err(|source| RequestError::Decode { op, source })
    }

    async fn write_entry(
        &self,
        key: &str,
        raw_value: &str,
        description: &str,
    ) -> Result<ConfigEntry, RequestError> {
        let op = Operation::Write;
        let request = WriteRequest {
            key: key.to_string(),
            value: parse_value(raw_value),
            description: description.to_string(),
        };
        debug!(key = %request.key, value = %request.value, "writing config");
        let resp = self
            .client
            .post(self.configs_url())
            .json(&request)
            .send()
            .await
            .map_err(|source| RequestError::Network { op, source })?;
        let body = read_success(op, resp).await?;
        serde_json::from_slice(&body).map_err(|source| RequestError::Decode { op, source })
    }

    async fn clear_cache(&self, key: &str) -> Result<Acknowledgement, RequestError> {
        let op = Operation::ClearCache;
        let url = self.cache_url(key);
        debug!(%key, %url, "clearing cache");
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|source| RequestError::Network { op, source })?;
        let body = read_success(op, resp).await?;
        if body.is_empty() {
            return Ok(Acknowledgement::default());
        }
        let ack = serde_json::from_slice::<Value>(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));
        Ok(Acknowledgement(ack))
    }
}

/// Body of a 2xx response, or the normalized protocol error.
async fn read_success(op: Operation, resp: Response) -> Result<Vec<u8>, RequestError> {
    let status = resp.status();
    let body = resp
        .bytes()
        .await
        .map_err(|source| RequestError::Network { op, source })?
        .to_vec();
    if status.is_success() {
        return Ok(body);
    }
    let detail = extract_detail(status, &body);
    warn!(%status, %detail, "{}", op);
    Err(RequestError::Protocol { op, status, detail })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::new(Url::parse(base).unwrap(), None).unwrap()
    }

    #[test]
    fn urls_are_joined_without_double_slash() {
        let t = transport("http://127.0.0.1:8000/");
        assert_eq!(t.configs_url(), "http://127.0.0.1:8000/api/configs");

        let t = transport("http://example.com/dash/");
        assert_eq!(t.configs_url(), "http://example.com/dash/api/configs");
    }

    #[test]
    fn cache_key_is_a_single_encoded_segment() {
        let t = transport("http://127.0.0.1:8000");
        assert_eq!(
            t.cache_url("a/b"),
            "http://127.0.0.1:8000/api/configs/cache/a%2Fb"
        );
        assert_eq!(
            t.cache_url("svc timeout?"),
            "http://127.0.0.1:8000/api/configs/cache/svc%20timeout%3F"
        );
    }
}
