use std::time::Duration;

use reqwest::{
    header::USER_AGENT,
    Client,
    Response,
};
use serde::Deserialize;
use tracing::debug;

use crate::core::{
    ChooserError,
    ChooserOptions,
};

/// Raw text returned by the term search service. `None` means the service had no data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPayload {
    pub data: Option<String>,
}

impl SearchPayload {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: Some(data.into()) }
    }

    pub fn empty() -> Self {
        Self { data: None }
    }

    pub fn has_data(&self) -> bool {
        self.data.as_deref().is_some_and(|d| !d.trim().is_empty())
    }
}

/// The service wraps its delimited text in a JSON envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<String>,
}

pub fn decode_envelope(body: &str) -> Result<SearchPayload, ChooserError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    Ok(SearchPayload { data: envelope.data })
}

#[allow(async_fn_in_trait)]
pub trait TermSearch {
    /// `ontology_filter` is empty when searching every ontology.
    async fn search(&self, query: &str, ontology_filter: &str) -> Result<SearchPayload, ChooserError>;
}

pub fn http_client(timeout: Duration) -> Result<Client, ChooserError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ChooserError::Custom(format!("HTTP client build failed: {e}")))
}

pub struct BioPortalClient {
    client: Client,
    base_url: String,
}

impl BioPortalClient {
    pub fn new(options: &ChooserOptions) -> Result<Self, ChooserError> {
        let client = http_client(Duration::from_secs(options.timeout_secs))?;
        Ok(Self { client, base_url: options.service_url.trim_end_matches('/').to_string() })
    }

    pub fn search_url(&self, ontology_filter: &str) -> String {
        format!("{}/{}", self.base_url, ontology_filter)
    }
}

impl TermSearch for BioPortalClient {
    async fn search(&self, query: &str, ontology_filter: &str) -> Result<SearchPayload, ChooserError> {
        let url = self.search_url(ontology_filter);
        debug!(%url, query, "querying term search service");

        let resp = self
            .client
            .get(&url)
            .query(&[("q", query), ("response", "json")])
            .header(USER_AGENT, "ontology-chooser/0.1 (+reqwest)")
            .send()
            .await?;

        ensure_success(&resp)?;

        let body = resp.text().await?;
        decode_envelope(&body)
    }
}

fn ensure_success(resp: &Response) -> Result<(), ChooserError> {
    if !resp.status().is_success() {
        return Err(ChooserError::Service {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decoding() {
        let payload = decode_envelope(r#"{"data": "Mus musculus|birnlex_161~!~"}"#).unwrap();
        assert_eq!(payload.data.as_deref(), Some("Mus musculus|birnlex_161~!~"));
        assert!(payload.has_data());

        assert!(!decode_envelope(r#"{"data": null}"#).unwrap().has_data());
        assert!(!decode_envelope(r#"{}"#).unwrap().has_data());
        assert!(!decode_envelope(r#"{"data": "  "}"#).unwrap().has_data());
        assert!(matches!(decode_envelope("not json"), Err(ChooserError::Json(_))));
    }

    #[test]
    fn test_search_url() {
        let options = ChooserOptions {
            service_url: "http://localhost:8080/search/json_search/".to_string(),
            ..Default::default()
        };
        let client = BioPortalClient::new(&options).unwrap();
        assert_eq!(client.search_url("1132"), "http://localhost:8080/search/json_search/1132");
        assert_eq!(client.search_url(""), "http://localhost:8080/search/json_search/");
    }
}
