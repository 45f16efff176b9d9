use crate::record::IpoRecord;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Characters left as-is in a query component: the unreserved marks a browser
/// keeps when encoding a URI component. Space becomes `%20`, never `+`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes one query parameter value.
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("IPO not found (HTTP {0})")]
    NotFound(StatusCode),
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct IpoClient {
    client: Client,
    base_url: String,
}

impl IpoClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Looks up a single IPO by name. The body of a non-success response is
    /// never read.
    pub async fn lookup(&self, name: &str) -> Result<IpoRecord, LookupError> {
        let url = format!("{}/ipo?name={}", self.base_url, encode_query_component(name));
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::NotFound(status));
        }

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(IpoRecord::from_json(value))
    }
}
