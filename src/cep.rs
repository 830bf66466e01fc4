//! Postal-code directory client
//!
//! Resolves a validated CEP to its locality name through the ViaCEP-style
//! directory service. The directory signals a nonexistent code with an
//! `erro` flag in an otherwise well-formed body.

use crate::ClimaCepError;
use crate::config::CepConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the postal-code directory service
#[derive(Debug, Clone)]
pub struct CepClient {
    client: Client,
    base_url: String,
}

/// Directory lookup response. Only the fields the service consumes are kept;
/// the remaining address fields are ignored on deserialization.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    erro: ErroFlag,
}

/// The directory has emitted its error flag both as a JSON boolean and as
/// the string "true" over the years; both spellings must be accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErroFlag {
    Bool(bool),
    Text(String),
}

impl Default for ErroFlag {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl ErroFlag {
    fn is_set(&self) -> bool {
        match self {
            Self::Bool(flag) => *flag,
            Self::Text(text) => text == "true",
        }
    }
}

impl CepClient {
    /// Create a new directory client with the configured timeout
    pub fn new(config: &CepConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("clima-cep/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create CEP HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a validated CEP to its locality name
    #[instrument(skip(self))]
    pub async fn resolve(&self, cep: &str) -> Result<String, ClimaCepError> {
        let url = format!("{}/ws/{}/json/", self.base_url, cep);
        debug!("CEP directory request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ClimaCepError::CepRequest { source })?;

        let body = response
            .text()
            .await
            .map_err(|source| ClimaCepError::CepRead { source })?;

        let data: ViaCepResponse = serde_json::from_str(&body)
            .map_err(|source| ClimaCepError::CepDecode { source })?;

        if data.erro.is_set() {
            warn!("CEP {} not found in directory", cep);
            return Err(ClimaCepError::ZipcodeNotFound);
        }

        debug!("CEP {} resolved to locality '{}'", cep, data.localidade);
        Ok(data.localidade)
    }
}
