//! Weather provider client
//!
//! Fetches the current temperature for a locality from the WeatherAPI-style
//! current-conditions endpoint. The API key and locality travel as query
//! parameters; the locality is URL-encoded.

use crate::ClimaCepError;
use crate::config::WeatherConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the current-weather service
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    location: LocationData,
    current: CurrentData,
}

#[derive(Debug, Deserialize)]
struct LocationData {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CurrentData {
    temp_c: f64,
}

impl WeatherClient {
    /// Create a new weather client with the configured timeout and API key
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("clima-cep/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create weather HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch the current Celsius temperature for a locality
    #[instrument(skip(self))]
    pub async fn current_temperature(&self, locality: &str) -> Result<f64, ClimaCepError> {
        let url = format!(
            "{}/current.json?key={}&q={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(locality)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ClimaCepError::WeatherRequest { source })?;

        let body = response
            .text()
            .await
            .map_err(|source| ClimaCepError::WeatherRead { source })?;

        let data: WeatherApiResponse = serde_json::from_str(&body)
            .map_err(|source| ClimaCepError::WeatherDecode { source })?;

        debug!(
            "current temperature in {}: {:.1}°C",
            data.location.name, data.current.temp_c
        );
        Ok(data.current.temp_c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> WeatherClient {
        WeatherClient::new(&WeatherConfig {
            api_key: "test-key-12345".to_string(),
            base_url: server.url(),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    fn current_json(name: &str, temp_c: f64) -> String {
        format!(
            r#"{{"location":{{"name":"{name}","region":"Sao Paulo","country":"Brazil"}},"current":{{"temp_c":{temp_c},"humidity":60}}}}"#
        )
    }

    #[tokio::test]
    async fn test_current_temperature_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/current.json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".into(), "test-key-12345".into()),
                Matcher::UrlEncoded("q".into(), "Osasco".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(current_json("Osasco", 25.5))
            .create_async()
            .await;

        let celsius = client_for(&server)
            .current_temperature("Osasco")
            .await
            .unwrap();
        assert_eq!(celsius, 25.5);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_locality_is_url_encoded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/current.json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".into(), "test-key-12345".into()),
                Matcher::UrlEncoded("q".into(), "São Paulo".into()),
            ]))
            .with_status(200)
            .with_body(current_json("Sao Paulo", 23.8))
            .create_async()
            .await;

        let celsius = client_for(&server)
            .current_temperature("São Paulo")
            .await
            .unwrap();
        assert_eq!(celsius, 23.8);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/current.json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"error":{"code":1006,"message":"No matching location found."}}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .current_temperature("Nowhere")
            .await
            .unwrap_err();
        assert!(matches!(err, ClimaCepError::WeatherDecode { .. }));
        assert!(
            err.to_string()
                .starts_with("erro ao formatar a resposta da temperatura:")
        );
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let client = WeatherClient::new(&WeatherConfig {
            api_key: "test-key-12345".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_seconds: 1,
        })
        .unwrap();

        let err = client.current_temperature("Osasco").await.unwrap_err();
        assert!(matches!(err, ClimaCepError::WeatherRequest { .. }));
        assert!(
            err.to_string()
                .starts_with("erro ao fazer requisição da api de temperatura:")
        );
    }
}
