//! Error types for the `ClimaCep` service

use axum::http::StatusCode;
use thiserror::Error;

/// Main error type for the `ClimaCep` service.
///
/// Every failing request maps to exactly one variant; the HTTP layer renders
/// the variant's display message together with [`ClimaCepError::status`].
#[derive(Error, Debug)]
pub enum ClimaCepError {
    /// The submitted CEP does not have the 8-digit shape
    #[error("invalid zipcode")]
    InvalidZipcode,

    /// The postal-code directory reports the CEP as nonexistent
    #[error("can not find zipcode")]
    ZipcodeNotFound,

    /// Transport failure calling the postal-code directory
    #[error("erro ao fazer requisição da api de CEP: {source}")]
    CepRequest { source: reqwest::Error },

    /// The postal-code directory response body could not be read
    #[error("erro ao ler resposta do CEP: {source}")]
    CepRead { source: reqwest::Error },

    /// The postal-code directory response body could not be decoded
    #[error("erro ao formatar a resposta: {source}")]
    CepDecode { source: serde_json::Error },

    /// Transport failure calling the weather provider
    #[error("erro ao fazer requisição da api de temperatura: {source}")]
    WeatherRequest { source: reqwest::Error },

    /// The weather provider response body could not be read
    #[error("erro ao ler resposta da temperatura: {source}")]
    WeatherRead { source: reqwest::Error },

    /// The weather provider response body could not be decoded
    #[error("erro ao formatar a resposta da temperatura: {source}")]
    WeatherDecode { source: serde_json::Error },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ClimaCepError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status code the variant surfaces as
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidZipcode => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ZipcodeNotFound => StatusCode::NOT_FOUND,
            Self::CepRequest { .. }
            | Self::CepRead { .. }
            | Self::CepDecode { .. }
            | Self::WeatherRequest { .. }
            | Self::WeatherRead { .. }
            | Self::WeatherDecode { .. }
            | Self::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
