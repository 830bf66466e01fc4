//! `ClimaCep` - CEP to current temperature lookup service
//!
//! This library provides the core functionality for the service: CEP shape
//! validation, locality resolution through the postal-code directory,
//! current-temperature retrieval from the weather provider, temperature
//! scale conversion, and the HTTP surface tying them together.

pub mod cep;
pub mod config;
pub mod conversion;
pub mod error;
pub mod validation;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use cep::CepClient;
pub use config::ClimaCepConfig;
pub use conversion::TemperatureReport;
pub use error::ClimaCepError;
pub use weather::WeatherClient;
pub use web::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ClimaCepError>;
