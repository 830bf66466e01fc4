//! HTTP surface of the service
//!
//! Wires validation, CEP resolution, temperature fetch and unit conversion
//! in sequence; the first failing stage writes its status and message and
//! nothing further runs.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ClimaCepConfig;
use crate::conversion::TemperatureReport;
use crate::{CepClient, ClimaCepError, WeatherClient, validation};

/// Shared per-process state: the two upstream clients
#[derive(Debug, Clone)]
pub struct AppState {
    pub cep: CepClient,
    pub weather: WeatherClient,
}

impl AppState {
    /// Build the state from validated configuration
    pub fn from_config(config: &ClimaCepConfig) -> Result<Self> {
        Ok(Self {
            cep: CepClient::new(&config.cep)?,
            weather: WeatherClient::new(&config.weather)?,
        })
    }
}

impl IntoResponse for ClimaCepError {
    fn into_response(self) -> Response {
        (self.status(), format!("ocorreu o erro: {self}")).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct CepQuery {
    /// Missing parameter behaves as empty input, which fails validation
    #[serde(default)]
    cep: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/cep", get(temperature_by_cep))
        .with_state(state)
}

async fn index() -> &'static str {
    "Informe um CEP para saber a temperatura no local, exemplo: /cep?cep=06182110"
}

async fn temperature_by_cep(
    State(state): State<AppState>,
    Query(query): Query<CepQuery>,
) -> Result<Json<TemperatureReport>, ClimaCepError> {
    validation::validate_cep(&query.cep)?;
    let locality = state.cep.resolve(&query.cep).await?;
    let celsius = state.weather.current_temperature(&locality).await?;
    Ok(Json(TemperatureReport::from_celsius(celsius)))
}

/// Bind the listener and serve until the process is stopped
pub async fn run(config: &ClimaCepConfig, state: AppState) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_seconds,
        )))
        .layer(cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server running at http://{}", addr);
    axum::serve(listener, app)
        .await
        .with_context(|| "Server error")?;
    Ok(())
}
