use std::{sync::Arc, time::Duration};

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::{
    air_quality::{CurrentAirQualityService, HourlyAirQualityService},
    config::ClientConfig,
    current::CurrentWeatherService,
    error::TransportError,
    executor::{Executor, ReqwestExecutor},
    historical::HistoricalWeatherService,
};

/// Entry point for all Open-Meteo resources.
///
/// One client can be shared across tasks without synchronization: every call
/// builds its own query string and response value, and the executor is the
/// only shared piece.
pub struct Client {
    pub(crate) config: ClientConfig,
    pub(crate) executor: Arc<dyn Executor>,
}

impl Client {
    /// Create a client with the default reqwest-backed executor.
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let executor = ReqwestExecutor::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self {
            config,
            executor: Arc::new(executor),
        })
    }

    /// Create a client with the default configuration and executor.
    pub fn with_defaults() -> Result<Self, TransportError> {
        Self::new(ClientConfig::default())
    }

    /// Create a client around a caller-supplied executor (tests, custom
    /// transports).
    pub fn with_executor(config: ClientConfig, executor: Arc<dyn Executor>) -> Self {
        Self { config, executor }
    }

    /// Service handle for current weather conditions.
    pub fn current_weather(&self) -> CurrentWeatherService<'_> {
        CurrentWeatherService::new(self)
    }

    /// Service handle for the historical weather archive.
    pub fn historical_weather(&self) -> HistoricalWeatherService<'_> {
        HistoricalWeatherService::new(self)
    }

    /// Service handle for current air-quality conditions.
    pub fn current_air_quality(&self) -> CurrentAirQualityService<'_> {
        CurrentAirQualityService::new(self)
    }

    /// Service handle for hourly air-quality forecasts.
    pub fn hourly_air_quality(&self) -> HourlyAirQualityService<'_> {
        HourlyAirQualityService::new(self)
    }

    pub(crate) async fn get(
        &self,
        base_url: &str,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, TransportError> {
        self.executor
            .execute(Method::GET, base_url, query, None, cancel)
            .await
    }
}
