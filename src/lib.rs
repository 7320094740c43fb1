//! Client library for the Open-Meteo weather API (<https://open-meteo.com>).
//!
//! This crate defines:
//! - Typed, validated per-resource request options
//! - Query encoding matching the Open-Meteo wire conventions
//! - Typed JSON responses that keep "absent" and "null" distinguishable
//! - An injectable HTTP executor boundary with cancellation support
//!
//! One [`Client`] serves every resource; service handles are borrowed from
//! it per call:
//!
//! ```no_run
//! use openmeteo::{
//!     CancellationToken, Client, HistoricalOptions, HISTORICAL_TEMPERATURE_2M,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), openmeteo::OpenMeteoError> {
//! let client = Client::with_defaults()?;
//! let opts = HistoricalOptions {
//!     latitude: 41.902782,
//!     longitude: 12.496366,
//!     start_date: "2023-01-01".to_string(),
//!     end_date: "2023-01-02".to_string(),
//!     hourly: Some(vec![HISTORICAL_TEMPERATURE_2M]),
//!     ..Default::default()
//! };
//!
//! let cancel = CancellationToken::new();
//! let response = client.historical_weather().archive(&opts, &cancel).await?;
//! println!("{:?}", response.hourly);
//! # Ok(())
//! # }
//! ```

pub mod air_quality;
pub mod client;
pub mod config;
pub mod current;
pub mod error;
pub mod executor;
pub mod historical;
mod query;
mod validate;
pub mod variable;

pub use air_quality::{
    AIR_QUALITY_AEROSOL_OPTICAL_DEPTH, AIR_QUALITY_AMMONIA, AIR_QUALITY_CARBON_MONOXIDE,
    AIR_QUALITY_DUST, AIR_QUALITY_EUROPEAN_AQI, AIR_QUALITY_NITROGEN_DIOXIDE, AIR_QUALITY_OZONE,
    AIR_QUALITY_PM2_5, AIR_QUALITY_PM10, AIR_QUALITY_SULPHUR_DIOXIDE, AIR_QUALITY_US_AQI,
    AIR_QUALITY_UV_INDEX, AirQualityDomain, AirQualitySeries, AirQualityUnits, AirQualityValues,
    CurrentAirQualityOptions, CurrentAirQualityResponse, CurrentAirQualityService,
    HourlyAirQualityOptions, HourlyAirQualityResponse, HourlyAirQualityService,
};
pub use client::Client;
pub use config::ClientConfig;
pub use current::{
    CURRENT_APPARENT_TEMPERATURE, CURRENT_CLOUD_COVER, CURRENT_IS_DAY, CURRENT_PRECIPITATION,
    CURRENT_RAIN, CURRENT_RELATIVE_HUMIDITY_2M, CURRENT_SHOWERS, CURRENT_SNOWFALL,
    CURRENT_TEMPERATURE_2M, CURRENT_WEATHER_CODE, CURRENT_WIND_DIRECTION_10M,
    CURRENT_WIND_GUSTS_10M, CURRENT_WIND_SPEED_10M, CurrentWeatherOptions, CurrentWeatherResponse,
    CurrentWeatherService, CurrentWeatherUnits, CurrentWeatherValues,
};
pub use error::{OpenMeteoError, TransportError, ValidationError};
pub use executor::{Executor, ReqwestExecutor};
pub use historical::{
    HISTORICAL_APPARENT_TEMPERATURE, HISTORICAL_CLOUD_COVER, HISTORICAL_DEW_POINT_2M,
    HISTORICAL_PRECIPITATION, HISTORICAL_RAIN, HISTORICAL_RELATIVE_HUMIDITY_2M,
    HISTORICAL_SNOWFALL, HISTORICAL_TEMPERATURE_2M, HISTORICAL_WIND_DIRECTION_10M,
    HISTORICAL_WIND_SPEED_10M, HistoricalOptions, HistoricalSeries, HistoricalUnits,
    HistoricalWeatherResponse, HistoricalWeatherService,
};
pub use variable::OpenMeteoConst;

// Re-exported so callers do not need a direct tokio-util dependency to pass
// a cancellation token.
pub use tokio_util::sync::CancellationToken;
