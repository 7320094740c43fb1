//! Air-quality resource: current conditions and hourly forecasts from the
//! CAMS-backed air-quality endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{
    client::Client,
    error::{OpenMeteoError, ValidationError},
    query::QueryBuilder,
    validate::check_coordinates,
    variable::OpenMeteoConst,
};

pub const AIR_QUALITY_PM10: OpenMeteoConst = OpenMeteoConst::new("pm10");
pub const AIR_QUALITY_PM2_5: OpenMeteoConst = OpenMeteoConst::new("pm2_5");
pub const AIR_QUALITY_CARBON_MONOXIDE: OpenMeteoConst = OpenMeteoConst::new("carbon_monoxide");
pub const AIR_QUALITY_NITROGEN_DIOXIDE: OpenMeteoConst = OpenMeteoConst::new("nitrogen_dioxide");
pub const AIR_QUALITY_SULPHUR_DIOXIDE: OpenMeteoConst = OpenMeteoConst::new("sulphur_dioxide");
pub const AIR_QUALITY_OZONE: OpenMeteoConst = OpenMeteoConst::new("ozone");
pub const AIR_QUALITY_DUST: OpenMeteoConst = OpenMeteoConst::new("dust");
pub const AIR_QUALITY_AMMONIA: OpenMeteoConst = OpenMeteoConst::new("ammonia");
pub const AIR_QUALITY_AEROSOL_OPTICAL_DEPTH: OpenMeteoConst =
    OpenMeteoConst::new("aerosol_optical_depth");
pub const AIR_QUALITY_UV_INDEX: OpenMeteoConst = OpenMeteoConst::new("uv_index");
pub const AIR_QUALITY_EUROPEAN_AQI: OpenMeteoConst = OpenMeteoConst::new("european_aqi");
pub const AIR_QUALITY_US_AQI: OpenMeteoConst = OpenMeteoConst::new("us_aqi");

/// CAMS model domain used to answer the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirQualityDomain {
    /// Let the server pick the best domain for the location.
    Auto,
    CamsEurope,
    CamsGlobal,
}

impl AirQualityDomain {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::CamsEurope => "cams_europe",
            Self::CamsGlobal => "cams_global",
        }
    }
}

impl fmt::Display for AirQualityDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for one current air-quality request.
#[derive(Debug, Clone, Default)]
pub struct CurrentAirQualityOptions {
    pub latitude: f64,
    pub longitude: f64,
    /// Forecast horizon in days; the server accepts 1 to 7.
    pub forecast_days: Option<u8>,
    pub domains: Option<AirQualityDomain>,
    /// Current-condition variables to return.
    pub current: Option<Vec<OpenMeteoConst>>,
    pub timezone: Option<String>,
}

impl CurrentAirQualityOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_coordinates(self.latitude, self.longitude)
    }

    fn to_query(&self) -> String {
        QueryBuilder::new()
            .push("latitude", self.latitude)
            .push("longitude", self.longitude)
            .push_opt("forecast_days", self.forecast_days)
            .push_opt("domains", self.domains)
            .push_consts("current", self.current.as_deref())
            .push_opt("timezone", self.timezone.as_deref())
            .finish()
    }
}

/// Parameters for one hourly air-quality forecast request.
#[derive(Debug, Clone, Default)]
pub struct HourlyAirQualityOptions {
    pub latitude: f64,
    pub longitude: f64,
    /// Forecast horizon in days; the server accepts 1 to 7.
    pub forecast_days: Option<u8>,
    pub domains: Option<AirQualityDomain>,
    /// Hourly variables to return.
    pub hourly: Option<Vec<OpenMeteoConst>>,
    pub timezone: Option<String>,
}

impl HourlyAirQualityOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_coordinates(self.latitude, self.longitude)
    }

    fn to_query(&self) -> String {
        QueryBuilder::new()
            .push("latitude", self.latitude)
            .push("longitude", self.longitude)
            .push_opt("forecast_days", self.forecast_days)
            .push_opt("domains", self.domains)
            .push_consts("hourly", self.hourly.as_deref())
            .push_opt("timezone", self.timezone.as_deref())
            .finish()
    }
}

/// Unit labels for the requested air-quality variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityUnits {
    pub time: String,
    pub interval: Option<String>,
    pub pm10: Option<String>,
    pub pm2_5: Option<String>,
    pub carbon_monoxide: Option<String>,
    pub nitrogen_dioxide: Option<String>,
    pub sulphur_dioxide: Option<String>,
    pub ozone: Option<String>,
    pub dust: Option<String>,
    pub ammonia: Option<String>,
    pub aerosol_optical_depth: Option<String>,
    pub uv_index: Option<String>,
    pub european_aqi: Option<String>,
    pub us_aqi: Option<String>,
}

/// One scalar sample per requested variable, all taken at `time`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityValues {
    pub time: String,
    pub interval: Option<i64>,
    pub pm10: Option<f64>,
    pub pm2_5: Option<f64>,
    pub carbon_monoxide: Option<f64>,
    pub nitrogen_dioxide: Option<f64>,
    pub sulphur_dioxide: Option<f64>,
    pub ozone: Option<f64>,
    pub dust: Option<f64>,
    pub ammonia: Option<f64>,
    pub aerosol_optical_depth: Option<f64>,
    pub uv_index: Option<f64>,
    pub european_aqi: Option<f64>,
    pub us_aqi: Option<f64>,
}

/// Aligned hourly series; present variable vectors match `time` in length,
/// with `None` marking a missing sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualitySeries {
    pub time: Vec<String>,
    pub pm10: Option<Vec<Option<f64>>>,
    pub pm2_5: Option<Vec<Option<f64>>>,
    pub carbon_monoxide: Option<Vec<Option<f64>>>,
    pub nitrogen_dioxide: Option<Vec<Option<f64>>>,
    pub sulphur_dioxide: Option<Vec<Option<f64>>>,
    pub ozone: Option<Vec<Option<f64>>>,
    pub dust: Option<Vec<Option<f64>>>,
    pub ammonia: Option<Vec<Option<f64>>>,
    pub aerosol_optical_depth: Option<Vec<Option<f64>>>,
    pub uv_index: Option<Vec<Option<f64>>>,
    pub european_aqi: Option<Vec<Option<f64>>>,
    pub us_aqi: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAirQualityResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub generationtime_ms: f64,
    pub utc_offset_seconds: i64,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub elevation: f64,
    pub current_units: Option<AirQualityUnits>,
    pub current: Option<AirQualityValues>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyAirQualityResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub generationtime_ms: f64,
    pub utc_offset_seconds: i64,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub elevation: f64,
    pub hourly_units: Option<AirQualityUnits>,
    pub hourly: Option<AirQualitySeries>,
}

/// Handle for current air quality, obtained via
/// [`Client::current_air_quality`].
pub struct CurrentAirQualityService<'a> {
    client: &'a Client,
}

impl<'a> CurrentAirQualityService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch the current air-quality conditions for a location.
    pub async fn forecast(
        &self,
        opts: &CurrentAirQualityOptions,
        cancel: &CancellationToken,
    ) -> Result<CurrentAirQualityResponse, OpenMeteoError> {
        opts.validate()?;
        let query = opts.to_query();
        let body = self
            .client
            .get(&self.client.config.air_quality_url, &query, cancel)
            .await?;
        serde_json::from_slice(&body).map_err(OpenMeteoError::Decode)
    }
}

/// Handle for hourly air-quality forecasts, obtained via
/// [`Client::hourly_air_quality`].
pub struct HourlyAirQualityService<'a> {
    client: &'a Client,
}

impl<'a> HourlyAirQualityService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch hour-by-hour air-quality forecasts for a location.
    pub async fn forecast(
        &self,
        opts: &HourlyAirQualityOptions,
        cancel: &CancellationToken,
    ) -> Result<HourlyAirQualityResponse, OpenMeteoError> {
        opts.validate()?;
        let query = opts.to_query();
        let body = self
            .client
            .get(&self.client.config.air_quality_url, &query, cancel)
            .await?;
        serde_json::from_slice(&body).map_err(OpenMeteoError::Decode)
    }
}
