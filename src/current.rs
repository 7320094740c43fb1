//! Current weather conditions resource, served by the forecast endpoint.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{
    client::Client,
    error::{OpenMeteoError, ValidationError},
    query::QueryBuilder,
    validate::check_coordinates,
    variable::OpenMeteoConst,
};

pub const CURRENT_TEMPERATURE_2M: OpenMeteoConst = OpenMeteoConst::new("temperature_2m");
pub const CURRENT_RELATIVE_HUMIDITY_2M: OpenMeteoConst =
    OpenMeteoConst::new("relative_humidity_2m");
pub const CURRENT_APPARENT_TEMPERATURE: OpenMeteoConst =
    OpenMeteoConst::new("apparent_temperature");
pub const CURRENT_IS_DAY: OpenMeteoConst = OpenMeteoConst::new("is_day");
pub const CURRENT_PRECIPITATION: OpenMeteoConst = OpenMeteoConst::new("precipitation");
pub const CURRENT_RAIN: OpenMeteoConst = OpenMeteoConst::new("rain");
pub const CURRENT_SHOWERS: OpenMeteoConst = OpenMeteoConst::new("showers");
pub const CURRENT_SNOWFALL: OpenMeteoConst = OpenMeteoConst::new("snowfall");
pub const CURRENT_WEATHER_CODE: OpenMeteoConst = OpenMeteoConst::new("weather_code");
pub const CURRENT_CLOUD_COVER: OpenMeteoConst = OpenMeteoConst::new("cloud_cover");
pub const CURRENT_WIND_SPEED_10M: OpenMeteoConst = OpenMeteoConst::new("wind_speed_10m");
pub const CURRENT_WIND_DIRECTION_10M: OpenMeteoConst = OpenMeteoConst::new("wind_direction_10m");
pub const CURRENT_WIND_GUSTS_10M: OpenMeteoConst = OpenMeteoConst::new("wind_gusts_10m");

/// Parameters for one current-conditions request. No date range, so only
/// the coordinate checks apply.
#[derive(Debug, Clone, Default)]
pub struct CurrentWeatherOptions {
    pub latitude: f64,
    pub longitude: f64,
    /// Current-condition variables to return; `None` leaves the server
    /// default selection.
    pub current: Option<Vec<OpenMeteoConst>>,
    pub timezone: Option<String>,
}

impl CurrentWeatherOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_coordinates(self.latitude, self.longitude)
    }

    fn to_query(&self) -> String {
        QueryBuilder::new()
            .push("latitude", self.latitude)
            .push("longitude", self.longitude)
            .push_consts("current", self.current.as_deref())
            .push_opt("timezone", self.timezone.as_deref())
            .finish()
    }
}

/// Unit labels for the requested current-condition variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherUnits {
    pub time: String,
    pub interval: Option<String>,
    pub temperature_2m: Option<String>,
    pub relative_humidity_2m: Option<String>,
    pub apparent_temperature: Option<String>,
    pub is_day: Option<String>,
    pub precipitation: Option<String>,
    pub rain: Option<String>,
    pub showers: Option<String>,
    pub snowfall: Option<String>,
    pub weather_code: Option<String>,
    pub cloud_cover: Option<String>,
    pub wind_speed_10m: Option<String>,
    pub wind_direction_10m: Option<String>,
    pub wind_gusts_10m: Option<String>,
}

/// One scalar sample per requested variable, all taken at `time`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherValues {
    pub time: String,
    pub interval: Option<i64>,
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub is_day: Option<i64>,
    pub precipitation: Option<f64>,
    pub rain: Option<f64>,
    pub showers: Option<f64>,
    pub snowfall: Option<f64>,
    pub weather_code: Option<i64>,
    pub cloud_cover: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub wind_direction_10m: Option<f64>,
    pub wind_gusts_10m: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub generationtime_ms: f64,
    pub utc_offset_seconds: i64,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub elevation: f64,
    pub current_units: Option<CurrentWeatherUnits>,
    pub current: Option<CurrentWeatherValues>,
}

/// Handle for current conditions, obtained via [`Client::current_weather`].
pub struct CurrentWeatherService<'a> {
    client: &'a Client,
}

impl<'a> CurrentWeatherService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch the current conditions for a location.
    pub async fn forecast(
        &self,
        opts: &CurrentWeatherOptions,
        cancel: &CancellationToken,
    ) -> Result<CurrentWeatherResponse, OpenMeteoError> {
        opts.validate()?;
        let query = opts.to_query();
        let body = self
            .client
            .get(&self.client.config.forecast_url, &query, cancel)
            .await?;
        serde_json::from_slice(&body).map_err(OpenMeteoError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_skips_date_rules() {
        let opts = CurrentWeatherOptions {
            latitude: 52.52,
            longitude: 13.41,
            ..Default::default()
        };
        assert!(opts.validate().is_ok());

        let opts = CurrentWeatherOptions {
            latitude: -95.0,
            longitude: 13.41,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn query_joins_current_variables() {
        let opts = CurrentWeatherOptions {
            latitude: 52.52,
            longitude: 13.41,
            current: Some(vec![CURRENT_TEMPERATURE_2M, CURRENT_WEATHER_CODE]),
            timezone: Some("auto".to_string()),
        };

        assert_eq!(
            opts.to_query(),
            "latitude=52.52&longitude=13.41&current=temperature_2m,weather_code&timezone=auto"
        );
    }

    #[test]
    fn decode_keeps_absent_scalars_distinguishable() {
        let body = serde_json::json!({
            "latitude": 52.52,
            "longitude": 13.41,
            "generationtime_ms": 0.05,
            "utc_offset_seconds": 3600,
            "timezone": "Europe/Berlin",
            "timezone_abbreviation": "CET",
            "elevation": 38.0,
            "current_units": {
                "time": "iso8601",
                "interval": "seconds",
                "temperature_2m": "°C"
            },
            "current": {
                "time": "2024-01-15T12:00",
                "interval": 900,
                "temperature_2m": 5.5
            }
        });

        let response: CurrentWeatherResponse =
            serde_json::from_value(body).expect("body should decode");

        let current = response.current.expect("current block requested");
        assert_eq!(current.temperature_2m, Some(5.5));
        assert_eq!(current.interval, Some(900));
        assert!(current.weather_code.is_none());

        let units = response.current_units.expect("units echoed back");
        assert_eq!(units.temperature_2m.as_deref(), Some("°C"));
        assert!(units.wind_speed_10m.is_none());
    }
}
