//! Historical weather archive resource.
//!
//! Wraps the Open-Meteo archive endpoint: hourly and daily series for a past
//! date range of up to a year.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{
    client::Client,
    error::{OpenMeteoError, ValidationError},
    query::QueryBuilder,
    validate::{check_coordinates, check_date_range},
    variable::OpenMeteoConst,
};

pub const HISTORICAL_TEMPERATURE_2M: OpenMeteoConst = OpenMeteoConst::new("temperature_2m");
pub const HISTORICAL_RELATIVE_HUMIDITY_2M: OpenMeteoConst =
    OpenMeteoConst::new("relative_humidity_2m");
pub const HISTORICAL_DEW_POINT_2M: OpenMeteoConst = OpenMeteoConst::new("dew_point_2m");
pub const HISTORICAL_APPARENT_TEMPERATURE: OpenMeteoConst =
    OpenMeteoConst::new("apparent_temperature");
pub const HISTORICAL_PRECIPITATION: OpenMeteoConst = OpenMeteoConst::new("precipitation");
pub const HISTORICAL_RAIN: OpenMeteoConst = OpenMeteoConst::new("rain");
pub const HISTORICAL_SNOWFALL: OpenMeteoConst = OpenMeteoConst::new("snowfall");
pub const HISTORICAL_CLOUD_COVER: OpenMeteoConst = OpenMeteoConst::new("cloud_cover");
pub const HISTORICAL_WIND_SPEED_10M: OpenMeteoConst = OpenMeteoConst::new("wind_speed_10m");
pub const HISTORICAL_WIND_DIRECTION_10M: OpenMeteoConst =
    OpenMeteoConst::new("wind_direction_10m");

/// Parameters for one archive request. Built by the caller, consumed once.
#[derive(Debug, Clone, Default)]
pub struct HistoricalOptions {
    pub latitude: f64,
    pub longitude: f64,
    /// Inclusive range start, `YYYY-MM-DD`.
    pub start_date: String,
    /// Inclusive range end, `YYYY-MM-DD`.
    pub end_date: String,
    /// Hourly variables to return; `None` requests no hourly series.
    pub hourly: Option<Vec<OpenMeteoConst>>,
    /// Daily aggregates to return.
    pub daily: Option<Vec<OpenMeteoConst>>,
    pub timezone: Option<String>,
    pub cell_selection: Option<String>,
}

impl HistoricalOptions {
    /// Check coordinate bounds and the date range; first violation wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_coordinates(self.latitude, self.longitude)?;
        check_date_range(&self.start_date, &self.end_date)
    }

    fn to_query(&self) -> String {
        QueryBuilder::new()
            .push("latitude", self.latitude)
            .push("longitude", self.longitude)
            .push("start_date", &self.start_date)
            .push("end_date", &self.end_date)
            .push_consts("hourly", self.hourly.as_deref())
            .push_consts("daily", self.daily.as_deref())
            .push_opt("timezone", self.timezone.as_deref())
            .push_opt("cell_selection", self.cell_selection.as_deref())
            .finish()
    }
}

/// Unit labels echoed back for each requested variable. A variable that was
/// not requested stays `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalUnits {
    pub time: String,
    pub temperature_2m: Option<String>,
    pub relative_humidity_2m: Option<String>,
    pub dew_point_2m: Option<String>,
    pub apparent_temperature: Option<String>,
    pub precipitation: Option<String>,
    pub rain: Option<String>,
    pub snowfall: Option<String>,
    pub cloud_cover: Option<String>,
    pub wind_speed_10m: Option<String>,
    pub wind_direction_10m: Option<String>,
}

/// Aligned sample series. Every present variable vector has the same length
/// as `time`; a missing sample at an index decodes to `None`, never to zero,
/// so positions stay aligned with the timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub time: Vec<String>,
    pub temperature_2m: Option<Vec<Option<f64>>>,
    pub relative_humidity_2m: Option<Vec<Option<f64>>>,
    pub dew_point_2m: Option<Vec<Option<f64>>>,
    pub apparent_temperature: Option<Vec<Option<f64>>>,
    pub precipitation: Option<Vec<Option<f64>>>,
    pub rain: Option<Vec<Option<f64>>>,
    pub snowfall: Option<Vec<Option<f64>>>,
    pub cloud_cover: Option<Vec<Option<f64>>>,
    pub wind_speed_10m: Option<Vec<Option<f64>>>,
    pub wind_direction_10m: Option<Vec<Option<f64>>>,
}

/// Decoded archive response: request echo, server metadata, and the
/// hourly/daily blocks actually requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalWeatherResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub generationtime_ms: f64,
    pub utc_offset_seconds: i64,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub elevation: f64,
    pub hourly_units: Option<HistoricalUnits>,
    pub hourly: Option<HistoricalSeries>,
    pub daily_units: Option<HistoricalUnits>,
    pub daily: Option<HistoricalSeries>,
}

/// Handle for the archive endpoint, obtained via
/// [`Client::historical_weather`].
pub struct HistoricalWeatherService<'a> {
    client: &'a Client,
}

impl<'a> HistoricalWeatherService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch historical series for a validated date range.
    ///
    /// Validation failures return before any request is sent. Cancelling
    /// `cancel` aborts the in-flight call with a cancellation error.
    pub async fn archive(
        &self,
        opts: &HistoricalOptions,
        cancel: &CancellationToken,
    ) -> Result<HistoricalWeatherResponse, OpenMeteoError> {
        opts.validate()?;
        let query = opts.to_query();
        let body = self
            .client
            .get(&self.client.config.archive_url, &query, cancel)
            .await?;
        serde_json::from_slice(&body).map_err(OpenMeteoError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_options() -> HistoricalOptions {
        HistoricalOptions {
            latitude: 41.902782,
            longitude: 12.496366,
            start_date: "2023-01-01".to_string(),
            end_date: "2023-12-31".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn validate_covers_every_rule() {
        let cases = [
            ("valid options", valid_options(), false),
            (
                "invalid latitude",
                HistoricalOptions {
                    latitude: 91.0,
                    ..valid_options()
                },
                true,
            ),
            (
                "invalid date format",
                HistoricalOptions {
                    start_date: "2023/01/01".to_string(),
                    ..valid_options()
                },
                true,
            ),
            (
                "end date before start date",
                HistoricalOptions {
                    start_date: "2023-12-31".to_string(),
                    end_date: "2023-01-01".to_string(),
                    ..valid_options()
                },
                true,
            ),
            (
                "date range exceeds 1 year",
                HistoricalOptions {
                    start_date: "2023-01-01".to_string(),
                    end_date: "2024-01-02".to_string(),
                    ..valid_options()
                },
                true,
            ),
        ];

        for (name, opts, want_err) in cases {
            assert_eq!(opts.validate().is_err(), want_err, "case: {name}");
        }
    }

    #[test]
    fn query_uses_wire_names_and_skips_unset_fields() {
        let opts = HistoricalOptions {
            hourly: Some(vec![HISTORICAL_TEMPERATURE_2M, HISTORICAL_PRECIPITATION]),
            ..valid_options()
        };

        let query = opts.to_query();
        assert_eq!(
            query,
            "latitude=41.902782&longitude=12.496366&start_date=2023-01-01\
             &end_date=2023-12-31&hourly=temperature_2m,precipitation"
        );
    }

    #[test]
    fn query_includes_present_optionals_once() {
        let opts = HistoricalOptions {
            daily: Some(vec![HISTORICAL_RAIN]),
            timezone: Some("Europe/Rome".to_string()),
            ..valid_options()
        };

        let query = opts.to_query();
        assert!(query.contains("daily=rain"));
        assert!(query.contains("timezone=Europe/Rome"));
        assert_eq!(query.matches("daily=").count(), 1);
        assert!(!query.contains("hourly="));
        assert!(!query.contains("cell_selection="));
    }

    #[test]
    fn decode_preserves_null_samples_and_alignment() {
        let body = serde_json::json!({
            "latitude": 41.9,
            "longitude": 12.5,
            "generationtime_ms": 0.23,
            "utc_offset_seconds": 0,
            "timezone": "GMT",
            "timezone_abbreviation": "GMT",
            "elevation": 21.0,
            "hourly_units": {
                "time": "iso8601",
                "temperature_2m": "°C",
                "precipitation": "mm"
            },
            "hourly": {
                "time": ["2023-01-01T00:00", "2023-01-01T01:00", "2023-01-01T02:00"],
                "temperature_2m": [11.2, null, 10.8],
                "precipitation": [0.0, 0.1, null]
            }
        });

        let response: HistoricalWeatherResponse =
            serde_json::from_value(body).expect("body should decode");

        let hourly = response.hourly.expect("hourly block requested");
        let temperature = hourly.temperature_2m.expect("temperature requested");
        assert_eq!(temperature.len(), hourly.time.len());
        assert_eq!(temperature[0], Some(11.2));
        assert_eq!(temperature[1], None);

        let precipitation = hourly.precipitation.expect("precipitation requested");
        assert_eq!(precipitation.len(), hourly.time.len());
        assert_eq!(precipitation[2], None);

        // Unrequested variables stay absent rather than defaulting.
        assert!(hourly.rain.is_none());
        assert!(response.daily.is_none());
        assert!(response.daily_units.is_none());

        let units = response.hourly_units.expect("units echoed back");
        assert_eq!(units.temperature_2m.as_deref(), Some("°C"));
        assert!(units.rain.is_none());
    }

    #[test]
    fn decode_failure_reports_the_cause() {
        let err = serde_json::from_slice::<HistoricalWeatherResponse>(b"{not json")
            .map_err(OpenMeteoError::Decode)
            .unwrap_err();
        assert!(matches!(err, OpenMeteoError::Decode(_)));
    }
}
