use serde::{Deserialize, Serialize};

/// Per-resource base URLs and transport settings.
///
/// Injected at client construction; there is no process-global state. Each
/// resource family keeps its own base URL so tests and proxies can override
/// them independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Forecast endpoint serving current conditions (default:
    /// <https://api.open-meteo.com/v1/forecast>).
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,

    /// Historical archive endpoint (default:
    /// <https://archive-api.open-meteo.com/v1/archive>).
    #[serde(default = "default_archive_url")]
    pub archive_url: String,

    /// Air-quality endpoint (default:
    /// <https://air-quality-api.open-meteo.com/v1/air-quality>).
    #[serde(default = "default_air_quality_url")]
    pub air_quality_url: String,

    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_archive_url() -> String {
    "https://archive-api.open-meteo.com/v1/archive".to_string()
}

fn default_air_quality_url() -> String {
    "https://air-quality-api.open-meteo.com/v1/air-quality".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            forecast_url: default_forecast_url(),
            archive_url: default_archive_url(),
            air_quality_url: default_air_quality_url(),
            timeout_secs: default_timeout(),
        }
    }
}
