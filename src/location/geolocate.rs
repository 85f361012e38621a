use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::time::Duration;

use crate::api::error::FetchError;
use crate::config::AppConfig;
use crate::location::resolver::Position;

pub const IP_LOOKUP_URL: &str = "http://ip-api.com/json/?fields=status,message,lat,lon";

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// One-shot position request: configured coordinates first, then an IP
/// lookup if enabled.
#[derive(Debug, Clone)]
pub struct Locator {
    fixed: Option<Position>,
    ip_lookup: Option<(reqwest::Client, String)>,
}

impl Locator {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fixed = config
            .coordinates()
            .map(|(lat, lon)| Position::new(lat, lon));
        let ip_lookup = if config.location.ip_lookup {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.api.timeout_secs))
                .build()
                .context("Building HTTP client")?;
            Some((client, IP_LOOKUP_URL.to_string()))
        } else {
            None
        };
        Ok(Self { fixed, ip_lookup })
    }

    /// `None` means the position is unavailable; callers fall back to the
    /// default city.
    pub async fn locate(&self) -> Option<Position> {
        if let Some(pos) = self.fixed {
            debug!("Using configured position {:?}", pos);
            return Some(pos);
        }
        let (client, url) = self.ip_lookup.as_ref()?;
        match lookup(client, url).await {
            Ok(pos) => {
                info!("Located at {:.4}, {:.4}", pos.latitude, pos.longitude);
                Some(pos)
            }
            Err(e) => {
                warn!("Position lookup failed: {}", e);
                None
            }
        }
    }
}

async fn lookup(client: &reqwest::Client, url: &str) -> Result<Position, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    decode(response.json::<IpLookupResponse>().await?)
}

fn decode(body: IpLookupResponse) -> Result<Position, FetchError> {
    if body.status != "success" {
        return Err(FetchError::Decode(
            body.message.unwrap_or_else(|| body.status.clone()),
        ));
    }
    match (body.lat, body.lon) {
        (Some(lat), Some(lon)) => Ok(Position::new(lat, lon)),
        _ => Err(FetchError::Decode("missing coordinates".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> IpLookupResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn successful_lookup_yields_position() {
        let pos = decode(body(r#"{"status":"success","lat":38.42,"lon":27.14}"#)).unwrap();
        assert_eq!(pos, Position::new(38.42, 27.14));
    }

    #[test]
    fn failed_lookup_carries_message() {
        let err = decode(body(r#"{"status":"fail","message":"private range"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "unexpected response shape: private range");
    }

    #[tokio::test]
    async fn configured_coordinates_skip_the_network() {
        let mut config = AppConfig::default();
        config.location.latitude = Some(39.92);
        config.location.longitude = Some(32.85);
        config.location.ip_lookup = false;
        let locator = Locator::from_config(&config).unwrap();
        assert_eq!(locator.locate().await, Some(Position::new(39.92, 32.85)));
    }

    #[tokio::test]
    async fn nothing_configured_is_unavailable() {
        let mut config = AppConfig::default();
        config.location.ip_lookup = false;
        let locator = Locator::from_config(&config).unwrap();
        assert_eq!(locator.locate().await, None);
    }
}
