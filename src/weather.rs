// src/weather.rs
// Optional, decorative Vilnius weather line from open-meteo. Every failure is
// absorbed to `None`; the digest never waits on weather beyond one bounded
// call.

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

const VILNIUS_LAT: f64 = 54.6872;
const VILNIUS_LON: f64 = 25.2797;

#[derive(Debug, Default, Deserialize)]
struct Forecast {
    #[serde(default)]
    current: Current,
    #[serde(default)]
    daily: Daily,
}

#[derive(Debug, Default, Deserialize)]
struct Current {
    temperature_2m: Option<f64>,
    wind_speed_10m: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct Daily {
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
}

/// Short localized line like
/// "Vilnius: dabar 2°C, vėjas 4 m/s, šiandien 0…4°C." or `None`.
pub async fn vilnius_weather_summary(enabled: bool) -> Option<String> {
    if !enabled {
        return None;
    }
    match fetch_summary().await {
        Ok(line) => line,
        Err(e) => {
            debug!(error = ?e, "weather fetch failed");
            None
        }
    }
}

async fn fetch_summary() -> Result<Option<String>> {
    let url = format!(
        "https://api.open-meteo.com/v1/forecast\
         ?latitude={VILNIUS_LAT}&longitude={VILNIUS_LON}\
         &current=temperature_2m,wind_speed_10m\
         &daily=temperature_2m_max,temperature_2m_min\
         &timezone=Europe%2FVilnius"
    );
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(20))
        .build()?;
    let data: Forecast = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(compose_line(&data))
}

fn compose_line(data: &Forecast) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(t) = data.current.temperature_2m {
        parts.push(format!("dabar {t}°C"));
    }
    if let Some(w) = data.current.wind_speed_10m {
        parts.push(format!("vėjas {w} m/s"));
    }
    let tmin = data.daily.temperature_2m_min.first().copied().flatten();
    let tmax = data.daily.temperature_2m_max.first().copied().flatten();
    if let (Some(tmin), Some(tmax)) = (tmin, tmax) {
        parts.push(format!("šiandien {tmin}…{tmax}°C"));
    }
    if parts.is_empty() {
        return None;
    }
    Some(format!("Vilnius: {}.", parts.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_composes_an_open_meteo_payload() {
        let payload = r#"{
            "current": {"temperature_2m": 2.5, "wind_speed_10m": 4.0},
            "daily": {"temperature_2m_max": [4.0], "temperature_2m_min": [0.0]}
        }"#;
        let data: Forecast = serde_json::from_str(payload).unwrap();
        assert_eq!(
            compose_line(&data).unwrap(),
            "Vilnius: dabar 2.5°C, vėjas 4 m/s, šiandien 0…4°C."
        );
    }

    #[test]
    fn composes_available_parts_only() {
        let data = Forecast {
            current: Current {
                temperature_2m: Some(2.5),
                wind_speed_10m: None,
            },
            daily: Daily {
                temperature_2m_max: vec![Some(4.0)],
                temperature_2m_min: vec![Some(0.0)],
            },
        };
        assert_eq!(
            compose_line(&data).unwrap(),
            "Vilnius: dabar 2.5°C, šiandien 0…4°C."
        );
    }

    #[test]
    fn missing_blocks_yield_none() {
        let data: Forecast = serde_json::from_str("{}").unwrap();
        assert_eq!(compose_line(&data), None);
    }
}
