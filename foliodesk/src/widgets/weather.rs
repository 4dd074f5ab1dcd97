//! Header weather readout
//!
//! Fetches current conditions from Open-Meteo on a background thread and
//! refreshes every 30 minutes. The UI thread only ever polls an mpsc
//! channel, so a slow network never stalls a frame.

use foliocore::theme::FolioColors;
use serde::Deserialize;
use std::sync::mpsc;
use std::time::{Duration, Instant};

const REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("response missing current weather block")]
    MissingCurrent,
    #[error("worker thread dropped without reporting")]
    WorkerGone,
}

#[derive(Debug, Clone, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
    daily: Option<Daily>,
}

#[derive(Debug, Clone, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: u8,
}

#[derive(Debug, Clone, Deserialize)]
struct Daily {
    precipitation_probability_max: Vec<Option<u8>>,
}

/// One fetched observation.
#[derive(Debug, Clone)]
pub struct Conditions {
    pub temperature_c: f64,
    pub weathercode: u8,
    pub rain_chance: Option<u8>,
}

/// Map an Open-Meteo WMO weather code to a display glyph.
pub fn weather_icon(code: u8) -> &'static str {
    match code {
        0 => "☀",
        1 | 2 => "⛅",
        3 => "☁",
        45 | 48 => "🌫",
        51..=67 => "🌦",
        71..=77 | 85 | 86 => "🌨",
        80..=82 => "🌧",
        95..=99 => "⛈",
        _ => "🌡",
    }
}

pub struct WeatherWidget {
    latitude: f64,
    longitude: f64,
    place: String,
    conditions: Option<Conditions>,
    failed: bool,
    inflight: Option<mpsc::Receiver<Result<Conditions, WeatherError>>>,
    last_fetch: Option<Instant>,
}

impl WeatherWidget {
    pub fn new(latitude: f64, longitude: f64, place: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            place: place.into(),
            conditions: None,
            failed: false,
            inflight: None,
            last_fetch: None,
        }
    }

    /// Poll the worker and kick off a refresh when the data is stale.
    /// Returns `true` when new data arrived this call.
    pub fn poll(&mut self) -> bool {
        let mut fresh = false;

        if let Some(rx) = &self.inflight {
            match rx.try_recv() {
                Ok(Ok(conditions)) => {
                    tracing::debug!(temp = conditions.temperature_c, "weather updated");
                    self.conditions = Some(conditions);
                    self.failed = false;
                    self.inflight = None;
                    fresh = true;
                }
                Ok(Err(err)) => {
                    tracing::warn!(%err, "weather fetch failed");
                    self.failed = true;
                    self.inflight = None;
                    fresh = true;
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::warn!("{}", WeatherError::WorkerGone);
                    self.failed = true;
                    self.inflight = None;
                }
            }
        }

        let stale = self
            .last_fetch
            .map_or(true, |t| t.elapsed() >= REFRESH_INTERVAL);
        if stale && self.inflight.is_none() {
            self.spawn_fetch();
        }

        fresh
    }

    fn spawn_fetch(&mut self) {
        let (tx, rx) = mpsc::channel();
        let lat = self.latitude;
        let lon = self.longitude;
        self.inflight = Some(rx);
        self.last_fetch = Some(Instant::now());

        std::thread::spawn(move || {
            // Receiver may be gone if the app shut down mid-fetch.
            let _ = tx.send(fetch(lat, lon));
        });
    }

    pub fn draw(&self, ui: &mut egui::Ui, colors: &FolioColors) {
        match &self.conditions {
            Some(c) => {
                ui.label(egui::RichText::new(weather_icon(c.weathercode)).size(15.0));
                ui.label(format!("{:.0}°C", c.temperature_c));
                if let Some(rain) = c.rain_chance {
                    ui.label(
                        egui::RichText::new(format!("💧{rain}%"))
                            .small()
                            .color(colors.text_dim),
                    );
                }
                ui.label(
                    egui::RichText::new(&self.place)
                        .small()
                        .color(colors.text_dim),
                );
            }
            None if self.failed => {
                ui.label(
                    egui::RichText::new("weather unavailable")
                        .small()
                        .color(colors.text_dim),
                );
            }
            None => {
                ui.label(
                    egui::RichText::new("fetching weather…")
                        .small()
                        .color(colors.text_dim),
                );
            }
        }
    }
}

fn fetch(lat: f64, lon: f64) -> Result<Conditions, WeatherError> {
    let url = format!(
        "https://api.open-meteo.com/v1/forecast?latitude={lat}&longitude={lon}\
         &current_weather=true&daily=precipitation_probability_max\
         &timezone=auto&forecast_days=1"
    );
    let response: ForecastResponse = reqwest::blocking::get(url)?.error_for_status()?.json()?;
    parse_conditions(response)
}

fn parse_conditions(response: ForecastResponse) -> Result<Conditions, WeatherError> {
    let current = response.current_weather.ok_or(WeatherError::MissingCurrent)?;
    let rain_chance = response
        .daily
        .and_then(|d| d.precipitation_probability_max.first().copied())
        .flatten();
    Ok(Conditions {
        temperature_c: current.temperature,
        weathercode: current.weathercode,
        rain_chance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_response() {
        let json = r#"{
            "current_weather": {"temperature": 21.4, "weathercode": 2},
            "daily": {"precipitation_probability_max": [65]}
        }"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        let c = parse_conditions(response).unwrap();
        assert_eq!(c.weathercode, 2);
        assert_eq!(c.rain_chance, Some(65));
        assert!((c.temperature_c - 21.4).abs() < 1e-9);
    }

    #[test]
    fn missing_current_block_is_an_error() {
        let json = r#"{"daily": {"precipitation_probability_max": [10]}}"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            parse_conditions(response),
            Err(WeatherError::MissingCurrent)
        ));
    }

    #[test]
    fn missing_daily_block_still_yields_conditions() {
        let json = r#"{"current_weather": {"temperature": 18.0, "weathercode": 0}}"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        let c = parse_conditions(response).unwrap();
        assert_eq!(c.rain_chance, None);
    }

    #[test]
    fn icons_cover_the_wmo_code_groups() {
        assert_eq!(weather_icon(0), "☀");
        assert_eq!(weather_icon(3), "☁");
        assert_eq!(weather_icon(48), "🌫");
        assert_eq!(weather_icon(61), "🌦");
        assert_eq!(weather_icon(75), "🌨");
        assert_eq!(weather_icon(81), "🌧");
        assert_eq!(weather_icon(96), "⛈");
        assert_eq!(weather_icon(42), "🌡");
    }
}
