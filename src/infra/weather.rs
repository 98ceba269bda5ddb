//! Thin asynchronous client for the OpenWeatherMap current-weather endpoint.
//!
//! One request per lookup: no retry, no caching. Navigating back into the
//! weather view re-fetches even for the same city.

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::WeatherReport;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/";
const USER_AGENT: &str = "travel-planner/0.1.0";

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Transport or decode failure; the provider was never reached or its
    /// answer was unreadable.
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    /// The provider answered but reported a non-success code for the city.
    #[error("no weather data for '{city}': {message}")]
    NotFound { city: String, message: String },
}

#[derive(Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base: &str) -> Result<Self, WeatherError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Fetches current weather for `city` in metric units.
    ///
    /// The provider signals "city not found" through the `cod` field of the
    /// body, so the body is parsed for every response rather than bailing
    /// on non-2xx statuses.
    pub async fn fetch(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let mut url = self.base_url.join("weather")?;
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("appid", &self.api_key)
            .append_pair("units", "metric");

        let envelope: WeatherEnvelope = self.http.get(url).send().await?.json().await?;
        envelope.into_report(city)
    }
}

/// Success and error envelope of the current-weather endpoint. `cod` arrives
/// as a number on success and a string on errors.
#[derive(Debug, Deserialize)]
struct WeatherEnvelope {
    #[serde(deserialize_with = "string_from_json")]
    cod: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    main: Option<MainDto>,
    #[serde(default)]
    weather: Vec<ConditionDto>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainDto {
    temp: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionDto {
    description: String,
}

impl WeatherEnvelope {
    fn into_report(self, requested_city: &str) -> Result<WeatherReport, WeatherError> {
        if self.cod != "200" {
            return Err(WeatherError::NotFound {
                city: requested_city.to_string(),
                message: self
                    .message
                    .unwrap_or_else(|| format!("provider code {}", self.cod)),
            });
        }
        let Some(main) = self.main else {
            return Err(WeatherError::NotFound {
                city: requested_city.to_string(),
                message: "response missing weather data".to_string(),
            });
        };
        Ok(WeatherReport {
            city: self.name.unwrap_or_else(|| requested_city.to_string()),
            temperature_c: main.temp,
            description: self
                .weather
                .into_iter()
                .next()
                .map(|condition| condition.description)
                .unwrap_or_default(),
            humidity_percent: main.humidity,
        })
    }
}

fn string_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct StringOrNumber;

    impl<'de> serde::de::Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}
