//! OpenWeatherMap current-conditions provider.
//!
//! One city per query, metric units. The list holds a single item and the
//! detail view is built straight from it.

use async_trait::async_trait;
use chrono::DateTime;
use log::info;
use serde::Deserialize;

use crate::provider::http::{build_client, send_json};
use crate::provider::{
    AdapterConfig, Capabilities, DetailRecord, FilterFields, ProviderAdapter, ProviderError,
    ResourceItem,
};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_CITY: &str = "Jalandhar";

// ============================================================================
// OpenWeatherMap API Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct CurrentWeather {
    #[serde(default)]
    id: Option<u64>,
    name: String,
    #[serde(default)]
    dt: Option<i64>,
    #[serde(default)]
    sys: Option<Sys>,
    #[serde(default)]
    weather: Vec<Condition>,
    main: Main,
    #[serde(default)]
    wind: Option<Wind>,
    #[serde(default)]
    visibility: Option<f64>,
    #[serde(default)]
    clouds: Option<Clouds>,
}

#[derive(Deserialize, Debug)]
struct Sys {
    country: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Condition {
    description: String,
}

#[derive(Deserialize, Debug)]
struct Main {
    temp: f64,
    feels_like: Option<f64>,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    pressure: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct Wind {
    speed: Option<f64>,
    deg: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct Clouds {
    all: Option<f64>,
}

// ============================================================================
// Translation Layer
// ============================================================================

fn celsius(t: f64) -> String {
    format!("{}°C", t.round() as i64)
}

fn to_item(w: CurrentWeather) -> ResourceItem {
    let country = w.sys.and_then(|s| s.country);
    let title = match &country {
        Some(c) => format!("{}, {}", w.name, c),
        None => w.name.clone(),
    };
    let id = w.id.map(|id| id.to_string()).unwrap_or_else(|| w.name.clone());
    let conditions = w.weather.into_iter().next().map(|c| c.description);
    let observed = w
        .dt
        .and_then(|dt| DateTime::from_timestamp(dt, 0))
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string());

    ResourceItem::new(id, title)
        .with_field("city", w.name)
        .with_optional_field("country", country)
        .with_optional_field("conditions", conditions)
        .with_field("temperature", celsius(w.main.temp))
        .with_optional_field("feels_like", w.main.feels_like.map(celsius))
        .with_optional_field("humidity", w.main.humidity.map(|h| format!("{h}%")))
        .with_optional_field(
            "wind_speed",
            w.wind.as_ref().and_then(|wd| wd.speed).map(|s| format!("{s} m/s")),
        )
        .with_optional_field(
            "wind_direction",
            w.wind.as_ref().and_then(|wd| wd.deg).map(|d| format!("{d}°")),
        )
        .with_optional_field("pressure", w.main.pressure.map(|p| format!("{p} hPa")))
        .with_optional_field(
            "visibility",
            w.visibility.map(|v| format!("{:.1} km", v / 1000.0)),
        )
        .with_optional_field("min_temp", w.main.temp_min.map(celsius))
        .with_optional_field("max_temp", w.main.temp_max.map(celsius))
        .with_optional_field(
            "cloud_coverage",
            w.clouds.and_then(|c| c.all).map(|c| format!("{c}%")),
        )
        .with_optional_field("observed_at", observed)
}

/// Display labels for the fields `to_item` emits, in display order.
const FACT_LABELS: &[(&str, &str)] = &[
    ("temperature", "Temperature"),
    ("feels_like", "Feels like"),
    ("humidity", "Humidity"),
    ("wind_speed", "Wind speed"),
    ("wind_direction", "Wind direction"),
    ("pressure", "Pressure"),
    ("visibility", "Visibility"),
    ("min_temp", "Min temp"),
    ("max_temp", "Max temp"),
    ("cloud_coverage", "Cloud coverage"),
    ("observed_at", "Observed"),
];

// ============================================================================
// Provider Implementation
// ============================================================================

pub struct WeatherProvider {
    config: AdapterConfig,
    client: reqwest::Client,
}

impl WeatherProvider {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            client: build_client(&config),
            config,
        }
    }
}

#[async_trait]
impl ProviderAdapter for WeatherProvider {
    fn name(&self) -> &str {
        "weather"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            requires_non_empty_query: true,
            has_separate_detail_fetch: false,
            has_category_list: false,
            local_text_search: false,
        }
    }

    fn filter_fields(&self) -> FilterFields {
        FilterFields::new(&["title", "conditions"], None)
    }

    fn default_query(&self) -> Option<&str> {
        self.config.default_query.as_deref()
    }

    async fn fetch_list(&self, query: &str) -> Result<Vec<ResourceItem>, ProviderError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            ProviderError::Config(
                "OpenWeather API key is not set (config file or OPENWEATHER_API_KEY)".to_string(),
            )
        })?;

        info!("Weather request: city={}", query);

        let request = self
            .client
            .get(format!("{}/weather", self.config.base()))
            .query(&[("q", query), ("appid", api_key), ("units", "metric")]);

        let current: CurrentWeather = send_json(self.name(), request).await.map_err(|e| match e {
            ProviderError::Api { status: 404, .. } => ProviderError::Api {
                status: 404,
                message: "City not found. Please check the spelling and try again.".to_string(),
            },
            ProviderError::Api { status: 401, .. } => ProviderError::Api {
                status: 401,
                message: "Invalid API key.".to_string(),
            },
            other => other,
        })?;

        Ok(vec![to_item(current)])
    }

    fn detail_from_item(&self, item: &ResourceItem) -> DetailRecord {
        let mut detail = DetailRecord::new(item.id.clone(), item.display_title.clone());
        detail.subtitle = item.field("conditions").map(str::to_string);
        for (key, label) in FACT_LABELS {
            detail = detail.optional_fact(label, item.field(key));
        }
        detail
    }
}
