use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

use crate::alerts::{AlertResponse, WeatherAlert};
use crate::config::Config;
use crate::constants::LOCATION_SEARCH_LIMIT;
use crate::error::WeatherError;
use crate::forecast::{CurrentConditions, DailyForecast, ForecastBundle, HourlyForecast, Location};
use crate::models::{
    AlertCollection, LocationResult, LocationSearchResponse, OpenMeteoCurrentResponse,
    OpenMeteoDailyResponse, OpenMeteoHourlyResponse, ReverseGeocodeResponse,
};

/// Variables requested for current conditions
pub const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,is_day,weather_code,wind_speed_10m,relative_humidity_2m,precipitation_probability";

/// Variables requested per hour
pub const HOURLY_FIELDS: &str = "temperature_2m,weather_code,wind_speed_10m,precipitation_probability";

/// Variables requested per day
pub const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max,relative_humidity_2m_mean";

/// Best-effort HTTP access to the forecast, geocoding and alert sources.
/// One fetch per call, no retries and no caching.
#[derive(Clone)]
pub struct WeatherClient {
    client: Arc<Client>,
    config: Arc<Config>,
}

impl WeatherClient {
    pub fn new(config: Config) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, WeatherError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Every window asks for the location's own timezone, so timestamps come
    /// back with the local offset
    fn forecast_url(&self, latitude: f64, longitude: f64, params: &str) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&{}&temperature_unit=fahrenheit&wind_speed_unit=mph&timeformat=unixtime&timezone=auto",
            self.config.open_meteo_url, latitude, longitude, params
        )
    }

    /// Current conditions in Fahrenheit and mph
    pub async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        let url = self.forecast_url(latitude, longitude, &format!("current={}", CURRENT_FIELDS));
        self.make_request::<OpenMeteoCurrentResponse>(&url)
            .await?
            .into_current()
    }

    pub async fn fetch_hourly(
        &self,
        latitude: f64,
        longitude: f64,
        hours: u32,
    ) -> Result<Vec<HourlyForecast>, WeatherError> {
        let url = self.forecast_url(
            latitude,
            longitude,
            &format!("hourly={}&forecast_hours={}", HOURLY_FIELDS, hours),
        );
        self.make_request::<OpenMeteoHourlyResponse>(&url)
            .await?
            .into_hourly(hours as usize)
    }

    pub async fn fetch_daily(
        &self,
        latitude: f64,
        longitude: f64,
        days: u32,
    ) -> Result<Vec<DailyForecast>, WeatherError> {
        let url = self.forecast_url(
            latitude,
            longitude,
            &format!("daily={}&forecast_days={}", DAILY_FIELDS, days),
        );
        self.make_request::<OpenMeteoDailyResponse>(&url)
            .await?
            .into_daily(days as usize)
    }

    /// Current, hourly and daily windows fetched side by side
    pub async fn fetch_bundle(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastBundle, WeatherError> {
        let (current, hourly, daily) = tokio::try_join!(
            self.fetch_current(latitude, longitude),
            self.fetch_hourly(latitude, longitude, self.config.forecast_hours),
            self.fetch_daily(latitude, longitude, self.config.forecast_days),
        )?;

        tracing::info!(
            "Fetched forecast bundle: {} hours, {} days",
            hourly.len(),
            daily.len()
        );
        Ok(ForecastBundle::aggregate(current, hourly, daily))
    }

    /// Bundle plus place name. A geocoding miss leaves the name empty; a
    /// forecast failure fails the whole call.
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(Location, ForecastBundle), WeatherError> {
        let (bundle, name) = tokio::join!(
            self.fetch_bundle(latitude, longitude),
            self.fetch_city_name(latitude, longitude),
        );
        Ok((Location::new(latitude, longitude).with_name(name), bundle?))
    }

    /// Reverse geocode to "City, ST". Returns `None` on any failure.
    pub async fn fetch_city_name(&self, latitude: f64, longitude: f64) -> Option<String> {
        let url = format!(
            "{}/reverse-geocode-client?latitude={}&longitude={}&localityLanguage=en",
            self.config.reverse_geocode_url, latitude, longitude
        );

        match self.make_request::<ReverseGeocodeResponse>(&url).await {
            Ok(body) => {
                let name = body.place_name();
                tracing::info!("Reverse geocoded to: {}", name);
                Some(name)
            }
            Err(e) => {
                tracing::warn!("Error fetching city name: {}", e);
                None
            }
        }
    }

    /// Place search by name. Blank queries and failures both give an empty list.
    pub async fn search_locations(&self, query: &str) -> Vec<LocationResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.request_search(query).await {
            Ok(body) => body.results.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Failed to search cities: {}", e);
                Vec::new()
            }
        }
    }

    async fn request_search(&self, query: &str) -> Result<LocationSearchResponse, WeatherError> {
        let url = format!("{}/search", self.config.geocoding_url);
        let limit = LOCATION_SEARCH_LIMIT.to_string();
        tracing::debug!("GET {} name={}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&[("name", query), ("count", limit.as_str()), ("language", "en")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }
        Ok(response.json::<LocationSearchResponse>().await?)
    }

    /// Active NOAA alerts at a point. Only covers US locations; elsewhere the
    /// API answers with an error status, which reads as "no alerts".
    pub async fn fetch_alerts(&self, latitude: f64, longitude: f64) -> AlertResponse {
        let url = format!(
            "{}/alerts/active?point={},{}",
            self.config.nws_url, latitude, longitude
        );

        match self.make_request::<AlertCollection>(&url).await {
            Ok(collection) => {
                let alerts: Vec<WeatherAlert> =
                    collection.features.into_iter().map(WeatherAlert::from).collect();
                AlertResponse::new(alerts)
            }
            Err(WeatherError::Status(status)) => {
                tracing::warn!("NOAA API responded with status {}", status);
                AlertResponse::empty()
            }
            Err(e) => {
                tracing::error!("Error fetching weather alerts: {}", e);
                AlertResponse::failed(e.to_string())
            }
        }
    }
}
