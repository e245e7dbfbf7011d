//! Current weather via OpenWeatherMap

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use super::ToolTrait;

const API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

pub struct WeatherTool {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl WeatherTool {
    /// Key from config, falling back to `OPENWEATHERMAP_API_KEY`.
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("OPENWEATHERMAP_API_KEY").ok())
            .filter(|k| !k.is_empty());
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    fn error_result(message: impl Into<String>) -> String {
        json!({
            "status": "error",
            "error_message": message.into()
        })
        .to_string()
    }

    async fn fetch(&self, city: &str, api_key: &str) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .get(API_URL)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await?;

        let data: Value = response.json().await?;

        // The API reports its own status in "cod" (a number or a string).
        let code = data["cod"].as_i64().or_else(|| {
            data["cod"].as_str().and_then(|s| s.parse().ok())
        });
        if code != Some(200) {
            return Ok(Self::error_result(format!(
                "Weather information for '{}' is not available.",
                city
            )));
        }

        let description = data["weather"][0]["description"].as_str().unwrap_or("");
        let temperature = data["main"]["temp"].as_f64().unwrap_or(0.0);
        let report = format!(
            "The weather in {} is {} with a temperature of {} degrees Celsius.",
            city, description, temperature
        );
        Ok(json!({"status": "success", "report": report}).to_string())
    }
}

#[async_trait]
impl ToolTrait for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Retrieve the current weather report for a city. The city name must \
         be in English."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City name in English"
                }
            },
            "required": ["city"]
        })
    }

    async fn execute(
        &self,
        args: Value,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let city = match args["city"].as_str() {
            Some(city) if !city.trim().is_empty() => city.trim().to_string(),
            _ => return Ok(Self::error_result("Missing 'city' argument.")),
        };

        let api_key = match &self.api_key {
            Some(key) => key.clone(),
            None => {
                return Ok(Self::error_result(
                    "API key for OpenWeatherMap is not set.",
                ))
            }
        };

        debug!("fetching weather for {}", city);
        match self.fetch(&city, &api_key).await {
            Ok(result) => Ok(result),
            Err(e) => Ok(Self::error_result(format!(
                "An error occurred while fetching the weather data: {}",
                e
            ))),
        }
    }
}
