//! Client for the simulated community backend.
//!
//! Every capability here is a fixed timer plus a static payload standing
//! in for a real service. The session store never sees this module;
//! swapping the stubs for real requests is the designed upgrade path.

use gloo_timers::future::TimeoutFuture;
use once_cell::unsync::OnceCell;
use shared::models::{
    AssistantReply, CurrentConditions, DailyForecast, HourlyForecast, WeatherReport,
};
use thiserror::Error;

/// Simulated latency for city provisioning, in milliseconds.
const PROVISION_DELAY_MS: u32 = 2_000;
/// Simulated latency for assistant replies, in milliseconds.
const ASSISTANT_DELAY_MS: u32 = 2_000;
/// Simulated latency for weather reports, in milliseconds.
const WEATHER_DELAY_MS: u32 = 1_000;

thread_local! {
    static SHARED_CLIENT: OnceCell<CommunityClient> = OnceCell::new();
}

/// Failure surface of the community backend capability.
///
/// The stubs never fail, but callers already handle the error path so a
/// real backend can slot in without touching them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The named service did not produce a response.
    #[error("the {0} service is unavailable")]
    Unavailable(&'static str),
}

/// Lightweight client for Community Nexus backend interactions.
#[derive(Debug, Clone, Default)]
pub struct CommunityClient;

impl CommunityClient {
    /// Create a new client.
    pub fn new() -> Self {
        Self
    }

    /// Process-wide client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(Self::new).clone())
    }

    /// Provision the platform for a community. Stubbed setup work.
    pub async fn provision_city(&self, _name: &str) -> Result<(), ApiError> {
        TimeoutFuture::new(PROVISION_DELAY_MS).await;
        Ok(())
    }

    /// Ask the community assistant a question.
    pub async fn ask_assistant(&self, city: &str, query: &str) -> Result<AssistantReply, ApiError> {
        TimeoutFuture::new(ASSISTANT_DELAY_MS).await;
        Ok(AssistantReply {
            answer: format!(
                "Based on my knowledge of {city}, here's what I found about \"{query}\". \
                 This is a simulated response standing in for an answer service that \
                 combines the local database with live search."
            ),
            sources: vec![
                "City Database".to_string(),
                "Local News".to_string(),
                "Government Records".to_string(),
            ],
            confidence: 0.85,
            follow_up: vec![
                "Tell me more about this".to_string(),
                "What are the hours?".to_string(),
                "How do I get there?".to_string(),
            ],
        })
    }

    /// Fetch the weather report for the community.
    pub async fn fetch_weather(&self, _city: &str) -> Result<WeatherReport, ApiError> {
        TimeoutFuture::new(WEATHER_DELAY_MS).await;
        Ok(sample_report())
    }
}

fn sample_report() -> WeatherReport {
    WeatherReport {
        current: CurrentConditions {
            temp_f: 72,
            feels_like_f: 75,
            humidity: 65,
            wind_mph: 8,
            uv_index: 4,
            condition: "Partly Cloudy".to_string(),
            icon: "🌤️".to_string(),
        },
        daily: [
            ("Today", 75, 64, "🌤️", "Partly Cloudy", 20),
            ("Tomorrow", 78, 66, "☀️", "Sunny", 0),
            ("Wed", 82, 68, "☀️", "Sunny", 0),
            ("Thu", 77, 65, "🌧️", "Rain", 80),
            ("Fri", 73, 62, "⛅", "Mostly Cloudy", 30),
        ]
        .into_iter()
        .map(
            |(day, high_f, low_f, icon, condition, precipitation)| DailyForecast {
                day: day.to_string(),
                high_f,
                low_f,
                icon: icon.to_string(),
                condition: condition.to_string(),
                precipitation,
            },
        )
        .collect(),
        hourly: [
            ("12 PM", 72, "🌤️", 10),
            ("1 PM", 73, "🌤️", 10),
            ("2 PM", 74, "🌤️", 20),
            ("3 PM", 75, "🌤️", 30),
            ("4 PM", 74, "⛅", 20),
            ("5 PM", 73, "⛅", 10),
            ("6 PM", 71, "⛅", 10),
            ("7 PM", 70, "🌙", 0),
        ]
        .into_iter()
        .map(|(time, temp_f, icon, precipitation)| HourlyForecast {
            time: time.to_string(),
            temp_f,
            icon: icon.to_string(),
            precipitation,
        })
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_report_shape() {
        let report = sample_report();
        assert_eq!(report.daily.len(), 5);
        assert_eq!(report.hourly.len(), 8);
        assert_eq!(report.current.condition, "Partly Cloudy");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_assistant_reply_mentions_city_and_query() {
        let client = CommunityClient::shared();
        let reply = client
            .ask_assistant("Springfield", "where is city hall?")
            .await
            .expect("stub reply");
        assert!(reply.answer.contains("Springfield"));
        assert!(reply.answer.contains("where is city hall?"));
        assert!(!reply.sources.is_empty());
    }
}
