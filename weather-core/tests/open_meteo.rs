//! Integration tests for the Open-Meteo provider and the search flow using wiremock.

use weather_core::{
    LookupError, OpenMeteoProvider, Surface, UiState, WeatherCategory, WeatherLookup,
    WeatherProvider, resolve, ui::DisplayModel,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORECAST_PATH: &str = "/v1/forecast";

fn provider_for(server: &MockServer) -> OpenMeteoProvider {
    OpenMeteoProvider::with_base_url(format!("{}{FORECAST_PATH}", server.uri()))
}

fn current_weather(temperature: f64, windspeed: f64, weathercode: i32) -> serde_json::Value {
    serde_json::json!({
        "latitude": 51.5,
        "longitude": -0.120000124,
        "generationtime_ms": 0.05,
        "current_weather": {
            "temperature": temperature,
            "windspeed": windspeed,
            "winddirection": 250.0,
            "weathercode": weathercode,
            "time": "2024-05-01T12:00"
        }
    })
}

#[derive(Debug, Default)]
struct Frames(Vec<DisplayModel>);

impl Surface for Frames {
    fn render(&mut self, display: &DisplayModel) {
        self.0.push(display.clone());
    }
}

#[tokio::test]
async fn test_sends_coordinates_and_current_weather_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .and(query_param("latitude", "51.5074"))
        .and(query_param("longitude", "-0.1278"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather(15.2, 10.0, 0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let london = resolve("london").unwrap();

    let result = provider.current_weather(london).await.unwrap();

    assert_eq!(result.city, "London, UK");
    assert_eq!(result.temperature, 15.2);
    assert_eq!(result.wind_speed, 10.0);
    assert_eq!(result.weather_code, 0);
    assert!(result.observed_at.is_some());
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.current_weather(resolve("tokyo").unwrap()).await.unwrap_err();

    assert!(matches!(err, LookupError::ApiError { status } if status.as_u16() == 500));
    assert!(err.to_string().contains("500"), "Error should mention 500 status: {err}");
}

#[tokio::test]
async fn test_missing_current_weather_is_no_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 35.7,
            "longitude": 139.6
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.current_weather(resolve("tokyo").unwrap()).await.unwrap_err();

    assert!(matches!(err, LookupError::NoData { .. }));
}

#[tokio::test]
async fn test_non_json_success_is_no_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.current_weather(resolve("paris").unwrap()).await.unwrap_err();

    assert!(matches!(err, LookupError::NoData { .. }));
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    // Nothing listens on port 1.
    let provider = OpenMeteoProvider::with_base_url("http://127.0.0.1:1/v1/forecast");
    let err = provider.current_weather(resolve("sydney").unwrap()).await.unwrap_err();

    assert!(matches!(err, LookupError::Network(_)));
    assert_eq!(err.user_message(), "Network error. Check your connection and try again.");
}

#[tokio::test]
async fn test_end_to_end_london_renders_clear_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current_weather": { "temperature": 15.2, "windspeed": 10.0, "weathercode": 0 }
        })))
        .mount(&mock_server)
        .await;

    let mut lookup = WeatherLookup::new(provider_for(&mock_server), Frames::default());
    let state = lookup.submit("London").await.clone();

    let UiState::Result(view) = state else { panic!("expected a result, got {state:?}") };
    assert_eq!(view.city, "London, UK");
    assert_eq!(view.temperature, "15.2");
    assert_eq!(view.wind_speed, "10.0");
    assert_eq!(view.category, WeatherCategory::Clear);
    assert_eq!(view.icon_uri, weather_core::icon_for(WeatherCategory::Clear).data_uri);
    assert_eq!(view.observed_at, None);

    let frames = &lookup.surface().0;
    assert_eq!(frames.len(), 2);
    assert!(!frames[0].submit_enabled);
    assert!(frames[1].submit_enabled);
}

#[tokio::test]
async fn test_end_to_end_unknown_city_never_hits_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather(1.0, 1.0, 0)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut lookup = WeatherLookup::new(provider_for(&mock_server), Frames::default());
    let state = lookup.submit("Atlantis").await.clone();

    assert_eq!(
        state,
        UiState::Error(
            "City not found. Try Nairobi, London, New York, Tokyo, Paris, or Sydney.".to_string()
        )
    );
    // MockServer verifies `.expect(0)` on drop.
}

#[tokio::test]
async fn test_end_to_end_server_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut lookup = WeatherLookup::new(provider_for(&mock_server), Frames::default());
    let state = lookup.submit("new york").await.clone();

    assert_eq!(
        state,
        UiState::Error(
            "The weather service did not respond. Please try again in a moment.".to_string()
        )
    );
    assert!(lookup.surface().0.last().unwrap().submit_enabled);
}

#[tokio::test]
async fn test_end_to_end_missing_payload_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let mut lookup = WeatherLookup::new(provider_for(&mock_server), Frames::default());
    let state = lookup.submit("  NAIROBI ").await.clone();

    assert_eq!(
        state,
        UiState::Error("Weather data is missing right now. Please try another city.".to_string())
    );
}
