//! Integration tests for the OpenAQ client using WireMock
//!
//! These tests mock the OpenAQ v2 API to verify lookups, memoization and the
//! raw measurement response without making actual API calls.

use openaq_dashboard::{
    CitySelection, LocationError, MeasurementError, OpenAq, OpenAqConfig, OpenAqError, Parameter,
};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn client_for(server: &MockServer) -> OpenAq {
    OpenAq::with_config(OpenAqConfig {
        base_url: format!("{}/v2", server.uri()),
        ..OpenAqConfig::default()
    })
    .expect("Failed to create client")
}

fn countries_response() -> serde_json::Value {
    serde_json::json!({
        "meta": { "name": "openaq-api", "found": 2 },
        "results": [
            { "code": "MY", "name": "Malaysia", "locations": 68 },
            { "code": "NL", "name": "Netherlands", "locations": 120 }
        ]
    })
}

fn cities_response(country: &str, names: &[&str]) -> serde_json::Value {
    let results: Vec<_> = names
        .iter()
        .map(|name| serde_json::json!({ "country": country, "city": name, "locations": 1 }))
        .collect();
    serde_json::json!({ "meta": {}, "results": results })
}

// =============================================================================
// Country Lookup Tests
// =============================================================================

#[tokio::test]
async fn test_countries_returns_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/countries"))
        .and(query_param("limit", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countries_response()))
        .expect(1)
        .mount(&server)
        .await;

    let countries = client_for(&server).countries().await.unwrap();
    let codes: Vec<&str> = countries.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["MY", "NL"]);
}

#[tokio::test]
async fn test_countries_are_memoized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countries_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.countries().await.unwrap();
    let second = client.countries().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_countries_non_200_is_empty_and_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/countries"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.countries().await.unwrap().is_empty());
    assert!(client.countries().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_countries_malformed_json_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let result = client_for(&server).countries().await;
    assert!(matches!(
        result,
        Err(OpenAqError::Location(LocationError::JsonParse { .. }))
    ));
}

// =============================================================================
// City Lookup Tests
// =============================================================================

#[tokio::test]
async fn test_cities_are_memoized_per_country() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/cities"))
        .and(query_param("country_id", "MY"))
        .and(query_param("limit", "200"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(cities_response("MY", &["Kuala Lumpur", "Ipoh"])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/cities"))
        .and(query_param("country_id", "NL"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(cities_response("NL", &["Utrecht"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let my = client.cities("MY").await.unwrap();
    let nl = client.cities("NL").await.unwrap();
    let my_again = client.cities("MY").await.unwrap();

    assert_eq!(my.len(), 2);
    assert_eq!(nl[0].city, "Utrecht");
    assert_eq!(my, my_again);
}

#[tokio::test]
async fn test_cities_not_found_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/cities"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(client_for(&server).cities("XX").await.unwrap().is_empty());
}

// =============================================================================
// Measurement Request Tests
// =============================================================================

#[tokio::test]
async fn test_measurements_return_raw_non_200_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/measurements"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({ "detail": "Not Found" })),
        )
        .mount(&server)
        .await;

    let response = client_for(&server)
        .measurements()
        .country("MY")
        .call()
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 404);
    assert!(!response.is_success());
    assert!(response.body.contains("Not Found"));
}

#[tokio::test]
async fn test_measurements_send_all_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/measurements"))
        .and(query_param("country_id", "MY"))
        .and(query_param("city", "Kuala Lumpur"))
        .and(query_param("parameter", "no2"))
        .and(query_param("limit", "100"))
        .and(query_param("sort", "desc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .measurements()
        .country("MY")
        .city(CitySelection::Named("Kuala Lumpur".to_string()))
        .parameter(Parameter::No2)
        .call()
        .await
        .unwrap();

    assert!(response.is_success());
    assert!(response.results().unwrap().is_empty());
}

#[tokio::test]
async fn test_api_key_is_sent_as_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/countries"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countries_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAq::with_config(OpenAqConfig {
        base_url: format!("{}/v2/", server.uri()),
        api_key: Some("test-key".to_string()),
        ..OpenAqConfig::default()
    })
    .unwrap();

    assert_eq!(client.countries().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_no_content_is_not_a_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/measurements"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .measurements()
        .country("MY")
        .call()
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 204);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    // Bind then release a port so nothing listens on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("Failed to reserve a port")
        .port();

    let client = OpenAq::with_config(OpenAqConfig {
        base_url: format!("http://127.0.0.1:{port}/v2/"),
        timeout_secs: 2,
        ..OpenAqConfig::default()
    })
    .unwrap();

    let result = client.measurements().country("MY").call().await;
    assert!(matches!(
        result,
        Err(OpenAqError::Measurement(MeasurementError::NetworkRequest(..)))
    ));
}
