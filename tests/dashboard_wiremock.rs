//! End-to-end dashboard runs against a mocked OpenAQ API.

use openaq_dashboard::{
    chart_points, map_points, render, CitySelection, Dashboard, DashboardView, Diagnostic,
    MeasurementError, OpenAq, OpenAqConfig, OpenAqError, Parameter, Selection, TerminalSurface,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn dashboard_for(server: &MockServer) -> Dashboard {
    let client = OpenAq::with_config(OpenAqConfig {
        base_url: format!("{}/v2/", server.uri()),
        ..OpenAqConfig::default()
    })
    .expect("Failed to create client");
    Dashboard::new(client)
}

fn measurement(utc: &str, value: f64, coordinates: Option<(f64, f64)>) -> serde_json::Value {
    json!({
        "location": "Cheras",
        "parameter": "pm25",
        "value": value,
        "date": { "utc": utc },
        "unit": "µg/m³",
        "coordinates": coordinates.map(|(lat, lon)| json!({ "latitude": lat, "longitude": lon })),
        "country": "MY",
        "city": "Kuala Lumpur"
    })
}

async fn mount_measurements(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v2/measurements"))
        .respond_with(template)
        .mount(server)
        .await;
}

fn no_city_filter(request: &Request) -> bool {
    !request.url.query_pairs().any(|(key, _)| key == "city")
}

// =============================================================================
// Run Tests
// =============================================================================

#[tokio::test]
async fn test_three_rows_two_with_coordinates() {
    let server = MockServer::start().await;
    // Server order is newest first.
    let body = json!({
        "results": [
            measurement("2024-03-01T06:00:00+00:00", 30.0, Some((3.139, 101.687))),
            measurement("2024-03-01T05:00:00+00:00", 20.0, None),
            measurement("2024-03-01T04:00:00+00:00", 10.0, Some((3.101, 101.652))),
        ]
    });
    Mock::given(method("GET"))
        .and(path("/v2/measurements"))
        .and(query_param("country_id", "MY"))
        .and(query_param("parameter", "pm25"))
        .and(no_city_filter)
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let selection = Selection::new("MY", CitySelection::All, Parameter::Pm25);
    let view = dashboard_for(&server).run(&selection).await.unwrap();

    let report = view.report().expect("expected a report");
    assert_eq!(report.heading, "Air Quality in MY (PM25)");
    assert_eq!(report.caption, "Showing latest 3 measurements");
    assert_eq!(report.chart_title, "PM25 levels over time");

    let points = chart_points(&report.series).unwrap();
    assert_eq!(points.len(), 3);
    assert!(points.windows(2).all(|w| w[0].datetime <= w[1].datetime));
    assert_eq!(
        points.iter().map(|p| p.value).collect::<Vec<_>>(),
        [10.0, 20.0, 30.0]
    );

    let map = map_points(report.map.as_ref().expect("expected map points")).unwrap();
    assert_eq!(map.len(), 2);
}

#[tokio::test]
async fn test_empty_results_give_a_warning() {
    let server = MockServer::start().await;
    mount_measurements(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "meta": { "found": 0 }, "results": [] })),
    )
    .await;

    let selection = Selection::new("MY", "Ipoh", Parameter::O3);
    let view = dashboard_for(&server).run(&selection).await.unwrap();

    match view {
        DashboardView::NoData { warning } => {
            assert!(warning.contains("Ipoh"));
            assert!(warning.contains("O3"));
        }
        other => panic!("expected a warning, got {:?}", other),
    }
}

#[tokio::test]
async fn test_not_found_gives_error_with_json_diagnostic() {
    let server = MockServer::start().await;
    mount_measurements(
        &server,
        ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not Found" })),
    )
    .await;

    let view = dashboard_for(&server)
        .run(&Selection::default())
        .await
        .unwrap();

    match view {
        DashboardView::UpstreamError {
            status,
            message,
            diagnostic,
        } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "Failed to fetch data from OpenAQ API (HTTP 404)");
            assert_eq!(diagnostic, Diagnostic::Json(json!({ "detail": "Not Found" })));
        }
        other => panic!("expected an upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upstream_error_with_html_body_gives_text_notice() {
    let server = MockServer::start().await;
    mount_measurements(
        &server,
        ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
    )
    .await;

    let view = dashboard_for(&server)
        .run(&Selection::default())
        .await
        .unwrap();
    assert!(view.report().is_none());

    let mut surface = TerminalSurface::new(Vec::new());
    render(&view, &mut surface).unwrap();
    let text = String::from_utf8(surface.into_inner()).unwrap();
    assert!(text.contains("ERROR: Failed to fetch data from OpenAQ API (HTTP 502)"));
    assert!(text.contains("Response body is not valid JSON"));
    assert!(!text.contains("levels over time"));
}

#[tokio::test]
async fn test_no_content_gives_error_view() {
    let server = MockServer::start().await;
    mount_measurements(&server, ResponseTemplate::new(204)).await;

    let view = dashboard_for(&server)
        .run(&Selection::default())
        .await
        .unwrap();

    match view {
        DashboardView::UpstreamError {
            status, diagnostic, ..
        } => {
            assert_eq!(status.as_u16(), 204);
            assert_eq!(
                diagnostic,
                Diagnostic::Text("No response body (HTTP 204).".to_string())
            );
        }
        other => panic!("expected an upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_named_city_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/measurements"))
        .and(query_param("city", "Kuala Lumpur"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [measurement("2024-03-01T04:00:00Z", 12.0, None)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let selection = Selection::new("MY", "Kuala Lumpur", Parameter::Pm25);
    let view = dashboard_for(&server).run(&selection).await.unwrap();
    let report = view.report().expect("expected a report");
    assert_eq!(report.heading, "Air Quality in Kuala Lumpur (PM25)");
    assert!(report.map.is_none());
}

#[tokio::test]
async fn test_malformed_success_body_is_an_error() {
    let server = MockServer::start().await;
    mount_measurements(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "parameter": "pm25", "value": "n/a", "date": { "utc": "2024-03-01T04:00:00Z" } }]
        })),
    )
    .await;

    let result = dashboard_for(&server).run(&Selection::default()).await;
    assert!(matches!(
        result,
        Err(OpenAqError::Measurement(MeasurementError::JsonParse { .. }))
    ));
}

// =============================================================================
// Sidebar Tests
// =============================================================================

#[tokio::test]
async fn test_sidebar_falls_back_when_lookups_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/countries"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/cities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let sidebar = dashboard_for(&server).sidebar("MY").await.unwrap();
    assert_eq!(sidebar.countries, ["MY"]);
    assert_eq!(sidebar.cities, [CitySelection::All]);
    assert_eq!(sidebar.parameters, Parameter::ALL);
}

#[tokio::test]
async fn test_sidebar_lists_cities_after_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "code": "MY" }, { "code": "SG" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/cities"))
        .and(query_param("country_id", "MY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "city": "Kuala Lumpur", "country": "MY" }, { "city": "Ipoh", "country": "MY" }]
        })))
        .mount(&server)
        .await;

    let sidebar = dashboard_for(&server).sidebar("MY").await.unwrap();
    assert_eq!(sidebar.countries, ["MY", "SG"]);
    assert_eq!(
        sidebar.cities,
        [
            CitySelection::All,
            CitySelection::Named("Kuala Lumpur".to_string()),
            CitySelection::Named("Ipoh".to_string()),
        ]
    );
}
