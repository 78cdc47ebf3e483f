//! Integration tests
//!
//! Drive the full router against mocked Amadeus and Gemini servers

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Local, NaiveDate};
use fareboard::config::settings::*;
use fareboard::config::CityTable;
use fareboard::create_router;
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

const GEMINI_KEY: &str = "test-gemini-key";
const GEMINI_PATH: &str = "/models/gemini-test:generateContent";

/// Create test settings pointing both providers at `base_url`
fn create_test_settings(base_url: &str, gemini_key: Option<&str>) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8083,
        },
        amadeus: AmadeusConfig {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            base_url: base_url.to_string(),
            currency: "AUD".to_string(),
            max_offers: 50,
            timeout: 5,
        },
        gemini: GeminiConfig {
            api_key: gemini_key.map(str::to_string),
            base_url: base_url.to_string(),
            model: "gemini-test".to_string(),
            timeout: 5,
        },
        dashboard: DashboardConfig {
            cities: CityTable::default(),
            trend_days: 30,
        },
        security: SecurityConfig { cors_enabled: true },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "text".to_string(),
            slow_request_secs: 20,
        },
    }
}

async fn create_app(server: &MockServer, gemini_key: Option<&str>) -> Router {
    create_router(create_test_settings(&server.base_url(), gemini_key))
        .await
        .expect("Failed to create router")
}

fn day(offset: i64) -> String {
    let today: NaiveDate = Local::now().date_naive();
    (today + Duration::days(offset)).format("%Y-%m-%d").to_string()
}

fn offer(total: &str, airline: &str, date: &str) -> Value {
    json!({
        "type": "flight-offer",
        "price": {"currency": "AUD", "total": total},
        "validatingAirlineCodes": [airline],
        "itineraries": [{
            "segments": [{"departure": {"at": format!("{}T09:15:00", date)}}]
        }]
    })
}

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_trend_endpoint_missing_origin() {
    let server = MockServer::start_async().await;
    let token_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/security/oauth2/token");
            then.status(200).json_body(json!({"access_token": "abc"}));
        })
        .await;

    let app = create_app(&server, None).await;
    let response = app.oneshot(get("/api/price-trend?destination=SYD")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing origin or destination parameters");

    token_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_trend_endpoint_no_offers() {
    let server = MockServer::start_async().await;
    let token_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/security/oauth2/token")
                .body_contains("grant_type=client_credentials")
                .body_contains("client_id=test-client");
            then.status(200).json_body(json!({"access_token": "abc", "expires_in": 1799}));
        })
        .await;
    let search_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/shopping/flight-offers")
                .header("authorization", "Bearer abc")
                .query_param("originLocationCode", "PER")
                .query_param("destinationLocationCode", "HBA")
                .query_param("nonStop", "true")
                .query_param("currencyCode", "AUD")
                .query_param("max", "50");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let app = create_app(&server, None).await;
    let response = app
        .oneshot(get("/api/price-trend?origin=PER&destination=HBA"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"labels": [], "data": [], "chart_title": "No Trend Data for PER to HBA"})
    );

    token_mock.assert_hits_async(1).await;
    search_mock.assert_hits_async(30).await;
}

#[tokio::test]
async fn test_trend_endpoint_with_data_and_failures() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/security/oauth2/token");
            then.status(200).json_body(json!({"access_token": "abc"}));
        })
        .await;
    let (d2, d7) = (day(2), day(7));
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/shopping/flight-offers")
                .query_param("departureDate", d2.as_str());
            then.status(200).json_body(json!({"data": [
                offer("220.50", "QF", &d2),
                offer("180.25", "VA", &d2),
            ]}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/shopping/flight-offers")
                .query_param("departureDate", d7.as_str());
            then.status(200).json_body(json!({"data": [offer("99.99", "JQ", &d7)]}));
        })
        .await;
    // Every other date is answered with a 404 by the mock server and must be skipped

    let app = create_app(&server, None).await;
    let response = app
        .oneshot(get("/api/price-trend?origin=MEL&destination=SYD"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["labels"], json!([d2, d7]));
    assert_eq!(body["data"], json!([180.25, 99.99]));
    assert_eq!(body["chart_title"], "Daily Price Trend: Melbourne to Sydney");
}

#[tokio::test]
async fn test_authentication_failure() {
    let server = MockServer::start_async().await;
    let token_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/security/oauth2/token");
            then.status(401).json_body(json!({"error": "invalid_client"}));
        })
        .await;
    let search_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/shopping/flight-offers");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let app = create_app(&server, None).await;

    let response = app
        .clone()
        .oneshot(get("/api/price-trend?origin=MEL&destination=SYD"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Could not authenticate with Amadeus API"})
    );

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(response).await.contains("Could not authenticate with Amadeus API"));

    token_mock.assert_hits_async(2).await;
    search_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_dashboard_page_with_insights() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/security/oauth2/token");
            then.status(200).json_body(json!({"access_token": "abc"}));
        })
        .await;
    let tomorrow = day(1);
    let mel_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/shopping/flight-offers")
                .query_param("originLocationCode", "MEL")
                .query_param("departureDate", tomorrow.as_str());
            then.status(200).json_body(json!({"data": [
                offer("100.00", "QF", &tomorrow),
                offer("200.00", "VA", &tomorrow),
                offer("300.00", "JQ", &tomorrow),
            ]}));
        })
        .await;
    let gemini_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GEMINI_PATH)
                .query_param("key", GEMINI_KEY)
                .body_contains("Average Price (AUD)")
                .body_contains("MEL");
            then.status(200).json_body(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "* **Melbourne** is cheapest\nBook early"}]},
                    "finishReason": "STOP"
                }]
            }));
        })
        .await;

    let app = create_app(&server, Some(GEMINI_KEY)).await;
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"<option value="SYD" selected>Sydney</option>"#));
    assert!(html.contains(r#""labels":["Melbourne -> Sydney"]"#));
    assert!(html.contains(r#""data":[200.0]"#));
    assert!(html.contains("<ul><li><strong>Melbourne</strong> is cheapest</li></ul><p>Book early</p>"));
    assert!(html.contains("Daily Price Trend: Melbourne to Sydney"));

    // Snapshot fetch plus the first trend day
    mel_mock.assert_hits_async(2).await;
    gemini_mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_dashboard_page_without_gemini_key() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/security/oauth2/token");
            then.status(200).json_body(json!({"access_token": "abc"}));
        })
        .await;
    let tomorrow = day(1);
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/shopping/flight-offers")
                .query_param("originLocationCode", "SYD")
                .query_param("departureDate", tomorrow.as_str());
            then.status(200).json_body(json!({"data": [offer("150.00", "QF", &tomorrow)]}));
        })
        .await;
    let gemini_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(GEMINI_PATH);
            then.status(200).json_body(json!({"candidates": []}));
        })
        .await;

    let app = create_app(&server, Some("YOUR_GEMINI_API_KEY")).await;
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("destination=MEL"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"<option value="MEL" selected>Melbourne</option>"#));
    assert!(html.contains(r#""labels":["Sydney -> Melbourne"]"#));
    assert!(html.contains("<p>Gemini API key not configured. Insights are unavailable.</p>"));

    gemini_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_dashboard_page_no_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/security/oauth2/token");
            then.status(200).json_body(json!({"access_token": "abc"}));
        })
        .await;
    let search_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/shopping/flight-offers");
            then.status(500).body("upstream exploded");
        })
        .await;

    let app = create_app(&server, None).await;
    let response = app.oneshot(get("/?destination=HBA")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"<option value="HBA" selected>Hobart</option>"#));
    assert!(html.contains("No data found for the selected destination."));
    assert!(html.contains("Daily Price Trend (Next Month)"));

    // 6 snapshot origins + 30 trend days, every failure swallowed
    search_mock.assert_hits_async(36).await;
}

#[tokio::test]
async fn test_dashboard_post_without_form_uses_default() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/security/oauth2/token");
            then.status(200).json_body(json!({"access_token": "abc"}));
        })
        .await;
    let search_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/shopping/flight-offers")
                .query_param("destinationLocationCode", "SYD");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let app = create_app(&server, None).await;
    let request = Request::builder().method("POST").uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"<option value="SYD" selected>Sydney</option>"#));

    // 6 snapshot origins + 30 trend days
    search_mock.assert_hits_async(36).await;
}

#[tokio::test]
async fn test_dashboard_malformed_offer_is_plain_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/security/oauth2/token");
            then.status(200).json_body(json!({"access_token": "abc"}));
        })
        .await;
    let tomorrow = day(1);
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/shopping/flight-offers")
                .query_param("originLocationCode", "MEL")
                .query_param("departureDate", tomorrow.as_str());
            then.status(200).json_body(json!({"data": [{
                "validatingAirlineCodes": ["QF"],
                "itineraries": [{"segments": [{"departure": {"at": format!("{}T09:15:00", tomorrow)}}]}]
            }]}));
        })
        .await;

    let app = create_app(&server, None).await;
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(
        body_string(response).await,
        "Error: Malformed flight offer: missing price.total"
    );
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let server = MockServer::start_async().await;
    let app = create_app(&server, None).await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fareboard");
    assert_eq!(body["details"]["amadeus"], "configured");
    assert_eq!(body["details"]["gemini"], "disabled");
    assert_eq!(body["details"]["cities"], 7);
}

#[tokio::test]
async fn test_unknown_route() {
    let server = MockServer::start_async().await;
    let app = create_app(&server, None).await;

    let response = app.oneshot(get("/v1/messages")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
