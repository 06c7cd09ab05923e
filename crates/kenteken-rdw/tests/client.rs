//! Integration tests for `RdwClient` using wiremock HTTP mocks.

use kenteken_core::terms::parse_terms;
use kenteken_rdw::{RdwClient, RdwError};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> RdwClient {
    RdwClient::with_base_url(base_url, 30).expect("client construction should not fail")
}

#[tokio::test]
async fn get_vehicle_normalizes_plate_before_lookup() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "kenteken": "91RFH93",
            "merk": "FORD",
            "handelsbenaming": "FIESTA",
            "voertuigsoort": "Personenauto"
        }
    ]);

    Mock::given(method("GET"))
        .and(query_param("kenteken", "91RFH93"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let record = client
        .get_vehicle("91-rfh-93")
        .await
        .expect("lookup should succeed")
        .expect("record should be present");

    assert_eq!(record.plate(), "91RFH93");
    assert_eq!(record.field("merk"), Some("FORD"));
    assert_eq!(record.field("handelsbenaming"), Some("FIESTA"));
}

#[tokio::test]
async fn get_vehicle_returns_none_for_unknown_plate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("kenteken", "XX999X"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let record = client
        .get_vehicle("XX-999-X")
        .await
        .expect("lookup should succeed");

    assert!(record.is_none());
}

#[tokio::test]
async fn get_vehicle_takes_first_of_multiple_rows() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        { "kenteken": "91RFH93", "merk": "FORD" },
        { "kenteken": "91RFH93", "merk": "OPEL" }
    ]);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let record = client
        .get_vehicle("91RFH93")
        .await
        .expect("lookup should succeed")
        .expect("record should be present");

    assert_eq!(record.field("merk"), Some("FORD"));
}

#[tokio::test]
async fn get_vehicle_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.get_vehicle("91RFH93").await;

    assert!(matches!(result, Err(RdwError::Http(_))));
}

#[tokio::test]
async fn get_vehicle_surfaces_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.get_vehicle("91RFH93").await;

    assert!(matches!(result, Err(RdwError::Deserialize { .. })));
}

#[tokio::test]
async fn search_sends_capped_ordered_filter_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param(
            "$where",
            "UPPER(REPLACE(kenteken, '-', '')) LIKE '%91%' \
             OR UPPER(REPLACE(kenteken, '-', '')) LIKE '%RFH%'",
        ))
        .and(query_param("$limit", "100"))
        .and(query_param("$order", "kenteken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let terms = parse_terms("91,RFH");
    let outcome = client
        .search_vehicles(&terms)
        .await
        .expect("search should succeed");

    assert_eq!(outcome.count, 0);
    assert_eq!(outcome.search_terms, vec!["91", "RFH"]);
}

#[tokio::test]
async fn search_annotates_each_row_with_matching_terms() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        { "kenteken": "91RFH93", "merk": "FORD" },
        { "kenteken": "9-1ZZ-Z1", "merk": "OPEL" },
        { "kenteken": "AARFHB2", "merk": "FIAT" }
    ]);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let terms = parse_terms("91,RFH");
    let outcome = client
        .search_vehicles(&terms)
        .await
        .expect("search should succeed");

    assert_eq!(outcome.count, 3);
    assert_eq!(outcome.results[0].matched_terms, vec!["91", "RFH"]);
    assert_eq!(outcome.results[1].matched_terms, vec!["91"]);
    assert_eq!(outcome.results[2].matched_terms, vec!["RFH"]);
}

#[tokio::test]
async fn search_escapes_quotes_in_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param(
            "$where",
            "UPPER(REPLACE(kenteken, '-', '')) LIKE '%O''BRIEN%'",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let terms = parse_terms("O'BRIEN");
    client
        .search_vehicles(&terms)
        .await
        .expect("search should succeed");
}

#[tokio::test]
async fn search_with_no_terms_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_vehicles(&[]).await;

    assert!(matches!(result, Err(RdwError::EmptyQuery)));
}
