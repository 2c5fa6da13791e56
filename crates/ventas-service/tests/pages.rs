//! Registration and listing integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;

#[tokio::test]
async fn registration_form_renders() {
    let harness = TestHarness::default();

    let response = harness.server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("name=\"cliente_id\""));
    assert!(body.contains("name=\"total\""));
    assert!(body.contains("name=\"fecha\""));
}

#[tokio::test]
async fn registering_a_sale_redirects_to_the_listing() {
    let harness = TestHarness::default();

    let response = harness
        .server
        .post("/")
        .form(&[("cliente_id", "C1"), ("total", "20.0"), ("fecha", "2024-01-01")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let location = response.headers().get("location").unwrap();
    assert_eq!(location.to_str().unwrap(), "/listado");
}

#[tokio::test]
async fn registered_sales_appear_on_the_listing() {
    let harness = TestHarness::default();
    harness.register("C1", "20.0", "2024-01-01").await;
    harness.register("C2", "7.50", "2024-02-02").await;

    let response = harness.server.get("/listado").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("C1"));
    assert!(body.contains("C2"));
    assert!(body.contains("2024-02-02"));
}

#[tokio::test]
async fn listing_is_empty_before_any_registration() {
    let harness = TestHarness::default();

    let response = harness.server.get("/listado").await;

    response.assert_status_ok();
    assert!(!response.text().contains("/cliente/"));
}

#[tokio::test]
async fn non_numeric_total_is_rejected() {
    let harness = TestHarness::default();

    let response = harness
        .server
        .post("/")
        .form(&[("cliente_id", "C1"), ("total", "veinte"), ("fecha", "2024-01-01")])
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn unparseable_date_is_rejected() {
    let harness = TestHarness::default();

    let response = harness
        .server
        .post("/")
        .form(&[("cliente_id", "C1"), ("total", "20.0"), ("fecha", "01/01/2024")])
        .await;

    assert!(response.status_code().is_client_error());
}
