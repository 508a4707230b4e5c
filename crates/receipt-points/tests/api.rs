//! End-to-end tests of the HTTP contract, driven through the router.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use receipt_points::core::PointsConfig;
use receipt_points::error::NOT_FOUND_MESSAGE;
use receipt_points::store::{MemoryStore, ReceiptStore};
use receipt_points::{router, ReceiptService, ServiceConfig};
use receipt_points_testkit::{
    all_vectors, corner_market_receipt, morning_receipt, single_item_receipt, TestFixture,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn setup(config: ServiceConfig) -> (Router, Arc<ReceiptService<MemoryStore>>) {
    let service = Arc::new(ReceiptService::new(MemoryStore::new(), config));
    (router(service.clone()), service)
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn get_points_request(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/receipts/{id}/points"))
        .body(Body::empty())
        .unwrap()
}

async fn process(router: &Router, body: &Value) -> String {
    let (status, json) = send(router, post_json(body.to_string())).await;
    assert_eq!(status, StatusCode::OK, "{json}");
    json["id"].as_str().unwrap().to_string()
}

async fn points(router: &Router, id: &str) -> u64 {
    let (status, json) = send(router, get_points_request(id)).await;
    assert_eq!(status, StatusCode::OK, "{json}");
    json["points"].as_u64().unwrap()
}

#[tokio::test]
async fn process_returns_uuid_id() {
    let (router, service) = setup(ServiceConfig::default());
    let input = TestFixture::input(single_item_receipt());

    let id = process(&router, &serde_json::to_value(&input).unwrap()).await;

    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);
    assert_eq!(service.store().len().await.unwrap(), 1);
}

#[tokio::test]
async fn points_for_fixture_receipts() {
    let (router, _service) = setup(ServiceConfig::default());

    for (builder, expected) in [
        (single_item_receipt(), 31),
        (morning_receipt(), 28),
        (corner_market_receipt(), 109),
    ] {
        let body = serde_json::to_value(TestFixture::input(builder)).unwrap();
        let id = process(&router, &body).await;
        assert_eq!(points(&router, &id).await, expected);
    }
}

#[tokio::test]
async fn points_for_golden_vectors() {
    let (router, _service) = setup(ServiceConfig::default());

    for vector in all_vectors() {
        let id = process(&router, &vector.body).await;
        assert_eq!(points(&router, &id).await, vector.expected_points, "{}", vector.name);
    }
}

#[tokio::test]
async fn points_are_stable_across_lookups() {
    let (router, _service) = setup(ServiceConfig::default());
    let body = serde_json::to_value(TestFixture::input(corner_market_receipt())).unwrap();
    let id = process(&router, &body).await;

    assert_eq!(points(&router, &id).await, 109);
    assert_eq!(points(&router, &id).await, 109);
}

#[tokio::test]
async fn identical_submissions_get_distinct_ids() {
    let (router, service) = setup(ServiceConfig::default());
    let body = serde_json::to_value(TestFixture::input(single_item_receipt())).unwrap();

    let first = process(&router, &body).await;
    let second = process(&router, &body).await;

    assert_ne!(first, second);
    assert_eq!(service.store().len().await.unwrap(), 2);
}

#[tokio::test]
async fn description_alias_is_accepted() {
    let (router, _service) = setup(ServiceConfig::default());
    let body = json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "13:13",
        "items": [{ "description": "Pepsi - 12-oz", "price": "1.25" }],
        "total": "1.25"
    });

    let id = process(&router, &body).await;
    assert_eq!(points(&router, &id).await, 31);
}

#[tokio::test]
async fn blank_description_follows_config() {
    let body = json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "13:13",
        "items": [{ "shortDescription": "   ", "price": "1.25" }],
        "total": "1.25"
    });

    let (router, _service) = setup(ServiceConfig::default());
    let id = process(&router, &body).await;
    assert_eq!(points(&router, &id).await, 31);

    let literal = ServiceConfig {
        points: PointsConfig {
            blank_descriptions_qualify: true,
        },
    };
    let (router, _service) = setup(literal);
    let id = process(&router, &body).await;
    assert_eq!(points(&router, &id).await, 32);
}

#[tokio::test]
async fn empty_object_is_rejected() {
    let (router, service) = setup(ServiceConfig::default());

    let (status, json) = send(&router, post_json("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("retailer"));
    assert!(service.store().is_empty().await.unwrap());
}

#[tokio::test]
async fn invalid_total_is_rejected_and_not_stored() {
    let (router, service) = setup(ServiceConfig::default());
    let mut body = serde_json::to_value(TestFixture::input(single_item_receipt())).unwrap();
    body["total"] = json!("abc");

    let (status, json) = send(&router, post_json(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("total"));
    assert!(json.get("id").is_none());
    assert!(service.store().is_empty().await.unwrap());
}

#[tokio::test]
async fn invalid_retailer_is_rejected() {
    let (router, service) = setup(ServiceConfig::default());
    let mut body = serde_json::to_value(TestFixture::input(single_item_receipt())).unwrap();
    body["retailer"] = json!("Target!");

    let (status, _json) = send(&router, post_json(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(service.store().is_empty().await.unwrap());
}

#[tokio::test]
async fn non_ascii_whitespace_in_retailer_is_rejected() {
    let (router, service) = setup(ServiceConfig::default());
    let mut body = serde_json::to_value(TestFixture::input(single_item_receipt())).unwrap();
    body["retailer"] = json!("Target\u{3000}\u{00A0}");

    let (status, json) = send(&router, post_json(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("retailer"));
    assert!(service.store().is_empty().await.unwrap());
}

#[tokio::test]
async fn non_json_body_is_rejected() {
    let (router, service) = setup(ServiceConfig::default());

    let (status, json) = send(&router, post_json("not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
    assert!(service.store().is_empty().await.unwrap());
}

#[tokio::test]
async fn wrongly_typed_field_is_rejected() {
    let (router, _service) = setup(ServiceConfig::default());
    let mut body = serde_json::to_value(TestFixture::input(single_item_receipt())).unwrap();
    body["total"] = json!(1.25);

    let (status, json) = send(&router, post_json(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let (router, _service) = setup(ServiceConfig::default());

    let (status, json) = send(
        &router,
        get_points_request("7fb1377b-b223-49d9-a31a-5a02701dd310"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], NOT_FOUND_MESSAGE);
    assert!(json.get("points").is_none());
}

#[tokio::test]
async fn malformed_id_is_not_found() {
    let (router, _service) = setup(ServiceConfig::default());

    let (status, json) = send(&router, get_points_request("not-a-receipt")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn undecodable_id_is_not_found() {
    let (router, _service) = setup(ServiceConfig::default());

    let (status, json) = send(&router, get_points_request("%FF")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn uppercase_id_is_not_found() {
    let (router, _service) = setup(ServiceConfig::default());
    let body = serde_json::to_value(TestFixture::input(single_item_receipt())).unwrap();
    let id = process(&router, &body).await;

    let (status, json) = send(&router, get_points_request(&id.to_uppercase())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn empty_id_segment_is_not_found() {
    let (router, _service) = setup(ServiceConfig::default());

    let (status, _body) = send(&router, get_points_request("")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ids_from_one_service_are_unknown_to_another() {
    let (first, _a) = setup(ServiceConfig::default());
    let (second, _b) = setup(ServiceConfig::default());
    let body = serde_json::to_value(TestFixture::input(single_item_receipt())).unwrap();

    let id = process(&first, &body).await;
    let (status, _json) = send(&second, get_points_request(&id)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
