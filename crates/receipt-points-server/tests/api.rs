//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use receipt_points::store::{InsertResult, MemoryStore, Store, StoreError};
use receipt_points::{ProcessorConfig, Receipt, ReceiptId, ReceiptProcessor};
use receipt_points_server::router;
use receipt_points_testkit::fixtures::receipt_json;
use receipt_points_testkit::{corner_market_receipt, target_receipt, FailingIds, SequentialIds};
use serde_json::Value;
use tower::ServiceExt;

/// A backend that is always down.
struct OfflineStore;

#[async_trait]
impl Store for OfflineStore {
    async fn insert(
        &self,
        _id: &ReceiptId,
        _receipt: &Receipt,
    ) -> receipt_points::store::Result<InsertResult> {
        Err(StoreError::Unavailable("offline".into()))
    }

    async fn get(&self, _id: &ReceiptId) -> receipt_points::store::Result<Option<Receipt>> {
        Err(StoreError::Unavailable("offline".into()))
    }

    async fn count(&self) -> receipt_points::store::Result<usize> {
        Err(StoreError::Unavailable("offline".into()))
    }
}

fn test_app() -> Router {
    let processor = ReceiptProcessor::with_id_generator(
        MemoryStore::new(),
        SequentialIds::new("r"),
        ProcessorConfig::default(),
    );
    router(Arc::new(processor))
}

fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn process_then_points() {
    let app = test_app();

    let (status, body) = send(
        &app,
        post_json("/receipts/process", receipt_json(&target_receipt())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "r-1");

    let (status, body) = send(&app, get("/receipts/r-1/points")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"], 28);
}

#[tokio::test]
async fn each_submission_gets_a_new_id() {
    let app = test_app();
    let payload = receipt_json(&target_receipt());

    let (_, first) = send(&app, post_json("/receipts/process", payload.clone())).await;
    let (_, second) = send(&app, post_json("/receipts/process", payload)).await;

    assert_eq!(first["id"], "r-1");
    assert_eq!(second["id"], "r-2");
}

#[tokio::test]
async fn literal_client_payload_is_accepted() {
    let app = test_app();
    let payload = r#"{
        "retailer": "Walgreens",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "08:13",
        "total": "2.65",
        "items": [
            {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
            {"shortDescription": "Dasani", "price": "1.40"}
        ]
    }"#;

    let (status, body) = send(&app, post_json("/receipts/process", payload)).await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/receipts/{}/points", body["id"].as_str().unwrap());
    let (status, body) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"], 15);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = test_app();

    let (status, body) = send(&app, get("/receipts/missing/points")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "receipt not found");

    let (status, _) = send(&app, get("/receipts/missing/breakdown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_receipt_is_rejected_with_reason() {
    let app = test_app();

    let (status, body) = send(
        &app,
        post_json("/receipts/process", receipt_json(&corner_market_receipt())),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "invalid-retailer-name");
    assert!(body["error"].is_string());

    // Nothing was stored, so the first accepted receipt still gets r-1.
    let (_, body) = send(
        &app,
        post_json("/receipts/process", receipt_json(&target_receipt())),
    )
    .await;
    assert_eq!(body["id"], "r-1");
}

#[tokio::test]
async fn bad_item_price_names_the_item() {
    let app = test_app();
    let mut receipt = target_receipt();
    receipt.items[2].price = "1.2.6".into();

    let (status, body) = send(&app, post_json("/receipts/process", receipt_json(&receipt))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "invalid-item-price");
    assert!(body["error"].as_str().unwrap().contains('2'));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = test_app();

    let (status, body) = send(&app, post_json("/receipts/process", "{\"retailer\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(body.get("reason").is_none());

    let (status, _) = send(
        &app,
        post_json("/receipts/process", r#"{"items": "not a list"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn breakdown_sums_to_points() {
    let app = test_app();
    send(
        &app,
        post_json("/receipts/process", receipt_json(&target_receipt())),
    )
    .await;

    let (status, body) = send(&app, get("/receipts/r-1/breakdown")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["retailerName"], 6);
    assert_eq!(body["itemPairs"], 10);
    assert_eq!(body["itemDescriptions"], 6);
    assert_eq!(body["oddPurchaseDay"], 6);
    assert_eq!(body["afternoonPurchase"], 0);
    assert_eq!(body["total"], 28);
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&test_app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn id_exhaustion_is_server_error() {
    let processor = ReceiptProcessor::with_id_generator(
        MemoryStore::new(),
        FailingIds,
        ProcessorConfig::default(),
    );
    let app = router(Arc::new(processor));

    let (status, body) = send(
        &app,
        post_json("/receipts/process", receipt_json(&target_receipt())),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("reason").is_none());
}

#[tokio::test]
async fn store_outage_is_server_error() {
    let app = router(Arc::new(ReceiptProcessor::new(
        OfflineStore,
        ProcessorConfig::default(),
    )));

    let (status, _) = send(
        &app,
        post_json("/receipts/process", receipt_json(&target_receipt())),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app, get("/receipts/r-1/points")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
