mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{read_json, TestApp};

#[tokio::test]
async fn asset_crud_and_barcode_lookup() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/assets",
            Some(json!({
                "asset_number": "AST-100",
                "name": "Air compressor",
                "location": "Plant 2",
                "barcode": "860001234567"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let asset = read_json(response).await;
    let id = asset["id"].as_i64().unwrap();
    assert_eq!(asset["status"], "operational");

    let response = app
        .request(Method::GET, "/api/v1/assets/barcode/860001234567", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let found = read_json(response).await;
    assert_eq!(found["id"].as_i64(), Some(id));

    let response = app
        .request(Method::GET, "/api/v1/assets/barcode/does-not-exist", None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/assets/{id}"),
            Some(json!({ "status": "maintenance" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["status"], "maintenance");

    let response = app
        .request(Method::DELETE, &format!("/api/v1/assets/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request(Method::GET, &format!("/api/v1/assets/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_asset_number_is_a_conflict() {
    let app = TestApp::new().await;

    let body = json!({ "asset_number": "AST-1", "name": "Forklift" });
    let response = app
        .request(Method::POST, "/api/v1/assets", Some(body.clone()))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.request(Method::POST, "/api/v1/assets", Some(body)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn asset_details_nest_its_work_orders() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/assets",
            Some(json!({ "asset_number": "AST-7", "name": "Conveyor line" })),
        )
        .await;
    let asset_id = read_json(response).await["id"].as_i64().unwrap();

    for title in ["Belt replacement", "Roller alignment"] {
        app.request(
            Method::POST,
            "/api/v1/work-orders",
            Some(json!({ "title": title, "asset_id": asset_id })),
        )
        .await;
    }

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/assets/{asset_id}/details"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let details = read_json(response).await;
    assert_eq!(details["asset_number"], "AST-7");
    assert_eq!(details["work_orders"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn inventory_crud_and_barcode_lookup() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/inventory",
            Some(json!({
                "part_number": "FLT-010",
                "name": "Hydraulic filter",
                "quantity_in_stock": 12,
                "minimum_stock": 4,
                "barcode": "590123412345"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let item = read_json(response).await;
    let id = item["id"].as_i64().unwrap();

    let response = app
        .request(Method::GET, "/api/v1/inventory/barcode/590123412345", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["id"].as_i64(), Some(id));

    // Dropping stock below minimum is allowed; the service only warns.
    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/inventory/{id}"),
            Some(json!({ "quantity_in_stock": 2 })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = read_json(response).await;
    assert_eq!(updated["quantity_in_stock"], 2);

    let response = app
        .request(Method::GET, &format!("/api/v1/inventory/{id}/details"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let details = read_json(response).await;
    assert_eq!(details["part_number"], "FLT-010");
    assert_eq!(details["category"], serde_json::Value::Null);

    let response = app
        .request(Method::DELETE, &format!("/api/v1/inventory/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn list_endpoints_paginate() {
    let app = TestApp::new().await;

    for i in 1..=5 {
        app.request(
            Method::POST,
            "/api/v1/assets",
            Some(json!({ "asset_number": format!("AST-{i:03}"), "name": format!("Asset {i}") })),
        )
        .await;
    }

    let response = app
        .request(Method::GET, "/api/v1/assets?page=2&limit=2", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = read_json(response).await;
    assert_eq!(list["total"], 5);
    assert_eq!(list["page"], 2);
    assert_eq!(list["assets"].as_array().unwrap().len(), 2);
}
