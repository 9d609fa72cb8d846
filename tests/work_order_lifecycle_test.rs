mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{read_json, TestApp};

#[tokio::test]
async fn direct_creation_update_and_delete_round_trip() {
    let app = TestApp::new().await;
    let technician = app.seed_user("tess", "technician").await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/work-orders",
            Some(json!({
                "title": "Emergency pump repair",
                "priority": "critical",
                "assigned_to_id": technician.id,
                "estimated_hours": 6
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let work_order = read_json(response).await;
    let id = work_order["id"].as_i64().unwrap();
    assert_eq!(work_order["work_order_number"], "WO-001");
    assert_eq!(work_order["status"], "approved");

    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/work-orders/{id}"),
            Some(json!({
                "status": "completed",
                "actual_hours": 5.5,
                "completion_notes": "Replaced impeller and seals"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = read_json(response).await;
    assert_eq!(updated["status"], "completed");
    assert_eq!(updated["actual_hours"], "5.5");

    let response = app
        .request(Method::DELETE, &format!("/api/v1/work-orders/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request(Method::GET, &format!("/api/v1/work-orders/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn labor_and_parts_accumulate_on_a_work_order() {
    let app = TestApp::new().await;
    let technician = app.seed_user("lee", "technician").await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/inventory",
            Some(json!({
                "part_number": "BRG-6204",
                "name": "Ball bearing 6204",
                "quantity_in_stock": 10,
                "unit_cost": 7.25
            })),
        )
        .await;
    let item = read_json(response).await;
    let item_id = item["id"].as_i64().unwrap();

    let response = app
        .request(
            Method::POST,
            "/api/v1/work-orders",
            Some(json!({ "title": "Motor bearing swap" })),
        )
        .await;
    let work_order = read_json(response).await;
    let id = work_order["id"].as_i64().unwrap();

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/work-orders/{id}/labor"),
            Some(json!({
                "user_id": technician.id,
                "hours": 1.5,
                "description": "Disassembly and inspection"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/work-orders/{id}/parts"),
            Some(json!({
                "item_id": item_id,
                "quantity_used": 2,
                "unit_cost": 7.25
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/work-orders/{id}/details"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let details = read_json(response).await;
    assert_eq!(details["labor"].as_array().unwrap().len(), 1);
    assert_eq!(details["labor"][0]["hours"], "1.5");
    let parts = details["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0]["quantity_used"], 2);
    assert_eq!(parts[0]["item"]["part_number"], "BRG-6204");
    assert_eq!(details["assigned_to"], serde_json::Value::Null);
}

#[tokio::test]
async fn recording_parts_against_missing_work_order_is_404() {
    let app = TestApp::new().await;
    let response = app
        .request(
            Method::POST,
            "/api/v1/work-orders/31337/parts",
            Some(json!({ "item_id": 1, "quantity_used": 1 })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn zero_quantity_part_usage_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .request(
            Method::POST,
            "/api/v1/work-orders",
            Some(json!({ "title": "Sensor calibration" })),
        )
        .await;
    let id = read_json(response).await["id"].as_i64().unwrap();

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/work-orders/{id}/parts"),
            Some(json!({ "item_id": 1, "quantity_used": 0 })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
