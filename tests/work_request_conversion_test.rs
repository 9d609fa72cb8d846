mod common;

use axum::http::{Method, StatusCode};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use upkeep_api::entities::work_order::Entity as WorkOrderEntity;

use common::{read_json, TestApp};

#[tokio::test]
async fn converting_marks_request_completed_and_links_work_order() {
    let app = TestApp::new().await;
    let requester = app.seed_user("rosa", "requester").await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/work-requests",
            Some(json!({
                "title": "Conveyor belt squealing",
                "description": "Loud noise near drive pulley",
                "priority": "high",
                "requested_by_id": requester.id
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let request = read_json(response).await;
    let request_id = request["id"].as_i64().expect("request id");
    assert_eq!(request["status"], "requested");
    assert_eq!(request["request_number"], "WR-001");

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/work-requests/{request_id}/convert"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let work_order = read_json(response).await;

    assert_eq!(work_order["work_order_number"], "WO-001");
    assert_eq!(work_order["title"], "Conveyor belt squealing");
    assert_eq!(work_order["priority"], "high");
    assert_eq!(work_order["status"], "approved");
    assert_eq!(work_order["requested_by_id"], requester.id);

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/work-requests/{request_id}"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let request = read_json(response).await;
    assert_eq!(request["status"], "completed");
    assert_eq!(request["is_converted"], true);
    assert_eq!(request["converted_to_work_order_id"], work_order["id"]);
}

#[tokio::test]
async fn converting_missing_request_is_404_and_creates_nothing() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::POST, "/api/v1/work-requests/9999/convert", None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let count = WorkOrderEntity::find()
        .count(&*app.state.db)
        .await
        .expect("count work orders");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn conversion_overrides_beat_copied_fields() {
    let app = TestApp::new().await;
    let technician = app.seed_user("theo", "technician").await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/work-requests",
            Some(json!({
                "title": "Replace HVAC filter",
                "priority": "low"
            })),
        )
        .await;
    let request = read_json(response).await;
    let request_id = request["id"].as_i64().unwrap();

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/work-requests/{request_id}/convert"),
            Some(json!({
                "priority": "critical",
                "status": "in_progress",
                "assigned_to_id": technician.id,
                "date_scheduled": "2025-07-01",
                "estimated_hours": 2.5
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let work_order = read_json(response).await;

    // Untouched fields still come from the request.
    assert_eq!(work_order["title"], "Replace HVAC filter");
    assert_eq!(work_order["priority"], "critical");
    assert_eq!(work_order["status"], "in_progress");
    assert_eq!(work_order["assigned_to_id"], technician.id);
    assert_eq!(work_order["date_scheduled"], "2025-07-01");
    assert_eq!(work_order["estimated_hours"], "2.5");
}

#[tokio::test]
async fn work_order_numbers_are_sequential_and_zero_padded() {
    let app = TestApp::new().await;

    for title in ["First fault", "Second fault", "Third fault"] {
        let response = app
            .request(
                Method::POST,
                "/api/v1/work-requests",
                Some(json!({ "title": title })),
            )
            .await;
        let request = read_json(response).await;
        let request_id = request["id"].as_i64().unwrap();

        app.request(
            Method::POST,
            &format!("/api/v1/work-requests/{request_id}/convert"),
            None,
        )
        .await;
    }

    let response = app.request(Method::GET, "/api/v1/work-orders", None).await;
    let list = read_json(response).await;
    let mut numbers: Vec<String> = list["work_orders"]
        .as_array()
        .expect("work order list")
        .iter()
        .map(|wo| wo["work_order_number"].as_str().unwrap().to_string())
        .collect();
    numbers.sort();
    assert_eq!(numbers, vec!["WO-001", "WO-002", "WO-003"]);
}

#[tokio::test]
async fn duplicate_work_order_number_is_a_conflict() {
    let app = TestApp::new().await;

    let mut ids = Vec::new();
    for title in ["Pump leak", "Valve stuck"] {
        let response = app
            .request(
                Method::POST,
                "/api/v1/work-requests",
                Some(json!({ "title": title })),
            )
            .await;
        ids.push(read_json(response).await["id"].as_i64().unwrap());
    }

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/work-requests/{}/convert", ids[0]),
            Some(json!({ "work_order_number": "WO-CUSTOM" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/work-requests/{}/convert", ids[1]),
            Some(json!({ "work_order_number": "WO-CUSTOM" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn reconverting_creates_a_second_work_order_and_moves_the_link() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/work-requests",
            Some(json!({ "title": "Gearbox vibration" })),
        )
        .await;
    let request = read_json(response).await;
    let request_id = request["id"].as_i64().unwrap();

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/work-requests/{request_id}/convert"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let first = read_json(response).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/work-requests/{request_id}/convert"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let second = read_json(response).await;
    assert_ne!(second["id"], first["id"]);
    assert_eq!(second["work_order_number"], "WO-002");

    // Both work orders persist; the request points at the newer one.
    let count = WorkOrderEntity::find()
        .count(&*app.state.db)
        .await
        .expect("count work orders");
    assert_eq!(count, 2);

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/work-requests/{request_id}"),
            None,
        )
        .await;
    let request = read_json(response).await;
    assert_eq!(request["converted_to_work_order_id"], second["id"]);
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/work-requests",
            Some(json!({ "title": "" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
