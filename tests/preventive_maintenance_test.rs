mod common;

use axum::http::{Method, StatusCode};
use sea_orm::EntityTrait;
use serde_json::{json, Value};
use upkeep_api::entities::work_order::Entity as WorkOrderEntity;

use common::{read_json, TestApp};

async fn create_schedule(app: &TestApp, body: Value) -> i64 {
    let response = app
        .request(Method::POST, "/api/v1/preventive-maintenance", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    read_json(response).await["id"].as_i64().expect("pm id")
}

#[tokio::test]
async fn non_recurring_schedule_generates_one_work_order_at_start_date() {
    let app = TestApp::new().await;
    let pm_id = create_schedule(
        &app,
        json!({
            "title": "Annual boiler inspection",
            "maintenance_type": "inspection",
            "start_date": "2025-03-10",
            "duration": 4
        }),
    )
    .await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/preventive-maintenance/{pm_id}/generate"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let links = read_json(response).await;
    let links = links.as_array().expect("link array");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["occurrence_number"], 1);
    assert_eq!(links[0]["scheduled_date"], "2025-03-10");

    let work_order_id = links[0]["work_order_id"].as_i64().unwrap() as i32;
    let work_order = WorkOrderEntity::find_by_id(work_order_id)
        .one(&*app.state.db)
        .await
        .expect("load work order")
        .expect("generated work order exists");
    assert_eq!(work_order.title, "Annual boiler inspection");
    assert_eq!(work_order.status, "scheduled");
    assert_eq!(
        work_order.date_scheduled.map(|d| d.to_string()),
        Some("2025-03-10".to_string())
    );
    assert_eq!(
        work_order.estimated_hours.map(|h| h.to_string()),
        Some("4".to_string())
    );
}

#[tokio::test]
async fn monthly_schedule_expands_into_numbered_series() {
    let app = TestApp::new().await;
    let pm_id = create_schedule(
        &app,
        json!({
            "title": "Grease bearings",
            "maintenance_type": "lubrication",
            "start_date": "2025-01-15",
            "duration": 1,
            "is_recurring": true,
            "recurring_period": "monthly",
            "occurrences": 3
        }),
    )
    .await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/preventive-maintenance/{pm_id}/generate"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let links = read_json(response).await;
    let links = links.as_array().expect("link array");
    assert_eq!(links.len(), 3);

    let dates: Vec<&str> = links
        .iter()
        .map(|l| l["scheduled_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-01-15", "2025-02-15", "2025-03-15"]);

    for (i, link) in links.iter().enumerate() {
        assert_eq!(link["occurrence_number"], (i + 1) as i64);
        let work_order_id = link["work_order_id"].as_i64().unwrap() as i32;
        let work_order = WorkOrderEntity::find_by_id(work_order_id)
            .one(&*app.state.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(work_order.title, format!("Grease bearings ({}/3)", i + 1));
    }
}

#[tokio::test]
async fn weekly_schedule_advances_by_seven_days() {
    let app = TestApp::new().await;
    let pm_id = create_schedule(
        &app,
        json!({
            "title": "Filter check",
            "maintenance_type": "inspection",
            "start_date": "2025-06-01",
            "duration": 1,
            "is_recurring": true,
            "recurring_period": "weekly",
            "occurrences": 2
        }),
    )
    .await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/preventive-maintenance/{pm_id}/generate"),
            None,
        )
        .await;
    let links = read_json(response).await;
    let dates: Vec<&str> = links
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["scheduled_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-06-01", "2025-06-08"]);
}

#[tokio::test]
async fn regeneration_is_refused_without_force() {
    let app = TestApp::new().await;
    let pm_id = create_schedule(
        &app,
        json!({
            "title": "Belt tension check",
            "maintenance_type": "inspection",
            "start_date": "2025-04-01",
            "duration": 1
        }),
    )
    .await;

    let uri = format!("/api/v1/preventive-maintenance/{pm_id}/generate");
    let response = app.request(Method::POST, &uri, None).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.request(Method::POST, &uri, None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .request(Method::POST, &format!("{uri}?force=true"), None)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let links = read_json(response).await;
    assert_eq!(links.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn recurring_schedule_without_period_or_count_generates_nothing() {
    let app = TestApp::new().await;
    let pm_id = create_schedule(
        &app,
        json!({
            "title": "Incomplete schedule",
            "maintenance_type": "inspection",
            "start_date": "2025-05-01",
            "duration": 1,
            "is_recurring": true,
            "recurring_period": "monthly"
        }),
    )
    .await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/preventive-maintenance/{pm_id}/generate"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let links = read_json(response).await;
    assert_eq!(links.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn generating_for_missing_schedule_is_404() {
    let app = TestApp::new().await;
    let response = app
        .request(
            Method::POST,
            "/api/v1/preventive-maintenance/424242/generate",
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assigning_technicians_replaces_the_whole_set() {
    let app = TestApp::new().await;
    let alice = app.seed_user("alice", "technician").await;
    let bob = app.seed_user("bob", "technician").await;
    let carol = app.seed_user("carol", "technician").await;

    let pm_id = create_schedule(
        &app,
        json!({
            "title": "Compressor service",
            "maintenance_type": "service",
            "start_date": "2025-02-01",
            "duration": 2
        }),
    )
    .await;

    let uri = format!("/api/v1/preventive-maintenance/{pm_id}/technicians");
    let response = app
        .request(Method::POST, &uri, Some(json!([alice.id, bob.id])))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await.as_array().unwrap().len(), 2);

    // Reassignment replaces, never appends.
    let response = app
        .request(Method::POST, &uri, Some(json!([carol.id])))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.request(Method::GET, &uri, None).await;
    let rows = read_json(response).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["technician_id"], carol.id);

    // The remaining primary technician is auto-assigned on expansion.
    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/preventive-maintenance/{pm_id}/generate"),
            None,
        )
        .await;
    let links = read_json(response).await;
    let work_order_id = links[0]["work_order_id"].as_i64().unwrap() as i32;
    let work_order = WorkOrderEntity::find_by_id(work_order_id)
        .one(&*app.state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(work_order.assigned_to_id, Some(carol.id));
}

#[tokio::test]
async fn removing_an_unassigned_technician_is_404() {
    let app = TestApp::new().await;
    let pm_id = create_schedule(
        &app,
        json!({
            "title": "Chiller descale",
            "maintenance_type": "service",
            "start_date": "2025-08-01",
            "duration": 3
        }),
    )
    .await;

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/v1/preventive-maintenance/{pm_id}/technicians/777"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_recurring_period_is_rejected_at_creation() {
    let app = TestApp::new().await;
    let response = app
        .request(
            Method::POST,
            "/api/v1/preventive-maintenance",
            Some(json!({
                "title": "Bad period",
                "maintenance_type": "inspection",
                "start_date": "2025-01-01",
                "duration": 1,
                "is_recurring": true,
                "recurring_period": "fortnightly",
                "occurrences": 2
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
