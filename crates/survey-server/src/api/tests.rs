use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, state::AppState};

fn test_config() -> Config {
    Config {
        server_port: 0,
        max_dimension: 50_000,
        max_obstacle_height: 30,
        max_tracked_plots: 0,
    }
}

fn setup_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(test_config()));
    let app = api::routes().with_state(state.clone());
    (app, state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

async fn create_plot(app: &axum::Router, length: u32, width: u32) -> String {
    let res = app
        .clone()
        .oneshot(post_json(
            "/v1/plots",
            json!({ "length": length, "width": width }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = read_json(res).await;
    body["plot_id"].as_str().expect("plot id").to_string()
}

#[tokio::test]
async fn create_and_fetch_plot() {
    let (app, _state) = setup_app();
    let plot_id = create_plot(&app, 10, 20).await;

    let res = app
        .clone()
        .oneshot(get(&format!("/v1/plots/{}", plot_id)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["length"], 10);
    assert_eq!(body["width"], 20);
    assert_eq!(body["obstacle_count"], 0);

    let res = app.clone().oneshot(get("/v1/plots")).await.unwrap();
    let body = read_json(res).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_plot_rejects_bad_dimensions() {
    let (app, _state) = setup_app();

    let res = app
        .clone()
        .oneshot(post_json("/v1/plots", json!({ "length": 0, "width": 5 })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .clone()
        .oneshot(post_json(
            "/v1/plots",
            json!({ "length": 5, "width": 50_001 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_plot_returns_not_found() {
    let (app, _state) = setup_app();
    let missing = "00000000-0000-0000-0000-000000000001";

    for uri in [
        format!("/v1/plots/{}", missing),
        format!("/v1/plots/{}/stats", missing),
        format!("/v1/plots/{}/sweep-plan", missing),
    ] {
        let res = app.clone().oneshot(get(&uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/v1/plots/{}/obstacles", missing),
            json!({ "x": 1, "y": 1, "height": 5 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn obstacle_validation() {
    let (app, _state) = setup_app();
    let plot_id = create_plot(&app, 5, 5).await;
    let uri = format!("/v1/plots/{}/obstacles", plot_id);

    // Height out of range
    let res = app
        .clone()
        .oneshot(post_json(&uri, json!({ "x": 1, "y": 1, "height": 31 })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Out of bounds
    let res = app
        .clone()
        .oneshot(post_json(&uri, json!({ "x": 6, "y": 1, "height": 5 })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Valid
    let res = app
        .clone()
        .oneshot(post_json(&uri, json!({ "x": 3, "y": 3, "height": 5 })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = read_json(res).await;
    assert!(body["obstacle_id"].as_str().is_some());

    // Duplicate cell
    let res = app
        .clone()
        .oneshot(post_json(&uri, json!({ "x": 3, "y": 3, "height": 2 })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn stats_reports_median() {
    let (app, _state) = setup_app();
    let plot_id = create_plot(&app, 5, 5).await;
    let uri = format!("/v1/plots/{}/obstacles", plot_id);

    for (x, y, height) in [(1, 1, 3), (2, 1, 9), (3, 1, 7)] {
        let res = app
            .clone()
            .oneshot(post_json(&uri, json!({ "x": x, "y": y, "height": height })))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = app
        .clone()
        .oneshot(get(&format!("/v1/plots/{}/stats", plot_id)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["min"], 3);
    assert_eq!(body["max"], 9);
    assert_eq!(body["median"], 7.0);
}

#[tokio::test]
async fn sweep_plan_unbounded() {
    let (app, _state) = setup_app();
    let plot_id = create_plot(&app, 2, 1).await;

    let res = app
        .clone()
        .oneshot(get(&format!("/v1/plots/{}/sweep-plan", plot_id)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["distance"], 12);
    assert!(body.get("resume").is_none());
}

#[tokio::test]
async fn sweep_plan_with_budget_reports_resume_cell() {
    let (app, _state) = setup_app();
    let plot_id = create_plot(&app, 2, 1).await;

    let res = app
        .clone()
        .oneshot(get(&format!(
            "/v1/plots/{}/sweep-plan?max_distance=5",
            plot_id
        )))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["distance"], 5);
    assert_eq!(body["resume"]["x"], 1);
    assert_eq!(body["resume"]["y"], 1);
}

#[tokio::test]
async fn sweep_plan_accounts_for_obstacles() {
    let (app, _state) = setup_app();
    let plot_id = create_plot(&app, 1, 1).await;

    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/v1/plots/{}/obstacles", plot_id),
            json!({ "x": 1, "y": 1, "height": 5 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app
        .clone()
        .oneshot(get(&format!("/v1/plots/{}/sweep-plan", plot_id)))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["distance"], 12);
}

#[tokio::test]
async fn sweep_plan_rejects_negative_budget() {
    let (app, _state) = setup_app();
    let plot_id = create_plot(&app, 2, 1).await;

    let res = app
        .clone()
        .oneshot(get(&format!(
            "/v1/plots/{}/sweep-plan?max_distance=-1",
            plot_id
        )))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["field"], "max_distance");
}

#[tokio::test]
async fn plot_capacity_returns_service_unavailable() {
    let mut config = test_config();
    config.max_tracked_plots = 1;
    let state = Arc::new(AppState::new(config));
    let app = api::routes().with_state(state);

    create_plot(&app, 2, 2).await;
    let res = app
        .clone()
        .oneshot(post_json("/v1/plots", json!({ "length": 2, "width": 2 })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}
