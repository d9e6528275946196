//! Plot registration, obstacle, stats, and sweep-plan handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use survey_core::{plan_sweep, HeightStats, SweepPlan};
use uuid::Uuid;

use crate::state::{store::PlotSummary, AppState, StoreError};

#[derive(Debug, Deserialize)]
pub struct CreatePlotRequest {
    pub length: u32,
    pub width: u32,
}

#[derive(Debug, Deserialize)]
pub struct AddObstacleRequest {
    pub x: u32,
    pub y: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct SweepPlanQuery {
    /// Maximum travel distance; absent or 0 means unbounded.
    pub max_distance: Option<i64>,
}

type ApiError = (StatusCode, Json<serde_json::Value>);

fn store_error(err: StoreError) -> ApiError {
    let status = match err {
        StoreError::PlotNotFound(_) => StatusCode::NOT_FOUND,
        StoreError::CellOccupied => StatusCode::CONFLICT,
        StoreError::CapacityReached => StatusCode::SERVICE_UNAVAILABLE,
        StoreError::InvalidDimensions { .. }
        | StoreError::InvalidHeight { .. }
        | StoreError::OutOfBounds => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "error": err.to_string() })))
}

fn bad_request(message: &str, field: Option<&str>) -> ApiError {
    let mut payload = json!({ "error": message });
    if let Some(field) = field {
        payload["field"] = serde_json::Value::String(field.to_string());
    }
    (StatusCode::BAD_REQUEST, Json(payload))
}

pub async fn create_plot(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePlotRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let summary = state
        .create_plot(req.length, req.width)
        .map_err(store_error)?;

    tracing::info!(
        "Registered plot {} ({}x{})",
        summary.plot_id,
        summary.length,
        summary.width
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "plot_id": summary.plot_id })),
    ))
}

pub async fn list_plots(State(state): State<Arc<AppState>>) -> Json<Vec<PlotSummary>> {
    Json(state.list_plots())
}

pub async fn get_plot(
    State(state): State<Arc<AppState>>,
    Path(plot_id): Path<Uuid>,
) -> Result<Json<PlotSummary>, ApiError> {
    state.get_plot(plot_id).map(Json).map_err(store_error)
}

pub async fn add_obstacle(
    State(state): State<Arc<AppState>>,
    Path(plot_id): Path<Uuid>,
    Json(req): Json<AddObstacleRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let obstacle = state
        .add_obstacle(plot_id, req.x, req.y, req.height)
        .map_err(store_error)?;

    tracing::debug!(
        "Registered obstacle {} at ({},{}) height {} on plot {}",
        obstacle.obstacle_id,
        obstacle.x,
        obstacle.y,
        obstacle.height,
        plot_id
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "obstacle_id": obstacle.obstacle_id })),
    ))
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Path(plot_id): Path<Uuid>,
) -> Result<Json<HeightStats>, ApiError> {
    state.height_stats(plot_id).map(Json).map_err(store_error)
}

pub async fn get_sweep_plan(
    State(state): State<Arc<AppState>>,
    Path(plot_id): Path<Uuid>,
    Query(query): Query<SweepPlanQuery>,
) -> Result<Json<SweepPlan>, ApiError> {
    let max_distance = query.max_distance.unwrap_or(0);
    if max_distance < 0 {
        return Err(bad_request(
            "max_distance must be non-negative",
            Some("max_distance"),
        ));
    }

    let (plot, obstacles) = state.plan_inputs(plot_id).map_err(store_error)?;

    let plan = plan_sweep(plot, &obstacles, max_distance as u64).map_err(|err| {
        // Stored plots always have positive dimensions; this is a defensive path.
        tracing::error!("Sweep planning failed for plot {}: {}", plot_id, err);
        bad_request(&err.to_string(), None)
    })?;

    Ok(Json(plan))
}
