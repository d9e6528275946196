//! REST API routes.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::plots;
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/plots", post(plots::create_plot))
        .route("/v1/plots", get(plots::list_plots))
        .route("/v1/plots/:plot_id", get(plots::get_plot))
        .route("/v1/plots/:plot_id/obstacles", post(plots::add_obstacle))
        .route("/v1/plots/:plot_id/stats", get(plots::get_stats))
        .route("/v1/plots/:plot_id/sweep-plan", get(plots::get_sweep_plan))
}
