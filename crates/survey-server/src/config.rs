//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Upper bound for plot length and width.
    pub max_dimension: u32,
    /// Upper bound for obstacle heights.
    pub max_obstacle_height: u32,
    /// Maximum number of tracked plots; 0 disables the cap.
    pub max_tracked_plots: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SURVEY_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            max_dimension: env::var("SURVEY_MAX_DIMENSION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(50_000),
            max_obstacle_height: env::var("SURVEY_MAX_OBSTACLE_HEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            max_tracked_plots: env::var("SURVEY_MAX_TRACKED_PLOTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        }
    }
}
