//! In-memory plot store using DashMap.

use crate::config::Config;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::collections::HashMap;
use survey_core::{Cell, HeightStats, ObstacleMap, Plot};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("plot {0} not found")]
    PlotNotFound(Uuid),
    #[error("plot dimensions must be between 1 and {max}")]
    InvalidDimensions { max: u32 },
    #[error("obstacle height must be between 1 and {max}")]
    InvalidHeight { max: u32 },
    #[error("obstacle coordinates out of plot bounds")]
    OutOfBounds,
    #[error("an obstacle already exists at this cell")]
    CellOccupied,
    #[error("plot capacity reached")]
    CapacityReached,
}

/// A registered obstacle on a plot.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ObstacleRecord {
    pub obstacle_id: Uuid,
    pub x: u32,
    pub y: u32,
    pub height: u32,
}

/// A registered plot and its obstacles.
#[derive(Debug, Clone)]
pub struct PlotRecord {
    pub plot_id: Uuid,
    pub plot: Plot,
    pub obstacles: HashMap<Cell, ObstacleRecord>,
    pub created_at: DateTime<Utc>,
}

impl PlotRecord {
    /// Sparse obstacle map snapshot for the planner.
    pub fn obstacle_map(&self) -> ObstacleMap {
        self.obstacles
            .iter()
            .map(|(cell, record)| (*cell, record.height))
            .collect()
    }

    pub fn height_stats(&self) -> HeightStats {
        HeightStats::from_heights(self.obstacles.values().map(|r| r.height).collect())
    }
}

/// Plot summary returned by the list/get endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PlotSummary {
    pub plot_id: Uuid,
    pub length: u32,
    pub width: u32,
    pub obstacle_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&PlotRecord> for PlotSummary {
    fn from(record: &PlotRecord) -> Self {
        Self {
            plot_id: record.plot_id,
            length: record.plot.length,
            width: record.plot.width,
            obstacle_count: record.obstacles.len(),
            created_at: record.created_at,
        }
    }
}

/// Application state - thread-safe store for registered plots.
pub struct AppState {
    plots: DashMap<Uuid, PlotRecord>,
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            plots: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    /// Register a new plot.
    pub fn create_plot(&self, length: u32, width: u32) -> Result<PlotSummary, StoreError> {
        let max = self.config.max_dimension;
        if length < 1 || length > max || width < 1 || width > max {
            return Err(StoreError::InvalidDimensions { max });
        }
        if self.config.max_tracked_plots > 0 && self.plots.len() >= self.config.max_tracked_plots {
            return Err(StoreError::CapacityReached);
        }

        let record = PlotRecord {
            plot_id: Uuid::new_v4(),
            plot: Plot::new(length, width),
            obstacles: HashMap::new(),
            created_at: Utc::now(),
        };
        let summary = PlotSummary::from(&record);
        self.plots.insert(record.plot_id, record);
        Ok(summary)
    }

    /// Register an obstacle on an existing plot.
    pub fn add_obstacle(
        &self,
        plot_id: Uuid,
        x: u32,
        y: u32,
        height: u32,
    ) -> Result<ObstacleRecord, StoreError> {
        let max = self.config.max_obstacle_height;
        if height < 1 || height > max {
            return Err(StoreError::InvalidHeight { max });
        }

        let mut record = self
            .plots
            .get_mut(&plot_id)
            .ok_or(StoreError::PlotNotFound(plot_id))?;

        let cell = Cell::new(x, y);
        if !record.plot.contains(cell) {
            return Err(StoreError::OutOfBounds);
        }
        if record.obstacles.contains_key(&cell) {
            return Err(StoreError::CellOccupied);
        }

        let obstacle = ObstacleRecord {
            obstacle_id: Uuid::new_v4(),
            x,
            y,
            height,
        };
        record.obstacles.insert(cell, obstacle);
        Ok(obstacle)
    }

    pub fn get_plot(&self, plot_id: Uuid) -> Result<PlotSummary, StoreError> {
        self.plots
            .get(&plot_id)
            .map(|record| PlotSummary::from(record.value()))
            .ok_or(StoreError::PlotNotFound(plot_id))
    }

    pub fn list_plots(&self) -> Vec<PlotSummary> {
        self.plots
            .iter()
            .map(|record| PlotSummary::from(record.value()))
            .collect()
    }

    pub fn height_stats(&self, plot_id: Uuid) -> Result<HeightStats, StoreError> {
        self.plots
            .get(&plot_id)
            .map(|record| record.height_stats())
            .ok_or(StoreError::PlotNotFound(plot_id))
    }

    /// Plot dimensions and obstacle map snapshot for the planner.
    pub fn plan_inputs(&self, plot_id: Uuid) -> Result<(Plot, ObstacleMap), StoreError> {
        self.plots
            .get(&plot_id)
            .map(|record| (record.plot, record.obstacle_map()))
            .ok_or(StoreError::PlotNotFound(plot_id))
    }
}
