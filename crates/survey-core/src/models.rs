//! Core data models for the survey planner.

use serde::{Deserialize, Serialize};

/// A rectangular survey plot divided into unit cells.
///
/// Valid coordinates run `x in [1, length]`, `y in [1, width]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plot {
    pub length: u32,
    pub width: u32,
}

impl Plot {
    pub fn new(length: u32, width: u32) -> Self {
        Self { length, width }
    }

    /// Total number of cells in the plot.
    pub fn cell_count(&self) -> u64 {
        self.length as u64 * self.width as u64
    }

    /// Check whether a cell lies within the plot bounds.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 1 && cell.x <= self.length && cell.y >= 1 && cell.y <= self.width
    }
}

/// A single grid coordinate, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Result of a sweep simulation.
///
/// `resume` is present exactly when the distance budget stopped the sweep
/// before completion; it names the last cell the drone finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepPlan {
    pub distance: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<Cell>,
}

/// Summary statistics over the obstacle heights of a plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightStats {
    pub count: u32,
    pub min: u32,
    pub max: u32,
    pub median: f64,
}
