//! Sparse obstacle map and the clearance function.

use crate::cost::CRUISE_ALTITUDE;
use crate::models::Cell;
use std::collections::HashMap;

/// Sparse, read-only association of grid cells to obstacle heights.
///
/// Absence of an entry is a valid "no obstacle" state, not a failure.
/// At most one obstacle per cell.
#[derive(Debug, Clone, Default)]
pub struct ObstacleMap {
    heights: HashMap<Cell, u32>,
}

impl ObstacleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an obstacle, returning the previous height if the cell was
    /// already occupied.
    pub fn insert(&mut self, cell: Cell, height: u32) -> Option<u32> {
        self.heights.insert(cell, height)
    }

    pub fn height_at(&self, cell: Cell) -> Option<u32> {
        self.heights.get(&cell).copied()
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.heights.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// All obstacle heights, in no particular order.
    pub fn heights(&self) -> impl Iterator<Item = u32> + '_ {
        self.heights.values().copied()
    }

    /// Required flight altitude over a cell: one unit above the obstacle,
    /// or the baseline cruise altitude over bare ground.
    pub fn required_altitude(&self, cell: Cell) -> u32 {
        match self.height_at(cell) {
            Some(height) => height + 1,
            None => CRUISE_ALTITUDE,
        }
    }
}

impl FromIterator<(Cell, u32)> for ObstacleMap {
    fn from_iter<I: IntoIterator<Item = (Cell, u32)>>(iter: I) -> Self {
        Self {
            heights: iter.into_iter().collect(),
        }
    }
}
