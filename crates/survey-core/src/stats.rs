//! Obstacle height statistics.

use crate::models::HeightStats;

impl HeightStats {
    /// Summarize a set of obstacle heights. An empty set yields all-zero
    /// stats rather than an error.
    pub fn from_heights(mut heights: Vec<u32>) -> Self {
        if heights.is_empty() {
            return Self {
                count: 0,
                min: 0,
                max: 0,
                median: 0.0,
            };
        }

        heights.sort_unstable();
        let count = heights.len();
        let median = if count % 2 == 1 {
            heights[count / 2] as f64
        } else {
            (heights[count / 2 - 1] as f64 + heights[count / 2] as f64) / 2.0
        };

        Self {
            count: count as u32,
            min: heights[0],
            max: heights[count - 1],
            median,
        }
    }
}
