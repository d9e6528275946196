//! Sweep planner: drives the sequencer, clearance lookups, and the budget
//! meter in a single pass.

use crate::cost::{BudgetMeter, Charge, FlightState, STEP_COST};
use crate::models::{Plot, SweepPlan};
use crate::obstacles::ObstacleMap;
use crate::sweep::{Advance, SweepPath};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("plot dimensions must be positive (got {length}x{width})")]
    InvalidPlot { length: u32, width: u32 },
}

/// Simulate the full boustrophedon sweep over `plot` and return the total
/// travel distance.
///
/// A positive `budget` caps the distance: the sweep stops as soon as the
/// running total reaches it, the total is clamped to exactly the budget,
/// and the returned plan carries the cell at which the cutoff occurred.
/// A budget of `0` is unbounded.
///
/// Per visited cell the drone charges the altitude delta against the
/// clearance required there, then the fixed horizontal step cost for the
/// move to the next cell or row. After the last cell it descends back to
/// the ground.
pub fn plan_sweep(plot: Plot, obstacles: &ObstacleMap, budget: u64) -> Result<SweepPlan, PlanError> {
    if plot.length == 0 || plot.width == 0 {
        return Err(PlanError::InvalidPlot {
            length: plot.length,
            width: plot.width,
        });
    }

    let mut state = FlightState::grounded();
    let mut meter = BudgetMeter::new(budget);

    for step in SweepPath::new(plot) {
        let required = obstacles.required_altitude(step.cell);
        let delta = required.abs_diff(state.altitude) as u64;
        if meter.charge(delta, step.cell) == Charge::Exhausted {
            return Ok(meter.into_plan());
        }
        state.altitude = required;
        // The cell is now finished; a cutoff during the following move
        // reports this cell, not the move's destination.
        state.cell = step.cell;

        match step.advance {
            Advance::NextCell | Advance::NextRow => {
                if meter.charge(STEP_COST, state.cell) == Charge::Exhausted {
                    return Ok(meter.into_plan());
                }
            }
            Advance::End => break,
        }
    }

    if state.altitude > 0 {
        meter.charge_final(state.altitude as u64, state.cell);
    }

    Ok(meter.into_plan())
}
