//! Cost model constants and the budget governor.

use crate::models::{Cell, SweepPlan};

/// Baseline flight altitude over bare ground.
pub const CRUISE_ALTITUDE: u32 = 1;

/// Fixed cost of a horizontal advance, between cells or between rows.
pub const STEP_COST: u64 = 10;

/// Transient flight state threaded through the planner.
#[derive(Debug, Clone, Copy)]
pub struct FlightState {
    pub cell: Cell,
    pub altitude: u32,
}

impl FlightState {
    /// Drone starts grounded at the sweep origin.
    pub fn grounded() -> Self {
        Self {
            cell: Cell::new(1, 1),
            altitude: 0,
        }
    }
}

/// Outcome of a single charge against the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charge {
    Applied,
    /// The budget has been reached; the total is clamped and all iteration
    /// must unwind without further side effects.
    Exhausted,
}

/// Accumulates travel distance and enforces an optional cutoff.
///
/// A budget of `0` means unbounded. Once exhausted the meter is terminal:
/// further charges are ignored.
#[derive(Debug, Clone)]
pub struct BudgetMeter {
    budget: u64,
    spent: u64,
    cutoff: Option<Cell>,
}

impl BudgetMeter {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            spent: 0,
            cutoff: None,
        }
    }

    /// Add a charge incurred at `at`. When a positive budget has been
    /// reached or exceeded, clamp the total to exactly the budget, record
    /// `at` as the resume cell, and signal exhaustion.
    pub fn charge(&mut self, cost: u64, at: Cell) -> Charge {
        if self.cutoff.is_some() {
            return Charge::Exhausted;
        }
        self.spent += cost;
        if self.budget > 0 && self.spent >= self.budget {
            self.spent = self.budget;
            self.cutoff = Some(at);
            return Charge::Exhausted;
        }
        Charge::Applied
    }

    /// Charge the final descent. An exact landing on the budget completes
    /// the plan; only a strict overrun trips the cutoff.
    pub fn charge_final(&mut self, cost: u64, at: Cell) -> Charge {
        if self.cutoff.is_some() {
            return Charge::Exhausted;
        }
        if self.budget > 0 && self.spent + cost > self.budget {
            self.spent = self.budget;
            self.cutoff = Some(at);
            return Charge::Exhausted;
        }
        self.spent += cost;
        Charge::Applied
    }

    pub fn spent(&self) -> u64 {
        self.spent
    }

    pub fn is_exhausted(&self) -> bool {
        self.cutoff.is_some()
    }

    pub fn into_plan(self) -> SweepPlan {
        SweepPlan {
            distance: self.spent,
            resume: self.cutoff,
        }
    }
}
