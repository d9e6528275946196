pub mod cost;
pub mod models;
pub mod obstacles;
pub mod planner;
pub mod stats;
pub mod sweep;

pub use cost::{BudgetMeter, Charge, FlightState, CRUISE_ALTITUDE, STEP_COST};
pub use models::{Cell, HeightStats, Plot, SweepPlan};
pub use obstacles::ObstacleMap;
pub use planner::{plan_sweep, PlanError};
pub use sweep::{Advance, SweepPath, SweepStep};
