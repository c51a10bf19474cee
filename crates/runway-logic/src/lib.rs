//! Pure runway simulation logic.
//!
//! Projects when a startup exhausts its cash from a structured financial
//! snapshot. Functions take plain data and return results: no I/O, no
//! shared state, safe to call from any thread.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Horizon, day/month conversion, scenario and lever factors |
//! | [`engine`] | `calculate`: base runway, scenarios, validation status, breakdown, levers |
//! | [`input`] | Input snapshot, margin model, one-time costs, planned hires |
//! | [`levers`] | Corrective-action battery and runway deltas |
//! | [`projection`] | Month-by-month cash projection |
//! | [`scenarios`] | Conservative / aggressive input variants |
//! | [`stage`] | Startup stage sum type with stage-specific budgets |
//! | [`validate`] | Caller-side range checks |

pub mod constants;
pub mod engine;
pub mod input;
pub mod levers;
pub mod projection;
pub mod scenarios;
pub mod stage;
pub mod validate;

pub use engine::{calculate, BurnBreakdown, RunwayResult, ValidationStatus};
pub use input::{MarginModel, OneTimeCost, PlannedHire, RunwayInput};
pub use levers::{Lever, LeverType};
pub use scenarios::Scenarios;
pub use stage::StageProfile;
