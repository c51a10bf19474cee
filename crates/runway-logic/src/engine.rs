//! Runway engine entry point: base projection, scenarios, validation
//! status, month-0 burn breakdown, and levers in one result.
//!
//! ```
//! use runway_logic::engine::calculate;
//! use runway_logic::input::RunwayInput;
//!
//! let result = calculate(&RunwayInput {
//!     cash_in_bank: 24_000.0,
//!     fixed_monthly_costs: 2_000.0,
//!     buffer_percent: 0,
//!     ..Default::default()
//! });
//! assert_eq!(result.runway_months, 12);
//! assert_eq!(result.zero_cash_approx, "+ 12 Months");
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{HORIZON_MONTHS, VALIDATION_HEADROOM_MONTHS};
use crate::input::RunwayInput;
use crate::levers::{generate_levers, Lever};
use crate::projection::{
    buffer_multiplier, net_revenue, project, simulate_runway, stage_spend, target_months,
};
use crate::scenarios::{aggressive, conservative, Scenarios};

/// Whether the stage target fits inside the runway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStatus {
    /// Runway covers the target with at least two months to spare.
    Achievable,
    /// Runway covers the target, but with under two months to spare.
    AtRisk,
    NotAchievable,
    /// Stage has no target, or no target was set.
    NotApplicable,
}

impl ValidationStatus {
    /// Badge text for display; empty when not applicable.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Achievable => "Validation Achievable",
            Self::AtRisk => "Validation At Risk",
            Self::NotAchievable => "Not Achievable",
            Self::NotApplicable => "",
        }
    }
}

/// Month-0 burn snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurnBreakdown {
    /// Buffered fixed + variable costs plus month-0 stage spend.
    pub gross_burn: f64,
    /// Gross burn less month-0 net revenue, floored at zero.
    pub net_burn: f64,
    /// Every one-time cost across the plan.
    pub one_time_total: f64,
    /// Hires starting in month 0.
    pub hire_additions_at_month0: f64,
}

/// Everything one `calculate` call produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwayResult {
    /// 0..=24; 24 means "24+".
    pub runway_months: u32,
    pub zero_cash_approx: String,
    pub burn_breakdown: BurnBreakdown,
    pub validation_status: ValidationStatus,
    pub scenarios: Scenarios,
    pub levers: Vec<Lever>,
    /// Base-case cash after each month, through exhaustion.
    pub cash_flow_history: Vec<f64>,
}

/// Run the full runway analysis for `input`.
pub fn calculate(input: &RunwayInput) -> RunwayResult {
    let base = project(input);
    let runway = base.runway_months;

    let scenarios = Scenarios {
        conservative_months: simulate_runway(&conservative(input)),
        aggressive_months: simulate_runway(&aggressive(input)),
    };
    let validation_status = validation_status(input, runway);
    let levers = generate_levers(input, runway);
    let burn_breakdown = burn_breakdown(input);

    log::debug!(
        "runway [{}]: base={} conservative={} aggressive={} status={:?} levers={}",
        input.stage.label(),
        runway,
        scenarios.conservative_months,
        scenarios.aggressive_months,
        validation_status,
        levers.len()
    );

    RunwayResult {
        runway_months: runway,
        zero_cash_approx: zero_cash_label(runway),
        burn_breakdown,
        validation_status,
        scenarios,
        levers,
        cash_flow_history: base.month_end_balances,
    }
}

/// Relative label for the month cash runs out.
pub fn zero_cash_label(runway_months: u32) -> String {
    if runway_months >= HORIZON_MONTHS {
        format!("> {} Months", HORIZON_MONTHS)
    } else {
        format!("+ {} Months", runway_months)
    }
}

/// Classify the stage target against a runway.
pub fn validation_status(input: &RunwayInput, runway_months: u32) -> ValidationStatus {
    let Some(days) = input.stage.target_days() else {
        return ValidationStatus::NotApplicable;
    };
    let target = target_months(days);
    if runway_months >= target + VALIDATION_HEADROOM_MONTHS {
        ValidationStatus::Achievable
    } else if runway_months >= target {
        ValidationStatus::AtRisk
    } else {
        ValidationStatus::NotAchievable
    }
}

/// Burn figures at month 0.
pub fn burn_breakdown(input: &RunwayInput) -> BurnBreakdown {
    let recurring = input.base_monthly_costs() * buffer_multiplier(input);
    let gross = recurring + stage_spend(input, 0);
    let net = (gross - net_revenue(input, 0)).max(0.0);
    let hires = input
        .planned_hires
        .iter()
        .filter(|h| h.start_month_offset == 0)
        .map(|h| h.monthly_cost)
        .sum::<f64>();

    BurnBreakdown {
        gross_burn: gross,
        net_burn: net,
        one_time_total: input.one_time_total(),
        hire_additions_at_month0: hires,
    }
}
