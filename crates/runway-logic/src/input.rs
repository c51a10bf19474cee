//! Financial input snapshot fed to the runway engine.
//!
//! Amounts are plain `f64` in the caller's currency. The engine computes
//! with whatever is given; range checks live in [`crate::validate`].
//!
//! ```
//! use runway_logic::input::{OneTimeCost, RunwayInput};
//!
//! let input = RunwayInput {
//!     cash_in_bank: 500_000.0,
//!     fixed_monthly_costs: 40_000.0,
//!     one_time_costs: vec![OneTimeCost::new("Laptops", 120_000.0, 2, false)],
//!     ..Default::default()
//! };
//! assert_eq!(input.buffer_percent, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{HIRE_MAX_MONTH, ONE_TIME_MAX_MONTH};
use crate::stage::StageProfile;

/// How revenue converts into contribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum MarginModel {
    /// Contribution is `revenue × pct / 100`.
    GrossMargin(f64),
    /// Contribution is `revenue × (1 − pct / 100)`.
    Cogs(f64),
    /// Revenue passes through untouched.
    #[default]
    FullMargin,
}

impl MarginModel {
    /// Build from the form's two optional fields. Gross margin wins over
    /// COGS when both are present.
    pub fn from_optional(gross_margin_percent: Option<f64>, cogs_percent: Option<f64>) -> Self {
        match (gross_margin_percent, cogs_percent) {
            (Some(pct), _) => Self::GrossMargin(pct),
            (None, Some(pct)) => Self::Cogs(pct),
            (None, None) => Self::FullMargin,
        }
    }

    /// Apply the margin to a gross revenue figure.
    pub fn contribution(&self, revenue: f64) -> f64 {
        match *self {
            Self::GrossMargin(pct) => revenue * (pct / 100.0),
            Self::Cogs(pct) => revenue * (1.0 - pct / 100.0),
            Self::FullMargin => revenue,
        }
    }
}

/// A single discrete expense landing in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneTimeCost {
    pub name: String,
    pub amount: f64,
    /// Month the cost lands in (0–12).
    pub month_offset: u32,
    #[serde(default = "default_optional")]
    pub is_optional: bool,
}

fn default_optional() -> bool {
    true
}

impl OneTimeCost {
    /// Create a cost, clamping the month into the form's 0–12 range.
    pub fn new(name: impl Into<String>, amount: f64, month_offset: u32, is_optional: bool) -> Self {
        Self {
            name: name.into(),
            amount,
            month_offset: month_offset.min(ONE_TIME_MAX_MONTH),
            is_optional,
        }
    }
}

/// A recurring cost that begins at a given month and continues thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedHire {
    pub role: String,
    pub monthly_cost: f64,
    /// First month the hire is paid (0–23).
    pub start_month_offset: u32,
}

impl PlannedHire {
    /// Create a hire, clamping the start month into 0–23.
    pub fn new(role: impl Into<String>, monthly_cost: f64, start_month_offset: u32) -> Self {
        Self {
            role: role.into(),
            monthly_cost,
            start_month_offset: start_month_offset.min(HIRE_MAX_MONTH),
        }
    }
}

/// Complete financial snapshot for one runway calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunwayInput {
    pub stage: StageProfile,

    pub cash_in_bank: f64,
    pub fixed_monthly_costs: f64,
    pub variable_monthly_costs: f64,
    /// Contingency applied to fixed + variable costs (0–100).
    pub buffer_percent: u32,

    /// Revenue toggle; ignored (treated as on) for early-revenue startups.
    pub has_revenue: bool,
    pub current_monthly_revenue: f64,
    pub margin: MarginModel,
    /// Month-over-month growth percentage, compounded.
    pub revenue_growth_rate: f64,
    /// Days before revenue is collected (0, 7, 15 or 30). Recorded for the
    /// caller; the projection does not shift revenue by it.
    pub collection_delay_days: u32,

    pub one_time_costs: Vec<OneTimeCost>,
    pub planned_hires: Vec<PlannedHire>,
}

impl Default for RunwayInput {
    fn default() -> Self {
        Self {
            stage: StageProfile::default(),
            cash_in_bank: 0.0,
            fixed_monthly_costs: 0.0,
            variable_monthly_costs: 0.0,
            buffer_percent: 10,
            has_revenue: false,
            current_monthly_revenue: 0.0,
            margin: MarginModel::FullMargin,
            revenue_growth_rate: 0.0,
            collection_delay_days: 0,
            one_time_costs: Vec::new(),
            planned_hires: Vec::new(),
        }
    }
}

impl RunwayInput {
    /// Whether revenue is counted in the projection.
    pub fn revenue_applies(&self) -> bool {
        self.has_revenue || self.stage.implies_revenue()
    }

    /// Fixed plus variable monthly cost, before buffer.
    pub fn base_monthly_costs(&self) -> f64 {
        self.fixed_monthly_costs + self.variable_monthly_costs
    }

    /// Sum of every one-time cost, whatever month it lands in.
    pub fn one_time_total(&self) -> f64 {
        self.one_time_costs.iter().map(|c| c.amount).sum()
    }
}
