//! Startup stage and the temporary budgets each stage carries.
//!
//! Every stage owns only the budget fields that apply to it:
//!
//! | Stage | Target-gated (active while `month < target`) | Every month |
//! |-------|----------------------------------------------|-------------|
//! | Idea / Pre-Revenue | research, landing page, prototype | — |
//! | MVP Building | MVP spend, pilot marketing | infra |
//! | Pilot Users | — | pilot ops, customer acquisition |
//! | Early Revenue | — | — |

use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_MONTH;

/// Validation budgets for the idea stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationBudgets {
    /// Days allotted to validate the idea (typically 30, 60 or 90).
    pub validation_target_days: Option<u32>,
    pub research: f64,
    pub landing_page: f64,
    pub prototype: f64,
}

/// Build budgets for the MVP stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MvpBudgets {
    /// Days allotted to ship the MVP (typically 30, 60 or 90).
    pub mvp_target_days: Option<u32>,
    pub mvp_spend: f64,
    /// Hosting and tooling; runs every month regardless of target.
    pub infra: f64,
    pub pilot_marketing: f64,
}

/// Ongoing pilot budgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PilotBudgets {
    pub pilot_ops: f64,
    pub customer_acquisition: f64,
}

/// Startup stage with its stage-specific monthly budgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StageProfile {
    IdeaPreRevenue(ValidationBudgets),
    MvpBuilding(MvpBudgets),
    PilotUsers(PilotBudgets),
    EarlyRevenue,
}

impl Default for StageProfile {
    fn default() -> Self {
        Self::IdeaPreRevenue(ValidationBudgets::default())
    }
}

/// Whole months covered by a day target, rounded up.
pub fn target_months(days: u32) -> u32 {
    days.div_ceil(DAYS_PER_MONTH)
}

impl StageProfile {
    pub fn label(&self) -> &'static str {
        match self {
            Self::IdeaPreRevenue(_) => "Idea / Pre-Revenue",
            Self::MvpBuilding(_) => "MVP Building",
            Self::PilotUsers(_) => "Pilot Users",
            Self::EarlyRevenue => "Early Revenue",
        }
    }

    /// Whether revenue is modeled without the caller's toggle.
    pub fn implies_revenue(&self) -> bool {
        matches!(self, Self::EarlyRevenue)
    }

    /// The validation or build target in days, if this stage has one set.
    pub fn target_days(&self) -> Option<u32> {
        match self {
            Self::IdeaPreRevenue(b) => b.validation_target_days,
            Self::MvpBuilding(b) => b.mvp_target_days,
            Self::PilotUsers(_) | Self::EarlyRevenue => None,
        }
    }

    /// Stage-specific spend active in `month`.
    ///
    /// Target-gated budgets stop after `ceil(target_days / 30)` months; a
    /// missing target means zero active months.
    pub fn spend_in_month(&self, month: u32) -> f64 {
        match self {
            Self::IdeaPreRevenue(b) => {
                let active = target_months(b.validation_target_days.unwrap_or(0));
                if month < active {
                    b.research + b.landing_page + b.prototype
                } else {
                    0.0
                }
            }
            Self::MvpBuilding(b) => {
                let active = target_months(b.mvp_target_days.unwrap_or(0));
                let gated = if month < active {
                    b.mvp_spend + b.pilot_marketing
                } else {
                    0.0
                };
                gated + b.infra
            }
            Self::PilotUsers(b) => b.pilot_ops + b.customer_acquisition,
            Self::EarlyRevenue => 0.0,
        }
    }

    /// Scale the target-gated budgets only (research, landing page,
    /// prototype, MVP spend, pilot marketing).
    pub fn scale_gated(&self, factor: f64) -> Self {
        match self {
            Self::IdeaPreRevenue(b) => Self::IdeaPreRevenue(ValidationBudgets {
                validation_target_days: b.validation_target_days,
                research: b.research * factor,
                landing_page: b.landing_page * factor,
                prototype: b.prototype * factor,
            }),
            Self::MvpBuilding(b) => Self::MvpBuilding(MvpBudgets {
                mvp_target_days: b.mvp_target_days,
                mvp_spend: b.mvp_spend * factor,
                infra: b.infra,
                pilot_marketing: b.pilot_marketing * factor,
            }),
            other => other.clone(),
        }
    }

    /// Scale the discretionary budgets used by scenarios: the target-gated
    /// budgets plus customer acquisition. Infra and pilot ops are untouched.
    pub fn scale_discretionary(&self, factor: f64) -> Self {
        match self {
            Self::PilotUsers(b) => Self::PilotUsers(PilotBudgets {
                pilot_ops: b.pilot_ops,
                customer_acquisition: b.customer_acquisition * factor,
            }),
            other => other.scale_gated(factor),
        }
    }
}
