//! Caller-side input validation.
//!
//! The engine computes with whatever it is given. Forms call
//! [`validate_input`] before [`crate::engine::calculate`] to surface every
//! problem at once.

use thiserror::Error;

use crate::constants::{COLLECTION_DELAY_OPTIONS, HIRE_MAX_MONTH, ONE_TIME_MAX_MONTH};
use crate::input::{MarginModel, RunwayInput};
use crate::stage::StageProfile;

/// Input validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: String, value: f64 },
    #[error("buffer must be between 0 and 100% (got {0}%)")]
    BufferOutOfRange(u32),
    #[error("{kind} percentage must be between 0 and 100 (got {value})")]
    PercentOutOfRange { kind: &'static str, value: f64 },
    #[error("one-time cost '{name}' lands in month {month}, after month 12")]
    OneTimeMonthOutOfRange { name: String, month: u32 },
    #[error("hire '{role}' starts in month {month}, after month 23")]
    HireMonthOutOfRange { role: String, month: u32 },
    #[error("collection delay must be 0, 7, 15 or 30 days (got {0})")]
    InvalidCollectionDelay(u32),
    #[error("target duration must be at least one day")]
    ZeroTargetDays,
}

fn check_amount(errors: &mut Vec<InputError>, field: &str, value: f64) {
    if value < 0.0 {
        errors.push(InputError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
}

/// Validate an input snapshot, returning all errors found.
pub fn validate_input(input: &RunwayInput) -> Vec<InputError> {
    let mut errors = Vec::new();

    check_amount(&mut errors, "cash in bank", input.cash_in_bank);
    check_amount(&mut errors, "fixed monthly costs", input.fixed_monthly_costs);
    check_amount(&mut errors, "variable monthly costs", input.variable_monthly_costs);
    check_amount(&mut errors, "monthly revenue", input.current_monthly_revenue);

    if input.buffer_percent > 100 {
        errors.push(InputError::BufferOutOfRange(input.buffer_percent));
    }

    let margin = match input.margin {
        MarginModel::GrossMargin(pct) => Some(("gross margin", pct)),
        MarginModel::Cogs(pct) => Some(("COGS", pct)),
        MarginModel::FullMargin => None,
    };
    if let Some((kind, value)) = margin {
        if !(0.0..=100.0).contains(&value) {
            errors.push(InputError::PercentOutOfRange { kind, value });
        }
    }

    if !COLLECTION_DELAY_OPTIONS.contains(&input.collection_delay_days) {
        errors.push(InputError::InvalidCollectionDelay(input.collection_delay_days));
    }

    match &input.stage {
        StageProfile::IdeaPreRevenue(b) => {
            check_amount(&mut errors, "research budget", b.research);
            check_amount(&mut errors, "landing page budget", b.landing_page);
            check_amount(&mut errors, "prototype budget", b.prototype);
        }
        StageProfile::MvpBuilding(b) => {
            check_amount(&mut errors, "MVP spend", b.mvp_spend);
            check_amount(&mut errors, "infra cost", b.infra);
            check_amount(&mut errors, "pilot marketing budget", b.pilot_marketing);
        }
        StageProfile::PilotUsers(b) => {
            check_amount(&mut errors, "pilot ops cost", b.pilot_ops);
            check_amount(&mut errors, "customer acquisition budget", b.customer_acquisition);
        }
        StageProfile::EarlyRevenue => {}
    }
    if input.stage.target_days() == Some(0) {
        errors.push(InputError::ZeroTargetDays);
    }

    for cost in &input.one_time_costs {
        check_amount(&mut errors, &format!("one-time cost '{}'", cost.name), cost.amount);
        if cost.month_offset > ONE_TIME_MAX_MONTH {
            errors.push(InputError::OneTimeMonthOutOfRange {
                name: cost.name.clone(),
                month: cost.month_offset,
            });
        }
    }

    for hire in &input.planned_hires {
        check_amount(&mut errors, &format!("hire '{}'", hire.role), hire.monthly_cost);
        if hire.start_month_offset > HIRE_MAX_MONTH {
            errors.push(InputError::HireMonthOutOfRange {
                role: hire.role.clone(),
                month: hire.start_month_offset,
            });
        }
    }

    errors
}
