//! Corrective actions ("levers") and their quantified runway impact.
//!
//! Each candidate is applied to the base input on its own and re-projected.
//! Only candidates that strictly extend runway are reported.

use serde::{Deserialize, Serialize};

use crate::constants::{lever::*, LAKH, MAX_LEVERS, ONE_TIME_MAX_MONTH};
use crate::input::RunwayInput;
use crate::projection::simulate_runway;
use crate::scenarios::largest_cost_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeverType {
    ReduceFixed,
    ReduceVariable,
    ReduceBudget,
    DelayCost,
    CashInjection,
}

/// A corrective action and the extra months it buys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lever {
    pub description: String,
    pub runway_delta_months: u32,
    pub lever_type: LeverType,
}

/// Format a rupee amount as whole lakhs, truncating (`₹3L` for 3,45,000).
pub fn lakhs_label(amount: f64) -> String {
    format!("₹{}L", (amount / LAKH) as i64)
}

/// Evaluate the fixed lever battery against `input`.
pub fn generate_levers(input: &RunwayInput, base_runway: u32) -> Vec<Lever> {
    let mut levers = Vec::new();
    let mut consider = |description: String, lever_type: LeverType, variant: RunwayInput| {
        let runway = simulate_runway(&variant);
        if runway > base_runway {
            levers.push(Lever {
                description,
                runway_delta_months: runway - base_runway,
                lever_type,
            });
        } else {
            log::debug!("lever {:?} gives no gain ({} months)", lever_type, runway);
        }
    };

    consider(
        "Reduce fixed costs by 10%".into(),
        LeverType::ReduceFixed,
        RunwayInput {
            fixed_monthly_costs: input.fixed_monthly_costs * FIXED_COST_FACTOR,
            ..input.clone()
        },
    );

    if input.variable_monthly_costs > 0.0 {
        consider(
            "Reduce variable costs by 20%".into(),
            LeverType::ReduceVariable,
            RunwayInput {
                variable_monthly_costs: input.variable_monthly_costs * VARIABLE_COST_FACTOR,
                ..input.clone()
            },
        );
    }

    consider(
        "Trim validation/MVP budgets by 20%".into(),
        LeverType::ReduceBudget,
        RunwayInput {
            stage: input.stage.scale_gated(BUDGET_FACTOR),
            ..input.clone()
        },
    );

    if let Some(i) = largest_cost_index(&input.one_time_costs, |_| true) {
        let largest = &input.one_time_costs[i];
        if largest.month_offset < ONE_TIME_MAX_MONTH {
            let mut delayed = input.one_time_costs.clone();
            delayed[i].month_offset += 1;
            consider(
                format!("Delay {} by 1 month", largest.name),
                LeverType::DelayCost,
                RunwayInput {
                    one_time_costs: delayed,
                    ..input.clone()
                },
            );
        }
    }

    let burn_estimate = input.base_monthly_costs();
    if burn_estimate > 0.0 {
        let injection = burn_estimate * INJECTION_MONTHS;
        consider(
            format!("Cash injection of {}", lakhs_label(injection)),
            LeverType::CashInjection,
            RunwayInput {
                cash_in_bank: input.cash_in_bank + injection,
                ..input.clone()
            },
        );
    }

    levers.truncate(MAX_LEVERS);
    levers
}
