//! Conservative and aggressive variants of an input snapshot.
//!
//! - Conservative: buffer +5 (capped at 25), variable costs ×0.9,
//!   discretionary stage budgets ×0.9
//! - Aggressive: buffer −5 (floored at 0), discretionary stage budgets ×1.15,
//!   largest optional one-time cost after month 0 pulled one month earlier

use serde::{Deserialize, Serialize};

use crate::constants::scenario::*;
use crate::input::{OneTimeCost, RunwayInput};

/// Runway months under each scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenarios {
    pub conservative_months: u32,
    pub aggressive_months: u32,
}

/// Conservative variant of `input`.
pub fn conservative(input: &RunwayInput) -> RunwayInput {
    RunwayInput {
        buffer_percent: input
            .buffer_percent
            .saturating_add(CONSERVATIVE_BUFFER_STEP)
            .min(CONSERVATIVE_BUFFER_CAP),
        variable_monthly_costs: (input.variable_monthly_costs * CONSERVATIVE_VARIABLE_FACTOR)
            .max(0.0),
        stage: input.stage.scale_discretionary(CONSERVATIVE_BUDGET_FACTOR),
        ..input.clone()
    }
}

/// Aggressive variant of `input`.
pub fn aggressive(input: &RunwayInput) -> RunwayInput {
    RunwayInput {
        buffer_percent: input.buffer_percent.saturating_sub(AGGRESSIVE_BUFFER_STEP),
        stage: input.stage.scale_discretionary(AGGRESSIVE_BUDGET_FACTOR),
        one_time_costs: pull_forward_largest_optional(&input.one_time_costs),
        ..input.clone()
    }
}

/// Index of the first cost with the largest amount among those matching `pred`.
pub(crate) fn largest_cost_index(
    costs: &[OneTimeCost],
    pred: impl Fn(&OneTimeCost) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, cost) in costs.iter().enumerate() {
        if !pred(cost) {
            continue;
        }
        match best {
            Some((_, amount)) if cost.amount <= amount => {}
            _ => best = Some((i, cost.amount)),
        }
    }
    best.map(|(i, _)| i)
}

fn pull_forward_largest_optional(costs: &[OneTimeCost]) -> Vec<OneTimeCost> {
    let mut adjusted = costs.to_vec();
    if let Some(i) = largest_cost_index(costs, |c| c.is_optional && c.month_offset > 0) {
        adjusted[i].month_offset = adjusted[i].month_offset.saturating_sub(1);
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{PilotBudgets, StageProfile, ValidationBudgets};

    fn costs(input: &RunwayInput) -> Vec<(String, u32)> {
        input
            .one_time_costs
            .iter()
            .map(|c| (c.name.clone(), c.month_offset))
            .collect()
    }

    #[test]
    fn test_conservative_buffer_capped() {
        let input = RunwayInput {
            buffer_percent: 22,
            ..Default::default()
        };
        assert_eq!(conservative(&input).buffer_percent, 25);
        let low = RunwayInput {
            buffer_percent: 10,
            ..Default::default()
        };
        assert_eq!(conservative(&low).buffer_percent, 15);
    }

    #[test]
    fn test_out_of_range_buffer_still_calculates() {
        let input = RunwayInput {
            buffer_percent: u32::MAX,
            cash_in_bank: 10.0,
            fixed_monthly_costs: 1.0,
            ..Default::default()
        };
        assert_eq!(conservative(&input).buffer_percent, CONSERVATIVE_BUFFER_CAP);
        assert_eq!(aggressive(&input).buffer_percent, u32::MAX - AGGRESSIVE_BUFFER_STEP);

        // A huge buffer burns everything in month 0; the capped conservative
        // buffer (25%) spends 1.25/mo from 10 → 8 months.
        let result = crate::engine::calculate(&input);
        assert_eq!(result.runway_months, 0);
        assert_eq!(result.scenarios.conservative_months, 8);
        assert_eq!(result.scenarios.aggressive_months, 0);
    }

    #[test]
    fn test_aggressive_buffer_floored() {
        let input = RunwayInput {
            buffer_percent: 3,
            ..Default::default()
        };
        assert_eq!(aggressive(&input).buffer_percent, 0);
    }

    #[test]
    fn test_conservative_scales_variable_and_budgets() {
        let input = RunwayInput {
            variable_monthly_costs: 1000.0,
            fixed_monthly_costs: 500.0,
            stage: StageProfile::IdeaPreRevenue(ValidationBudgets {
                validation_target_days: Some(30),
                research: 1000.0,
                landing_page: 0.0,
                prototype: 0.0,
            }),
            ..Default::default()
        };
        let c = conservative(&input);
        assert!((c.variable_monthly_costs - 900.0).abs() < 1e-9);
        assert_eq!(c.fixed_monthly_costs, 500.0);
        match c.stage {
            StageProfile::IdeaPreRevenue(b) => assert!((b.research - 900.0).abs() < 1e-9),
            other => panic!("stage changed: {:?}", other),
        }
    }

    #[test]
    fn test_aggressive_raises_acquisition() {
        let input = RunwayInput {
            stage: StageProfile::PilotUsers(PilotBudgets {
                pilot_ops: 1000.0,
                customer_acquisition: 1000.0,
            }),
            ..Default::default()
        };
        match aggressive(&input).stage {
            StageProfile::PilotUsers(b) => {
                assert_eq!(b.pilot_ops, 1000.0);
                assert!((b.customer_acquisition - 1150.0).abs() < 1e-9);
            }
            other => panic!("stage changed: {:?}", other),
        }
    }

    #[test]
    fn test_aggressive_pulls_largest_optional_forward() {
        let input = RunwayInput {
            one_time_costs: vec![
                OneTimeCost::new("Laptops", 500.0, 4, true),
                OneTimeCost::new("Patent", 9000.0, 6, false),
                OneTimeCost::new("Offsite", 800.0, 5, true),
                OneTimeCost::new("Deposit", 2000.0, 0, true),
            ],
            ..Default::default()
        };
        let a = aggressive(&input);
        assert_eq!(
            costs(&a),
            vec![
                ("Laptops".to_string(), 4),
                ("Patent".to_string(), 6),
                ("Offsite".to_string(), 4),
                ("Deposit".to_string(), 0),
            ]
        );
        // Base snapshot untouched.
        assert_eq!(input.one_time_costs[2].month_offset, 5);
    }

    #[test]
    fn test_aggressive_tie_moves_first() {
        let input = RunwayInput {
            one_time_costs: vec![
                OneTimeCost::new("A", 700.0, 3, true),
                OneTimeCost::new("B", 700.0, 8, true),
            ],
            ..Default::default()
        };
        assert_eq!(
            costs(&aggressive(&input)),
            vec![("A".to_string(), 2), ("B".to_string(), 8)]
        );
    }

    #[test]
    fn test_aggressive_without_candidates_keeps_costs() {
        let input = RunwayInput {
            one_time_costs: vec![OneTimeCost::new("Required", 700.0, 3, false)],
            ..Default::default()
        };
        assert_eq!(aggressive(&input).one_time_costs, input.one_time_costs);
    }
}
