//! Month-by-month cash projection shared by base, scenario, and lever runs.
//!
//! Each month `m` in `0..HORIZON_MONTHS`:
//! 1. Net revenue = `revenue × (1 + growth/100)^m`, passed through the margin model
//! 2. Outflow = `(fixed + variable) × buffer` + stage spend + active hires
//! 3. Operating burn = `max(0, outflow − net revenue)`
//! 4. One-time costs landing in `m` are added unbuffered
//! 5. Cash below zero → runway is `m`; cash spent down to exactly zero →
//!    runway is `m + 1`. A month that spends nothing never ends the run.

use serde::{Deserialize, Serialize};

use crate::constants::HORIZON_MONTHS;
use crate::input::RunwayInput;

pub use crate::stage::target_months;

/// Outcome of one projection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Months until cash is exhausted, capped at [`HORIZON_MONTHS`].
    pub runway_months: u32,
    /// Cash after each simulated month, through the month of exhaustion.
    pub month_end_balances: Vec<f64>,
}

/// `1 + buffer/100`.
pub fn buffer_multiplier(input: &RunwayInput) -> f64 {
    1.0 + f64::from(input.buffer_percent) / 100.0
}

/// Revenue contribution in `month` after growth and margin.
pub fn net_revenue(input: &RunwayInput, month: u32) -> f64 {
    if !input.revenue_applies() {
        return 0.0;
    }
    let growth = input.revenue_growth_rate / 100.0;
    let revenue = input.current_monthly_revenue * (1.0 + growth).powf(f64::from(month));
    input.margin.contribution(revenue)
}

/// Stage-specific temporary spend active in `month`.
pub fn stage_spend(input: &RunwayInput, month: u32) -> f64 {
    input.stage.spend_in_month(month)
}

/// Monthly cost of every hire already started by `month`.
pub fn hire_spend(input: &RunwayInput, month: u32) -> f64 {
    input
        .planned_hires
        .iter()
        .filter(|h| h.start_month_offset <= month)
        .map(|h| h.monthly_cost)
        .sum()
}

/// One-time costs landing exactly in `month`.
pub fn one_time_spend(input: &RunwayInput, month: u32) -> f64 {
    input
        .one_time_costs
        .iter()
        .filter(|c| c.month_offset == month)
        .map(|c| c.amount)
        .sum()
}

/// Total cash leaving the bank in `month`.
pub fn month_burn(input: &RunwayInput, month: u32) -> f64 {
    let buffer = buffer_multiplier(input);
    let recurring = input.fixed_monthly_costs * buffer + input.variable_monthly_costs * buffer;
    let outflow = recurring + stage_spend(input, month) + hire_spend(input, month);
    let operating = (outflow - net_revenue(input, month)).max(0.0);
    operating + one_time_spend(input, month)
}

/// Run the projection over the full horizon.
pub fn project(input: &RunwayInput) -> Projection {
    let mut cash = input.cash_in_bank;
    let mut balances = Vec::with_capacity(HORIZON_MONTHS as usize);

    for month in 0..HORIZON_MONTHS {
        let burn = month_burn(input, month);
        cash -= burn;
        balances.push(cash);
        log::trace!("month {}: burn={:.2} cash={:.2}", month, burn, cash);

        if cash < 0.0 {
            return Projection {
                runway_months: month,
                month_end_balances: balances,
            };
        }
        if cash == 0.0 && burn > 0.0 {
            return Projection {
                runway_months: month + 1,
                month_end_balances: balances,
            };
        }
    }

    Projection {
        runway_months: HORIZON_MONTHS,
        month_end_balances: balances,
    }
}

/// Runway in whole months for `input`.
pub fn simulate_runway(input: &RunwayInput) -> u32 {
    project(input).runway_months
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MarginModel, OneTimeCost, PlannedHire};
    use crate::stage::StageProfile;

    fn fixed_only(cash: f64, fixed: f64) -> RunwayInput {
        RunwayInput {
            cash_in_bank: cash,
            fixed_monthly_costs: fixed,
            buffer_percent: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_simple_fixed_burn() {
        assert_eq!(simulate_runway(&fixed_only(24000.0, 2000.0)), 12);
    }

    #[test]
    fn test_buffer_increases_burn() {
        let input = RunwayInput {
            buffer_percent: 10,
            ..fixed_only(22000.0, 2000.0)
        };
        assert_eq!(simulate_runway(&input), 10);
    }

    #[test]
    fn test_ran_out_mid_month_returns_current_index() {
        // 2500 left after month 1, month 2 overdraws.
        assert_eq!(simulate_runway(&fixed_only(2500.0, 1000.0)), 2);
    }

    #[test]
    fn test_exact_zero_returns_next_index() {
        let input = RunwayInput {
            cash_in_bank: 100_000.0,
            buffer_percent: 0,
            one_time_costs: vec![OneTimeCost::new("Server rack", 100_000.0, 3, false)],
            ..Default::default()
        };
        let projection = project(&input);
        assert_eq!(projection.runway_months, 4);
        assert_eq!(projection.month_end_balances, vec![100_000.0, 100_000.0, 100_000.0, 0.0]);
    }

    #[test]
    fn test_empty_bank_waits_for_first_spend() {
        let input = RunwayInput {
            buffer_percent: 0,
            one_time_costs: vec![OneTimeCost::new("Registration", 500.0, 5, false)],
            ..Default::default()
        };
        assert_eq!(simulate_runway(&input), 5);
    }

    #[test]
    fn test_one_time_cost_unbuffered() {
        let input = RunwayInput {
            buffer_percent: 50,
            one_time_costs: vec![OneTimeCost::new("Laptop", 4000.0, 0, true)],
            ..fixed_only(10_000.0, 0.0)
        };
        assert_eq!(month_burn(&input, 0), 4000.0);
    }

    #[test]
    fn test_zero_costs_survive_horizon() {
        let projection = project(&fixed_only(0.0, 0.0));
        assert_eq!(projection.runway_months, HORIZON_MONTHS);
        assert_eq!(projection.month_end_balances.len(), HORIZON_MONTHS as usize);
    }

    #[test]
    fn test_revenue_ignored_without_toggle() {
        let input = RunwayInput {
            current_monthly_revenue: 5000.0,
            ..fixed_only(1000.0, 1000.0)
        };
        assert_eq!(net_revenue(&input, 0), 0.0);
    }

    #[test]
    fn test_revenue_growth_compounds() {
        let input = RunwayInput {
            stage: StageProfile::EarlyRevenue,
            current_monthly_revenue: 1000.0,
            revenue_growth_rate: 10.0,
            ..Default::default()
        };
        assert!((net_revenue(&input, 0) - 1000.0).abs() < 1e-9);
        assert!((net_revenue(&input, 2) - 1210.0).abs() < 1e-6);
    }

    #[test]
    fn test_margin_applied_to_revenue() {
        let input = RunwayInput {
            has_revenue: true,
            current_monthly_revenue: 1000.0,
            margin: MarginModel::GrossMargin(30.0),
            ..Default::default()
        };
        assert!((net_revenue(&input, 0) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_revenue_cannot_make_burn_negative() {
        let input = RunwayInput {
            stage: StageProfile::EarlyRevenue,
            current_monthly_revenue: 10_000.0,
            ..fixed_only(1000.0, 2000.0)
        };
        assert_eq!(month_burn(&input, 0), 0.0);
        assert_eq!(simulate_runway(&input), HORIZON_MONTHS);
    }

    #[test]
    fn test_hires_start_at_offset() {
        let input = RunwayInput {
            planned_hires: vec![
                PlannedHire::new("Engineer", 3000.0, 0),
                PlannedHire::new("Designer", 2000.0, 2),
            ],
            ..fixed_only(0.0, 0.0)
        };
        assert_eq!(hire_spend(&input, 0), 3000.0);
        assert_eq!(hire_spend(&input, 1), 3000.0);
        assert_eq!(hire_spend(&input, 2), 5000.0);
        assert_eq!(hire_spend(&input, 23), 5000.0);
    }

    #[test]
    fn test_balances_stop_at_exhaustion() {
        let projection = project(&fixed_only(24000.0, 2000.0));
        assert_eq!(projection.month_end_balances.len(), 12);
        assert_eq!(projection.month_end_balances[0], 22000.0);
        assert_eq!(*projection.month_end_balances.last().unwrap(), 0.0);
    }
}
