//! Runway Headless Simulation Harness
//!
//! Sweeps the runway engine against bundled fixtures and invariant checks,
//! or evaluates a single input snapshot from disk. Runs entirely
//! in-process — no UI, no persistence, no networking.
//!
//! Usage:
//!   cargo run -p runway-simtest
//!   cargo run -p runway-simtest -- check --verbose
//!   cargo run -p runway-simtest -- calculate --input snapshot.json --json

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use runway_logic::constants::HORIZON_MONTHS;
use runway_logic::engine::{self, RunwayResult, ValidationStatus};
use runway_logic::input::RunwayInput;
use runway_logic::levers::LeverType;
use runway_logic::projection;
use runway_logic::scenarios;
use runway_logic::validate::validate_input;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

// ── Fixtures (bundled with the binary) ──────────────────────────────────
const FIXTURES_JSON: &str = include_str!("../data/fixtures.json");

#[derive(Debug, Deserialize)]
struct Fixture {
    name: String,
    input: RunwayInput,
    expect: Expectation,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Expectation {
    runway_months: Option<u32>,
    conservative_months: Option<u32>,
    aggressive_months: Option<u32>,
    validation_status: Option<ValidationStatus>,
    lever_types: Option<Vec<LeverType>>,
}

// ── Command line ────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "runway-simtest", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Sweep bundled fixtures and engine invariants
    Check {
        #[arg(long)]
        verbose: bool,
    },

    /// Evaluate one input snapshot (JSON)
    Calculate {
        #[arg(long)]
        input: PathBuf,
        /// Print the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd.unwrap_or(Command::Check { verbose: false }) {
        Command::Check { verbose } => {
            let failed = run_checks(verbose)?;
            if failed > 0 {
                std::process::exit(1);
            }
        }
        Command::Calculate { input, json } => {
            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let snapshot: RunwayInput = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", input.display()))?;

            for err in validate_input(&snapshot) {
                tracing::warn!("input: {}", err);
            }

            let result = engine::calculate(&snapshot);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_summary(&snapshot, &result);
            }
        }
    }
    Ok(())
}

fn run_checks(verbose: bool) -> anyhow::Result<usize> {
    println!("=== Runway Simulation Harness ===\n");

    let fixtures: Vec<Fixture> =
        serde_json::from_str(FIXTURES_JSON).context("parsing bundled fixtures")?;

    let mut results = Vec::new();

    // 1. Fixture expectations
    results.extend(validate_fixtures(&fixtures));

    // 2. Invariant sweep over fixtures and cash variations
    results.extend(validate_invariants(&fixtures));

    // 3. Scenario construction
    results.extend(validate_scenarios(&fixtures));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    Ok(failed)
}

fn print_summary(input: &RunwayInput, result: &RunwayResult) {
    println!("Stage:        {}", input.stage.label());
    println!(
        "Runway:       {} ({})",
        result.runway_months, result.zero_cash_approx
    );
    println!("Gross burn:   {:.0}", result.burn_breakdown.gross_burn);
    println!("Net burn:     {:.0}", result.burn_breakdown.net_burn);
    println!("One-time:     {:.0}", result.burn_breakdown.one_time_total);
    println!(
        "Hires (m0):   {:.0}",
        result.burn_breakdown.hire_additions_at_month0
    );
    if result.validation_status != ValidationStatus::NotApplicable {
        println!("Validation:   {}", result.validation_status.label());
    }
    println!(
        "Scenarios:    conservative {} / aggressive {}",
        result.scenarios.conservative_months, result.scenarios.aggressive_months
    );
    if result.levers.is_empty() {
        println!("Levers:       none");
    } else {
        println!("Levers:");
        for lever in &result.levers {
            println!("  +{} Mo  {}", lever.runway_delta_months, lever.description);
        }
    }
}

// ── 1. Fixtures ─────────────────────────────────────────────────────────

fn check_field<T: PartialEq + std::fmt::Debug>(
    results: &mut Vec<TestResult>,
    fixture: &str,
    field: &str,
    expected: Option<T>,
    actual: T,
) {
    if let Some(expected) = expected {
        results.push(TestResult {
            name: format!("{}_{}", fixture, field),
            passed: expected == actual,
            detail: format!("expected {:?}, got {:?}", expected, actual),
        });
    }
}

fn validate_fixtures(fixtures: &[Fixture]) -> Vec<TestResult> {
    println!("--- Fixtures ---");
    let mut results = Vec::new();

    for fixture in fixtures {
        let result = engine::calculate(&fixture.input);
        tracing::debug!(fixture = %fixture.name, runway = result.runway_months, "evaluated");

        let errors = validate_input(&fixture.input);
        results.push(TestResult {
            name: format!("{}_valid_input", fixture.name),
            passed: errors.is_empty(),
            detail: if errors.is_empty() {
                "input passes validation".into()
            } else {
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ")
            },
        });

        let expect = &fixture.expect;
        check_field(
            &mut results,
            &fixture.name,
            "runway",
            expect.runway_months,
            result.runway_months,
        );
        check_field(
            &mut results,
            &fixture.name,
            "conservative",
            expect.conservative_months,
            result.scenarios.conservative_months,
        );
        check_field(
            &mut results,
            &fixture.name,
            "aggressive",
            expect.aggressive_months,
            result.scenarios.aggressive_months,
        );
        check_field(
            &mut results,
            &fixture.name,
            "validation",
            expect.validation_status,
            result.validation_status,
        );
        check_field(
            &mut results,
            &fixture.name,
            "levers",
            expect.lever_types.clone(),
            result.levers.iter().map(|l| l.lever_type).collect::<Vec<_>>(),
        );
    }

    results
}

// ── 2. Invariants ───────────────────────────────────────────────────────

fn validate_invariants(fixtures: &[Fixture]) -> Vec<TestResult> {
    println!("--- Invariants ---");
    let mut results = Vec::new();

    for fixture in fixtures {
        let result = engine::calculate(&fixture.input);

        let capped = result.runway_months <= HORIZON_MONTHS
            && result.scenarios.conservative_months <= HORIZON_MONTHS
            && result.scenarios.aggressive_months <= HORIZON_MONTHS;
        results.push(TestResult {
            name: format!("{}_horizon_cap", fixture.name),
            passed: capped,
            detail: format!(
                "base {} / conservative {} / aggressive {}",
                result.runway_months,
                result.scenarios.conservative_months,
                result.scenarios.aggressive_months
            ),
        });

        let bad_levers: Vec<_> = result
            .levers
            .iter()
            .filter(|l| l.runway_delta_months == 0)
            .collect();
        results.push(TestResult {
            name: format!("{}_levers_positive", fixture.name),
            passed: bad_levers.is_empty() && result.levers.len() <= 5,
            detail: format!("{} levers", result.levers.len()),
        });

        results.push(TestResult {
            name: format!("{}_idempotent", fixture.name),
            passed: engine::calculate(&fixture.input) == result,
            detail: "repeat calculation matches".into(),
        });

        // Monotonic in cash: sweep extra cash in steps of one month's base cost.
        let step = fixture.input.base_monthly_costs().max(1000.0);
        let mut last = projection::simulate_runway(&fixture.input);
        let mut monotonic = true;
        for k in 1..=12 {
            let richer = RunwayInput {
                cash_in_bank: fixture.input.cash_in_bank + step * k as f64,
                ..fixture.input.clone()
            };
            let runway = projection::simulate_runway(&richer);
            if runway < last {
                monotonic = false;
            }
            last = runway;
        }
        results.push(TestResult {
            name: format!("{}_monotonic_cash", fixture.name),
            passed: monotonic,
            detail: format!("12 cash steps of {:.0}", step),
        });
    }

    results
}

// ── 3. Scenarios ────────────────────────────────────────────────────────

fn validate_scenarios(fixtures: &[Fixture]) -> Vec<TestResult> {
    println!("--- Scenarios ---");
    let mut results = Vec::new();

    for fixture in fixtures {
        let base = &fixture.input;
        let conservative = scenarios::conservative(base);
        let aggressive = scenarios::aggressive(base);

        results.push(TestResult {
            name: format!("{}_buffer_bounds", fixture.name),
            passed: conservative.buffer_percent <= base.buffer_percent.max(25)
                && aggressive.buffer_percent <= base.buffer_percent,
            detail: format!(
                "buffer {} → conservative {} / aggressive {}",
                base.buffer_percent, conservative.buffer_percent, aggressive.buffer_percent
            ),
        });

        let moved = base
            .one_time_costs
            .iter()
            .zip(&aggressive.one_time_costs)
            .filter(|(a, b)| a.month_offset != b.month_offset)
            .count();
        results.push(TestResult {
            name: format!("{}_aggressive_pull_forward", fixture.name),
            passed: moved <= 1 && aggressive.one_time_costs.len() == base.one_time_costs.len(),
            detail: format!("{} one-time costs moved", moved),
        });
    }

    results
}
