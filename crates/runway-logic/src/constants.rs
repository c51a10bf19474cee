//! Engine constants — horizon, calendar conversion, scenario and lever factors.
//!
//! Plain numeric constants with no runtime configuration. Both the engine
//! and the simtest harness read these.

/// Months simulated per projection. A runway equal to this value means
/// "survives the whole horizon".
pub const HORIZON_MONTHS: u32 = 24;

/// Days per month when converting validation/MVP targets.
pub const DAYS_PER_MONTH: u32 = 30;

/// Maximum number of levers reported.
pub const MAX_LEVERS: usize = 5;

/// Latest month a one-time cost may land in.
pub const ONE_TIME_MAX_MONTH: u32 = 12;

/// Latest month a planned hire may start in.
pub const HIRE_MAX_MONTH: u32 = 23;

/// Extra months of runway beyond the target for a validation goal to count
/// as comfortably achievable.
pub const VALIDATION_HEADROOM_MONTHS: u32 = 2;

/// One lakh (1,00,000) — unit for cash injection labels.
pub const LAKH: f64 = 100_000.0;

/// Collection delays the input form offers, in days.
pub const COLLECTION_DELAY_OPTIONS: [u32; 4] = [0, 7, 15, 30];

pub mod scenario {
    /// Buffer points added to the conservative case.
    pub const CONSERVATIVE_BUFFER_STEP: u32 = 5;
    /// Ceiling on the conservative buffer.
    pub const CONSERVATIVE_BUFFER_CAP: u32 = 25;
    pub const CONSERVATIVE_VARIABLE_FACTOR: f64 = 0.9;
    pub const CONSERVATIVE_BUDGET_FACTOR: f64 = 0.9;

    /// Buffer points removed in the aggressive case (floored at 0).
    pub const AGGRESSIVE_BUFFER_STEP: u32 = 5;
    pub const AGGRESSIVE_BUDGET_FACTOR: f64 = 1.15;
}

pub mod lever {
    pub const FIXED_COST_FACTOR: f64 = 0.9;
    pub const VARIABLE_COST_FACTOR: f64 = 0.8;
    pub const BUDGET_FACTOR: f64 = 0.8;
    /// Months of base fixed+variable cost offered as a cash injection.
    pub const INJECTION_MONTHS: f64 = 3.0;
}
