//! Policy configuration loading for the adjudication engine.
//!
//! This module loads the attendance point policy and scheduling guardrails
//! from YAML files, validates them, and exposes them read-only for the
//! process lifetime.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::PolicyLoader;
//!
//! let policy = PolicyLoader::load("./config/policy").unwrap();
//! println!("No-show penalty: {} points", policy.attendance().no_show.points);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    AttendancePolicy, CallOffPolicy, ConsequenceThresholds, MaxShiftsPerWeek, RecoveryPolicy,
    SchedulingPolicy, StatusPoints, SwapPolicy, TardyPolicy, TierPoints,
};
