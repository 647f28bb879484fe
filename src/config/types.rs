//! Policy configuration types.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML policy files. Typed deserialization means a
//! missing key is a parse error, which the loader treats as fatal.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::EmploymentType;

/// A flat point value for an untiered attendance status.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StatusPoints {
    /// The point delta applied for this status.
    pub points: i32,
}

/// Tiered point values keyed by minutes late (or early).
///
/// Tier upper bounds are inclusive: 15 minutes falls in the under-15 tier
/// and 30 minutes falls in the over-15 tier.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TierPoints {
    /// Fallback when no minute count is available for a tiered status.
    pub points: i32,
    /// Points for 15 minutes or less.
    pub under_15_min: i32,
    /// Points for more than 15 and up to 30 minutes.
    pub over_15_min: i32,
    /// Points for more than 30 minutes.
    pub over_30_min: i32,
}

impl TierPoints {
    /// Resolves the point value for the given minute count.
    ///
    /// A missing minute count falls back to the untiered default.
    pub fn for_minutes(&self, minutes: Option<i64>) -> i32 {
        match minutes {
            None => self.points,
            Some(m) if m <= 15 => self.under_15_min,
            Some(m) if m <= 30 => self.over_15_min,
            Some(_) => self.over_30_min,
        }
    }

    fn validate(&self, status: &str) -> EngineResult<()> {
        if self.under_15_min < self.over_15_min && self.over_15_min < self.over_30_min {
            Ok(())
        } else {
            Err(EngineError::ConfigInvalid {
                message: format!("{status} tiers must strictly increase with lateness"),
            })
        }
    }
}

/// Tardiness policy: grace threshold plus the tier table.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TardyPolicy {
    /// Grace period in minutes; clock-ins at or under it are on time.
    pub threshold_minutes: i64,
    /// Tiered point values by minutes late.
    #[serde(flatten)]
    pub tiers: TierPoints,
}

/// Call-off policy: approval-dependent point values and expiration window.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CallOffPolicy {
    /// Points for a call-off on the approval path.
    pub with_approval: i32,
    /// Points for a call-off (or late cancellation) without approval.
    pub without_approval: i32,
    /// Days until a call-off's points stop counting.
    pub expiration_days: i64,
}

/// Ascending point thresholds for consequence escalation.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ConsequenceThresholds {
    /// Live point total at which a warning is issued.
    pub warning_threshold: i32,
    /// Live point total at which probation begins.
    pub probation_threshold: i32,
    /// Live point total at which termination review begins.
    pub termination_threshold: i32,
}

/// The attendance point policy loaded from attendance.yaml.
///
/// Pure data: consumers read values by status; the table itself performs
/// no computation.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AttendancePolicy {
    /// On-time clock-in (always zero in practice).
    pub on_time: StatusPoints,
    /// Tardiness threshold and tiers.
    pub tardy: TardyPolicy,
    /// Early-departure tiers.
    pub left_early: TierPoints,
    /// No-call-no-show penalty (single value, no tiering).
    pub no_show: StatusPoints,
    /// Call-off point values and expiration window.
    pub called_off: CallOffPolicy,
    /// Completed shift (always zero in practice).
    pub completed: StatusPoints,
    /// Escalation thresholds.
    pub consequences: ConsequenceThresholds,
}

impl AttendancePolicy {
    /// Validates internal consistency. Failure is fatal at startup.
    pub fn validate(&self) -> EngineResult<()> {
        if self.tardy.threshold_minutes < 0 {
            return Err(EngineError::ConfigInvalid {
                message: "tardy threshold_minutes must be non-negative".to_string(),
            });
        }
        self.tardy.tiers.validate("tardy")?;
        self.left_early.validate("left_early")?;
        if self.called_off.expiration_days <= 0 {
            return Err(EngineError::ConfigInvalid {
                message: "called_off expiration_days must be positive".to_string(),
            });
        }
        let c = &self.consequences;
        if !(c.warning_threshold < c.probation_threshold
            && c.probation_threshold < c.termination_threshold)
        {
            return Err(EngineError::ConfigInvalid {
                message: "consequence thresholds must be strictly ascending".to_string(),
            });
        }
        Ok(())
    }
}

/// Weekly shift caps by employment type.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MaxShiftsPerWeek {
    /// Cap for full-time staff.
    pub full_time: u32,
    /// Cap for part-time staff.
    pub part_time: u32,
    /// Cap for PRN staff.
    pub prn: u32,
}

impl MaxShiftsPerWeek {
    /// Returns the cap for the given employment type.
    pub fn for_employment_type(&self, employment_type: EmploymentType) -> u32 {
        match employment_type {
            EmploymentType::FullTime => self.full_time,
            EmploymentType::PartTime => self.part_time,
            EmploymentType::Prn => self.prn,
        }
    }
}

/// Shift swap guardrails.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SwapPolicy {
    /// Minimum notice a swap request requires.
    pub min_notice_hours: i64,
    /// Cap on swaps per staff member per calendar month.
    pub max_swaps_per_month: u32,
    /// Swaps requested at least this far ahead are auto-approved.
    pub auto_approve_window_hours: i64,
}

/// Recovery shift rules.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecoveryPolicy {
    /// Live point total at which recovery shifts become available.
    pub points_threshold: i32,
    /// Point delta credited for a completed recovery shift (negative).
    pub recovery_shift_value: i32,
    /// Cap on recovery credits per staff member per calendar month.
    pub max_recovery_per_month: u32,
}

/// The scheduling guardrails loaded from scheduling.yaml.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SchedulingPolicy {
    /// Weekly shift caps by employment type.
    pub max_shifts_per_week: MaxShiftsPerWeek,
    /// Shift swap guardrails.
    pub swap: SwapPolicy,
    /// Recovery shift rules.
    pub recovery: RecoveryPolicy,
}

impl SchedulingPolicy {
    /// Validates internal consistency. Failure is fatal at startup.
    pub fn validate(&self) -> EngineResult<()> {
        if self.swap.min_notice_hours <= 0 || self.swap.auto_approve_window_hours <= 0 {
            return Err(EngineError::ConfigInvalid {
                message: "swap notice windows must be positive".to_string(),
            });
        }
        if self.recovery.recovery_shift_value >= 0 {
            return Err(EngineError::ConfigInvalid {
                message: "recovery_shift_value must be negative".to_string(),
            });
        }
        if self.recovery.points_threshold <= 0 || self.recovery.max_recovery_per_month == 0 {
            return Err(EngineError::ConfigInvalid {
                message: "recovery threshold and monthly cap must be positive".to_string(),
            });
        }
        Ok(())
    }
}
