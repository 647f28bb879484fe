//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the
//! attendance and scheduling policies from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AttendancePolicy, SchedulingPolicy};

/// Loads and provides access to the engine's policy tables.
///
/// The `PolicyLoader` reads YAML policy files from a directory, validates
/// them, and exposes them read-only. Point computation is meaningless
/// without the full table, so any missing file, missing key, or
/// inconsistent value is fatal at startup.
///
/// # Directory Structure
///
/// ```text
/// config/policy/
/// ├── attendance.yaml   # point values, tiers, thresholds, expirations
/// └── scheduling.yaml   # weekly caps, swap rules, recovery rules
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::PolicyLoader;
///
/// let policy = PolicyLoader::load("./config/policy").unwrap();
/// assert!(policy.attendance().no_show.points > 0);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    attendance: AttendancePolicy,
    scheduling: SchedulingPolicy,
}

impl PolicyLoader {
    /// Loads policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy directory (e.g., "./config/policy")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if:
    /// - Either policy file is missing
    /// - Either file contains invalid YAML or lacks a required key
    /// - Either policy fails consistency validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let attendance: AttendancePolicy = Self::load_yaml(&path.join("attendance.yaml"))?;
        attendance.validate()?;

        let scheduling: SchedulingPolicy = Self::load_yaml(&path.join("scheduling.yaml"))?;
        scheduling.validate()?;

        Ok(Self {
            attendance,
            scheduling,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the attendance point policy.
    pub fn attendance(&self) -> &AttendancePolicy {
        &self.attendance
    }

    /// Returns the scheduling guardrails.
    pub fn scheduling(&self) -> &SchedulingPolicy {
        &self.scheduling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy_path() -> &'static str {
        "./config/policy"
    }

    #[test]
    fn test_load_valid_policy() {
        let result = PolicyLoader::load(policy_path());
        assert!(result.is_ok(), "Failed to load policy: {:?}", result.err());
    }

    #[test]
    fn test_attendance_values_loaded_correctly() {
        let policy = PolicyLoader::load(policy_path()).unwrap();
        let attendance = policy.attendance();

        assert_eq!(attendance.on_time.points, 0);
        assert_eq!(attendance.tardy.threshold_minutes, 5);
        assert_eq!(attendance.tardy.tiers.under_15_min, 1);
        assert_eq!(attendance.tardy.tiers.over_15_min, 2);
        assert_eq!(attendance.tardy.tiers.over_30_min, 3);
        assert_eq!(attendance.no_show.points, 4);
        assert_eq!(attendance.called_off.with_approval, 1);
        assert_eq!(attendance.called_off.without_approval, 2);
        assert_eq!(attendance.called_off.expiration_days, 14);
        assert_eq!(attendance.completed.points, 0);
    }

    #[test]
    fn test_consequence_thresholds_loaded_correctly() {
        let policy = PolicyLoader::load(policy_path()).unwrap();
        let consequences = policy.attendance().consequences;

        assert_eq!(consequences.warning_threshold, 3);
        assert_eq!(consequences.probation_threshold, 6);
        assert_eq!(consequences.termination_threshold, 10);
    }

    #[test]
    fn test_scheduling_values_loaded_correctly() {
        let policy = PolicyLoader::load(policy_path()).unwrap();
        let scheduling = policy.scheduling();

        assert_eq!(scheduling.max_shifts_per_week.full_time, 5);
        assert_eq!(scheduling.swap.min_notice_hours, 24);
        assert_eq!(scheduling.swap.auto_approve_window_hours, 72);
        assert_eq!(scheduling.recovery.points_threshold, 5);
        assert_eq!(scheduling.recovery.recovery_shift_value, -2);
        assert_eq!(scheduling.recovery.max_recovery_per_month, 2);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = PolicyLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("attendance.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
