//! Recovery shift eligibility.

use crate::config::RecoveryPolicy;

/// Returns true if a staff member's live point total qualifies them to
/// work a recovery shift.
///
/// Recovery shifts become available once the total reaches the policy's
/// `points_threshold`; staff in good standing have nothing to recover.
///
/// # Examples
///
/// ```
/// use attendance_engine::adjudication::recovery_eligible;
/// use attendance_engine::config::RecoveryPolicy;
///
/// let policy = RecoveryPolicy {
///     points_threshold: 5,
///     recovery_shift_value: -2,
///     max_recovery_per_month: 2,
/// };
/// assert!(recovery_eligible(5, &policy));
/// assert!(!recovery_eligible(4, &policy));
/// ```
pub fn recovery_eligible(total: i32, policy: &RecoveryPolicy) -> bool {
    total >= policy.points_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RecoveryPolicy {
        RecoveryPolicy {
            points_threshold: 5,
            recovery_shift_value: -2,
            max_recovery_per_month: 2,
        }
    }

    #[test]
    fn test_eligible_at_threshold() {
        assert!(recovery_eligible(5, &policy()));
    }

    #[test]
    fn test_eligible_above_threshold() {
        assert!(recovery_eligible(9, &policy()));
    }

    #[test]
    fn test_not_eligible_below_threshold() {
        assert!(!recovery_eligible(4, &policy()));
        assert!(!recovery_eligible(0, &policy()));
    }
}
