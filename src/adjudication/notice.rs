//! Notice-window checks for cancellations and swaps.

use chrono::NaiveDateTime;

use crate::config::SwapPolicy;

/// Default notice period required to cancel a shift without penalty.
pub const DEFAULT_NOTICE_HOURS: i64 = 24;

/// Returns true if the action was taken at least `notice_hours` before
/// the scheduled shift start.
///
/// The comparison is `>=` in whole hours of the signed duration, so
/// exactly `notice_hours` ahead counts as sufficient and any action after
/// the shift start does not.
///
/// # Examples
///
/// ```
/// use attendance_engine::adjudication::{has_sufficient_notice, DEFAULT_NOTICE_HOURS};
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-03-04 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let two_days_ahead =
///     NaiveDateTime::parse_from_str("2024-03-02 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(has_sufficient_notice(start, two_days_ahead, DEFAULT_NOTICE_HOURS));
/// ```
pub fn has_sufficient_notice(
    shift_start: NaiveDateTime,
    action_instant: NaiveDateTime,
    notice_hours: i64,
) -> bool {
    (shift_start - action_instant).num_hours() >= notice_hours
}

/// Returns true if a swap request qualifies for auto-approval.
///
/// Swaps requested at least `auto_approve_window_hours` ahead of the
/// shift start skip manual review.
pub fn swap_auto_approved(
    shift_start: NaiveDateTime,
    requested_at: NaiveDateTime,
    policy: &SwapPolicy,
) -> bool {
    has_sufficient_notice(shift_start, requested_at, policy.auto_approve_window_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_48_hours_ahead_is_sufficient() {
        let start = make_datetime("2024-03-04 07:00:00");
        let action = make_datetime("2024-03-02 07:00:00");
        assert!(has_sufficient_notice(start, action, DEFAULT_NOTICE_HOURS));
    }

    #[test]
    fn test_exactly_24_hours_is_sufficient() {
        let start = make_datetime("2024-03-04 07:00:00");
        let action = make_datetime("2024-03-03 07:00:00");
        assert!(has_sufficient_notice(start, action, DEFAULT_NOTICE_HOURS));
    }

    #[test]
    fn test_just_under_24_hours_is_insufficient() {
        let start = make_datetime("2024-03-04 07:00:00");
        let action = make_datetime("2024-03-03 07:00:01");
        assert!(!has_sufficient_notice(start, action, DEFAULT_NOTICE_HOURS));
    }

    #[test]
    fn test_2_hours_ahead_is_insufficient() {
        let start = make_datetime("2024-03-04 07:00:00");
        let action = make_datetime("2024-03-04 05:00:00");
        assert!(!has_sufficient_notice(start, action, DEFAULT_NOTICE_HOURS));
    }

    #[test]
    fn test_action_after_shift_start_is_insufficient() {
        let start = make_datetime("2024-03-04 07:00:00");
        let action = make_datetime("2024-03-04 09:00:00");
        assert!(!has_sufficient_notice(start, action, DEFAULT_NOTICE_HOURS));
    }

    #[test]
    fn test_swap_auto_approval_window() {
        let policy = SwapPolicy {
            min_notice_hours: 24,
            max_swaps_per_month: 4,
            auto_approve_window_hours: 72,
        };
        let start = make_datetime("2024-03-08 07:00:00");

        let four_days_ahead = make_datetime("2024-03-04 07:00:00");
        assert!(swap_auto_approved(start, four_days_ahead, &policy));

        let two_days_ahead = make_datetime("2024-03-06 07:00:00");
        assert!(!swap_auto_approved(start, two_days_ahead, &policy));
    }
}
