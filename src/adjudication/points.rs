//! Point lookup against the attendance policy table.

use crate::config::AttendancePolicy;
use crate::models::AttendanceStatus;

/// Resolves the point delta for an attendance status.
///
/// TARDY and LEFT_EARLY tier by the minute count with inclusive upper
/// bounds at 15 and 30 minutes; a missing minute count falls back to the
/// status's untiered default. CALLED_OFF always resolves to the
/// `with_approval` value at this layer — the without-approval variant is
/// selected by the workflow controller, which knows the notice-period
/// outcome. SWAPPED is always neutral.
///
/// # Examples
///
/// ```no_run
/// use attendance_engine::adjudication::points_for;
/// use attendance_engine::config::PolicyLoader;
/// use attendance_engine::models::AttendanceStatus;
///
/// let policy = PolicyLoader::load("./config/policy").unwrap();
/// let points = points_for(policy.attendance(), AttendanceStatus::Tardy, Some(20));
/// assert!(points > points_for(policy.attendance(), AttendanceStatus::OnTime, None));
/// ```
pub fn points_for(
    policy: &AttendancePolicy,
    status: AttendanceStatus,
    minutes: Option<i64>,
) -> i32 {
    match status {
        AttendanceStatus::OnTime => policy.on_time.points,
        AttendanceStatus::Tardy => policy.tardy.tiers.for_minutes(minutes),
        AttendanceStatus::LeftEarly => policy.left_early.for_minutes(minutes),
        AttendanceStatus::NoCallNoShow => policy.no_show.points,
        AttendanceStatus::CalledOff => policy.called_off.with_approval,
        AttendanceStatus::Completed => policy.completed.points,
        AttendanceStatus::Swapped => 0,
    }
}
