//! Expiration date computation for attendance records.

use chrono::{Duration, Months, NaiveDate};

use crate::config::AttendancePolicy;
use crate::models::AttendanceStatus;

/// Fixed expiration window for TARDY, LEFT_EARLY, and NO_CALL_NO_SHOW.
///
/// Unlike CALLED_OFF's configurable `expiration_days`, this horizon is
/// not policy-driven in the current rules.
pub const STANDARD_EXPIRATION_DAYS: i64 = 30;

/// Horizon for statuses whose points effectively never expire.
///
/// One year is beyond the scheduling horizon, so these records count
/// indefinitely for practical purposes.
pub const NON_EXPIRING_MONTHS: u32 = 12;

/// Computes the date after which a record's points stop counting.
///
/// - CALLED_OFF: event date + the policy's `expiration_days`.
/// - NO_CALL_NO_SHOW, TARDY, LEFT_EARLY: event date +
///   [`STANDARD_EXPIRATION_DAYS`].
/// - All other statuses: event date + [`NON_EXPIRING_MONTHS`].
///
/// # Examples
///
/// ```no_run
/// use attendance_engine::adjudication::expiration_date;
/// use attendance_engine::config::PolicyLoader;
/// use attendance_engine::models::AttendanceStatus;
/// use chrono::NaiveDate;
///
/// let policy = PolicyLoader::load("./config/policy").unwrap();
/// let event = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let expires = expiration_date(policy.attendance(), AttendanceStatus::CalledOff, event);
/// assert_eq!(expires, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// ```
pub fn expiration_date(
    policy: &AttendancePolicy,
    status: AttendanceStatus,
    event_date: NaiveDate,
) -> NaiveDate {
    match status {
        AttendanceStatus::CalledOff => {
            event_date + Duration::days(policy.called_off.expiration_days)
        }
        AttendanceStatus::NoCallNoShow
        | AttendanceStatus::Tardy
        | AttendanceStatus::LeftEarly => event_date + Duration::days(STANDARD_EXPIRATION_DAYS),
        _ => event_date
            .checked_add_months(Months::new(NON_EXPIRING_MONTHS))
            .unwrap_or(NaiveDate::MAX),
    }
}
