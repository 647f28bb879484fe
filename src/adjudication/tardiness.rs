//! Tardiness computation and classification.
//!
//! This module computes how late a clock-in was relative to the scheduled
//! shift start and classifies the result against the grace threshold.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::AttendanceStatus;

/// Computes the minutes elapsed between the scheduled shift start and the
/// clock-in instant.
///
/// The shift start instant is composed from the shift date and start time
/// of day in facility-local time. The result **may be negative** when the
/// staff member clocks in before the shift starts; callers must clamp to
/// zero before classification.
///
/// # Examples
///
/// ```
/// use attendance_engine::adjudication::tardy_minutes;
/// use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let start = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
///
/// let late = NaiveDateTime::parse_from_str("2024-03-04 07:20:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(tardy_minutes(date, start, late), 20);
///
/// let early = NaiveDateTime::parse_from_str("2024-03-04 06:50:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(tardy_minutes(date, start, early), -10);
/// ```
pub fn tardy_minutes(
    shift_date: NaiveDate,
    shift_start_time: NaiveTime,
    clock_in: NaiveDateTime,
) -> i64 {
    let shift_start = shift_date.and_time(shift_start_time);
    (clock_in - shift_start).num_minutes()
}

/// Classifies a clamped tardy-minute count against the grace threshold.
///
/// The threshold is inclusive on the on-time side: clocking in exactly
/// `threshold_minutes` late is still ON_TIME.
///
/// # Examples
///
/// ```
/// use attendance_engine::adjudication::classify;
/// use attendance_engine::models::AttendanceStatus;
///
/// assert_eq!(classify(5, 5), AttendanceStatus::OnTime);
/// assert_eq!(classify(6, 5), AttendanceStatus::Tardy);
/// ```
pub fn classify(tardy_minutes: i64, threshold_minutes: i64) -> AttendanceStatus {
    if tardy_minutes <= threshold_minutes {
        AttendanceStatus::OnTime
    } else {
        AttendanceStatus::Tardy
    }
}
