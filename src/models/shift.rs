//! Shift model and related types.
//!
//! This module defines the Shift struct and its type/status enums for
//! representing scheduled work shifts.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// The category of a scheduled shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftType {
    /// Daytime shift.
    Day,
    /// Evening shift.
    Evening,
    /// Overnight shift.
    Night,
    /// On-call availability.
    OnCall,
    /// Float pool assignment.
    Float,
    /// Extra shift worked to recover attendance points.
    Recovery,
}

/// The lifecycle status of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
    /// Scheduled but not yet started.
    Scheduled,
    /// Currently being worked.
    InProgress,
    /// Worked to completion.
    Completed,
    /// Cancelled before or during the shift.
    Cancelled,
}

/// Represents a scheduled work shift.
///
/// A shift is owned by exactly one staff member at a time; a swap
/// reassigns ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The staff member who owns this shift.
    pub staff_id: String,
    /// The category of the shift.
    pub shift_type: ShiftType,
    /// The calendar date of the shift (facility-local).
    pub date: NaiveDate,
    /// The scheduled start time of day.
    pub start_time: NaiveTime,
    /// The scheduled end time of day.
    pub end_time: NaiveTime,
    /// The department the shift is scheduled in.
    pub department: String,
    /// The role the shift is staffed for.
    pub role: String,
    /// The lifecycle status of the shift.
    pub status: ShiftStatus,
    /// The staff member this shift is being swapped with, if any.
    #[serde(default)]
    pub swap_with_staff_id: Option<String>,
}

impl Shift {
    /// Returns the scheduled start instant, composed from the shift date
    /// and start time of day in facility-local time.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{Shift, ShiftStatus, ShiftType};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     staff_id: "staff_001".to_string(),
    ///     shift_type: ShiftType::Day,
    ///     date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
    ///     start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
    ///     department: "ICU".to_string(),
    ///     role: "RN".to_string(),
    ///     status: ShiftStatus::Scheduled,
    ///     swap_with_staff_id: None,
    /// };
    /// assert_eq!(shift.start_instant().to_string(), "2024-03-04 07:00:00");
    /// ```
    pub fn start_instant(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// Returns the scheduled end instant.
    ///
    /// An end time at or before the start time rolls over to the next
    /// calendar day (night shifts).
    pub fn end_instant(&self) -> NaiveDateTime {
        if self.end_time > self.start_time {
            self.date.and_time(self.end_time)
        } else {
            self.date.succ_opt().unwrap_or(self.date).and_time(self.end_time)
        }
    }

    /// Returns the scheduled duration of the shift in minutes.
    pub fn scheduled_minutes(&self) -> i64 {
        (self.end_instant() - self.start_instant()).num_minutes()
    }
}
