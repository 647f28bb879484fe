//! Request types for the Attendance & Points Adjudication Engine API.
//!
//! This module defines the JSON request structures for the attendance
//! action endpoints.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{Shift, ShiftStatus, ShiftType};

/// Shift information in an attendance action request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The staff member the shift is assigned to.
    pub staff_id: String,
    /// The type of shift.
    pub shift_type: ShiftType,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The scheduled start time of day.
    pub start_time: NaiveTime,
    /// The scheduled end time of day.
    pub end_time: NaiveTime,
    /// The department the shift belongs to.
    pub department: String,
    /// The role required for the shift.
    pub role: String,
    /// The scheduling status of the shift.
    #[serde(default = "default_shift_status")]
    pub status: ShiftStatus,
    /// The staff member the shift is being swapped with, if any.
    #[serde(default)]
    pub swap_with_staff_id: Option<String>,
}

fn default_shift_status() -> ShiftStatus {
    ShiftStatus::Scheduled
}

impl From<ShiftRequest> for Shift {
    fn from(req: ShiftRequest) -> Self {
        Shift {
            id: req.id,
            staff_id: req.staff_id,
            shift_type: req.shift_type,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            department: req.department,
            role: req.role,
            status: req.status,
            swap_with_staff_id: req.swap_with_staff_id,
        }
    }
}

/// Request body for the `/attendance/clock-in` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockInRequest {
    /// The staff member clocking in.
    pub staff_id: String,
    /// The shift being clocked into.
    pub shift: ShiftRequest,
    /// The clock-in instant (facility-local).
    pub clock_in: NaiveDateTime,
}

/// Request body for the `/attendance/clock-out` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockOutRequest {
    /// The shift being clocked out of.
    pub shift: ShiftRequest,
    /// The clock-out instant (facility-local).
    pub clock_out: NaiveDateTime,
}

/// Request body for the `/attendance/call-off` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallOffRequest {
    /// The staff member calling off.
    pub staff_id: String,
    /// The shift being called off.
    pub shift: ShiftRequest,
    /// The reason for the call-off.
    pub reason: String,
    /// When the call-off was reported (facility-local).
    pub reported_at: NaiveDateTime,
}

/// Request body for the `/attendance/no-show` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoShowRequest {
    /// The staff member who failed to appear.
    pub staff_id: String,
    /// The missed shift.
    pub shift: ShiftRequest,
}

/// Request body for the `/shifts/cancel` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelShiftRequest {
    /// The staff member cancelling.
    pub staff_id: String,
    /// The shift being cancelled.
    pub shift: ShiftRequest,
    /// The reason for the cancellation.
    pub reason: String,
    /// When the cancellation was requested (facility-local).
    pub requested_at: NaiveDateTime,
}

/// Request body for the `/shifts/swap` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapShiftRequest {
    /// The staff member initiating the swap.
    pub staff_id: String,
    /// The shift being swapped away.
    pub shift: ShiftRequest,
    /// The staff member the shift is swapped with.
    pub target_staff_id: String,
    /// When the swap was requested (facility-local).
    pub requested_at: NaiveDateTime,
}

/// Request body for the `/shifts/recovery` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryShiftRequest {
    /// The staff member completing the recovery shift.
    pub staff_id: String,
    /// The completed recovery shift.
    pub shift: ShiftRequest,
    /// When the recovery shift was completed (facility-local).
    pub completed_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_clock_in_request() {
        let json = r#"{
            "staff_id": "staff_001",
            "shift": {
                "id": "shift_001",
                "staff_id": "staff_001",
                "shift_type": "DAY",
                "date": "2024-03-04",
                "start_time": "07:00:00",
                "end_time": "15:00:00",
                "department": "ICU",
                "role": "RN"
            },
            "clock_in": "2024-03-04T07:03:00"
        }"#;

        let request: ClockInRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.staff_id, "staff_001");
        assert_eq!(request.shift.shift_type, ShiftType::Day);
        assert_eq!(request.shift.status, ShiftStatus::Scheduled);
    }

    #[test]
    fn test_deserialize_call_off_request() {
        let json = r#"{
            "staff_id": "staff_001",
            "shift": {
                "id": "shift_001",
                "staff_id": "staff_001",
                "shift_type": "NIGHT",
                "date": "2024-03-04",
                "start_time": "19:00:00",
                "end_time": "07:00:00",
                "department": "ICU",
                "role": "RN",
                "status": "SCHEDULED"
            },
            "reason": "sick",
            "reported_at": "2024-03-03T18:00:00"
        }"#;

        let request: CallOffRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.reason, "sick");
        assert_eq!(request.shift.shift_type, ShiftType::Night);
    }

    #[test]
    fn test_shift_conversion() {
        let req = ShiftRequest {
            id: "shift_001".to_string(),
            staff_id: "staff_001".to_string(),
            shift_type: ShiftType::Day,
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            department: "ICU".to_string(),
            role: "RN".to_string(),
            status: ShiftStatus::Scheduled,
            swap_with_staff_id: None,
        };

        let shift: Shift = req.into();
        assert_eq!(shift.id, "shift_001");
        assert_eq!(shift.staff_id, "staff_001");
    }
}
