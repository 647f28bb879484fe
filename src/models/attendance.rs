//! Attendance record model and status enum.
//!
//! An AttendanceRecord captures the adjudicated outcome of a single
//! attendance event against a shift. Its point value is fixed at creation
//! time and does not change retroactively if policy constants change.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The adjudicated status of an attendance event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// Clocked in within the grace threshold.
    OnTime,
    /// Clocked in late beyond the grace threshold.
    Tardy,
    /// Clocked out before the scheduled shift end.
    LeftEarly,
    /// Failed to appear or notify.
    NoCallNoShow,
    /// Gave advance notice of inability to work.
    CalledOff,
    /// Worked the shift to completion.
    Completed,
    /// Handed the shift to another staff member.
    Swapped,
}

/// The adjudicated outcome of one attendance event against a shift.
///
/// At most one active (non-cancelled, non-swapped) record may exist per
/// (staff, shift) pair; the store enforces this at insert time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The staff member the event belongs to.
    pub staff_id: String,
    /// The shift the event was recorded against.
    pub shift_id: String,
    /// The instant the event was recorded (facility-local).
    pub date: NaiveDateTime,
    /// The adjudicated status.
    pub status: AttendanceStatus,
    /// The point delta applied for this event, fixed at creation.
    pub points: i32,
    /// The clock-in instant, when applicable.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// The clock-out instant, when applicable.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
    /// Minutes late (tardy) or early (left-early), when applicable.
    #[serde(default)]
    pub tardy_minutes: Option<i64>,
    /// The staff-supplied reason for a call-off.
    #[serde(default)]
    pub call_off_reason: Option<String>,
    /// The staff-supplied reason for a cancellation.
    #[serde(default)]
    pub cancel_reason: Option<String>,
    /// When the staff member notified the facility, if they did.
    #[serde(default)]
    pub notification_time: Option<NaiveDateTime>,
    /// The date after which this record's points no longer count toward
    /// the staff member's cumulative total.
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    /// True if this record reflects a shift cancellation.
    #[serde(default)]
    pub is_cancelled: bool,
    /// True if this record reflects a shift swap.
    #[serde(default)]
    pub is_swapped: bool,
    /// The staff member the shift was swapped with, if any.
    #[serde(default)]
    pub swap_with_staff_id: Option<String>,
}

impl AttendanceRecord {
    /// Creates a record with a fresh id and the given core fields; all
    /// optional fields start unset.
    pub fn new(
        staff_id: impl Into<String>,
        shift_id: impl Into<String>,
        date: NaiveDateTime,
        status: AttendanceStatus,
        points: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            staff_id: staff_id.into(),
            shift_id: shift_id.into(),
            date,
            status,
            points,
            clock_in: None,
            clock_out: None,
            tardy_minutes: None,
            call_off_reason: None,
            cancel_reason: None,
            notification_time: None,
            expiration_date: None,
            is_cancelled: false,
            is_swapped: false,
            swap_with_staff_id: None,
        }
    }

    /// Returns true if this record occupies its shift's single active slot.
    pub fn is_active(&self) -> bool {
        !self.is_cancelled && !self.is_swapped
    }

    /// Returns true if this record's points count toward the staff
    /// member's live total as of the given date.
    ///
    /// Points count through the expiration date inclusive and stop
    /// counting strictly after it. Records without an expiration date
    /// always count. Cancellation and swap flags free the shift's
    /// active slot but do not erase an assessed penalty: a short-notice
    /// cancellation carries `is_cancelled = true` and still counts.
    pub fn counts_toward_total(&self, as_of: NaiveDate) -> bool {
        self.expiration_date.is_none_or(|d| as_of <= d)
    }
}
