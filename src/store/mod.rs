//! Attendance record persistence.
//!
//! The store owns AttendanceRecords and enforces the single-active-record
//! invariant at insert time. The workflow controller is its only writer;
//! UI layers never mutate records directly. The trait seam exists so
//! tests can run against the in-memory implementation deterministically.

mod memory;

use std::future::Future;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

pub use memory::InMemoryAttendanceStore;

/// A partial update applied to an existing attendance record.
///
/// Records are never mutated after creation except through this explicit
/// patch (e.g., adding a clock-out); unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct AttendanceUpdate {
    /// Replacement status, if re-adjudicated (e.g., LEFT_EARLY).
    pub status: Option<crate::models::AttendanceStatus>,
    /// Replacement point value.
    pub points: Option<i32>,
    /// Clock-out instant to attach.
    pub clock_out: Option<chrono::NaiveDateTime>,
    /// Minute count to attach (minutes early for LEFT_EARLY).
    pub tardy_minutes: Option<i64>,
    /// Replacement expiration date.
    pub expiration_date: Option<NaiveDate>,
}

/// Storage contract for attendance records.
///
/// `create` must be an atomic check-and-insert: when two concurrent
/// workflow invocations race on the same shift, exactly one succeeds and
/// the other observes [`crate::error::EngineError::DuplicateRecord`].
pub trait AttendanceStore: Send + Sync {
    /// Persists a new record, enforcing the single-active-record
    /// invariant for the record's shift.
    fn create(
        &self,
        record: AttendanceRecord,
    ) -> impl Future<Output = EngineResult<AttendanceRecord>> + Send;

    /// Returns all records for a staff member whose event date falls in
    /// the inclusive date range.
    fn find_by_staff_and_date_range(
        &self,
        staff_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = EngineResult<Vec<AttendanceRecord>>> + Send;

    /// Returns the active (non-cancelled, non-swapped) record for a
    /// shift, if one exists.
    fn find_active_by_shift(
        &self,
        shift_id: &str,
    ) -> impl Future<Output = EngineResult<Option<AttendanceRecord>>> + Send;

    /// Applies a patch to an existing record.
    ///
    /// Fails with [`crate::error::EngineError::RecordNotFound`] when no
    /// record has the given id.
    fn update(
        &self,
        id: uuid::Uuid,
        patch: AttendanceUpdate,
    ) -> impl Future<Output = EngineResult<AttendanceRecord>> + Send;
}
