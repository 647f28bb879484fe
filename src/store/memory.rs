//! In-memory attendance store.
//!
//! Backs the engine in tests and single-process deployments. All reads
//! and writes go through one mutex, which is what makes `create` an
//! atomic check-and-insert.

use std::sync::Mutex;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRecord;

use super::{AttendanceStore, AttendanceUpdate};

/// Mutex-guarded in-memory record store.
#[derive(Debug, Default)]
pub struct InMemoryAttendanceStore {
    records: Mutex<Vec<AttendanceRecord>>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> EngineResult<std::sync::MutexGuard<'_, Vec<AttendanceRecord>>> {
        self.records.lock().map_err(|_| EngineError::StoreUnavailable {
            message: "attendance store lock poisoned".to_string(),
        })
    }

    /// Returns the number of stored records. Test and diagnostics helper.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    async fn create(&self, record: AttendanceRecord) -> EngineResult<AttendanceRecord> {
        let mut records = self.lock()?;

        // Check and insert under the same guard; a racing writer for the
        // same shift observes DuplicateRecord. The guard keys on existing
        // active records only, so a shift released by a swap can accept a
        // new record from the incoming staff member.
        if records
            .iter()
            .any(|r| r.shift_id == record.shift_id && r.is_active())
        {
            return Err(EngineError::DuplicateRecord {
                shift_id: record.shift_id.clone(),
            });
        }

        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_staff_and_date_range(
        &self,
        staff_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .filter(|r| {
                r.staff_id == staff_id && r.date.date() >= start && r.date.date() <= end
            })
            .cloned()
            .collect())
    }

    async fn find_active_by_shift(&self, shift_id: &str) -> EngineResult<Option<AttendanceRecord>> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .find(|r| r.shift_id == shift_id && r.is_active())
            .cloned())
    }

    async fn update(&self, id: Uuid, patch: AttendanceUpdate) -> EngineResult<AttendanceRecord> {
        let mut records = self.lock()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::RecordNotFound { id: id.to_string() })?;

        if let Some(status) = patch.status {
            record.status = status;
        }
        if let Some(points) = patch.points {
            record.points = points;
        }
        if let Some(clock_out) = patch.clock_out {
            record.clock_out = Some(clock_out);
        }
        if let Some(minutes) = patch.tardy_minutes {
            record.tardy_minutes = Some(minutes);
        }
        if let Some(expiration) = patch.expiration_date {
            record.expiration_date = Some(expiration);
        }

        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::NaiveDateTime;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_record(staff_id: &str, shift_id: &str, date: &str) -> AttendanceRecord {
        AttendanceRecord::new(
            staff_id,
            shift_id,
            make_datetime(&format!("{date} 07:00:00")),
            AttendanceStatus::OnTime,
            0,
        )
    }

    #[tokio::test]
    async fn test_create_and_find_active() {
        let store = InMemoryAttendanceStore::new();
        let record = make_record("staff_001", "shift_001", "2024-03-04");

        let created = store.create(record.clone()).await.unwrap();
        assert_eq!(created.id, record.id);

        let found = store.find_active_by_shift("shift_001").await.unwrap();
        assert_eq!(found.map(|r| r.id), Some(record.id));
    }

    #[tokio::test]
    async fn test_create_rejects_second_active_record_for_shift() {
        let store = InMemoryAttendanceStore::new();
        store
            .create(make_record("staff_001", "shift_001", "2024-03-04"))
            .await
            .unwrap();

        let result = store
            .create(make_record("staff_001", "shift_001", "2024-03-04"))
            .await;

        match result {
            Err(EngineError::DuplicateRecord { shift_id }) => {
                assert_eq!(shift_id, "shift_001");
            }
            other => panic!("Expected DuplicateRecord, got {other:?}"),
        }
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_inactive_record_does_not_block_insert() {
        let store = InMemoryAttendanceStore::new();
        let mut swapped = make_record("staff_001", "shift_001", "2024-03-04");
        swapped.is_swapped = true;
        store.create(swapped).await.unwrap();

        // The swap target later records attendance against the same shift.
        let result = store
            .create(make_record("staff_002", "shift_001", "2024-03-04"))
            .await;
        assert!(result.is_ok());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_active_record_blocks_inactive_insert() {
        let store = InMemoryAttendanceStore::new();
        store
            .create(make_record("staff_001", "shift_001", "2024-03-04"))
            .await
            .unwrap();

        // A cancellation record is inactive, but the shift already has an
        // active record and must still reject it.
        let mut cancelled = make_record("staff_001", "shift_001", "2024-03-04");
        cancelled.is_cancelled = true;
        let result = store.create(cancelled).await;

        assert!(matches!(result, Err(EngineError::DuplicateRecord { .. })));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_staff_and_date_range_is_inclusive() {
        let store = InMemoryAttendanceStore::new();
        store
            .create(make_record("staff_001", "shift_001", "2024-03-04"))
            .await
            .unwrap();
        store
            .create(make_record("staff_001", "shift_002", "2024-03-05"))
            .await
            .unwrap();
        store
            .create(make_record("staff_001", "shift_003", "2024-03-08"))
            .await
            .unwrap();
        store
            .create(make_record("staff_002", "shift_004", "2024-03-05"))
            .await
            .unwrap();

        let found = store
            .find_by_staff_and_date_range("staff_001", make_date("2024-03-04"), make_date("2024-03-05"))
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| r.staff_id == "staff_001"));
    }

    #[tokio::test]
    async fn test_update_patches_only_set_fields() {
        let store = InMemoryAttendanceStore::new();
        let record = store
            .create(make_record("staff_001", "shift_001", "2024-03-04"))
            .await
            .unwrap();

        let patch = AttendanceUpdate {
            status: Some(AttendanceStatus::Completed),
            clock_out: Some(make_datetime("2024-03-04 19:00:00")),
            ..Default::default()
        };
        let updated = store.update(record.id, patch).await.unwrap();

        assert_eq!(updated.status, AttendanceStatus::Completed);
        assert_eq!(updated.clock_out, Some(make_datetime("2024-03-04 19:00:00")));
        // Untouched fields survive.
        assert_eq!(updated.points, 0);
        assert_eq!(updated.staff_id, "staff_001");
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_not_found() {
        let store = InMemoryAttendanceStore::new();
        let result = store.update(Uuid::new_v4(), AttendanceUpdate::default()).await;
        assert!(matches!(result, Err(EngineError::RecordNotFound { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_creates_only_one_succeeds() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryAttendanceStore::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .create(make_record(&format!("staff_{i:03}"), "shift_001", "2024-03-04"))
                    .await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }
}
