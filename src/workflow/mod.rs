//! Attendance workflow controller.
//!
//! Orchestrates the attendance actions (clock-in, clock-out, call-off,
//! no-call/no-show, cancellation, swap, recovery) against the pure
//! adjudication functions, the record store, and the notification
//! dispatcher. Each action follows the same shape: check guards, compute
//! the adjudicated outcome, persist the record, then dispatch
//! notifications. Persistence failures fail the action; dispatch
//! failures are logged and never roll back a persisted record.
//!
//! Every operation takes the current instant explicitly, so callers
//! (and tests) control the clock.

use std::sync::Arc;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{info, warn};

use crate::adjudication::{
    ConsequenceTier, DEFAULT_NOTICE_HOURS, classify, escalation_tier, expiration_date,
    has_sufficient_notice, points_for, recovery_eligible, swap_auto_approved, tardy_minutes,
};
use crate::config::{AttendancePolicy, PolicyLoader, SchedulingPolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, Shift, ShiftType};
use crate::notify::{Category, Channel, NotificationDispatcher, NotificationRequest, Priority};
use crate::store::{AttendanceStore, AttendanceUpdate};

/// The result of one completed workflow action.
#[derive(Debug, Clone)]
pub struct WorkflowOutcome {
    /// The attendance record as persisted.
    pub record: AttendanceRecord,
    /// The notifications the action produced, in dispatch order.
    pub notifications: Vec<NotificationRequest>,
    /// Per-notification delivery flags: `true` delivered, `false`
    /// suppressed or failed. Same order as `notifications`.
    pub deliveries: Vec<bool>,
}

/// A staff member's live point total and the consequence tier it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaffStanding {
    /// Cumulative non-expired points, clamped to zero or above.
    pub total_points: i32,
    /// The escalation tier the total falls in.
    pub tier: ConsequenceTier,
}

/// Coordinates attendance actions against the store and dispatcher.
pub struct AttendanceWorkflow<S, D> {
    store: Arc<S>,
    dispatcher: Arc<D>,
    attendance: AttendancePolicy,
    scheduling: SchedulingPolicy,
}

impl<S, D> AttendanceWorkflow<S, D>
where
    S: AttendanceStore,
    D: NotificationDispatcher,
{
    /// Creates a workflow over the given store and dispatcher, using the
    /// loaded policy tables.
    pub fn new(store: Arc<S>, dispatcher: Arc<D>, policy: &PolicyLoader) -> Self {
        Self {
            store,
            dispatcher,
            attendance: *policy.attendance(),
            scheduling: *policy.scheduling(),
        }
    }

    /// Records a clock-in, classifying it ON_TIME or TARDY.
    ///
    /// Minutes late are clamped to zero before classification, so early
    /// arrivals are ON_TIME. A TARDY outcome dispatches a HIGH-priority
    /// alert on in-app and email.
    pub async fn clock_in(
        &self,
        staff_id: &str,
        shift: &Shift,
        clock_in_time: NaiveDateTime,
    ) -> EngineResult<WorkflowOutcome> {
        let minutes = tardy_minutes(shift.date, shift.start_time, clock_in_time).max(0);
        let status = classify(minutes, self.attendance.tardy.threshold_minutes);
        let points = points_for(&self.attendance, status, Some(minutes));

        let mut record =
            AttendanceRecord::new(staff_id, &shift.id, clock_in_time, status, points);
        record.clock_in = Some(clock_in_time);
        record.tardy_minutes = Some(minutes);
        record.expiration_date =
            Some(expiration_date(&self.attendance, status, clock_in_time.date()));

        let record = self.store.create(record).await?;
        info!(
            staff_id,
            shift_id = %shift.id,
            ?status,
            minutes,
            points,
            "clock-in recorded"
        );

        let notifications = if status == AttendanceStatus::Tardy {
            vec![NotificationRequest {
                recipient_staff_id: staff_id.to_string(),
                message: format!(
                    "You clocked in {} minutes late for your shift on {}. {} point(s) added to your record.",
                    minutes, shift.date, points
                ),
                channels: vec![Channel::InApp, Channel::Email],
                priority: Priority::High,
                category: Category::Alert,
            }]
        } else {
            Vec::new()
        };
        self.finish(record, notifications).await
    }

    /// Records a clock-out against the shift's active record.
    ///
    /// Leaving more than the grace threshold before the scheduled end
    /// re-adjudicates the record as LEFT_EARLY with tiered points;
    /// otherwise an ON_TIME record is closed out as COMPLETED with its
    /// points unchanged.
    pub async fn clock_out(
        &self,
        shift: &Shift,
        clock_out_time: NaiveDateTime,
    ) -> EngineResult<WorkflowOutcome> {
        let existing = self
            .store
            .find_active_by_shift(&shift.id)
            .await?
            .ok_or_else(|| EngineError::RecordNotFound {
                id: shift.id.clone(),
            })?;

        let minutes_early = (shift.end_instant() - clock_out_time).num_minutes().max(0);
        let left_early = minutes_early > self.attendance.tardy.threshold_minutes;

        let mut patch = AttendanceUpdate {
            clock_out: Some(clock_out_time),
            ..AttendanceUpdate::default()
        };
        let mut notifications = Vec::new();
        if left_early {
            let points = points_for(
                &self.attendance,
                AttendanceStatus::LeftEarly,
                Some(minutes_early),
            );
            patch.status = Some(AttendanceStatus::LeftEarly);
            patch.points = Some(points);
            patch.tardy_minutes = Some(minutes_early);
            patch.expiration_date = Some(expiration_date(
                &self.attendance,
                AttendanceStatus::LeftEarly,
                clock_out_time.date(),
            ));
            notifications.push(NotificationRequest {
                recipient_staff_id: existing.staff_id.clone(),
                message: format!(
                    "You left {} minutes before the end of your shift on {}. {} point(s) added to your record.",
                    minutes_early, shift.date, points
                ),
                channels: vec![Channel::InApp, Channel::Email],
                priority: Priority::High,
                category: Category::Alert,
            });
        } else if existing.status == AttendanceStatus::OnTime {
            patch.status = Some(AttendanceStatus::Completed);
        }

        let record = self.store.update(existing.id, patch).await?;
        info!(
            staff_id = %record.staff_id,
            shift_id = %shift.id,
            minutes_early,
            left_early,
            "clock-out recorded"
        );
        self.finish(record, notifications).await
    }

    /// Records a call-off with an approved reason.
    ///
    /// Awards the with-approval point value; the notice period is not
    /// checked on this path. A call-off on the day immediately after
    /// another call-off by the same staff member escalates the alert
    /// from MEDIUM to HIGH.
    pub async fn call_off(
        &self,
        staff_id: &str,
        shift: &Shift,
        reason: &str,
        now: NaiveDateTime,
    ) -> EngineResult<WorkflowOutcome> {
        if reason.trim().is_empty() {
            return Err(EngineError::MissingReason {
                action: "call off a shift".to_string(),
            });
        }

        let is_consecutive = self.called_off_on_previous_day(staff_id, shift.date).await?;
        let points = self.attendance.called_off.with_approval;

        let mut record = AttendanceRecord::new(
            staff_id,
            &shift.id,
            shift.start_instant(),
            AttendanceStatus::CalledOff,
            points,
        );
        record.call_off_reason = Some(reason.trim().to_string());
        record.notification_time = Some(now);
        record.expiration_date = Some(expiration_date(
            &self.attendance,
            AttendanceStatus::CalledOff,
            shift.date,
        ));

        let record = self.store.create(record).await?;
        info!(
            staff_id,
            shift_id = %shift.id,
            is_consecutive,
            points,
            "call-off recorded"
        );

        let message = if is_consecutive {
            format!(
                "This is your second call-off in a row. Your shift on {} was called off and {} point(s) were added to your record.",
                shift.date, points
            )
        } else {
            format!(
                "Your call-off for {} has been recorded. {} point(s) added to your record.",
                shift.date, points
            )
        };
        let notifications = vec![NotificationRequest {
            recipient_staff_id: staff_id.to_string(),
            message,
            channels: vec![Channel::InApp, Channel::Email],
            priority: if is_consecutive {
                Priority::High
            } else {
                Priority::Medium
            },
            category: Category::Alert,
        }];
        self.finish(record, notifications).await
    }

    /// Records a no-call/no-show.
    ///
    /// The most severe attendance event: full no-show points and the
    /// only action that escalates to SMS.
    pub async fn no_call_no_show(
        &self,
        staff_id: &str,
        shift: &Shift,
    ) -> EngineResult<WorkflowOutcome> {
        let points = self.attendance.no_show.points;

        let mut record = AttendanceRecord::new(
            staff_id,
            &shift.id,
            shift.start_instant(),
            AttendanceStatus::NoCallNoShow,
            points,
        );
        record.expiration_date = Some(expiration_date(
            &self.attendance,
            AttendanceStatus::NoCallNoShow,
            shift.date,
        ));

        let record = self.store.create(record).await?;
        info!(staff_id, shift_id = %shift.id, points, "no-call/no-show recorded");

        let notifications = vec![NotificationRequest {
            recipient_staff_id: staff_id.to_string(),
            message: format!(
                "You missed your shift on {} without calling off. {} point(s) added to your record.",
                shift.date, points
            ),
            channels: vec![Channel::InApp, Channel::Email, Channel::Sms],
            priority: Priority::Urgent,
            category: Category::Alert,
        }];
        self.finish(record, notifications).await
    }

    /// Records a shift cancellation.
    ///
    /// Cancelling at least 24 hours before the shift start carries no
    /// penalty; a shorter-notice cancellation is penalized at the
    /// without-approval call-off rate.
    pub async fn cancel_shift(
        &self,
        staff_id: &str,
        shift: &Shift,
        reason: &str,
        now: NaiveDateTime,
    ) -> EngineResult<WorkflowOutcome> {
        if reason.trim().is_empty() {
            return Err(EngineError::MissingReason {
                action: "cancel a shift".to_string(),
            });
        }

        let has_notice =
            has_sufficient_notice(shift.start_instant(), now, DEFAULT_NOTICE_HOURS);
        let points = if has_notice {
            0
        } else {
            self.attendance.called_off.without_approval
        };

        let mut record = AttendanceRecord::new(
            staff_id,
            &shift.id,
            shift.start_instant(),
            AttendanceStatus::CalledOff,
            points,
        );
        record.cancel_reason = Some(reason.trim().to_string());
        record.notification_time = Some(now);
        record.is_cancelled = true;
        record.expiration_date = Some(expiration_date(
            &self.attendance,
            AttendanceStatus::CalledOff,
            shift.date,
        ));

        let record = self.store.create(record).await?;
        info!(
            staff_id,
            shift_id = %shift.id,
            has_notice,
            points,
            "shift cancellation recorded"
        );

        let message = if has_notice {
            format!(
                "Your shift on {} has been cancelled. No points were added to your record.",
                shift.date
            )
        } else {
            format!(
                "Your shift on {} was cancelled with less than 24 hours notice. {} point(s) added to your record.",
                shift.date, points
            )
        };
        let notifications = vec![NotificationRequest {
            recipient_staff_id: staff_id.to_string(),
            message,
            channels: vec![Channel::InApp, Channel::Email],
            priority: if has_notice {
                Priority::Medium
            } else {
                Priority::High
            },
            category: Category::Alert,
        }];
        self.finish(record, notifications).await
    }

    /// Records a shift swap with another staff member.
    ///
    /// Swaps are point-neutral for both parties. Requests made inside
    /// the auto-approval window go to manual review; only the initiating
    /// staff member is notified from this entry point.
    pub async fn swap_shift(
        &self,
        staff_id: &str,
        shift: &Shift,
        target_staff_id: &str,
        now: NaiveDateTime,
    ) -> EngineResult<WorkflowOutcome> {
        if target_staff_id.trim().is_empty() {
            return Err(EngineError::MissingSwapTarget);
        }

        let auto_approved = swap_auto_approved(shift.start_instant(), now, &self.scheduling.swap);

        let mut record = AttendanceRecord::new(
            staff_id,
            &shift.id,
            shift.start_instant(),
            AttendanceStatus::Swapped,
            0,
        );
        record.is_swapped = true;
        record.swap_with_staff_id = Some(target_staff_id.trim().to_string());
        record.notification_time = Some(now);

        let record = self.store.create(record).await?;
        info!(
            staff_id,
            shift_id = %shift.id,
            target_staff_id,
            auto_approved,
            "shift swap recorded"
        );

        let message = if auto_approved {
            format!(
                "Your swap with {} for the shift on {} was approved automatically.",
                target_staff_id, shift.date
            )
        } else {
            format!(
                "Your swap request with {} for the shift on {} has been submitted for approval.",
                target_staff_id, shift.date
            )
        };
        let notifications = vec![NotificationRequest {
            recipient_staff_id: staff_id.to_string(),
            message,
            channels: vec![Channel::InApp, Channel::Email],
            priority: Priority::Medium,
            category: Category::Info,
        }];
        self.finish(record, notifications).await
    }

    /// Credits a completed recovery shift against the staff member's
    /// point total.
    ///
    /// Only staff at or above the recovery threshold are eligible, the
    /// shift must be a RECOVERY shift, and at most
    /// `max_recovery_per_month` recovery credits are accepted per
    /// calendar month.
    pub async fn complete_recovery_shift(
        &self,
        staff_id: &str,
        shift: &Shift,
        now: NaiveDateTime,
    ) -> EngineResult<WorkflowOutcome> {
        if shift.shift_type != ShiftType::Recovery {
            return Err(EngineError::RecoveryNotEligible {
                staff_id: staff_id.to_string(),
                message: format!("shift '{}' is not a recovery shift", shift.id),
            });
        }

        let total = self.point_total(staff_id, now.date()).await?;
        if !recovery_eligible(total, &self.scheduling.recovery) {
            return Err(EngineError::RecoveryNotEligible {
                staff_id: staff_id.to_string(),
                message: format!(
                    "point total {} is below the recovery threshold of {}",
                    total, self.scheduling.recovery.points_threshold
                ),
            });
        }

        let credits_this_month = self.recovery_credits_in_month(staff_id, now.date()).await?;
        if credits_this_month >= self.scheduling.recovery.max_recovery_per_month {
            return Err(EngineError::RecoveryNotEligible {
                staff_id: staff_id.to_string(),
                message: format!(
                    "monthly limit of {} recovery shift(s) already reached",
                    self.scheduling.recovery.max_recovery_per_month
                ),
            });
        }

        let credit = self.scheduling.recovery.recovery_shift_value;
        let mut record = AttendanceRecord::new(
            staff_id,
            &shift.id,
            shift.start_instant(),
            AttendanceStatus::Completed,
            credit,
        );
        record.expiration_date = Some(expiration_date(
            &self.attendance,
            AttendanceStatus::Completed,
            shift.date,
        ));

        let record = self.store.create(record).await?;
        info!(staff_id, shift_id = %shift.id, credit, "recovery shift credited");

        let notifications = vec![NotificationRequest {
            recipient_staff_id: staff_id.to_string(),
            message: format!(
                "Recovery shift completed. {} point(s) removed from your record.",
                credit.abs()
            ),
            channels: vec![Channel::InApp, Channel::Email],
            priority: Priority::Medium,
            category: Category::Info,
        }];
        self.finish(record, notifications).await
    }

    /// Computes the live cumulative point total for a staff member,
    /// counting only records that have not expired as of the given date.
    /// The total is clamped to zero or above.
    pub async fn point_total(&self, staff_id: &str, as_of: NaiveDate) -> EngineResult<i32> {
        let records = self
            .store
            .find_by_staff_and_date_range(staff_id, NaiveDate::MIN, as_of)
            .await?;
        let total: i32 = records
            .iter()
            .filter(|r| r.counts_toward_total(as_of))
            .map(|r| r.points)
            .sum();
        Ok(total.max(0))
    }

    /// Returns the staff member's live point total together with the
    /// consequence tier it maps to.
    pub async fn standing(&self, staff_id: &str, as_of: NaiveDate) -> EngineResult<StaffStanding> {
        let total_points = self.point_total(staff_id, as_of).await?;
        Ok(StaffStanding {
            total_points,
            tier: escalation_tier(total_points, &self.attendance.consequences),
        })
    }

    async fn called_off_on_previous_day(
        &self,
        staff_id: &str,
        shift_date: NaiveDate,
    ) -> EngineResult<bool> {
        let Some(previous_day) = shift_date.pred_opt() else {
            return Ok(false);
        };
        let records = self
            .store
            .find_by_staff_and_date_range(staff_id, previous_day, previous_day)
            .await?;
        Ok(records
            .iter()
            .any(|r| r.status == AttendanceStatus::CalledOff))
    }

    async fn recovery_credits_in_month(
        &self,
        staff_id: &str,
        as_of: NaiveDate,
    ) -> EngineResult<u32> {
        let month_start =
            NaiveDate::from_ymd_opt(as_of.year(), as_of.month(), 1).unwrap_or(as_of);
        let month_end = month_start
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(as_of);
        let records = self
            .store
            .find_by_staff_and_date_range(staff_id, month_start, month_end)
            .await?;
        Ok(records.iter().filter(|r| r.points < 0).count() as u32)
    }

    /// Dispatches the action's notifications and assembles the outcome.
    /// Dispatch failures are logged and reported as undelivered; they
    /// never fail the action once the record has persisted.
    async fn finish(
        &self,
        record: AttendanceRecord,
        notifications: Vec<NotificationRequest>,
    ) -> EngineResult<WorkflowOutcome> {
        let mut deliveries = Vec::with_capacity(notifications.len());
        for request in &notifications {
            match self.dispatcher.send(request).await {
                Ok(delivered) => {
                    if !delivered {
                        info!(
                            recipient = %request.recipient_staff_id,
                            "notification suppressed by recipient preferences"
                        );
                    }
                    deliveries.push(delivered);
                }
                Err(error) => {
                    warn!(
                        recipient = %request.recipient_staff_id,
                        %error,
                        "notification dispatch failed after record persisted"
                    );
                    deliveries.push(false);
                }
            }
        }
        Ok(WorkflowOutcome {
            record,
            notifications,
            deliveries,
        })
    }
}
