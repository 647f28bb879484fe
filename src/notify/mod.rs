//! Notification contract and in-app dispatcher.
//!
//! The workflow controller computes notifications as data
//! ([`NotificationRequest`]) and dispatches them after persistence
//! succeeds. Dispatch is best-effort: a suppressed or failed delivery
//! never invalidates the persisted attendance record.

mod dispatcher;

use serde::{Deserialize, Serialize};

pub use dispatcher::{Delivery, InAppDispatcher};

use crate::error::EngineResult;
use std::future::Future;

/// A delivery channel for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    /// In-application inbox.
    InApp,
    /// Email.
    Email,
    /// Text message. Reserved for the most severe events.
    Sms,
    /// Mobile push.
    Push,
}

/// The urgency of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Informational, no action expected.
    Low,
    /// Routine operational notice.
    Medium,
    /// Needs prompt attention.
    High,
    /// Needs immediate attention.
    Urgent,
}

/// The category a notification is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Attendance or policy alert.
    Alert,
    /// Informational update.
    Info,
    /// Shift assignment or change.
    Shift,
}

/// A notification the workflow has decided to send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// The staff member to deliver to.
    pub recipient_staff_id: String,
    /// The human-readable message body.
    pub message: String,
    /// The channels to deliver on.
    pub channels: Vec<Channel>,
    /// The urgency of the notification.
    pub priority: Priority,
    /// The category the notification is filed under.
    pub category: Category,
}

/// Delivery contract for notifications.
///
/// `Ok(false)` means the recipient's preferences suppressed delivery;
/// suppression is not an error. `Err` is reserved for channel failures.
pub trait NotificationDispatcher: Send + Sync {
    /// Attempts to deliver a notification.
    fn send(
        &self,
        request: &NotificationRequest,
    ) -> impl Future<Output = EngineResult<bool>> + Send;
}
