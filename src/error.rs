//! Error types for the Attendance & Points Adjudication Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance adjudication.

use thiserror::Error;

/// The main error type for the Attendance & Points Adjudication Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/attendance.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/attendance.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A policy file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A policy file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The loaded policy is internally inconsistent. Fatal at startup.
    #[error("Invalid policy configuration: {message}")]
    ConfigInvalid {
        /// A description of the validation failure.
        message: String,
    },

    /// An active attendance record already exists for the shift.
    ///
    /// Raised when a second clock-in/call-off/no-show/cancel/swap is
    /// submitted against a shift that already has one. The action is a
    /// no-op; no record is created and no notification is dispatched.
    #[error("Shift '{shift_id}' already has an active attendance record")]
    DuplicateRecord {
        /// The ID of the shift that already has an active record.
        shift_id: String,
    },

    /// A required reason was empty or missing.
    #[error("A reason is required to {action}")]
    MissingReason {
        /// The action that required a reason (e.g., "call off a shift").
        action: String,
    },

    /// A swap was requested without naming the staff member to swap with.
    #[error("A target staff member is required to swap a shift")]
    MissingSwapTarget,

    /// No attendance record exists with the given id.
    #[error("Attendance record not found: {id}")]
    RecordNotFound {
        /// The record id that was not found.
        id: String,
    },

    /// A recovery shift was submitted by a staff member who is not
    /// eligible for recovery credit.
    #[error("Staff '{staff_id}' is not eligible for a recovery shift: {message}")]
    RecoveryNotEligible {
        /// The staff member who submitted the recovery shift.
        staff_id: String,
        /// Why the recovery shift was rejected.
        message: String,
    },

    /// The attendance store was unavailable or rejected a write.
    #[error("Attendance store failure: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// A notification channel failed. Never surfaced as an action failure
    /// once the attendance record has persisted; logged instead.
    #[error("Notification dispatch failed: {message}")]
    DispatchFailed {
        /// A description of the dispatch failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
