//! Response types for the Attendance & Points Adjudication Engine API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::adjudication::ConsequenceTier;
use crate::error::EngineError;
use crate::models::AttendanceRecord;
use crate::notify::NotificationRequest;
use crate::workflow::WorkflowOutcome;

/// Response body for a successful attendance action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    /// The attendance record as persisted.
    pub record: AttendanceRecord,
    /// The notifications the action produced.
    pub notifications: Vec<NotificationRequest>,
    /// Per-notification delivery flags, in the same order.
    pub deliveries: Vec<bool>,
}

impl From<WorkflowOutcome> for ActionResponse {
    fn from(outcome: WorkflowOutcome) -> Self {
        Self {
            record: outcome.record,
            notifications: outcome.notifications,
            deliveries: outcome.deliveries,
        }
    }
}

/// Response body for the staff standing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingResponse {
    /// The staff member the standing belongs to.
    pub staff_id: String,
    /// Cumulative non-expired points, clamped to zero or above.
    pub total_points: i32,
    /// The escalation tier the total falls in.
    pub tier: ConsequenceTier,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Policy file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::ConfigInvalid { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid policy configuration",
                    message,
                ),
            },
            EngineError::DuplicateRecord { shift_id } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_RECORD",
                    format!("Shift '{}' already has an active attendance record", shift_id),
                    "Each shift accepts at most one active attendance record",
                ),
            },
            EngineError::MissingReason { action } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "MISSING_REASON",
                    format!("A reason is required to {}", action),
                ),
            },
            EngineError::MissingSwapTarget => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "MISSING_SWAP_TARGET",
                    "A target staff member is required to swap a shift",
                ),
            },
            EngineError::RecordNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "RECORD_NOT_FOUND",
                    format!("Attendance record not found: {}", id),
                ),
            },
            EngineError::RecoveryNotEligible { staff_id, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RECOVERY_NOT_ELIGIBLE",
                    format!("Staff '{}' is not eligible for a recovery shift", staff_id),
                    message,
                ),
            },
            EngineError::StoreUnavailable { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_UNAVAILABLE",
                    "Attendance store failure",
                    message,
                ),
            },
            EngineError::DispatchFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DISPATCH_FAILED",
                    "Notification dispatch failed",
                    message,
                ),
            },
        }
    }
}
