//! HTTP request handlers for the Attendance & Points Adjudication Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::Shift;
use crate::workflow::WorkflowOutcome;

use super::request::{
    CallOffRequest, CancelShiftRequest, ClockInRequest, ClockOutRequest, NoShowRequest,
    RecoveryShiftRequest, SwapShiftRequest,
};
use super::response::{ActionResponse, ApiError, ApiErrorResponse, StandingResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/clock-in", post(clock_in_handler))
        .route("/attendance/clock-out", post(clock_out_handler))
        .route("/attendance/call-off", post(call_off_handler))
        .route("/attendance/no-show", post(no_show_handler))
        .route("/shifts/cancel", post(cancel_shift_handler))
        .route("/shifts/swap", post(swap_shift_handler))
        .route("/shifts/recovery", post(recovery_shift_handler))
        .route("/staff/:staff_id/standing", get(standing_handler))
        .with_state(state)
}

/// Unwraps a JSON payload, converting rejections into 400 responses.
fn unwrap_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Converts a workflow result into the HTTP response.
fn outcome_response(correlation_id: Uuid, result: EngineResult<WorkflowOutcome>) -> Response {
    match result {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                record_id = %outcome.record.id,
                staff_id = %outcome.record.staff_id,
                shift_id = %outcome.record.shift_id,
                status = ?outcome.record.status,
                points = outcome.record.points,
                "Attendance action completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ActionResponse::from(outcome)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Attendance action failed");
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /attendance/clock-in.
async fn clock_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClockInRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let shift: Shift = request.shift.into();
    let result = state
        .workflow()
        .clock_in(&request.staff_id, &shift, request.clock_in)
        .await;
    outcome_response(correlation_id, result)
}

/// Handler for POST /attendance/clock-out.
async fn clock_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClockOutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let shift: Shift = request.shift.into();
    let result = state.workflow().clock_out(&shift, request.clock_out).await;
    outcome_response(correlation_id, result)
}

/// Handler for POST /attendance/call-off.
async fn call_off_handler(
    State(state): State<AppState>,
    payload: Result<Json<CallOffRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let shift: Shift = request.shift.into();
    let result = state
        .workflow()
        .call_off(&request.staff_id, &shift, &request.reason, request.reported_at)
        .await;
    outcome_response(correlation_id, result)
}

/// Handler for POST /attendance/no-show.
async fn no_show_handler(
    State(state): State<AppState>,
    payload: Result<Json<NoShowRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let shift: Shift = request.shift.into();
    let result = state
        .workflow()
        .no_call_no_show(&request.staff_id, &shift)
        .await;
    outcome_response(correlation_id, result)
}

/// Handler for POST /shifts/cancel.
async fn cancel_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<CancelShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let shift: Shift = request.shift.into();
    let result = state
        .workflow()
        .cancel_shift(&request.staff_id, &shift, &request.reason, request.requested_at)
        .await;
    outcome_response(correlation_id, result)
}

/// Handler for POST /shifts/swap.
async fn swap_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<SwapShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let shift: Shift = request.shift.into();
    let result = state
        .workflow()
        .swap_shift(
            &request.staff_id,
            &shift,
            &request.target_staff_id,
            request.requested_at,
        )
        .await;
    outcome_response(correlation_id, result)
}

/// Handler for POST /shifts/recovery.
async fn recovery_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecoveryShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let shift: Shift = request.shift.into();
    let result = state
        .workflow()
        .complete_recovery_shift(&request.staff_id, &shift, request.completed_at)
        .await;
    outcome_response(correlation_id, result)
}

/// Query parameters for the staff standing endpoint.
#[derive(Debug, Deserialize)]
struct StandingQuery {
    /// The date to evaluate expirations against.
    as_of: NaiveDate,
}

/// Handler for GET /staff/:staff_id/standing.
async fn standing_handler(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
    Query(query): Query<StandingQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.workflow().standing(&staff_id, query.as_of).await {
        Ok(standing) => {
            info!(
                correlation_id = %correlation_id,
                staff_id = %staff_id,
                total_points = standing.total_points,
                tier = ?standing.tier,
                "Standing computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(StandingResponse {
                    staff_id,
                    total_points: standing.total_points,
                    tier: standing.tier,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Standing lookup failed");
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjudication::ConsequenceTier;
    use crate::config::PolicyLoader;
    use crate::models::AttendanceStatus;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let policy = PolicyLoader::load("./config/policy").expect("Failed to load policy");
        AppState::new(policy)
    }

    fn shift_json(id: &str, date: &str) -> serde_json::Value {
        json!({
            "id": id,
            "staff_id": "staff_001",
            "shift_type": "DAY",
            "date": date,
            "start_time": "07:00:00",
            "end_time": "15:00:00",
            "department": "ICU",
            "role": "RN"
        })
    }

    fn post_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_tardy_clock_in_returns_200_with_points() {
        let router = create_router(create_test_state());

        let body = json!({
            "staff_id": "staff_001",
            "shift": shift_json("shift_001", "2024-03-04"),
            "clock_in": "2024-03-04T07:22:00"
        });
        let response = router
            .oneshot(post_request("/attendance/clock-in", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: ActionResponse = response_json(response).await;
        assert_eq!(result.record.status, AttendanceStatus::Tardy);
        assert_eq!(result.record.points, 2);
        assert_eq!(result.notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_clock_in_returns_409() {
        let router = create_router(create_test_state());

        let body = json!({
            "staff_id": "staff_001",
            "shift": shift_json("shift_001", "2024-03-04"),
            "clock_in": "2024-03-04T07:00:00"
        });
        let first = router
            .clone()
            .oneshot(post_request("/attendance/clock-in", body.clone()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = router
            .oneshot(post_request("/attendance/clock-in", body))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);

        let error: ApiError = response_json(second).await;
        assert_eq!(error.code, "DUPLICATE_RECORD");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/attendance/clock-in")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = response_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_400() {
        let router = create_router(create_test_state());

        // clock_in field omitted
        let body = json!({
            "staff_id": "staff_001",
            "shift": shift_json("shift_001", "2024-03-04")
        });
        let response = router
            .oneshot(post_request("/attendance/clock-in", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = response_json(response).await;
        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("clock_in"),
            "Expected error message to mention the missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_call_off_with_empty_reason_returns_400() {
        let router = create_router(create_test_state());

        let body = json!({
            "staff_id": "staff_001",
            "shift": shift_json("shift_001", "2024-03-04"),
            "reason": "  ",
            "reported_at": "2024-03-03T18:00:00"
        });
        let response = router
            .oneshot(post_request("/attendance/call-off", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = response_json(response).await;
        assert_eq!(error.code, "MISSING_REASON");
    }

    #[tokio::test]
    async fn test_cancel_with_notice_is_penalty_free() {
        let router = create_router(create_test_state());

        let body = json!({
            "staff_id": "staff_001",
            "shift": shift_json("shift_001", "2024-03-04"),
            "reason": "family emergency",
            "requested_at": "2024-03-02T07:00:00"
        });
        let response = router
            .oneshot(post_request("/shifts/cancel", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result: ActionResponse = response_json(response).await;
        assert_eq!(result.record.points, 0);
        assert!(result.record.is_cancelled);
    }

    #[tokio::test]
    async fn test_swap_without_target_returns_400() {
        let router = create_router(create_test_state());

        let body = json!({
            "staff_id": "staff_001",
            "shift": shift_json("shift_001", "2024-03-04"),
            "target_staff_id": "",
            "requested_at": "2024-03-01T07:00:00"
        });
        let response = router
            .oneshot(post_request("/shifts/swap", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = response_json(response).await;
        assert_eq!(error.code, "MISSING_SWAP_TARGET");
    }

    #[tokio::test]
    async fn test_standing_reflects_recorded_events() {
        let router = create_router(create_test_state());

        let body = json!({
            "staff_id": "staff_001",
            "shift": shift_json("shift_001", "2024-03-04")
        });
        let response = router
            .clone()
            .oneshot(post_request("/attendance/no-show", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/staff/staff_001/standing?as_of=2024-03-05")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let standing: StandingResponse = response_json(response).await;
        assert_eq!(standing.staff_id, "staff_001");
        assert_eq!(standing.total_points, 4);
        assert_eq!(standing.tier, ConsequenceTier::Warning);
    }

    #[tokio::test]
    async fn test_standing_for_unknown_staff_is_clean() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/staff/staff_999/standing?as_of=2024-03-05")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let standing: StandingResponse = response_json(response).await;
        assert_eq!(standing.total_points, 0);
        assert_eq!(standing.tier, ConsequenceTier::None);
    }
}
