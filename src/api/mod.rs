//! HTTP API module for the Attendance & Points Adjudication Engine.
//!
//! This module provides the REST API endpoints for recording attendance
//! events and reading staff standing.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CallOffRequest, CancelShiftRequest, ClockInRequest, ClockOutRequest, NoShowRequest,
    RecoveryShiftRequest, ShiftRequest, SwapShiftRequest,
};
pub use response::{ActionResponse, ApiError, StandingResponse};
pub use state::AppState;
