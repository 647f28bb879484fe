//! Application state for the Attendance & Points Adjudication Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyLoader;
use crate::notify::InAppDispatcher;
use crate::store::InMemoryAttendanceStore;
use crate::workflow::AttendanceWorkflow;

/// Shared application state.
///
/// Contains the workflow controller shared across all request handlers,
/// wired to the in-memory store and in-app dispatcher.
#[derive(Clone)]
pub struct AppState {
    workflow: Arc<AttendanceWorkflow<InMemoryAttendanceStore, InAppDispatcher>>,
}

impl AppState {
    /// Creates a new application state from the loaded policy tables.
    pub fn new(policy: PolicyLoader) -> Self {
        let store = Arc::new(InMemoryAttendanceStore::new());
        let dispatcher = Arc::new(InAppDispatcher::new());
        Self {
            workflow: Arc::new(AttendanceWorkflow::new(store, dispatcher, &policy)),
        }
    }

    /// Returns a reference to the workflow controller.
    pub fn workflow(&self) -> &AttendanceWorkflow<InMemoryAttendanceStore, InAppDispatcher> {
        &self.workflow
    }
}
