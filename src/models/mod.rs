//! Core data models for the Attendance & Points Adjudication Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod shift;
mod staff;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use shift::{Shift, ShiftStatus, ShiftType};
pub use staff::{EmploymentType, StaffMember, StaffStatus};
