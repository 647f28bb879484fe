//! Attendance & Points Adjudication Engine
//!
//! This crate converts raw attendance events for healthcare facility staff
//! (clock-ins, call-offs, no-shows, cancellations, swaps) into point
//! penalties, expiration policies, and notification/consequence decisions,
//! driven by a policy table loaded at startup.

#![warn(missing_docs)]

pub mod adjudication;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod store;
pub mod workflow;
