//! Pure adjudication logic for the attendance engine.
//!
//! This module contains the side-effect-free functions that turn raw
//! attendance facts into decisions: tardiness computation and
//! classification, point lookup against the policy table, expiration
//! dates, notice-window checks, consequence escalation, and recovery
//! shift eligibility. Every function here is deterministic; callers
//! supply all instants explicitly.

mod escalation;
mod expiration;
mod notice;
mod points;
mod recovery;
mod tardiness;

pub use escalation::{ConsequenceTier, escalation_tier};
pub use expiration::{NON_EXPIRING_MONTHS, STANDARD_EXPIRATION_DAYS, expiration_date};
pub use notice::{DEFAULT_NOTICE_HOURS, has_sufficient_notice, swap_auto_approved};
pub use points::points_for;
pub use recovery::recovery_eligible;
pub use tardiness::{classify, tardy_minutes};
