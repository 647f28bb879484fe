//! Consequence escalation from a live point total.

use serde::{Deserialize, Serialize};

use crate::config::ConsequenceThresholds;

/// The escalation tier a staff member's live point total places them in.
///
/// Advisory classification for display; not itself an enforcement action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsequenceTier {
    /// Below every threshold; good standing.
    None,
    /// At or above the warning threshold.
    Warning,
    /// At or above the probation threshold.
    Probation,
    /// At or above the termination threshold.
    Termination,
}

/// Classifies a live point total against the ascending consequence
/// thresholds.
///
/// Comparisons are `>=` at each boundary and the highest matching tier
/// wins: a total exactly at the probation threshold is PROBATION, not
/// WARNING.
///
/// # Examples
///
/// ```
/// use attendance_engine::adjudication::{escalation_tier, ConsequenceTier};
/// use attendance_engine::config::ConsequenceThresholds;
///
/// let thresholds = ConsequenceThresholds {
///     warning_threshold: 3,
///     probation_threshold: 6,
///     termination_threshold: 10,
/// };
/// assert_eq!(escalation_tier(6, &thresholds), ConsequenceTier::Probation);
/// assert_eq!(escalation_tier(10, &thresholds), ConsequenceTier::Termination);
/// ```
pub fn escalation_tier(total: i32, thresholds: &ConsequenceThresholds) -> ConsequenceTier {
    if total >= thresholds.termination_threshold {
        ConsequenceTier::Termination
    } else if total >= thresholds.probation_threshold {
        ConsequenceTier::Probation
    } else if total >= thresholds.warning_threshold {
        ConsequenceTier::Warning
    } else {
        ConsequenceTier::None
    }
}
