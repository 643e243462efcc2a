//! Quality tiers for a recommendation, derived from its cycle count alone.

use std::fmt;

use serde::Serialize;

/// How desirable a recommendation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// 5 or 6 full cycles.
    Optimal,
    /// 4 cycles.
    Good,
    /// 3 cycles.
    Fair,
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            QualityTier::Optimal => "optimal",
            QualityTier::Good => "good",
            QualityTier::Fair => "fair",
        })
    }
}

/// Map a cycle count to its [`QualityTier`].
///
/// # Panics
///
/// Only 3, 4, 5 and 6 cycles are ever offered. Any other count is a caller
/// bug and panics rather than falling back to a default tier.
pub fn classify(cycles: u8) -> QualityTier {
    match cycles {
        5 | 6 => QualityTier::Optimal,
        4 => QualityTier::Good,
        3 => QualityTier::Fair,
        other => panic!("cycle count {other} is outside the offered range 3..=6"),
    }
}
