//! Bedtime and wake-time recommendations aligned to sleep-cycle boundaries.
//!
//! Given an anchor time and a [`Mode`], [`calculate`] projects the anchor by
//! 3 to 6 whole sleep cycles plus the time it takes to fall asleep, and
//! annotates each candidate with its quality tier and its distance from
//! "now". The caller supplies "now" explicitly; nothing here reads a clock.
//!
//! # Ordering
//!
//! Results come back in cycle order, never sorted by clock time:
//!
//! - [`Mode::Bedtime`]: 3, 4, 5, 6 cycles (shortest night first)
//! - [`Mode::WakeTime`]: 6, 5, 4, 3 cycles (earliest bedtime first)

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::arithmetic::shift;
use crate::codec::{self, MinuteOfDay, SleepDuration, MINUTES_PER_DAY};
use crate::error::{Result, UnknownMode};
use crate::quality::{classify, QualityTier};

/// Length of one sleep cycle.
pub const CYCLE_LENGTH_MINUTES: u32 = 90;

/// Allowance for falling asleep, added once per night.
pub const SLEEP_ONSET_DELAY_MINUTES: u32 = 14;

// ── Mode ────────────────────────────────────────────────────────────────────

/// Which end of the night the anchor time describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The anchor is when the user goes to bed; results are wake times.
    Bedtime,
    /// The anchor is when the user must wake up; results are bedtimes.
    WakeTime,
}

impl Mode {
    /// Cycle counts to offer, in output order.
    pub fn cycle_sequence(self) -> [u8; 4] {
        match self {
            Mode::Bedtime => [3, 4, 5, 6],
            Mode::WakeTime => [6, 5, 4, 3],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Bedtime => "bedtime",
            Mode::WakeTime => "waketime",
        })
    }
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bedtime" | "bed" => Ok(Mode::Bedtime),
            "waketime" | "wake" | "wake-time" => Ok(Mode::WakeTime),
            _ => Err(UnknownMode(s.trim().to_string())),
        }
    }
}

// ── RelativeTime ────────────────────────────────────────────────────────────

/// Distance between a recommendation and "now", rounded to whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeTime {
    /// Rounds to zero hours.
    Now,
    /// That many hours in the future.
    In(u32),
    /// That many hours in the past.
    Ago(u32),
}

impl RelativeTime {
    /// Classify a signed minute difference. Halves round up (toward the
    /// future): +30 min is "in 1h", -30 min is "now", -90 min is "1h ago".
    /// Hour counts beyond `u32::MAX` saturate.
    pub fn from_minutes(diff_minutes: i64) -> Self {
        let hours = diff_minutes.saturating_add(30).div_euclid(60);
        let magnitude = u32::try_from(hours.unsigned_abs()).unwrap_or(u32::MAX);
        match hours {
            0 => RelativeTime::Now,
            h if h > 0 => RelativeTime::In(magnitude),
            _ => RelativeTime::Ago(magnitude),
        }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeTime::Now => f.write_str("now"),
            RelativeTime::In(h) => write!(f, "in {h}h"),
            RelativeTime::Ago(h) => write!(f, "{h}h ago"),
        }
    }
}

impl Serialize for RelativeTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── Recommendation ──────────────────────────────────────────────────────────

/// One candidate bedtime or wake time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Number of full sleep cycles (3-6).
    pub cycle_count: u8,
    /// The recommended time of day.
    pub result_time: MinuteOfDay,
    /// Sleep-onset delay plus all cycles.
    pub total_sleep_minutes: u32,
    /// Calendar days between the anchor and `result_time` (-1, 0 or +1).
    pub day_offset: i64,
    pub quality: QualityTier,
    pub relative_label: RelativeTime,
}

impl Recommendation {
    /// `total_sleep_minutes` as `{h}h{mm}`.
    pub fn sleep_duration(&self) -> SleepDuration {
        SleepDuration(self.total_sleep_minutes)
    }
}

// ── calculate ───────────────────────────────────────────────────────────────

/// Compute the four sleep-cycle recommendations for an anchor time string.
///
/// # Arguments
///
/// * `anchor_input`: The anchor time, `H:MM`, `HH:MM`, `HMM` or `HHMM`
/// * `mode`: Whether the anchor is a bedtime or a wake time
/// * `now`: The caller's current time of day, on the anchor's day
///
/// # Errors
///
/// Returns [`SleepError::InvalidTimeFormat`](crate::error::SleepError::InvalidTimeFormat)
/// if `anchor_input` cannot be parsed. No partial results are produced.
///
/// # Examples
///
/// ```
/// use sleep_engine::{calculate, MinuteOfDay, Mode, QualityTier};
///
/// let now = MinuteOfDay::from_hm(23, 0).unwrap();
/// let recs = calculate("23:30", Mode::Bedtime, now).unwrap();
/// assert_eq!(recs[0].result_time.to_string(), "04:14");
/// assert_eq!(recs[0].day_offset, 1);
/// assert_eq!(recs[0].quality, QualityTier::Fair);
/// ```
pub fn calculate(anchor_input: &str, mode: Mode, now: MinuteOfDay) -> Result<Vec<Recommendation>> {
    let anchor = codec::parse(anchor_input)?;
    Ok(calculate_from(anchor, mode, now))
}

/// Like [`calculate`], for an anchor that is already a [`MinuteOfDay`].
pub fn calculate_from(anchor: MinuteOfDay, mode: Mode, now: MinuteOfDay) -> Vec<Recommendation> {
    let recommendations: Vec<Recommendation> = mode
        .cycle_sequence()
        .into_iter()
        .map(|cycles| recommend(anchor, mode, now, cycles))
        .collect();

    debug!(
        anchor = %anchor,
        %mode,
        %now,
        results = recommendations.len(),
        "computed sleep-cycle recommendations"
    );

    recommendations
}

fn recommend(anchor: MinuteOfDay, mode: Mode, now: MinuteOfDay, cycles: u8) -> Recommendation {
    let total_sleep_minutes = SLEEP_ONSET_DELAY_MINUTES + u32::from(cycles) * CYCLE_LENGTH_MINUTES;
    let delta = match mode {
        Mode::Bedtime => i64::from(total_sleep_minutes),
        Mode::WakeTime => -i64::from(total_sleep_minutes),
    };
    let shifted = shift(anchor, delta);

    let absolute = i64::from(shifted.result.get()) + shifted.day_offset * i64::from(MINUTES_PER_DAY);
    let relative_label = RelativeTime::from_minutes(absolute - i64::from(now.get()));

    Recommendation {
        cycle_count: cycles,
        result_time: shifted.result,
        total_sleep_minutes,
        day_offset: shifted.day_offset,
        quality: classify(cycles),
        relative_label,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
