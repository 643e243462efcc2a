//! # sleep-engine
//!
//! Deterministic sleep-cycle computation.
//!
//! Given a bedtime or a wake time, the engine recommends times on the other
//! end of the night that fall on a sleep-cycle boundary: 3 to 6 cycles of
//! 90 minutes, plus 14 minutes to fall asleep. All times are local
//! wall-clock times of day with no date or timezone, and "now" is always
//! passed in by the caller, so every function here is pure.
//!
//! ## Modules
//!
//! - [`codec`]: time-of-day string ↔ [`MinuteOfDay`]
//! - [`arithmetic`]: signed minute offsets with midnight rollover
//! - [`quality`]: cycle count → [`QualityTier`]
//! - [`engine`]: the four recommendations for an anchor time
//! - [`error`]: Error types

pub mod arithmetic;
pub mod codec;
pub mod engine;
pub mod error;
pub mod quality;

pub use arithmetic::{shift, Shifted};
pub use codec::{format, parse, MinuteOfDay, SleepDuration, MINUTES_PER_DAY};
pub use engine::{
    calculate, calculate_from, Mode, Recommendation, RelativeTime,
    CYCLE_LENGTH_MINUTES, SLEEP_ONSET_DELAY_MINUTES,
};
pub use error::{SleepError, UnknownMode};
pub use quality::{classify, QualityTier};
