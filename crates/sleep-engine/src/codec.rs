//! Time-of-day parsing and formatting.
//!
//! Every time the engine handles is a [`MinuteOfDay`]: minutes since local
//! midnight, with no date or timezone attached. Input strings come from a
//! text field or a native time picker, so parsing is lenient about noise
//! (anything that is not a digit or `:` is dropped) but strict about the
//! shape of what remains.
//!
//! # Accepted Formats
//!
//! - `H:MM` / `HH:MM`: `"7:30"`, `"23:05"`
//! - `HMM` / `HHMM`: `"730"`, `"2305"` (last two digits are the minutes)
//!
//! Hours must be in `0..=23` and minutes in `0..=59`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::error::{Result, SleepError};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u16 = 1440;

// ── MinuteOfDay ─────────────────────────────────────────────────────────────

/// A wall-clock time of day, stored as minutes since midnight (`0..=1439`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    /// Midnight (`00:00`).
    pub const MIDNIGHT: MinuteOfDay = MinuteOfDay(0);

    /// Build from a raw minute count. Returns `None` outside `0..=1439`.
    pub fn new(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Build from an hour (`0..=23`) and minute (`0..=59`).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    pub fn get(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0 / 60)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0 % 60)
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for MinuteOfDay {
    type Err = SleepError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl Serialize for MinuteOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Seconds and sub-second precision are truncated.
impl From<NaiveTime> for MinuteOfDay {
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl From<MinuteOfDay> for NaiveTime {
    fn from(m: MinuteOfDay) -> Self {
        NaiveTime::from_hms_opt(m.hour(), m.minute(), 0).unwrap_or_default()
    }
}

// ── parse / format ──────────────────────────────────────────────────────────

/// Parse a time-of-day string into a [`MinuteOfDay`].
///
/// All characters other than ASCII digits and `:` are stripped first, so
/// `" 7:30 "` and `"07h:30"` are accepted. The remainder must be `H:MM`,
/// `HH:MM`, or a 3-4 digit compact run (`HMM` / `HHMM`).
///
/// # Errors
///
/// Returns [`SleepError::InvalidTimeFormat`] if the cleaned input matches
/// neither shape, or if the hour is not below 24 or the minute not below 60.
///
/// # Examples
///
/// ```
/// use sleep_engine::codec::parse;
///
/// assert_eq!(parse("7:30").unwrap().get(), 450);
/// assert_eq!(parse("730").unwrap(), parse("07:30").unwrap());
/// assert!(parse("25:61").is_err());
/// ```
pub fn parse(input: &str) -> Result<MinuteOfDay> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ':')
        .collect();

    parse_colon_form(&cleaned)
        .or_else(|| parse_compact_form(&cleaned))
        .ok_or_else(|| SleepError::InvalidTimeFormat(input.trim().to_string()))
}

/// Render as zero-padded `HH:MM`.
pub fn format(m: MinuteOfDay) -> String {
    m.to_string()
}

/// `H:MM` or `HH:MM`.
fn parse_colon_form(s: &str) -> Option<MinuteOfDay> {
    let (hours, minutes) = s.split_once(':')?;
    if !(1..=2).contains(&hours.len()) || minutes.len() != 2 || minutes.contains(':') {
        return None;
    }
    hm_from_digits(hours, minutes)
}

/// `HMM` or `HHMM`: the last two digits are the minutes.
fn parse_compact_form(s: &str) -> Option<MinuteOfDay> {
    if !(3..=4).contains(&s.len()) || s.contains(':') {
        return None;
    }
    let (hours, minutes) = s.split_at(s.len() - 2);
    hm_from_digits(hours, minutes)
}

fn hm_from_digits(hours: &str, minutes: &str) -> Option<MinuteOfDay> {
    let hour: u32 = hours.parse().ok()?;
    let minute: u32 = minutes.parse().ok()?;
    MinuteOfDay::from_hm(hour, minute)
}

// ── SleepDuration ───────────────────────────────────────────────────────────

/// A sleep length in minutes, displayed as `{h}h{mm}` (e.g. 464 → `7h44`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SleepDuration(pub u32);

impl fmt::Display for SleepDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h{:02}", self.0 / 60, self.0 % 60)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
