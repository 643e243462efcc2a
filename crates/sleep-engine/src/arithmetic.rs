//! Signed minute offsets over a time of day, with midnight rollover.
//!
//! [`shift`] is the only place where calendar days are crossed. The day
//! count is reported alongside the wrapped time instead of being folded
//! into a date, so callers never have to reason about real calendars.

use serde::Serialize;

use crate::codec::{MinuteOfDay, MINUTES_PER_DAY};

/// The result of moving a [`MinuteOfDay`] by a signed number of minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shifted {
    /// The wrapped time of day.
    pub result: MinuteOfDay,
    /// Midnights crossed: positive going forward, negative going backward.
    pub day_offset: i64,
}

/// Add `delta_minutes` (which may be negative) to `anchor`.
///
/// Uses Euclidean division, so `result` is always in `0..=1439` and
/// `anchor + delta_minutes == day_offset * 1440 + result` holds for any
/// delta, including ones spanning many days.
///
/// # Examples
///
/// ```
/// use sleep_engine::arithmetic::shift;
/// use sleep_engine::codec::MinuteOfDay;
///
/// let seven = MinuteOfDay::from_hm(7, 0).unwrap();
/// let bedtime = shift(seven, -554);
/// assert_eq!(bedtime.result.to_string(), "21:46");
/// assert_eq!(bedtime.day_offset, -1);
/// ```
pub fn shift(anchor: MinuteOfDay, delta_minutes: i64) -> Shifted {
    let day = i64::from(MINUTES_PER_DAY);
    // Split the delta first so huge magnitudes cannot overflow `anchor + delta`.
    let within_day = i64::from(anchor.get()) + delta_minutes.rem_euclid(day);
    let day_offset = delta_minutes.div_euclid(day) + within_day / day;
    let wrapped = (within_day % day) as u16;

    Shifted {
        result: MinuteOfDay::new(wrapped).unwrap_or_default(),
        day_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> MinuteOfDay {
        MinuteOfDay::from_hm(h, m).unwrap()
    }

    #[test]
    fn test_shift_within_same_day() {
        let s = shift(at(1, 0), 90);
        assert_eq!(s.result, at(2, 30));
        assert_eq!(s.day_offset, 0);
    }

    #[test]
    fn test_shift_forward_past_midnight() {
        let s = shift(at(23, 30), 284);
        assert_eq!(s.result, at(4, 14));
        assert_eq!(s.day_offset, 1);
    }

    #[test]
    fn test_shift_backward_past_midnight() {
        let s = shift(at(7, 0), -464);
        assert_eq!(s.result, at(23, 16));
        assert_eq!(s.day_offset, -1);
    }

    #[test]
    fn test_shift_landing_exactly_on_midnight() {
        let forward = shift(at(22, 0), 120);
        assert_eq!(forward.result, MinuteOfDay::MIDNIGHT);
        assert_eq!(forward.day_offset, 1);

        let backward = shift(at(2, 0), -120);
        assert_eq!(backward.result, MinuteOfDay::MIDNIGHT);
        assert_eq!(backward.day_offset, 0);
    }

    #[test]
    fn test_shift_by_zero_is_identity() {
        let s = shift(at(13, 37), 0);
        assert_eq!(s.result, at(13, 37));
        assert_eq!(s.day_offset, 0);
    }

    #[test]
    fn test_shift_across_several_days() {
        let s = shift(at(12, 0), 3 * 1440 + 30);
        assert_eq!(s.result, at(12, 30));
        assert_eq!(s.day_offset, 3);

        let s = shift(at(0, 10), -(2 * 1440) - 20);
        assert_eq!(s.result, at(23, 50));
        assert_eq!(s.day_offset, -3);
    }

    #[test]
    fn test_shift_extreme_deltas_do_not_overflow() {
        let anchor = at(23, 59);
        for delta in [i64::MAX, i64::MIN, i64::MIN + 1] {
            let s = shift(anchor, delta);
            assert!(s.result.get() < 1440);
            let reconstructed =
                i128::from(s.day_offset) * 1440 + i128::from(s.result.get());
            assert_eq!(reconstructed, i128::from(anchor.get()) + i128::from(delta));
        }
    }
}
