use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use std::fmt;
use std::str::FromStr;

use crate::error::TimecodeError;
use crate::parse;

/// Frame rate assumed when none is given (`FromStr`, serde).
pub const DEFAULT_FRAME_RATE: u32 = 25;

const SECONDS_PER_DAY: i64 = 86_400;

/// Total frames in one 24-hour day at the given rate.
pub fn frames_per_day(frame_rate: u32) -> i64 {
    frame_rate as i64 * SECONDS_PER_DAY
}

// ── Timecode ──────────────────────────────────────────────────────────────

/// A broadcast timecode: a point on a 24-hour cyclic timeline quantized
/// into frames at a fixed integer frame rate.
///
/// The canonical state is a frame count since `00:00:00:00`, always kept in
/// `[0, frames_per_day(rate))`. Every construction path normalizes with
/// floor-modulo, so arithmetic that runs past midnight (in either direction)
/// wraps rather than overflowing. Display segments are derived from the
/// canonical count on access.
///
/// Timecodes at different rates never mix: [`try_add`](Timecode::try_add) and
/// [`try_sub`](Timecode::try_sub) reject mismatched rates, and ordering
/// across rates is undefined (`partial_cmp` returns `None`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Timecode {
    total_frames: i64,
    frame_rate: u32,
}

impl Timecode {
    /// Creates a timecode from a raw frame count.
    ///
    /// The count may be negative or exceed a day; it is wrapped into
    /// `[0, frames_per_day(frame_rate))`.
    pub fn from_total_frames(total_frames: i64, frame_rate: u32) -> Result<Self, TimecodeError> {
        if frame_rate == 0 {
            return Err(TimecodeError::ZeroFrameRate);
        }
        Ok(Self {
            total_frames: total_frames.rem_euclid(frames_per_day(frame_rate)),
            frame_rate,
        })
    }

    /// Creates a timecode from display segments.
    ///
    /// Segments are not range-checked individually; they are summed into a
    /// raw frame count and wrapped, so `25:00:00:00` lands on `01:00:00:00`
    /// and negative segments subtract.
    pub fn from_parts(
        hours: i64,
        minutes: i64,
        seconds: i64,
        frames: i64,
        frame_rate: u32,
    ) -> Result<Self, TimecodeError> {
        let rate = frame_rate as i64;
        let total = frames + seconds * rate + minutes * 60 * rate + hours * 3600 * rate;
        Self::from_total_frames(total, frame_rate)
    }

    /// Parses `H{1,2}:M{1,2}:S{1,2}:F{1,3}` at the given frame rate.
    pub fn parse(text: &str, frame_rate: u32) -> Result<Self, TimecodeError> {
        parse::parse_timecode(text, frame_rate)
    }

    /// Same timecode, different raw count. Rate is already validated.
    pub(crate) fn with_total_frames(self, raw: i64) -> Self {
        Self {
            total_frames: raw.rem_euclid(frames_per_day(self.frame_rate)),
            frame_rate: self.frame_rate,
        }
    }
}

// Accessors. All display segments derive from the canonical count, so the
// struct can never disagree with its own rendering.
impl Timecode {
    /// Frames since `00:00:00:00`, in `[0, frames_per_day(rate))`.
    #[inline]
    pub fn total_frames(&self) -> i64 {
        self.total_frames
    }

    /// Frames per second.
    #[inline]
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Seconds since `00:00:00:00`, including the fractional frame part.
    #[inline]
    pub fn total_seconds(&self) -> f64 {
        self.total_frames as f64 / self.frame_rate as f64
    }

    /// The hours segment, in `[0, 24)`.
    #[inline]
    pub fn hours(&self) -> u32 {
        (self.total_frames / self.frame_rate as i64 / 3600) as u32
    }

    /// The minutes segment, in `[0, 60)`.
    #[inline]
    pub fn minutes(&self) -> u32 {
        (self.total_frames / self.frame_rate as i64 / 60 % 60) as u32
    }

    /// The seconds segment, in `[0, 60)`.
    #[inline]
    pub fn seconds(&self) -> u32 {
        (self.total_frames / self.frame_rate as i64 % 60) as u32
    }

    /// The frames segment, in `[0, frame_rate)`.
    #[inline]
    pub fn frames(&self) -> u32 {
        (self.total_frames % self.frame_rate as i64) as u32
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Timecode {
    /// Adds two timecodes at the same rate; the sum wraps past midnight.
    pub fn try_add(self, rhs: Timecode) -> Result<Timecode, TimecodeError> {
        if self.frame_rate != rhs.frame_rate {
            return Err(TimecodeError::RateMismatch {
                lhs: self.frame_rate,
                rhs: rhs.frame_rate,
            });
        }
        Ok(self.with_total_frames(self.total_frames + rhs.total_frames))
    }

    /// Subtracts two timecodes at the same rate.
    ///
    /// When `self` has the smaller raw count it is presumed to have rolled
    /// past the 24-hour mark, so one day of frames is added before
    /// subtracting. `00:00:00:01 - 00:00:00:02` is therefore one frame short
    /// of a full day, not negative.
    pub fn try_sub(self, rhs: Timecode) -> Result<Timecode, TimecodeError> {
        if self.frame_rate != rhs.frame_rate {
            return Err(TimecodeError::RateMismatch {
                lhs: self.frame_rate,
                rhs: rhs.frame_rate,
            });
        }
        let mut lhs_frames = self.total_frames;
        if lhs_frames < rhs.total_frames {
            lhs_frames += frames_per_day(self.frame_rate);
        }
        Ok(self.with_total_frames(lhs_frames - rhs.total_frames))
    }
}

impl Add<i64> for Timecode {
    type Output = Timecode;

    /// Shifts forward by a raw frame count, wrapping past midnight.
    fn add(self, frames: i64) -> Timecode {
        self.with_total_frames(self.total_frames + frames)
    }
}

impl AddAssign<i64> for Timecode {
    fn add_assign(&mut self, frames: i64) {
        *self = *self + frames;
    }
}

impl Sub<i64> for Timecode {
    type Output = Timecode;

    /// Shifts backward by a raw frame count, wrapping below zero.
    fn sub(self, frames: i64) -> Timecode {
        self.with_total_frames(self.total_frames - frames)
    }
}

impl SubAssign<i64> for Timecode {
    fn sub_assign(&mut self, frames: i64) {
        *self = *self - frames;
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────

/// Timecodes at the same rate order by frame count; timecodes at different
/// rates are unordered, matching the rate-mismatch rule for arithmetic.
impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.frame_rate == other.frame_rate)
            .then(|| self.total_frames.cmp(&other.total_frames))
    }
}

// ── Formatting ────────────────────────────────────────────────────────────

impl fmt::Display for Timecode {
    /// Renders `HH:MM:SS:FF`, each segment zero-padded to at least two
    /// digits. A three-digit frames segment (high rates) prints in full.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.frames()
        )
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    /// Parses at [`DEFAULT_FRAME_RATE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timecode::parse(s, DEFAULT_FRAME_RATE)
    }
}

// ── Serde (optional) ──────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{DEFAULT_FRAME_RATE, Timecode};
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Timecode {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct TimecodeVisitor;

    impl Visitor<'_> for TimecodeVisitor {
        type Value = Timecode;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a timecode string in hh:mm:ss:ff form")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Timecode, E> {
            Timecode::parse(v, DEFAULT_FRAME_RATE).map_err(de::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Timecode {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Timecode, D::Error> {
            deserializer.deserialize_str(TimecodeVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tc(frames: i64, rate: u32) -> Timecode {
        Timecode::from_total_frames(frames, rate).unwrap()
    }

    #[test]
    fn zero_rate_is_rejected() {
        assert_eq!(
            Timecode::from_total_frames(0, 0),
            Err(TimecodeError::ZeroFrameRate)
        );
        assert_eq!(
            Timecode::from_parts(1, 2, 3, 4, 0),
            Err(TimecodeError::ZeroFrameRate)
        );
    }

    #[test]
    fn count_wraps_into_one_day() {
        let day = frames_per_day(25);
        assert_eq!(tc(0, 25).total_frames(), 0);
        assert_eq!(tc(day, 25).total_frames(), 0);
        assert_eq!(tc(day + 7, 25).total_frames(), 7);
        assert_eq!(tc(3 * day + 7, 25).total_frames(), 7);
    }

    #[test]
    fn negative_count_wraps_from_midnight() {
        let day = frames_per_day(25);
        assert_eq!(tc(-1, 25).total_frames(), day - 1);
        assert_eq!(tc(-day, 25).total_frames(), 0);
        assert_eq!(tc(-day - 1, 25).total_frames(), day - 1);
    }

    #[test]
    fn segments_derive_from_canonical_count() {
        // 01:02:03:04 at 25 fps
        let t = tc(4 + 3 * 25 + 2 * 60 * 25 + 3600 * 25, 25);
        assert_eq!(t.hours(), 1);
        assert_eq!(t.minutes(), 2);
        assert_eq!(t.seconds(), 3);
        assert_eq!(t.frames(), 4);
    }

    #[test]
    fn parts_constructor_normalizes() {
        // 25 hours wraps to 1 hour
        let t = Timecode::from_parts(25, 0, 0, 0, 25).unwrap();
        assert_eq!(t.hours(), 1);
        assert_eq!(t.total_frames(), 3600 * 25);

        // 90 seconds carries into minutes
        let t = Timecode::from_parts(0, 0, 90, 0, 25).unwrap();
        assert_eq!(t.minutes(), 1);
        assert_eq!(t.seconds(), 30);

        // negative frames borrow from midnight
        let t = Timecode::from_parts(0, 0, 0, -1, 25).unwrap();
        assert_eq!(t.total_frames(), frames_per_day(25) - 1);
    }

    #[test]
    fn total_seconds_includes_fraction() {
        let t = tc(25 + 12, 25); // one second and 12 frames
        assert_eq!(t.total_seconds(), 1.48);
    }

    #[test]
    fn add_wraps_past_midnight() {
        let last = tc(frames_per_day(25) - 1, 25);
        assert_eq!((last + 1).total_frames(), 0);

        let sum = last.try_add(tc(1, 25)).unwrap();
        assert_eq!(sum.total_frames(), 0);
    }

    #[test]
    fn sub_presumes_rollover() {
        let day = frames_per_day(25);
        let diff = tc(0, 25).try_sub(tc(1, 25)).unwrap();
        assert_eq!(diff, tc(day - 1, 25));

        // plain subtraction when no rollover is implied
        let diff = tc(10, 25).try_sub(tc(4, 25)).unwrap();
        assert_eq!(diff.total_frames(), 6);
    }

    #[test]
    fn frame_shift_operators() {
        let mut t = tc(100, 25);
        assert_eq!((t + 50).total_frames(), 150);
        assert_eq!((t - 150).total_frames(), frames_per_day(25) - 50);
        t += 25;
        t -= 5;
        assert_eq!(t.total_frames(), 120);
    }

    #[test]
    fn mismatched_rates_never_combine() {
        let a = tc(10, 25);
        let b = tc(10, 30);
        let mismatch = Err(TimecodeError::RateMismatch { lhs: 25, rhs: 30 });
        assert_eq!(a.try_add(b), mismatch);
        assert_eq!(a.try_sub(b), mismatch);

        let big = tc(frames_per_day(30) - 1, 30);
        assert!(a.try_add(big).is_err());
        assert!(a.try_sub(big).is_err());
    }

    #[test]
    fn ordering_at_equal_rates() {
        assert!(tc(10, 25) < tc(20, 25));
        assert!(tc(20, 25) > tc(10, 25));
        assert!(tc(10, 25) <= tc(10, 25));
        assert!(tc(10, 25) >= tc(10, 25));

        let a = tc(10, 25);
        let b = tc(10, 25);
        assert!(!(a < b) && !(a > b));
    }

    #[test]
    fn ordering_across_rates_is_undefined() {
        let a = tc(10, 25);
        let b = tc(10, 30);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b) && !(a > b) && a != b);
    }

    #[test]
    fn display_pads_to_two_digits() {
        let t = Timecode::from_parts(1, 2, 3, 4, 25).unwrap();
        assert_eq!(t.to_string(), "01:02:03:04");
        assert_eq!(tc(0, 25).to_string(), "00:00:00:00");
    }

    #[test]
    fn display_keeps_three_digit_frames() {
        // 120 fps: frames segment can reach three digits
        let t = Timecode::from_parts(0, 0, 0, 100, 120).unwrap();
        assert_eq!(t.to_string(), "00:00:00:100");
    }

    #[test]
    fn from_str_uses_default_rate() {
        let t: Timecode = "10:20:30:12".parse().unwrap();
        assert_eq!(t.frame_rate(), 25);
        assert_eq!(t.hours(), 10);
        assert_eq!(t.frames(), 12);
    }
}
