//! Broadcast timecode (`hh:mm:ss:ff`) value type.
//!
//! A [`Timecode`] is a point on a 24-hour wraparound clock quantized into
//! frames at a fixed integer frame rate. Arithmetic wraps at midnight in both
//! directions, and timecodes at different rates never silently mix.
//!
//! This crate is intentionally light on dependencies so the type can be
//! embedded in players, editors, and tooling alike; enable the `serde`
//! feature for string-form (de)serialization.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`timecode`] | `Timecode`, `DEFAULT_FRAME_RATE`, `frames_per_day` |
//! | [`error`] | `TimecodeError` |
//! | [`parse`] | `parse_timecode` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use framecode::Timecode;
//!
//! let mark_in = Timecode::parse("10:00:00:00", 25).unwrap();
//! let mark_out = Timecode::parse("10:00:12:13", 25).unwrap();
//!
//! let len = mark_out.try_sub(mark_in).unwrap();
//! assert_eq!(len.to_string(), "00:00:12:13");
//!
//! // shifting by raw frames wraps past midnight
//! let shifted = mark_in + 30;
//! assert_eq!(shifted.to_string(), "10:00:01:05");
//! ```

pub mod error;
pub mod parse;
pub mod timecode;

pub use error::TimecodeError;
pub use timecode::{DEFAULT_FRAME_RATE, Timecode, frames_per_day};
