use std::fmt;

/// An error from constructing, parsing, or combining timecodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    /// A constructor was given a frame rate of zero.
    ZeroFrameRate,
    /// Parse input did not match the `hh:mm:ss:ff` pattern.
    Malformed {
        /// The offending input, verbatim.
        input: String,
    },
    /// Add/subtract attempted between timecodes at different frame rates.
    RateMismatch { lhs: u32, rhs: u32 },
}

impl fmt::Display for TimecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimecodeError::ZeroFrameRate => {
                write!(f, "frame rate must be greater than zero")
            }
            TimecodeError::Malformed { input } => {
                write!(f, "{:?} is not a valid hh:mm:ss:ff timecode", input)
            }
            TimecodeError::RateMismatch { lhs, rhs } => {
                write!(
                    f,
                    "cannot combine timecodes at different frame rates ({} vs {})",
                    lhs, rhs
                )
            }
        }
    }
}

impl std::error::Error for TimecodeError {}
