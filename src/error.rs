// THEORY:
// Every helper in this crate is a pure computation, so there is exactly one
// place where bad input can be reported: the call that received it. This module
// defines the small, closed set of ways a call can refuse its input. Nothing is
// retried and nothing is partially returned.
//
// The one deliberate exception is color construction from wide integers, which
// clamps instead of failing. That gate lives in `Color::from_channels_clamped`
// and is not an error path at all.

use thiserror::Error;

/// The error type shared by every fallible helper in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument was outside the domain the operation accepts.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// The offending parameter.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A division had a zero divisor in at least one channel.
    #[error("attempted to divide by zero")]
    DivideByZero,

    /// An index or coordinate fell outside the bounds of its container.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = Error::invalid_argument("factor", "must be positive, got 0");
        assert_eq!(err.to_string(), "invalid argument `factor`: must be positive, got 0");

        assert_eq!(Error::DivideByZero.to_string(), "attempted to divide by zero");

        let err = Error::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(err.to_string(), "index 7 is out of range for length 4");
    }
}
