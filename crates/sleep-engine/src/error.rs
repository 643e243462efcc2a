//! Error types for sleep-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SleepError {
    #[error("Invalid time format: '{0}' (expected HH:MM or HHMM)")]
    InvalidTimeFormat(String),
}

/// A mode name that is neither a bedtime nor a wake-time alias.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mode '{0}' (expected 'bedtime' or 'waketime')")]
pub struct UnknownMode(pub String);

pub type Result<T> = std::result::Result<T, SleepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mode_is_a_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(UnknownMode("nap".into()));
        assert_eq!(
            err.to_string(),
            "unknown mode 'nap' (expected 'bedtime' or 'waketime')"
        );
    }

    #[test]
    fn test_invalid_time_format_message() {
        let err = SleepError::InvalidTimeFormat("25:61".into());
        assert_eq!(
            err.to_string(),
            "Invalid time format: '25:61' (expected HH:MM or HHMM)"
        );
    }
}
