//! Errors raised while building a meeting from text.

use thiserror::Error;

pub const MESSAGE_CONSTRAINTS: &str =
    "Meeting MUST be a valid date and time in yyyy-MM-dd HH:mm format";

pub const FUTURE_MEETING_MESSAGE_CONSTRAINTS: &str =
    "Meeting MUST be AFTER the current day and time.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeetingError {
    /// Text is not a real date and time in `yyyy-MM-dd HH:mm` form.
    #[error("{}", MESSAGE_CONSTRAINTS)]
    InvalidFormat,
    /// Meeting is not strictly after the current time.
    #[error("{}", FUTURE_MEETING_MESSAGE_CONSTRAINTS)]
    NotInFuture,
}

pub type MeetingResult<T> = std::result::Result<T, MeetingError>;
