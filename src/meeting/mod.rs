//! Meeting time module.
//!
//! Validates and parses client meeting times written as `yyyy-MM-dd HH:mm`,
//! and answers whether a meeting lies in the future.

pub mod clock;
pub mod error;
pub mod meeting_time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{
    MeetingError, MeetingResult, FUTURE_MEETING_MESSAGE_CONSTRAINTS, MESSAGE_CONSTRAINTS,
};
pub use meeting_time::{parse_meeting_time, Meeting, DISPLAY_FORMAT, INPUT_FORMAT};
