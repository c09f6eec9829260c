//! Client meeting times for the address book.

pub mod config;
pub mod global;
pub mod meeting;

pub use config::{Config, MeetingConfig};
pub use meeting::{Clock, FixedClock, Meeting, MeetingError, MeetingResult, SystemClock};
