//! A client's meeting time in the address book.
//!
//! A [`Meeting`] is built from text in `yyyy-MM-dd HH:mm` form. The text is
//! kept verbatim next to the parsed, timezone-naive timestamp, and both are
//! fixed once the value exists. Only the optional display name can change.

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::error::{MeetingError, MeetingResult};

/// Pattern accepted on input, in chrono syntax.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `MMM dd yyyy HH:mm`, e.g. `Jan 05 2024 14:30`.
pub const DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";

const MEETING_TEXT_LEN: usize = 16;

const VALIDATION_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}$";

// Constant pattern, covered by `test_validation_pattern_compiles`.
static VALIDATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(VALIDATION_PATTERN).expect("meeting validation pattern compiles")
});

/// Parses `text` into a timestamp, rejecting anything that is not a real
/// calendar date and clock time in `yyyy-MM-dd HH:mm` form.
pub fn parse_meeting_time(text: &str) -> MeetingResult<NaiveDateTime> {
    if text.len() != MEETING_TEXT_LEN || !VALIDATION_REGEX.is_match(text) {
        debug!("Rejected meeting {:?}: not in yyyy-MM-dd HH:mm form", text);
        return Err(MeetingError::InvalidFormat);
    }

    let timestamp = NaiveDateTime::parse_from_str(text, INPUT_FORMAT).map_err(|e| {
        debug!("Rejected meeting {:?}: {}", text, e);
        MeetingError::InvalidFormat
    })?;

    // Years count from 1; there is no year zero.
    if timestamp.year() < 1 {
        debug!("Rejected meeting {:?}: year must be at least 0001", text);
        return Err(MeetingError::InvalidFormat);
    }

    Ok(timestamp)
}

/// Validated meeting time with an optional display name.
///
/// Equality, hashing and ordering look at the timestamp only. Two meetings
/// at the same minute are equal whatever their names are.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Meeting {
    value: String,
    timestamp: NaiveDateTime,
    name: Option<String>,
}

impl Meeting {
    pub fn new(text: &str) -> MeetingResult<Self> {
        let timestamp = parse_meeting_time(text)?;
        Ok(Self {
            value: text.to_string(),
            timestamp,
            name: None,
        })
    }

    pub fn with_name(text: &str, name: impl Into<String>) -> MeetingResult<Self> {
        let mut meeting = Self::new(text)?;
        meeting.name = Some(name.into());
        Ok(meeting)
    }

    /// Returns true if `text` would construct a meeting.
    pub fn is_valid_meeting(text: &str) -> bool {
        parse_meeting_time(text).is_ok()
    }

    /// Returns true if `text` is a valid meeting strictly after the local
    /// time right now. The answer depends on when it is asked.
    pub fn is_future_meeting(text: &str) -> bool {
        Self::is_future_with(text, &SystemClock)
    }

    pub fn is_future_with(text: &str, clock: &dyn Clock) -> bool {
        Self::is_future_meeting_at(text, clock.now())
    }

    pub fn is_future_meeting_at(text: &str, now: NaiveDateTime) -> bool {
        parse_meeting_time(text).is_ok_and(|timestamp| timestamp > now)
    }

    pub fn is_after(&self, now: NaiveDateTime) -> bool {
        self.timestamp > now
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The text this meeting was built from, unchanged.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Same timestamp as `other`. Identical to `==`.
    pub fn is_same_meeting(&self, other: &Meeting) -> bool {
        self == other
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.timestamp.format(DISPLAY_FORMAT))
    }
}

impl PartialEq for Meeting {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp
    }
}

impl Eq for Meeting {}

impl Hash for Meeting {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.timestamp.hash(state);
    }
}

impl PartialOrd for Meeting {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meeting {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

impl FromStr for Meeting {
    type Err = MeetingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Meeting {
    type Error = MeetingError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl TryFrom<String> for Meeting {
    type Error = MeetingError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let timestamp = parse_meeting_time(&text)?;
        Ok(Self {
            value: text,
            timestamp,
            name: None,
        })
    }
}

impl From<Meeting> for String {
    fn from(meeting: Meeting) -> Self {
        meeting.value
    }
}
