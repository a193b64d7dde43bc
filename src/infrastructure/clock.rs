//! Clock Implementations
//!
//! - `SystemClock` - wall-clock time
//! - `FixedClock` - always the same instant, for tests and replays

use chrono::{DateTime, Utc};

use crate::domain::ports::Clock;

/// Wall-clock time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock stuck at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Parse an RFC 3339 timestamp such as `2017-09-23T12:34:56.789Z`
    pub fn parse(timestamp: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(timestamp).map(|t| Self(t.with_timezone(&Utc)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
