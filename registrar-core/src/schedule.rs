//! Schedule descriptors and the conflict check
//!
//! A descriptor is "<day> <h:mm> <AM|PM>", e.g. "Monday 9:00 AM". Every
//! course occupies the half-open window [start, start + 60 minutes) on its
//! day. Days are compared as exact, case-sensitive strings.
//!
//! Unreadable descriptors never produce a conflict. This fail-open policy is
//! kept for compatibility: a malformed schedule lets the enrollment through.
//! Hours must be 1 to 12; "0:30 AM" or "13:00 PM" count as unreadable and
//! therefore never conflict.

use chrono::{NaiveTime, Timelike};
use std::fmt;
use tracing::debug;

use crate::error::ScheduleParseError;
use crate::model::Course;

/// Length of every course meeting
pub const SESSION_LENGTH_MINUTES: u32 = 60;

const TIME_FORMAT: &str = "%I:%M %p";

/// A parsed schedule descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    day: String,
    start: NaiveTime,
}

impl TimeSlot {
    /// Parse a descriptor of exactly three space-separated tokens
    pub fn parse(descriptor: &str) -> Result<Self, ScheduleParseError> {
        let mut tokens: Vec<&str> = descriptor.split(' ').collect();
        // Trailing separators do not count as tokens
        while tokens.last().is_some_and(|token| token.is_empty()) {
            tokens.pop();
        }

        let [day, clock, meridiem] = tokens.as_slice() else {
            return Err(ScheduleParseError::Malformed {
                descriptor: descriptor.to_string(),
                tokens: tokens.len(),
            });
        };

        let time = format!("{} {}", clock, meridiem);
        let start = NaiveTime::parse_from_str(&time, TIME_FORMAT)
            .map_err(|_| ScheduleParseError::InvalidTime { time })?;

        Ok(Self {
            day: day.to_string(),
            start,
        })
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Minutes from midnight at which the session starts
    pub fn start_minute(&self) -> u32 {
        self.start.num_seconds_from_midnight() / 60
    }

    /// Minutes from midnight at which the session ends; may exceed 24h
    pub fn end_minute(&self) -> u32 {
        self.start_minute() + SESSION_LENGTH_MINUTES
    }

    /// Same day and intersecting half-open windows
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day
            && self.start_minute() < other.end_minute()
            && other.start_minute() < self.end_minute()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.start.format("%-I:%M %p"))
    }
}

/// Whether two schedule descriptors occupy overlapping windows
///
/// Either descriptor failing to parse yields `false`.
pub fn schedules_conflict(first: &str, second: &str) -> bool {
    let (first_slot, second_slot) = match (TimeSlot::parse(first), TimeSlot::parse(second)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(err), _) | (_, Err(err)) => {
            debug!(error = %err, first, second, "Unreadable schedule, treating as no conflict");
            return false;
        }
    };
    first_slot.overlaps(&second_slot)
}

/// Whether two courses meet at overlapping times
pub fn courses_conflict(first: &Course, second: &Course) -> bool {
    schedules_conflict(first.schedule(), second.schedule())
}
