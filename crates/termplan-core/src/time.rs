//! Conversions between `HH:MM` clock strings and minute offsets from
//! midnight.

use crate::error::{PlannerError, Result};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Parses an `HH:MM` string (24-hour clock, two digits each) into minutes
/// since midnight.
pub fn parse_clock(value: &str) -> Option<u16> {
    let (hours, minutes) = value.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}

/// Like [`parse_clock`], but reports a validation error against `field`.
pub fn clock_to_minutes(field: &str, value: &str) -> Result<u16> {
    parse_clock(value).ok_or_else(|| {
        PlannerError::validation(field).with_reason(format!("'{value}' is not a valid HH:MM time"))
    })
}

/// Formats minutes since midnight as `HH:MM`. Values past the end of the day
/// wrap around.
pub fn minutes_to_clock(minutes: u16) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
