//! Conversion between millisecond positions and AVTransport timecodes
//!
//! The wire format for positions and durations is a colon-separated
//! timecode, canonically `HH:MM:SS`, but devices also emit shortened
//! `MM:SS` or bare-seconds forms. Positions are reported to callers in
//! milliseconds, so queries convert timecode seconds back up by a factor
//! of 1000.

use crate::error::{ApiError, Result};

/// Format a millisecond position as a zero-padded `HH:MM:SS` timecode.
///
/// The hour field wraps at 24; fractional seconds are dropped.
pub fn millis_to_timecode(millis: u64) -> String {
    let second = (millis / 1000) % 60;
    let minute = (millis / 60_000) % 60;
    let hour = (millis / 3_600_000) % 24;

    format!("{:02}:{:02}:{:02}", hour, minute, second)
}

/// Parse a colon-separated timecode into whole seconds.
///
/// Fields accumulate left-to-right as base-60 digits, which handles
/// `HH:MM:SS`, `MM:SS`, and plain `SS` uniformly.
///
/// # Errors
///
/// Returns `ApiError::InvalidTimeFormat` if any field is non-numeric.
pub fn timecode_to_seconds(timecode: &str) -> Result<u64> {
    let mut seconds: u64 = 0;

    for field in timecode.split(':') {
        let value: u64 = field
            .parse()
            .map_err(|_| ApiError::InvalidTimeFormat(timecode.to_string()))?;
        seconds = seconds * 60 + value;
    }

    Ok(seconds)
}
