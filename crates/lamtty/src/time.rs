//! Helper module for wall-clock time.

use std::time::{SystemTime, UNIX_EPOCH};

/// Get the current time in milliseconds since the Unix epoch (UTC).
///
/// The value is read from the system's real-time clock. A clock set before
/// the epoch yields a negative count; a count outside the range of `i64`
/// saturates instead of panicking.
pub fn unix_millis() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
        Err(backwards) => {
            -i64::try_from(backwards.duration().as_millis()).unwrap_or(i64::MAX)
        }
    }
}

// =====================================================================================
