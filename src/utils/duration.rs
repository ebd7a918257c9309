use crate::error::{DemoError, Result};
use std::time::Duration;

/// Parse a duration string like "250ms", "1s", "2m"
/// Defaults to seconds if no unit specified
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();

    if s.is_empty() {
        return Err(DemoError::InvalidDuration {
            input: s.to_string(),
            message: "empty string".to_string(),
        });
    }

    // "ms" must be checked before "s"
    let (num_str, unit) = if let Some(stripped) = s.strip_suffix("ms") {
        (stripped, "ms")
    } else if let Some(stripped) = s.strip_suffix('s') {
        (stripped, "s")
    } else if let Some(stripped) = s.strip_suffix('m') {
        (stripped, "m")
    } else {
        (s, "s")
    };

    let value: u64 = num_str.parse().map_err(|_| DemoError::InvalidDuration {
        input: s.to_string(),
        message: "expected format: NUMBER[ms|s|m] (e.g., '250ms', '1s', '2m')".to_string(),
    })?;

    let duration = match unit {
        "ms" => Duration::from_millis(value),
        "s" => Duration::from_secs(value),
        "m" => Duration::from_secs(value.saturating_mul(60)),
        _ => unreachable!(),
    };

    Ok(duration)
}

/// Parse the pause between a worker's two acquisitions.
/// A zero delay lets one worker take both locks before the other starts.
pub fn parse_delay(s: &str) -> Result<Duration> {
    let delay = parse_duration(s)?;
    if delay.is_zero() {
        return Err(DemoError::InvalidDuration {
            input: s.trim().to_string(),
            message: "delay must be greater than zero".to_string(),
        });
    }
    Ok(delay)
}
