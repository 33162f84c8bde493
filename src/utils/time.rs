//! Time utilities

use chrono::{DateTime, Local};

/// Get current local time
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Format a duration in seconds with the largest unit that keeps the value
/// at or above one
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return seconds.to_string();
    }

    let abs = seconds.abs();
    if abs < 1e-6 {
        format!("{:.0}ns", seconds * 1e9)
    } else if abs < 1e-3 {
        format!("{:.2}µs", seconds * 1e6)
    } else if abs < 1.0 {
        format!("{:.2}ms", seconds * 1e3)
    } else if abs < 60.0 {
        format!("{:.2}s", seconds)
    } else {
        let whole = seconds as i64;
        format!("{}m {}s", whole / 60, whole % 60)
    }
}
