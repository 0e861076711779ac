//! Formatting utilities for playback times and progress bars.

/// Format a position in seconds as `MM:SS`, or `HH:MM:SS` past the hour.
///
/// Every component is zero-padded to two digits. Negative and non-finite
/// values render as `00:00`.
pub fn format_second(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let h = total / 3600;
    let m = (total / 60) % 60;
    let s = total % 60;

    if h > 0 {
        format!("{:02}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}

/// CSS width for a fraction, e.g. `0.25` → `"25%"`.
pub fn fraction_percent(fraction: f64) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("{}%", (fraction * 1000.0).round() / 10.0)
}
