use core::time::Duration;

/// Render as `"<h>h <m>m"` from one hour up, otherwise `"<m>m"`. Seconds are
/// dropped.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
