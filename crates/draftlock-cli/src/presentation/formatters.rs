/// Format a countdown as "4m32s", "45s" or "0s".
pub fn format_remaining(remaining_ms: i64) -> String {
    let total_secs = (remaining_ms.max(0) + 999) / 1000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    if minutes == 0 {
        format!("{}s", seconds)
    } else {
        format!("{}m{:02}s", minutes, seconds)
    }
}

/// Minutes-in-mode summary, "3w/1e" (rounded minutes written / edited).
pub fn format_minutes_in_mode(ms_write: i64, ms_edit: i64) -> String {
    let w = (ms_write as f64 / 60_000.0).round() as i64;
    let e = (ms_edit as f64 / 60_000.0).round() as i64;
    format!("{}w/{}e", w, e)
}

/// Relative age of an epoch-ms timestamp ("just now", "2 min ago", "yesterday").
pub fn format_relative_ms(then_ms: i64, now_ms: i64) -> String {
    let seconds = (now_ms - then_ms) / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}
