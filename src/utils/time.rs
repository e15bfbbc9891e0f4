//! Time utilities

/// Format elapsed contest minutes as `H:MM`
pub fn format_contest_minutes(minutes: i64) -> String {
    if minutes < 0 {
        return "0:00".to_string();
    }
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Format a penalty total for display, e.g. `190 (3:10)`
pub fn format_penalty(minutes: i64) -> String {
    format!("{} ({})", minutes, format_contest_minutes(minutes))
}
