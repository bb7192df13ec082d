use chrono::TimeDelta;

/// `m:ss`, clamped at zero.
#[must_use]
pub fn format_duration(value: TimeDelta) -> String {
    let seconds = value.num_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
