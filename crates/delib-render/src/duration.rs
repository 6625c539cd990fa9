use chrono::TimeDelta;

/// Whole days in a duration, as shown in chain summaries.
///
/// Durations under a day (including zero and negative ones) read `"< 1 day"`.
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    match duration.num_days() {
        days if days < 1 => "< 1 day".to_string(),
        1 => "1 day".to_string(),
        days => format!("{days} days"),
    }
}
