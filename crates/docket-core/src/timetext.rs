//! Relative-time and duration labels.
//!
//! Pure helpers, deterministic over the instants the caller supplies.
//! They are injected into notification messages and timeline labels and
//! never consult the system clock.

use chrono::{DateTime, Utc};

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Human label for the time remaining until `target`.
///
/// `"Overdue"` when the target has passed, `"now"` under one minute,
/// otherwise the largest applicable unit: `"in 3 days"`, `"in 17 hours"`,
/// `"in 5 minutes"`.
pub fn time_until(now: DateTime<Utc>, target: DateTime<Utc>) -> String {
    let diff = target - now;
    if diff < chrono::Duration::zero() {
        return "Overdue".to_string();
    }
    let minutes = diff.num_minutes();
    if minutes < 1 {
        return "now".to_string();
    }
    let days = diff.num_days();
    if days >= 1 {
        return format!("in {}", plural(days, "day"));
    }
    let hours = diff.num_hours();
    if hours >= 1 {
        return format!("in {}", plural(hours, "hour"));
    }
    format!("in {}", plural(minutes, "minute"))
}

/// Human label for the time elapsed since `past`.
///
/// `"Just now"` under one minute, otherwise the largest applicable unit:
/// `"2 days ago"`, `"1 hour ago"`, `"12 minutes ago"`.
pub fn time_ago(now: DateTime<Utc>, past: DateTime<Utc>) -> String {
    let diff = now - past;
    let minutes = diff.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    let days = diff.num_days();
    if days >= 1 {
        return format!("{} ago", plural(days, "day"));
    }
    let hours = diff.num_hours();
    if hours >= 1 {
        return format!("{} ago", plural(hours, "hour"));
    }
    format!("{} ago", plural(minutes, "minute"))
}

/// Compact duration label: `"1h 30m"` when hours are present, else
/// `"45 minutes"`.
pub fn duration_label(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let minutes = (end - start).num_minutes().max(0);
    let hours = minutes / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else {
        format!("{} minutes", minutes)
    }
}
