//! Display helpers for movie metadata.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Credits;

/// Year component of a `YYYY-MM-DD` release date, if present.
pub fn release_year(release_date: &str) -> Option<&str> {
    release_date
        .split('-')
        .next()
        .filter(|year| !year.is_empty())
}

/// Popularity score as the provider's web UI shows it: one decimal place.
pub fn format_popularity(popularity: f64) -> String {
    format!("{:.1}", popularity)
}

/// Runtime in minutes as "2h 46m" / "46m".
pub fn format_runtime(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{}m", rest)
    }
}

/// Truncate `text` to `max_width` terminal cells, appending an ellipsis when
/// something was cut. Width-aware so CJK titles do not overflow their column.
pub fn ellipsize(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// The director's name from the crew list, if credited.
pub fn director(credits: &Credits) -> Option<&str> {
    credits
        .crew
        .iter()
        .find(|member| member.job == "Director")
        .map(|member| member.name.as_str())
}

/// Top-billed cast, at most `limit` names in credit order.
pub fn top_billed(credits: &Credits, limit: usize) -> Vec<&str> {
    credits
        .cast
        .iter()
        .take(limit)
        .map(|member| member.name.as_str())
        .collect()
}
