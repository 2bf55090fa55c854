//! Display helpers for formatting library records.
//!
//! Pure string formatting shared by every frontend, so favorites, search
//! results and log history read the same everywhere.

use gameboxd_catalog::types::{Platform, Rating};

// ---------------------------------------------------------------------------
// Game details
// ---------------------------------------------------------------------------

/// Release date, or a fixed message when the catalog had none.
pub fn release_date_label(release_date: Option<&str>) -> String {
    match release_date {
        Some(date) if !date.trim().is_empty() => date.to_string(),
        _ => "Release date not available".into(),
    }
}

/// `Genres: a, b`, or `None` when there is nothing to show.
pub fn genres_label(genres: &[String]) -> Option<String> {
    if genres.is_empty() {
        None
    } else {
        Some(format!("Genres: {}", genres.join(", ")))
    }
}

/// Comma-separated platform names, or `None` when there are none.
pub fn platforms_label(platforms: &[Platform]) -> Option<String> {
    if platforms.is_empty() {
        return None;
    }
    let names: Vec<&str> = platforms.iter().map(|p| p.name.as_str()).collect();
    Some(format!("Platforms: {}", names.join(", ")))
}

/// Shorten `text` to at most `max_chars` characters, ending in `...` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// Five-character star bar, e.g. `★★★☆☆` for a 3.
pub fn rating_stars(rating: Rating) -> String {
    let filled = usize::from(rating.value());
    let empty = usize::from(Rating::MAX) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Average rating with one decimal, or `-` when nothing has been rated.
pub fn average_label(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("{:.1}/{}", avg, Rating::MAX),
        None => "-".into(),
    }
}
