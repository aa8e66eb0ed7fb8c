//! Config files and CLI flags say "10M" or "250ms" but the generation loop
//! counts raw bytes and `Duration`s; these helpers bridge that gap.

use std::time::Duration;

/// Parses "512", "4K", "10MB", "1G" (binary multiples) into bytes.
#[must_use]
pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier): (&str, f64) = if s.ends_with("GB") || s.ends_with('G') {
        (
            s.trim_end_matches("GB").trim_end_matches('G'),
            1024.0 * 1024.0 * 1024.0,
        )
    } else if s.ends_with("MB") || s.ends_with('M') {
        (
            s.trim_end_matches("MB").trim_end_matches('M'),
            1024.0 * 1024.0,
        )
    } else if s.ends_with("KB") || s.ends_with('K') {
        (s.trim_end_matches("KB").trim_end_matches('K'), 1024.0)
    } else {
        (s.trim_end_matches('B'), 1.0)
    };

    let n = num_str.trim().parse::<f64>().ok()?;
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let result = (n * multiplier) as u64;
    Some(result)
}

/// Human-readable byte count for run summaries.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let bytes_f = bytes as f64;

    if bytes >= 1024 * 1024 * 1024 {
        format!("{:.2} GB", bytes_f / (1024.0 * 1024.0 * 1024.0))
    } else if bytes >= 1024 * 1024 {
        format!("{:.2} MB", bytes_f / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.2} KB", bytes_f / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

/// Parses "250ms", "1.5s", "2m", "1h". A bare number is seconds.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();
    if let Some(ms) = s.strip_suffix("ms") {
        let n = ms.trim().parse::<f64>().ok()?;
        return Duration::try_from_secs_f64(n / 1000.0).ok();
    }
    let (num_str, unit_secs): (&str, f64) = if let Some(n) = s.strip_suffix('s') {
        (n, 1.0)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60.0)
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 3600.0)
    } else {
        (s.as_str(), 1.0)
    };

    let n = num_str.trim().parse::<f64>().ok()?;
    Duration::try_from_secs_f64(n * unit_secs).ok()
}
