//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pool letters spaced and uppercased: `E H P R S Y Z`
#[must_use]
pub fn format_letters(key: &str) -> String {
    key.chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compact point table: `A1 C10 E3`
#[must_use]
pub fn format_points(letters: &[(char, u32)]) -> String {
    letters
        .iter()
        .map(|(letter, points)| format!("{}{points}", letter.to_ascii_uppercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Percentage of `value` in `max`, 0 when `max` is 0
#[must_use]
pub fn percent(value: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        f64::from(value) / f64::from(max) * 100.0
    }
}
