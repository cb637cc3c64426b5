//! Small pure formatting helpers

/// Render a fraction in [0, 1] as a fixed-width bar
///
/// # Examples
/// ```
/// use adversarial_wordle::output::formatters::rate_bar;
///
/// assert_eq!(rate_bar(0.5, 4), "██░░");
/// assert_eq!(rate_bar(0.0, 4), "░░░░");
/// ```
#[must_use]
pub fn rate_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(width.saturating_sub(filled))
    )
}

/// Format a fraction in [0, 1] as a percentage
#[must_use]
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_bar_extremes() {
        assert_eq!(rate_bar(0.0, 10), "░".repeat(10));
        assert_eq!(rate_bar(1.0, 10), "█".repeat(10));
    }

    #[test]
    fn rate_bar_clamps_out_of_range() {
        assert_eq!(rate_bar(-0.5, 4), "░░░░");
        assert_eq!(rate_bar(1.5, 4), "████");
    }

    #[test]
    fn rate_bar_rounds() {
        assert_eq!(rate_bar(0.49, 2), "█░");
        assert_eq!(rate_bar(0.76, 2), "██");
    }

    #[test]
    fn percent_formats_one_decimal() {
        assert_eq!(percent(0.5), "50.0%");
        assert_eq!(percent(0.123), "12.3%");
        assert_eq!(percent(1.0), "100.0%");
    }
}
