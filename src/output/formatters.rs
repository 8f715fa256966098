//! Formatting utilities for terminal output

use crate::core::Feedback;
use colored::{ColoredString, Colorize};

/// Marker for a correct symbol in the correct position
#[must_use]
pub fn exact_peg() -> ColoredString {
    "●".bright_red()
}

/// Marker for a correct symbol in the wrong position
#[must_use]
pub fn partial_peg() -> ColoredString {
    "○".white()
}

/// Format feedback as pegs: exact matches first, then partial matches
#[must_use]
pub fn clue_markers(feedback: Feedback) -> String {
    let exact = (0..feedback.exact()).map(|_| exact_peg().to_string());
    let partial = (0..feedback.partial()).map(|_| partial_peg().to_string());
    exact.chain(partial).collect::<Vec<_>>().join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clue_markers_counts() {
        let markers = clue_markers(Feedback::new(2, 2));
        assert_eq!(markers.matches('●').count(), 2);
        assert_eq!(markers.matches('○').count(), 2);
    }

    #[test]
    fn clue_markers_exact_before_partial() {
        let markers = clue_markers(Feedback::new(1, 1));
        let exact_at = markers.find('●').unwrap();
        let partial_at = markers.find('○').unwrap();
        assert!(exact_at < partial_at);
    }

    #[test]
    fn clue_markers_empty() {
        assert_eq!(clue_markers(Feedback::new(0, 0)), "");
    }

    #[test]
    fn clue_markers_win() {
        let markers = clue_markers(Feedback::WIN);
        assert_eq!(markers.matches('●').count(), 4);
        assert!(!markers.contains('○'));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
