//! Formatting utilities for terminal output

use crate::core::Letter;

/// Space out a reveal string for display, `"g_t"` -> `"g _ t"`
#[must_use]
pub fn spaced_reveal(reveal: &str) -> String {
    let mut result = String::with_capacity(reveal.len() * 2);
    for (i, c) in reveal.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// One cell per allowed mistake, filled for each mistake made
#[must_use]
pub fn mistake_bar(mistakes: usize, max_mistakes: usize) -> String {
    let filled = mistakes.min(max_mistakes);
    format!("{}{}", "█".repeat(filled), "░".repeat(max_mistakes - filled))
}

/// Comma-separated letters, or a dash when there are none
#[must_use]
pub fn letter_list(letters: &[Letter]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
