//! Line normalizer — the first pipeline stage.
//!
//! Splits raw text into an ordered sequence of trimmed lines, 1:1 with the
//! input. Blank lines are kept as empty strings: downstream stages use them
//! as entry boundaries, so indices into this sequence are stable.

/// Splits `text` on `\n` and trims every line.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| line.trim().to_string()).collect()
}
