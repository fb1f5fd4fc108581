/// Language classification utilities
///
/// This module provides the per-line language heuristic used by the cue
/// parser: a line is English when it contains at least one Latin letter and
/// no CJK Unified Ideograph, otherwise it is treated as Chinese.

/// Check whether a character falls in the CJK Unified Ideographs block
/// (U+4E00..U+9FFF)
pub fn is_cjk_char(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Check whether a line contains at least one CJK ideograph
pub fn contains_cjk(line: &str) -> bool {
    line.chars().any(is_cjk_char)
}

/// Check whether a line contains at least one Latin letter
pub fn contains_latin(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_alphabetic())
}

/// Classify a content line as English
///
/// A line qualifies when it has at least one Latin letter and no CJK
/// ideograph. Everything else (including digits-only or punctuation-only
/// lines) counts as Chinese; the cue parser never sees such lines because
/// index and timing lines are filtered out beforehand.
pub fn is_english_line(line: &str) -> bool {
    contains_latin(line) && !contains_cjk(line)
}
