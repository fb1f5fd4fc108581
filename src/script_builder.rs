use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle_processor::LanguagePair;

// @module: Sentence-boundary merging of bilingual cue pairs

// @const: Sentence-terminal punctuation at end of line
static SENTENCE_END_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.?!…]$").unwrap());

// @const: Runs of whitespace, collapsed during flush
static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Check whether an English cue line closes a sentence
///
/// A line ends a sentence when its trimmed form ends with `.`, `?`, `!`,
/// `…`, or the literal three-dot ellipsis. The test runs on the incoming
/// line alone, never on the accumulated buffer.
pub fn is_end_of_sentence(line: &str) -> bool {
    let trimmed = line.trim();
    SENTENCE_END_REGEX.is_match(trimmed) || trimmed.ends_with("...")
}

/// Collapse internal whitespace runs to single spaces and trim
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN_REGEX.replace_all(text, " ").trim().to_string()
}

/// Merge ordered bilingual pairs into the final script
///
/// Consecutive cues accumulate in two parallel buffers until the English
/// side of the latest cue ends a sentence; the buffers then flush as one
/// English line, one Chinese line, and a blank separator. Subtitles
/// routinely break sentences across cues, so this keeps multi-cue sentences
/// as single script lines. A trailing unterminated sentence flushes
/// unconditionally at end of input.
pub fn build_script(pairs: &[LanguagePair]) -> String {
    let mut script_lines: Vec<String> = Vec::new();
    let mut english_buffer: Vec<&str> = Vec::new();
    let mut chinese_buffer: Vec<&str> = Vec::new();

    let mut flush = |english: &mut Vec<&str>, chinese: &mut Vec<&str>| {
        script_lines.push(normalize_whitespace(&english.join(" ")));
        script_lines.push(normalize_whitespace(&chinese.join(" ")));
        script_lines.push(String::new());
        english.clear();
        chinese.clear();
    };

    for pair in pairs {
        english_buffer.push(&pair.english);
        chinese_buffer.push(&pair.chinese);

        if is_end_of_sentence(&pair.english) {
            flush(&mut english_buffer, &mut chinese_buffer);
        }
    }

    if !english_buffer.is_empty() {
        flush(&mut english_buffer, &mut chinese_buffer);
    }

    script_lines.join("\n")
}
