use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

// @module: ASS document normalization into cue-block text

// @const: ASS timestamp (H:MM:SS.CC, centisecond precision)
static ASS_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d{2}):(\d{2})\.(\d{2})$").unwrap()
});

// @const: Inline override tags such as {\i1} or {\pos(10,10)}
static OVERRIDE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// One dialogue event extracted from an ASS document
#[derive(Debug, Clone)]
pub struct AssEvent {
    /// Start time in ms
    pub start_time_ms: u64,

    /// End time in ms
    pub end_time_ms: u64,

    /// Plain text lines after tag stripping and \N expansion
    pub text_lines: Vec<String>,
}

/// Parse an ASS document into its dialogue events
///
/// This is the only place that knows ASS syntax; everything downstream works
/// on the cue-block text produced by [`ass_to_cue_text`]. A document without
/// an `[Events]` section is rejected as malformed. `Comment` and other
/// non-dialogue event types are skipped. The standard field order is
/// assumed (the `Format:` line is not interpreted), matching how dedicated
/// ASS tooling treats files in practice.
pub fn parse_ass(text: &str) -> Result<Vec<AssEvent>, SubtitleError> {
    let mut events = Vec::new();
    let mut in_events_section = false;
    let mut saw_events_section = false;

    for (line_num, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim_start_matches('\u{feff}').trim();

        if line.starts_with('[') && line.ends_with(']') {
            in_events_section = line.eq_ignore_ascii_case("[events]");
            saw_events_section |= in_events_section;
            continue;
        }

        if !in_events_section {
            continue;
        }

        let Some(fields) = line.strip_prefix("Dialogue:") else {
            // Format:, Comment:, Picture: and friends carry no script text
            continue;
        };

        // Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect,
        // Text - the text field may itself contain commas, hence splitn.
        let parts: Vec<&str> = fields.splitn(10, ',').collect();
        if parts.len() < 10 {
            return Err(SubtitleError::MalformedInput(format!(
                "Dialogue line {} has {} fields, expected 10",
                line_num + 1,
                parts.len()
            )));
        }

        let start_time_ms = parse_ass_time(parts[1].trim(), line_num + 1)?;
        let end_time_ms = parse_ass_time(parts[2].trim(), line_num + 1)?;
        let text_lines = clean_event_text(parts[9]);

        if text_lines.is_empty() {
            continue;
        }

        events.push(AssEvent {
            start_time_ms,
            end_time_ms,
            text_lines,
        });
    }

    if !saw_events_section {
        return Err(SubtitleError::MalformedInput(
            "no [Events] section found".to_string(),
        ));
    }

    // Dialogue lines are not required to appear in chronological order
    events.sort_by_key(|event| event.start_time_ms);

    Ok(events)
}

/// Re-render an ASS document as cue-block (SRT-like) text
///
/// Events become sequentially numbered cue blocks in start-time order:
/// index line, timing line, text line(s), blank separator.
pub fn ass_to_cue_text(text: &str) -> Result<String, SubtitleError> {
    let events = parse_ass(text)?;

    let mut output = String::new();
    for (index, event) in events.iter().enumerate() {
        output.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            format_timestamp(event.start_time_ms),
            format_timestamp(event.end_time_ms),
            event.text_lines.join("\n")
        ));
    }

    Ok(output)
}

/// Parse an ASS timestamp (H:MM:SS.CC) to milliseconds
fn parse_ass_time(time_str: &str, line_num: usize) -> Result<u64, SubtitleError> {
    let caps = ASS_TIME_REGEX.captures(time_str).ok_or_else(|| {
        SubtitleError::MalformedInput(format!(
            "invalid ASS timestamp '{}' on line {}",
            time_str, line_num
        ))
    })?;

    // The regex only admits digits, but the hour field is unbounded, so an
    // absurd value must come back as a malformed timestamp, not an overflow.
    let hours: u64 = caps[1].parse().map_err(|_| overflow_error(time_str, line_num))?;
    let minutes: u64 = caps[2].parse().unwrap_or(0);
    let seconds: u64 = caps[3].parse().unwrap_or(0);
    let centis: u64 = caps[4].parse().unwrap_or(0);

    hours
        .checked_mul(3_600_000)
        .and_then(|ms| ms.checked_add(minutes * 60_000 + seconds * 1_000 + centis * 10))
        .ok_or_else(|| overflow_error(time_str, line_num))
}

fn overflow_error(time_str: &str, line_num: usize) -> SubtitleError {
    SubtitleError::MalformedInput(format!(
        "ASS timestamp '{}' on line {} is out of range",
        time_str, line_num
    ))
}

/// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Strip override tags and expand ASS escapes into plain text lines
fn clean_event_text(text: &str) -> Vec<String> {
    let without_tags = OVERRIDE_TAG_REGEX.replace_all(text, "");
    let expanded = without_tags
        .replace("\\N", "\n")
        .replace("\\n", "\n")
        .replace("\\h", " ");

    expanded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
