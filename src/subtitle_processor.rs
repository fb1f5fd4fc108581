use once_cell::sync::Lazy;
use regex::Regex;
use log::debug;

use crate::ass_converter;
use crate::chinese_conversion::ChineseConverter;
use crate::encoding_detector;
use crate::errors::SubtitleError;
use crate::file_utils;
use crate::language_utils;
use crate::script_builder;

// @module: Cue-block parsing and the subtitle-to-script pipeline entry point

// @const: Blank-line separator between cue blocks (one or more blank lines)
static BLOCK_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

// @const: Inline markup tags like <i> or </font>
static MARKUP_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[^>]+>").unwrap());

/// One bilingual cue: the English and Chinese sides of a single cue block
///
/// Both sides are non-empty by construction; blocks carrying only one
/// language produce no pair at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    /// English content lines of the block, space-joined
    pub english: String,

    /// Chinese content lines of the block, converted to Traditional script
    /// and space-joined
    pub chinese: String,
}

impl LanguagePair {
    /// Creates a new pair - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(english: impl Into<String>, chinese: impl Into<String>) -> Self {
        LanguagePair {
            english: english.into(),
            chinese: chinese.into(),
        }
    }
}

/// Parse cue-block text into ordered bilingual pairs
///
/// Blocks are separated by one or more blank lines. Within a block, lines
/// are trimmed, markup tags stripped, and index/timing lines discarded; the
/// remaining content lines are classified per line. A block yields exactly
/// one pair when it has at least one English and at least one Chinese line:
/// all English lines merge into one string and all Chinese lines into the
/// other. Lines are never paired 1:1 within a block.
pub fn parse_cue_blocks(content: &str, converter: &ChineseConverter) -> Vec<LanguagePair> {
    let content = content.replace('\u{feff}', "");
    let mut pairs = Vec::new();

    for block in BLOCK_SEPARATOR_REGEX.split(content.trim()) {
        let lines: Vec<String> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| MARKUP_TAG_REGEX.replace_all(line, "").into_owned())
            .filter(|line| !is_index_line(line) && !line.contains("-->"))
            .collect();

        if lines.is_empty() {
            continue;
        }

        let english: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .filter(|line| language_utils::is_english_line(line))
            .collect();
        let chinese: Vec<String> = lines
            .iter()
            .filter(|line| !language_utils::is_english_line(line))
            .map(|line| converter.convert(line))
            .collect();

        // Blocks with only one language are dropped entirely; emitting a
        // half-empty pair would desynchronize the merged script.
        if !english.is_empty() && !chinese.is_empty() {
            pairs.push(LanguagePair {
                english: english.join(" "),
                chinese: chinese.join(" "),
            });
        }
    }

    pairs
}

/// Check whether a line is a bare cue index (digits only)
fn is_index_line(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

/// Process raw subtitle bytes into a bilingual script
///
/// This is the boundary exposed to the hosting layer. The filename decides
/// the format: `.srt` input is decoded and parsed directly, `.ass` input is
/// first normalized into cue-block text. Extensions are matched
/// case-insensitively on the substring after the final dot; anything else
/// (including a missing extension) is rejected before the pipeline runs.
pub fn process_subtitle(bytes: &[u8], filename: &str) -> Result<String, SubtitleError> {
    let extension = file_utils::extension_of(filename);

    let cue_text = match extension.as_str() {
        "srt" => encoding_detector::decode(bytes),
        "ass" => {
            let decoded = encoding_detector::decode(bytes);
            ass_converter::ass_to_cue_text(&decoded)?
        }
        _ => return Err(SubtitleError::UnsupportedFormat { extension }),
    };

    let pairs = parse_cue_blocks(&cue_text, ChineseConverter::shared());
    debug!("Extracted {} bilingual cue pairs from '{}'", pairs.len(), filename);

    Ok(script_builder::build_script(&pairs))
}
