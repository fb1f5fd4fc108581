/*!
 * End-to-end tests for the subtitle-to-script pipeline boundary
 */

use biscript::errors::SubtitleError;
use biscript::subtitle_processor::process_subtitle;
use crate::common;

/// Test the full SRT pipeline: decode, parse, merge
#[test]
fn test_process_subtitle_withBilingualSrt_shouldEmitMergedScript() {
    let script = process_subtitle(common::bilingual_srt().as_bytes(), "movie.srt").unwrap();

    assert_eq!(
        script,
        "We have to leave before it gets dark.\n我們得走了 在天黑之前\n\nHurry up!\n快點\n"
    );
}

/// Test the full ASS pipeline: decode, normalize, parse, merge
#[test]
fn test_process_subtitle_withBilingualAss_shouldEmitMergedScript() {
    let script = process_subtitle(common::bilingual_ass().as_bytes(), "movie.ass").unwrap();

    assert_eq!(script, "Hello there.\n你好\n\nGoodbye.\n再見\n");
}

/// Test case-insensitive extension acceptance
#[test]
fn test_process_subtitle_withUppercaseExtensions_shouldAccept() {
    let bytes = common::bilingual_srt().as_bytes();

    assert!(process_subtitle(bytes, "movie.SRT").is_ok());
    assert!(process_subtitle(bytes, "MOVIE.Srt").is_ok());
    assert!(process_subtitle(common::bilingual_ass().as_bytes(), "movie.ASS").is_ok());
}

/// Test rejection of unsupported extensions
#[test]
fn test_process_subtitle_withUnsupportedExtension_shouldReturnUnsupportedFormat() {
    let result = process_subtitle(b"whatever", "movie.txt");

    match result {
        Err(SubtitleError::UnsupportedFormat { extension }) => assert_eq!(extension, "txt"),
        other => panic!("expected UnsupportedFormat, got {:?}", other.map(|_| ())),
    }
}

/// Test rejection of filenames without any extension
#[test]
fn test_process_subtitle_withoutExtension_shouldReturnUnsupportedFormat() {
    let result = process_subtitle(b"whatever", "movie");

    assert!(matches!(
        result,
        Err(SubtitleError::UnsupportedFormat { extension }) if extension.is_empty()
    ));
}

/// Test that malformed ASS input yields a typed error, not partial output
#[test]
fn test_process_subtitle_withMalformedAss_shouldReturnMalformedInput() {
    let result = process_subtitle(b"garbage bytes, definitely not ASS", "movie.ass");

    assert!(matches!(result, Err(SubtitleError::MalformedInput(_))));
}

/// Test that overflowing ASS timestamps fail as typed errors at the boundary
#[test]
fn test_process_subtitle_withOverflowingAssTimestamp_shouldReturnMalformedInput() {
    let doc = "[Events]\nDialogue: 0,99999999999999:00:00.00,0:00:02.00,Default,,0,0,0,,text\n";

    let result = process_subtitle(doc.as_bytes(), "movie.ass");
    assert!(matches!(result, Err(SubtitleError::MalformedInput(_))));
}

/// Test that identical input yields byte-identical output across calls
#[test]
fn test_process_subtitle_withRepeatedCalls_shouldBeIdempotent() {
    let bytes = common::bilingual_srt().as_bytes();

    let first = process_subtitle(bytes, "movie.srt").unwrap();
    let second = process_subtitle(bytes, "movie.srt").unwrap();

    assert_eq!(first, second);
}

/// Test that an SRT with no bilingual blocks yields an empty script
#[test]
fn test_process_subtitle_withMonolingualSrt_shouldEmitEmptyScript() {
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nEnglish only here.\n";

    let script = process_subtitle(srt.as_bytes(), "movie.srt").unwrap();
    assert_eq!(script, "");
}

/// Test that invalid UTF-8 bytes never crash the pipeline
#[test]
fn test_process_subtitle_withMangledBytes_shouldNotPanic() {
    let mut bytes = common::bilingual_srt().as_bytes().to_vec();
    bytes.insert(10, 0xff);

    // Best-effort decoding: the call must return, success or typed error.
    let _ = process_subtitle(&bytes, "movie.srt");
}
