/*!
 * Common test utilities for the biscript test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small bilingual SRT document with two cues forming one sentence
/// and a third stand-alone cue
pub fn bilingual_srt() -> &'static str {
    "1\n\
     00:00:01,000 --> 00:00:02,000\n\
     We have to leave\n\
     我們得走了\n\
     \n\
     2\n\
     00:00:02,500 --> 00:00:03,500\n\
     before it gets dark.\n\
     在天黑之前\n\
     \n\
     3\n\
     00:00:04,000 --> 00:00:05,000\n\
     Hurry up!\n\
     快點\n"
}

/// A minimal bilingual ASS document with two dialogue events
pub fn bilingual_ass() -> &'static str {
    "[Script Info]\n\
     Title: test\n\
     ScriptType: v4.00+\n\
     \n\
     [Events]\n\
     Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n\
     Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,Hello there.\\N你好\n\
     Dialogue: 0,0:00:03.00,0:00:04.00,Default,,0,0,0,,Goodbye.\\N再見\n"
}
