/*!
 * Integration tests for the file/folder extraction workflow
 */

use anyhow::Result;
use std::fs;

use biscript::app_config::Config;
use biscript::app_controller::Controller;
use crate::common;

/// Test single-file extraction writes the script next to the input
#[test]
fn test_run_withBilingualSrtFile_shouldWriteScriptFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "movie.srt", common::bilingual_srt())?;

    let controller = Controller::new_for_test()?;
    controller.run(input, temp_dir.path().to_path_buf(), false)?;

    let output = temp_dir.path().join("movie.txt");
    let script = fs::read_to_string(&output)?;
    assert!(script.starts_with("We have to leave before it gets dark."));
    assert!(script.contains("快點"));
    Ok(())
}

/// Test that existing outputs are preserved unless forced
#[test]
fn test_run_withExistingOutput_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "movie.srt", common::bilingual_srt())?;
    let output = common::create_test_file(temp_dir.path(), "movie.txt", "sentinel")?;

    let controller = Controller::new_for_test()?;

    controller.run(input.clone(), temp_dir.path().to_path_buf(), false)?;
    assert_eq!(fs::read_to_string(&output)?, "sentinel");

    controller.run(input, temp_dir.path().to_path_buf(), true)?;
    assert_ne!(fs::read_to_string(&output)?, "sentinel");
    Ok(())
}

/// Test that the configured size cap rejects oversized files
#[test]
fn test_run_withOversizedFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "movie.srt", common::bilingual_srt())?;

    let mut config = Config::default();
    config.max_file_size_bytes = 8;
    let controller = Controller::with_config(config)?;

    let result = controller.run(input, temp_dir.path().to_path_buf(), false);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("too large"));
    Ok(())
}

/// Test that a missing input file is reported as an error
#[test]
fn test_run_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::new_for_test()?;

    let result = controller.run(
        temp_dir.path().join("absent.srt"),
        temp_dir.path().to_path_buf(),
        false,
    );
    assert!(result.is_err());
    Ok(())
}

/// Test folder processing over a mixed directory tree
#[test]
fn test_run_folder_withMixedFiles_shouldProcessAllSubtitles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();

    common::create_test_file(dir, "one.srt", common::bilingual_srt())?;
    common::create_test_file(dir, "two.ass", common::bilingual_ass())?;
    common::create_test_file(dir, "ignored.txt", "not a subtitle")?;

    let controller = Controller::new_for_test()?;
    controller.run_folder(dir.to_path_buf(), false)?;

    assert!(dir.join("one.txt").exists());
    assert!(dir.join("two.txt").exists());
    assert!(!dir.join("ignored.txt.txt").exists());
    Ok(())
}

/// Test that a folder run survives individual malformed files
#[test]
fn test_run_folder_withMalformedAss_shouldContinuePastFailures() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();

    common::create_test_file(dir, "bad.ass", "not an ASS document")?;
    common::create_test_file(dir, "good.srt", common::bilingual_srt())?;

    let controller = Controller::new_for_test()?;
    controller.run_folder(dir.to_path_buf(), false)?;

    assert!(dir.join("good.txt").exists());
    assert!(!dir.join("bad.txt").exists());
    Ok(())
}

/// Test that an invalid configuration is rejected at construction
#[test]
fn test_with_config_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.output_extension = String::new();

    assert!(Controller::with_config(config).is_err());
}
