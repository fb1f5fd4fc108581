/*!
 * # biscript - Bilingual Subtitle Script Extractor
 *
 * A Rust library for turning English/Chinese subtitle files into readable
 * bilingual scripts.
 *
 * ## Features
 *
 * - Parse SRT subtitle files and normalize ASS documents into cue blocks
 * - Best-effort byte encoding detection for mis-encoded subtitle files
 * - Per-line English/Chinese classification
 * - Simplified → Traditional Chinese conversion (OpenCC s2t)
 * - Sentence-boundary merging of fragmented cues into full sentences
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `encoding_detector`: Byte decoding with encoding detection
 * - `ass_converter`: ASS document → cue-block text normalization
 * - `subtitle_processor`: Cue-block parsing and the pipeline entry point
 * - `script_builder`: Sentence-boundary merging of bilingual pairs
 * - `chinese_conversion`: Shared Simplified→Traditional converter
 * - `language_utils`: Per-line language classification heuristic
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod ass_converter;
pub mod chinese_conversion;
pub mod encoding_detector;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod script_builder;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use chinese_conversion::ChineseConverter;
pub use errors::{AppError, SubtitleError};
pub use script_builder::build_script;
pub use subtitle_processor::{process_subtitle, LanguagePair};
