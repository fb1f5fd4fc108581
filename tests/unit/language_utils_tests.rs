/*!
 * Tests for per-line language classification
 */

use biscript::language_utils::{contains_cjk, contains_latin, is_english_line};

/// Test English classification for plain Latin lines
#[test]
fn test_is_english_line_withLatinOnly_shouldBeEnglish() {
    assert!(is_english_line("Hello world."));
    assert!(is_english_line("it's 5 o'clock!"));
}

/// Test that CJK lines are not English
#[test]
fn test_is_english_line_withCjkOnly_shouldNotBeEnglish() {
    assert!(!is_english_line("你好世界"));
    assert!(!is_english_line("再見。"));
}

/// Test that mixed Latin/CJK lines fall on the Chinese side
#[test]
fn test_is_english_line_withMixedScripts_shouldNotBeEnglish() {
    assert!(!is_english_line("OK我知道"));
    assert!(!is_english_line("我有一個plan"));
}

/// Test that lines without any Latin letter are not English
#[test]
fn test_is_english_line_withoutLatinLetters_shouldNotBeEnglish() {
    assert!(!is_english_line("12345"));
    assert!(!is_english_line("... !!"));
    assert!(!is_english_line(""));
}

/// Test the CJK range boundaries (U+4E00 and U+9FFF inclusive)
#[test]
fn test_contains_cjk_withRangeBoundaries_shouldMatchInclusive() {
    assert!(contains_cjk("\u{4e00}"));
    assert!(contains_cjk("\u{9fff}"));
    // Just outside the block on either side
    assert!(!contains_cjk("\u{4dff}"));
    assert!(!contains_cjk("\u{a000}"));
}

/// Test Latin detection ignores accented non-ASCII letters
#[test]
fn test_contains_latin_withAsciiLettersOnly_shouldMatchAsciiRange() {
    assert!(contains_latin("abc"));
    assert!(contains_latin("Z"));
    assert!(!contains_latin("123"));
    // The heuristic deliberately checks ASCII letters only
    assert!(!contains_latin("éàü"));
}
