use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

// @module: Byte encoding detection and best-effort decoding

/// Strategy for guessing the byte encoding of a subtitle file.
///
/// Subtitle files in the wild are frequently mis-labelled or carry legacy
/// encodings (GBK, Big5, UTF-16 with BOM). The detection itself is a
/// statistical heuristic, so it lives behind this trait and tests can inject
/// a deterministic sniffer instead of relying on detection.
pub trait EncodingSniffer {
    /// Guess the most likely encoding for the given bytes
    fn sniff(&self, bytes: &[u8]) -> &'static Encoding;
}

/// Default sniffer backed by chardetng
#[derive(Debug, Default)]
pub struct ChardetSniffer;

impl EncodingSniffer for ChardetSniffer {
    fn sniff(&self, bytes: &[u8]) -> &'static Encoding {
        if bytes.is_empty() {
            return UTF_8;
        }
        let mut detector = EncodingDetector::new();
        detector.feed(bytes, true);
        // guess() falls back to windows-1252 for pure ASCII, which decodes
        // ASCII identically to UTF-8, so no special-casing is needed here.
        detector.guess(None, true)
    }
}

/// Decode raw subtitle bytes into text using the default sniffer
pub fn decode(bytes: &[u8]) -> String {
    decode_with(&ChardetSniffer, bytes)
}

/// Decode raw subtitle bytes into text with an explicit sniffer
///
/// A byte-order mark takes precedence over detection. Bytes that are invalid
/// for the chosen encoding are dropped rather than failing the decode, so
/// this function never errors: a mangled file yields degraded text, not a
/// refusal to process.
pub fn decode_with<S: EncodingSniffer>(sniffer: &S, bytes: &[u8]) -> String {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _bom_length)) => encoding,
        None => sniffer.sniff(bytes),
    };

    // decode() strips the BOM and substitutes malformed sequences with
    // U+FFFD; dropping those afterwards matches a lossy "ignore" decode.
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        text.replace('\u{fffd}', "")
    } else {
        text.into_owned()
    }
}
