use ferrous_opencc::OpenCC;
use ferrous_opencc::config::BuiltinConfig;
use log::error;
use once_cell::sync::Lazy;

// @module: Simplified-to-Traditional Chinese script conversion

// @const: Process-wide converter, initialized once and read-only afterwards
static SHARED_CONVERTER: Lazy<ChineseConverter> = Lazy::new(ChineseConverter::new);

/// Simplified → Traditional Chinese converter
///
/// Wraps an OpenCC instance built from the builtin s2t configuration. The
/// dictionaries are loaded once; the converter is immutable afterwards and
/// safe to share across threads. When the OpenCC tables cannot be loaded the
/// converter degrades to passing text through unchanged, so a broken
/// dictionary never takes the whole pipeline down.
pub struct ChineseConverter {
    opencc: Option<OpenCC>,
}

impl ChineseConverter {
    /// Build a converter from the builtin s2t configuration
    pub fn new() -> Self {
        let opencc = match OpenCC::from_config(BuiltinConfig::S2t) {
            Ok(cc) => Some(cc),
            Err(e) => {
                error!("Failed to initialize OpenCC s2t converter: {}", e);
                None
            }
        };
        ChineseConverter { opencc }
    }

    /// Shared process-wide instance
    pub fn shared() -> &'static ChineseConverter {
        &SHARED_CONVERTER
    }

    /// Convert Simplified Chinese text to Traditional script
    ///
    /// Returns the input unchanged when the converter failed to initialize.
    pub fn convert(&self, text: &str) -> String {
        match &self.opencc {
            Some(cc) => cc.convert(text),
            None => text.to_string(),
        }
    }
}

impl Default for ChineseConverter {
    fn default() -> Self {
        Self::new()
    }
}
