//! libabugida-core
//!
//! Script-agnostic prediction core shared by language crates (libsinhala).
//! Targets scripts that write a base consonant followed by separately encoded
//! vowel marks, and predicts either whole words or the vowel marks likely to
//! follow the consonant just typed.
//!
//! All lookups run against immutable tables loaded once at startup. Loading
//! is the only fallible step; prediction never fails and narrows to an empty
//! list when nothing matches.
//!
//! Public API:
//! - `Lexicon` - Ordered word list (file order is rank)
//! - `PrefixIndex` - Character trie answering "first N words with this prefix"
//! - `DiacriticSet` / `DiacriticClassifier` - Combining mark membership
//! - `last_base_consonant` - Backward scan skipping diacritics
//! - `VowelTable` / `VowelPredictor` - Pair table with single-consonant fallback
//! - `WordPredictor` - Bounded prefix completion
//! - `Predictor` - Facade combining both predictors
//! - `SharedPredictor` - Atomic hot-swap of a fully built `Predictor`
//! - `Tables` - Loading from text/JSON and bincode snapshots
//! - `Config` - Limits and input handling flags
use serde::{Deserialize, Serialize};

pub mod diacritic;
pub use diacritic::{DiacriticClassifier, DiacriticSet};

pub mod scanner;
pub use scanner::{last_base_consonant, last_char, strip_last_char};

pub mod trie;
pub use trie::PrefixIndex;

pub mod lexicon;
pub use lexicon::Lexicon;

pub mod vowel;
pub use vowel::{VowelPrediction, VowelPredictor, VowelTable, VowelTier};

pub mod word;
pub use word::WordPredictor;

pub mod tables;
pub use tables::Tables;

pub mod engine;
pub use engine::Predictor;

pub mod shared;
pub use shared::SharedPredictor;

/// Generic configuration for the prediction core.
///
/// Only language-agnostic fields live here. Language crates extend it
/// (data file names, default diacritics) in their own config type and flatten
/// this one into it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of word completions returned by `predict_word`.
    pub max_word_suggestions: usize,
    /// Maximum number of vowel suggestions from the pair table.
    pub max_vowel_suggestions: usize,
    /// Maximum number of vowel suggestions from the single-consonant table
    /// (used when no previous base consonant exists).
    pub max_fallback_suggestions: usize,
    /// NFC-normalize loaded data and incoming queries.
    /// Off by default: matching is exact on code points.
    pub normalize_input: bool,
    /// Extra characters treated as diacritics on top of the language set.
    pub extra_diacritics: Vec<char>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_word_suggestions: 5,
            max_vowel_suggestions: 10,
            max_fallback_suggestions: 10,
            normalize_input: false,
            extra_diacritics: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    use std::borrow::Cow;

    /// NFC-normalize a string. Whitespace is left untouched.
    pub fn nfc(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>()
    }

    /// NFC-normalize only when `enabled`, borrowing otherwise.
    pub fn maybe_nfc(s: &str, enabled: bool) -> Cow<'_, str> {
        if enabled {
            Cow::Owned(nfc(s))
        } else {
            Cow::Borrowed(s)
        }
    }

    /// Return the word currently being typed: the last space-separated token
    /// of the trimmed text, or "" for blank text.
    ///
    /// ```
    /// use libabugida_core::utils::last_word;
    ///
    /// assert_eq!(last_word("මම ගෙදර "), "ගෙදර");
    /// assert_eq!(last_word("   "), "");
    /// ```
    pub fn last_word(text: &str) -> &str {
        text.trim().rsplit(' ').next().unwrap_or("")
    }
}
