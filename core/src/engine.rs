// core/src/engine.rs
//
// Prediction facade combining the word and vowel predictors under one config.
// Language crates build a `Predictor` from loaded `Tables` plus their
// diacritic set and hand it to callers (CLI, services) behind an `Arc`.

use anyhow::Result;

use crate::diacritic::DiacriticSet;
use crate::tables::Tables;
use crate::utils;
use crate::vowel::{VowelPrediction, VowelPredictor, VowelTable};
use crate::word::WordPredictor;
use crate::{Config, Lexicon};

/// Word and vowel-mark prediction over immutable tables.
///
/// Every method is a pure read, so a `Predictor` can be shared between
/// threads without locking.
#[derive(Debug, Clone)]
pub struct Predictor {
    words: WordPredictor,
    vowels: VowelPredictor,
    config: Config,
}

impl Predictor {
    /// Build a predictor.
    ///
    /// `config.extra_diacritics` are added to `diacritics`. When
    /// `config.normalize_input` is set, all table contents are NFC-normalized
    /// here, once, and queries are normalized on the way in. That step is
    /// the only failure: two table keys with the same NFC form.
    pub fn new(tables: Tables, mut diacritics: DiacriticSet, config: Config) -> Result<Self> {
        let tables = if config.normalize_input {
            tables.normalized()?
        } else {
            tables
        };
        diacritics.extend(config.extra_diacritics.iter().copied());

        let Tables {
            lexicon,
            bigrams,
            pairs,
        } = tables;
        let words = WordPredictor::new(lexicon, config.max_word_suggestions);
        let vowels = VowelPredictor::new(bigrams, pairs, diacritics)
            .with_limits(config.max_vowel_suggestions, config.max_fallback_suggestions);

        tracing::info!(
            words = words.lexicon().len(),
            bigram_keys = vowels.bigrams().len(),
            pair_keys = vowels.pairs().len(),
            diacritics = vowels.diacritics().len(),
            "predictor ready"
        );

        Ok(Self {
            words,
            vowels,
            config,
        })
    }

    /// Word completions for `prefix`, in lexicon order, at most
    /// `max_word_suggestions` of them.
    ///
    /// ```
    /// use libabugida_core::{Config, DiacriticSet, Lexicon, Predictor, Tables, VowelTable};
    ///
    /// let tables = Tables::new(
    ///     Lexicon::from_words(["apple", "application", "apt", "banana"]),
    ///     VowelTable::new(),
    ///     VowelTable::new(),
    /// );
    /// let p = Predictor::new(tables, DiacriticSet::new(), Config::default()).unwrap();
    /// assert_eq!(p.predict_word("ap"), vec!["apple", "application", "apt"]);
    /// ```
    pub fn predict_word(&self, prefix: &str) -> Vec<String> {
        let prefix = utils::maybe_nfc(prefix, self.config.normalize_input);
        let out = self.words.predict(&prefix);
        tracing::trace!(prefix = %prefix, hits = out.len(), "word prediction");
        out
    }

    /// Vowel-mark suggestions for the consonant just typed.
    ///
    /// `prefix` is the current word including that consonant; `current` is
    /// the consonant (pass "" to use the last character of `prefix`).
    pub fn predict_vowel(&self, prefix: &str, current: &str) -> Vec<String> {
        self.predict_vowel_detailed(prefix, current)
            .map(|p| p.suggestions)
            .unwrap_or_default()
    }

    /// Vowel prediction with the tier and lookup key. `None` for empty prefix.
    pub fn predict_vowel_detailed(&self, prefix: &str, current: &str) -> Option<VowelPrediction> {
        let normalize = self.config.normalize_input;
        let prefix = utils::maybe_nfc(prefix, normalize);
        let current = utils::maybe_nfc(current, normalize);
        self.vowels.predict_detailed(&prefix, &current)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.words.lexicon()
    }

    pub fn bigrams(&self) -> &VowelTable {
        self.vowels.bigrams()
    }

    pub fn pairs(&self) -> &VowelTable {
        self.vowels.pairs()
    }

    pub fn diacritics(&self) -> &DiacriticSet {
        self.vowels.diacritics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VowelTier;

    fn thai_tables() -> Tables {
        let mut bigrams = VowelTable::new();
        bigrams.insert("ต", ["ะ", "ิ", "ุ"]);
        let mut pairs = VowelTable::new();
        pairs.insert("กต", ["ะ", "า"]);
        Tables::new(Lexicon::from_words(["กิต", "กา"]), bigrams, pairs)
    }

    fn thai_marks() -> DiacriticSet {
        DiacriticSet::from_chars(['ิ', 'ี'])
    }

    #[test]
    fn both_operations() {
        let p = Predictor::new(thai_tables(), thai_marks(), Config::default()).unwrap();
        assert_eq!(p.predict_word("ก"), vec!["กิต", "กา"]);
        assert!(p.predict_word("").is_empty());
        assert_eq!(p.predict_vowel("กิต", "ต"), vec!["ะ", "า"]);
        assert_eq!(p.predict_vowel("ต", ""), vec!["ะ", "ิ", "ุ"]);
        assert!(p.predict_vowel("", "ต").is_empty());
    }

    #[test]
    fn config_limits_apply() {
        let cfg = Config {
            max_word_suggestions: 1,
            max_fallback_suggestions: 2,
            max_vowel_suggestions: 1,
            ..Config::default()
        };
        let p = Predictor::new(thai_tables(), thai_marks(), cfg).unwrap();
        assert_eq!(p.predict_word("ก"), vec!["กิต"]);
        assert_eq!(p.predict_vowel("ต", ""), vec!["ะ", "ิ"]);
        assert_eq!(p.predict_vowel("กิต", "ต"), vec!["ะ"]);
    }

    #[test]
    fn extra_diacritics_from_config() {
        // Without "x" as a mark, "x" is the previous base consonant.
        let p = Predictor::new(thai_tables(), thai_marks(), Config::default()).unwrap();
        let d = p.predict_vowel_detailed("xต", "ต").unwrap();
        assert_eq!(d.tier, VowelTier::Pair);

        let cfg = Config {
            extra_diacritics: vec!['x'],
            ..Config::default()
        };
        let p = Predictor::new(thai_tables(), thai_marks(), cfg).unwrap();
        let d = p.predict_vowel_detailed("xต", "ต").unwrap();
        assert_eq!(d.tier, VowelTier::Bigram);
        assert_eq!(d.suggestions, vec!["ะ", "ิ", "ุ"]);
    }

    #[test]
    fn normalize_input_matches_decomposed_queries() {
        let tables = Tables::new(
            Lexicon::from_words(["ක\u{0DDC}ළඹ"]),
            VowelTable::new(),
            VowelTable::new(),
        );

        let exact =
            Predictor::new(tables.clone(), DiacriticSet::new(), Config::default()).unwrap();
        assert!(exact.predict_word("ක\u{0DD9}\u{0DCF}").is_empty());

        let cfg = Config {
            normalize_input: true,
            ..Config::default()
        };
        let p = Predictor::new(tables, DiacriticSet::new(), cfg).unwrap();
        assert_eq!(p.predict_word("ක\u{0DD9}\u{0DCF}"), vec!["ක\u{0DDC}ළඹ"]);
    }

    #[test]
    fn normalize_input_rejects_keys_sharing_nfc_form() {
        let mut bigrams = VowelTable::new();
        bigrams.insert("\u{0DDC}", ["composed"]);
        bigrams.insert("\u{0DD9}\u{0DCF}", ["decomposed"]);
        let tables = Tables::new(Lexicon::new(), bigrams, VowelTable::new());

        // Exact matching keeps both keys apart.
        assert!(Predictor::new(tables.clone(), DiacriticSet::new(), Config::default()).is_ok());

        let cfg = Config {
            normalize_input: true,
            ..Config::default()
        };
        assert!(Predictor::new(tables, DiacriticSet::new(), cfg).is_err());
    }

    #[test]
    fn predictor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Predictor>();
    }
}
