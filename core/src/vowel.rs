// core/src/vowel.rs
//
// Vowel-mark prediction. Two tables back it:
// - the bigram table, keyed by a single consonant, used at the start of a word
// - the pair table, keyed by previous base consonant + current consonant
// List order in both tables is the rank; nothing is re-sorted here.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::diacritic::{DiacriticClassifier, DiacriticSet};
use crate::scanner::{last_base_consonant, last_char, strip_last_char};

/// Mapping from a consonant key to its ordered vowel-mark suggestions.
///
/// Serialized as a plain JSON object: `{"ක": ["ා", "ි"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VowelTable {
    entries: HashMap<String, Vec<String>>,
}

impl VowelTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Set the suggestion list for `key`, replacing any previous list.
    pub fn insert<K, I, S>(&mut self, key: K, suggestions: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(key.into(), suggestions.into_iter().map(Into::into).collect());
    }

    /// Suggestions for `key`, or an empty slice when the key is absent.
    pub fn suggestions(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a JSON object of `key -> [suggestion, ...]`.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(content)?;
        table.warn_suspicious_keys();
        Ok(table)
    }

    /// Parse a JSON object from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let table: Self = serde_json::from_reader(reader)?;
        table.warn_suspicious_keys();
        Ok(table)
    }

    /// Load a JSON table file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("open vowel table {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("parse vowel table {}", path.display()))
    }

    /// Apply `f` to every key and suggestion.
    ///
    /// Fails when `f` maps two distinct keys to the same key, since only one
    /// of their lists could be kept.
    pub fn map_strings<F: FnMut(&str) -> String>(self, mut f: F) -> Result<Self> {
        let mut entries = HashMap::with_capacity(self.entries.len());
        // mapped key -> key it came from
        let mut sources: HashMap<String, String> = HashMap::with_capacity(self.entries.len());
        for (k, v) in self.entries {
            let key = f(k.as_str());
            if let Some(other) = sources.get(&key) {
                // Sorted so the message does not depend on iteration order.
                let (first, second) = if *other < k { (other, &k) } else { (&k, other) };
                bail!(
                    "vowel table keys {:?} and {:?} both map to {:?}",
                    first,
                    second,
                    key
                );
            }
            let list = v.iter().map(|s| f(s.as_str())).collect();
            sources.insert(key.clone(), k);
            entries.insert(key, list);
        }
        Ok(Self { entries })
    }

    fn warn_suspicious_keys(&self) {
        if self.entries.contains_key("") {
            tracing::warn!("vowel table has an empty key; it can never be looked up");
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Vec<V>)> for VowelTable {
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

/// Which table answered a vowel query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelTier {
    /// No previous base consonant: single-consonant table.
    Bigram,
    /// Previous base consonant found: consonant-pair table.
    Pair,
}

/// A vowel prediction together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VowelPrediction {
    pub tier: VowelTier,
    /// The key looked up in the chosen table.
    pub key: String,
    /// Base consonant found before the current one, if any.
    pub previous: Option<char>,
    pub suggestions: Vec<String>,
}

/// Two-tier vowel-mark predictor.
#[derive(Debug, Clone)]
pub struct VowelPredictor {
    bigrams: VowelTable,
    pairs: VowelTable,
    diacritics: DiacriticSet,
    pair_limit: usize,
    fallback_limit: usize,
}

impl VowelPredictor {
    /// Create a predictor with the default limit of 10 for both tiers.
    pub fn new(bigrams: VowelTable, pairs: VowelTable, diacritics: DiacriticSet) -> Self {
        Self {
            bigrams,
            pairs,
            diacritics,
            pair_limit: 10,
            fallback_limit: 10,
        }
    }

    /// Override the per-tier result caps.
    pub fn with_limits(mut self, pair_limit: usize, fallback_limit: usize) -> Self {
        self.pair_limit = pair_limit;
        self.fallback_limit = fallback_limit;
        self
    }

    pub fn bigrams(&self) -> &VowelTable {
        &self.bigrams
    }

    pub fn pairs(&self) -> &VowelTable {
        &self.pairs
    }

    pub fn diacritics(&self) -> &DiacriticSet {
        &self.diacritics
    }

    /// Predict vowel marks for the consonant just typed.
    ///
    /// `prefix` is the current word including that consonant. `current` is the
    /// consonant itself; when empty it is taken from the end of `prefix`.
    pub fn predict(&self, prefix: &str, current: &str) -> Vec<String> {
        self.predict_detailed(prefix, current)
            .map(|p| p.suggestions)
            .unwrap_or_default()
    }

    /// Same as `predict`, also reporting the tier and key used.
    /// Returns `None` only for an empty `prefix`.
    pub fn predict_detailed(&self, prefix: &str, current: &str) -> Option<VowelPrediction> {
        if prefix.is_empty() {
            return None;
        }

        // The just-typed consonant must not count as the previous one.
        let base_scope = strip_last_char(prefix);
        let previous = last_base_consonant(base_scope, &self.diacritics);

        let current_cons = if current.is_empty() {
            last_char(prefix).map(String::from).unwrap_or_default()
        } else {
            current.to_string()
        };

        let prediction = match previous {
            None => {
                let suggestions =
                    take_owned(self.bigrams.suggestions(&current_cons), self.fallback_limit);
                VowelPrediction {
                    tier: VowelTier::Bigram,
                    key: current_cons,
                    previous,
                    suggestions,
                }
            }
            Some(prev) => {
                let mut key = String::with_capacity(prev.len_utf8() + current_cons.len());
                key.push(prev);
                key.push_str(&current_cons);
                let suggestions = take_owned(self.pairs.suggestions(&key), self.pair_limit);
                VowelPrediction {
                    tier: VowelTier::Pair,
                    key,
                    previous,
                    suggestions,
                }
            }
        };

        tracing::debug!(
            tier = ?prediction.tier,
            key = %prediction.key,
            hits = prediction.suggestions.len(),
            "vowel prediction"
        );
        Some(prediction)
    }

    /// Whether `ch` is a diacritic for this predictor.
    pub fn is_diacritic(&self, ch: char) -> bool {
        self.diacritics.is_diacritic(ch)
    }
}

fn take_owned(list: &[String], limit: usize) -> Vec<String> {
    list.iter().take(limit).cloned().collect()
}
