// core/src/word.rs
//
// Bounded prefix completion over the lexicon.

use crate::lexicon::Lexicon;
use crate::trie::PrefixIndex;

/// Word predictor: the first `limit` lexicon words starting with a prefix,
/// in lexicon order.
#[derive(Debug, Clone)]
pub struct WordPredictor {
    lexicon: Lexicon,
    index: PrefixIndex,
}

impl WordPredictor {
    /// Build the prefix index over `lexicon`, keeping `limit` results per prefix.
    pub fn new(lexicon: Lexicon, limit: usize) -> Self {
        let index = PrefixIndex::build(lexicon.iter(), limit);
        tracing::debug!(words = lexicon.len(), limit, "built prefix index");
        Self { lexicon, index }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn limit(&self) -> usize {
        self.index.capacity()
    }

    /// Complete `prefix`. Empty prefix yields no suggestions.
    ///
    /// ```
    /// use libabugida_core::{Lexicon, WordPredictor};
    ///
    /// let lx = Lexicon::from_words(["apple", "application", "apt", "banana"]);
    /// let wp = WordPredictor::new(lx, 5);
    /// assert_eq!(wp.predict("ap"), vec!["apple", "application", "apt"]);
    /// assert!(wp.predict("").is_empty());
    /// ```
    pub fn predict(&self, prefix: &str) -> Vec<String> {
        self.index
            .ranks_for(prefix)
            .iter()
            .filter_map(|&rank| self.lexicon.get(rank as usize))
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn caps_at_limit() {
        let lx = Lexicon::from_words(["ka", "kb", "kc", "kd", "ke", "kf", "kg"]);
        let wp = WordPredictor::new(lx, 5);
        assert_eq!(wp.predict("k"), vec!["ka", "kb", "kc", "kd", "ke"]);
        assert_eq!(wp.limit(), 5);
    }

    #[test]
    fn exact_word_is_its_own_prefix() {
        let lx = Lexicon::from_words(["ගම", "ගමන"]);
        let wp = WordPredictor::new(lx, 5);
        assert_eq!(wp.predict("ගම"), vec!["ගම", "ගමන"]);
        assert_eq!(wp.predict("ගමන"), vec!["ගමන"]);
    }

    #[test]
    fn no_match() {
        let wp = WordPredictor::new(Lexicon::from_words(["abc"]), 5);
        assert!(wp.predict("x").is_empty());
        assert!(wp.predict("abcd").is_empty());
    }

    proptest! {
        #[test]
        fn index_matches_linear_scan(
            words in proptest::collection::vec("[abc]{0,4}", 0..40),
            prefix in "[abc]{0,3}",
            limit in 0usize..8,
        ) {
            let lx = Lexicon::from_words(words);
            let expected: Vec<String> = lx.scan_prefix(&prefix, limit).into_iter().map(String::from).collect();
            let wp = WordPredictor::new(lx, limit);
            let got = wp.predict(&prefix);
            prop_assert!(got.len() <= limit);
            prop_assert!(got.iter().all(|w| w.starts_with(prefix.as_str())));
            prop_assert_eq!(got, expected);
        }
    }
}
