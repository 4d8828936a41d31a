// core/src/diacritic.rs
//
// Combining mark classification. A diacritic modifies the vowel of the base
// consonant before it and never counts as a consonant itself.

use std::collections::HashSet;

/// Anything that can tell combining marks apart from base characters.
///
/// Language crates implement this for their compile-time mark sets; the core
/// ships `DiacriticSet` for sets built at runtime.
pub trait DiacriticClassifier {
    /// True iff `ch` is a combining mark/sign in this script.
    fn is_diacritic(&self, ch: char) -> bool;
}

/// A runtime set of diacritic characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiacriticSet {
    marks: HashSet<char>,
}

impl DiacriticSet {
    /// Create an empty set (every character is a base character).
    pub fn new() -> Self {
        Self {
            marks: HashSet::new(),
        }
    }

    /// Build a set from the given characters.
    ///
    /// ```
    /// use libabugida_core::{DiacriticClassifier, DiacriticSet};
    ///
    /// let set = DiacriticSet::from_chars(['ි', 'ී']);
    /// assert!(set.is_diacritic('ි'));
    /// assert!(!set.is_diacritic('ක'));
    /// ```
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            marks: chars.into_iter().collect(),
        }
    }

    /// Add more marks to the set.
    pub fn extend<I: IntoIterator<Item = char>>(&mut self, chars: I) {
        self.marks.extend(chars);
    }

    pub fn contains(&self, ch: char) -> bool {
        self.marks.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

impl DiacriticClassifier for DiacriticSet {
    fn is_diacritic(&self, ch: char) -> bool {
        self.contains(ch)
    }
}

impl<C: DiacriticClassifier + ?Sized> DiacriticClassifier for &C {
    fn is_diacritic(&self, ch: char) -> bool {
        (**self).is_diacritic(ch)
    }
}

impl FromIterator<char> for DiacriticSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}
