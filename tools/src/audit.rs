use libabugida_core::{DiacriticClassifier, Tables};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Counts and suspicious entries found in a set of tables.
#[derive(Debug, Default, Serialize)]
pub struct TableReport {
    pub words: usize,
    pub duplicate_words: usize,
    pub bigram_keys: usize,
    pub pair_keys: usize,
    /// Bigram keys that are not exactly one character.
    pub odd_bigram_keys: Vec<String>,
    /// Pair keys with fewer than two characters.
    pub short_pair_keys: Vec<String>,
    /// Pair keys starting with a diacritic. The previous base consonant is
    /// never a diacritic, so these can not be reached.
    pub unreachable_pair_keys: Vec<String>,
    /// Keys whose suggestion list is empty.
    pub empty_lists: Vec<String>,
}

impl TableReport {
    /// True when nothing suspicious was found.
    pub fn is_clean(&self) -> bool {
        self.duplicate_words == 0
            && self.odd_bigram_keys.is_empty()
            && self.short_pair_keys.is_empty()
            && self.unreachable_pair_keys.is_empty()
            && self.empty_lists.is_empty()
    }
}

/// Inspect `tables` for entries that can never produce a suggestion.
pub fn audit<C: DiacriticClassifier + ?Sized>(tables: &Tables, diacritics: &C) -> TableReport {
    let mut report = TableReport {
        words: tables.lexicon.len(),
        bigram_keys: tables.bigrams.len(),
        pair_keys: tables.pairs.len(),
        ..TableReport::default()
    };

    let mut seen = HashSet::new();
    for word in tables.lexicon.iter() {
        if !seen.insert(word) {
            report.duplicate_words += 1;
        }
    }

    for key in tables.bigrams.keys() {
        if key.chars().count() != 1 {
            report.odd_bigram_keys.push(key.to_string());
        }
        if tables.bigrams.suggestions(key).is_empty() {
            report.empty_lists.push(key.to_string());
        }
    }

    for key in tables.pairs.keys() {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(first), Some(_)) => {
                if diacritics.is_diacritic(first) {
                    report.unreachable_pair_keys.push(key.to_string());
                }
            }
            _ => report.short_pair_keys.push(key.to_string()),
        }
        if tables.pairs.suggestions(key).is_empty() {
            report.empty_lists.push(key.to_string());
        }
    }

    // HashMap iteration order is arbitrary; keep reports stable.
    report.odd_bigram_keys.sort();
    report.short_pair_keys.sort();
    report.unreachable_pair_keys.sort();
    report.empty_lists.sort();
    report
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "words:        {} ({} duplicates)", self.words, self.duplicate_words)?;
        writeln!(f, "bigram keys:  {}", self.bigram_keys)?;
        writeln!(f, "pair keys:    {}", self.pair_keys)?;
        let lists = [
            ("bigram keys not one character", &self.odd_bigram_keys),
            ("pair keys shorter than two characters", &self.short_pair_keys),
            ("pair keys starting with a diacritic", &self.unreachable_pair_keys),
            ("keys with empty suggestion lists", &self.empty_lists),
        ];
        for (label, keys) in lists {
            if !keys.is_empty() {
                writeln!(f, "{}: {}", label, keys.join(", "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libabugida_core::{Lexicon, VowelTable};
    use libsinhala::Sinhala;

    #[test]
    fn clean_tables() {
        let mut bigrams = VowelTable::new();
        bigrams.insert("ක", ["කා"]);
        let mut pairs = VowelTable::new();
        pairs.insert("කත", ["තා"]);
        let tables = Tables::new(Lexicon::from_words(["කතාව"]), bigrams, pairs);
        let report = audit(&tables, &Sinhala);
        assert!(report.is_clean(), "{}", report);
        assert_eq!(report.words, 1);
    }

    #[test]
    fn flags_unreachable_and_odd_keys() {
        let mut bigrams = VowelTable::new();
        bigrams.insert("කත", ["x"]);
        bigrams.insert("ග", Vec::<String>::new());
        let mut pairs = VowelTable::new();
        pairs.insert("ිත", ["x"]);
        pairs.insert("ක", ["x"]);
        let tables = Tables::new(Lexicon::from_words(["a", "a", "b"]), bigrams, pairs);

        let report = audit(&tables, &Sinhala);
        assert!(!report.is_clean());
        assert_eq!(report.duplicate_words, 1);
        assert_eq!(report.odd_bigram_keys, vec!["කත"]);
        assert_eq!(report.empty_lists, vec!["ග"]);
        assert_eq!(report.unreachable_pair_keys, vec!["ිත"]);
        assert_eq!(report.short_pair_keys, vec!["ක"]);
        assert!(report.to_string().contains("pair keys starting with a diacritic: ිත"));
    }
}
