//! Lexicon abstraction for libabugida-core
//!
//! An ordered list of known words. The order is the rank: the word list is
//! sorted by descending corpus frequency, so position 0 is the most common
//! word. Nothing re-sorts it at runtime.
//!
//! Public API:
//! - `Lexicon` - ordered storage with text loading and a linear prefix scan
//!
//! Notes:
//! - Matching is exact on code points. Normalization, if any, happens before
//!   words reach the lexicon (see `Tables::normalized`).
//! - `scan_prefix` is the reference behavior; `WordPredictor` answers the
//!   same question through a `PrefixIndex`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Ordered word list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Build a lexicon from words already in rank order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a word with the next (lowest) rank.
    pub fn push<S: Into<String>>(&mut self, word: S) {
        self.words.push(word.into());
    }

    /// Read one word per line. Empty lines are skipped since they can never
    /// match a non-empty prefix; every other line is kept verbatim.
    ///
    /// Lines end at `\n`, `\r\n`, a bare `\r`, or any other Unicode line
    /// boundary (see `is_line_break`).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text).context("read word list")?;
        // "\r\n" splits into two pieces with an empty one between them.
        let words = text
            .split(is_line_break)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Ok(Self { words })
    }

    /// Load a word-per-line text file.
    pub fn load_text<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("open word list {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("load word list {}", path.display()))
    }

    /// Word at a given rank.
    pub fn get(&self, rank: usize) -> Option<&str> {
        self.words.get(rank).map(String::as_str)
    }

    /// Iterate words in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Linear scan: the first `limit` words starting with `prefix`, in rank
    /// order. Empty prefix yields nothing.
    pub fn scan_prefix(&self, prefix: &str, limit: usize) -> Vec<&str> {
        if prefix.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|w| w.starts_with(prefix))
            .take(limit)
            .collect()
    }

    /// Apply `f` to every word, keeping order.
    pub fn map_words<F: FnMut(&str) -> String>(self, mut f: F) -> Self {
        Self {
            words: self.words.iter().map(|w| f(w.as_str())).collect(),
        }
    }

    /// Return the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Return true if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Line boundaries recognised in word lists: LF, VT, FF, CR, the ASCII
/// file/group/record separators, NEL, and the Unicode line and paragraph
/// separators.
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_prefix_keeps_file_order() {
        let lx = Lexicon::from_words(["apple", "application", "apt", "banana"]);
        assert_eq!(lx.scan_prefix("ap", 5), vec!["apple", "application", "apt"]);
        assert_eq!(lx.scan_prefix("ap", 2), vec!["apple", "application"]);
        assert!(lx.scan_prefix("", 5).is_empty());
    }

    #[test]
    fn scan_prefix_is_case_sensitive() {
        let lx = Lexicon::from_words(["Apple", "apple"]);
        assert_eq!(lx.scan_prefix("a", 5), vec!["apple"]);
    }

    #[test]
    fn reader_skips_empty_lines_and_crlf() {
        let data = "මම\r\n\r\nඔබ\nඅපි\n";
        let lx = Lexicon::from_reader(data.as_bytes()).unwrap();
        assert_eq!(lx.len(), 3);
        assert_eq!(lx.get(0), Some("මම"));
        assert_eq!(lx.get(1), Some("ඔබ"));
        assert_eq!(lx.get(2), Some("අපි"));
    }

    #[test]
    fn reader_splits_bare_cr_and_unicode_separators() {
        let lx = Lexicon::from_reader("ab\rac\r".as_bytes()).unwrap();
        assert_eq!(lx.iter().collect::<Vec<_>>(), vec!["ab", "ac"]);

        let lx = Lexicon::from_reader("මම\u{2028}ඔබ\u{85}අපි\u{2029}".as_bytes()).unwrap();
        assert_eq!(lx.iter().collect::<Vec<_>>(), vec!["මම", "ඔබ", "අපි"]);
    }

    #[test]
    fn reader_keeps_spaces_inside_lines() {
        let lx = Lexicon::from_reader(" a \n".as_bytes()).unwrap();
        assert_eq!(lx.get(0), Some(" a "));
    }

    #[test]
    fn load_text_missing_file_fails() {
        let path = std::env::temp_dir().join("libabugida_no_such_words.txt");
        let err = Lexicon::load_text(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("open word list"));
    }

    #[test]
    fn load_text_rejects_invalid_utf8() {
        let path = std::env::temp_dir().join(format!(
            "libabugida_bad_utf8_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, [0x61, 0xff, 0x0a]).unwrap();
        assert!(Lexicon::load_text(&path).is_err());
        let _ = std::fs::remove_file(path);
    }
}
