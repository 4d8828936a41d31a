//! Backward scanning over typed text.
//!
//! All helpers work on `char`s, not bytes, and are total: empty input yields
//! `None` or the empty string instead of panicking.

use crate::diacritic::DiacriticClassifier;

/// Return the rightmost character of `text` that is not a diacritic.
///
/// This is the base consonant of the syllable most recently completed.
/// `None` means there is no previous consonant: `text` is empty or holds
/// nothing but marks (start of word).
///
/// ```
/// use libabugida_core::{last_base_consonant, DiacriticSet};
///
/// let marks = DiacriticSet::from_chars(['ิ', 'ี']);
/// assert_eq!(last_base_consonant("กิ", &marks), Some('ก'));
/// assert_eq!(last_base_consonant("ิี", &marks), None);
/// ```
pub fn last_base_consonant<C: DiacriticClassifier + ?Sized>(
    text: &str,
    classifier: &C,
) -> Option<char> {
    text.chars().rev().find(|&ch| !classifier.is_diacritic(ch))
}

/// Return `text` without its last character. No-op on empty input.
pub fn strip_last_char(text: &str) -> &str {
    match text.char_indices().next_back() {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Return the last character of `text`, if any.
pub fn last_char(text: &str) -> Option<char> {
    text.chars().next_back()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiacriticSet;
    use proptest::prelude::*;

    fn thai() -> DiacriticSet {
        DiacriticSet::from_chars(['ิ', 'ี'])
    }

    #[test]
    fn skips_trailing_marks() {
        assert_eq!(last_base_consonant("กิ", &thai()), Some('ก'));
        assert_eq!(last_base_consonant("กติี", &thai()), Some('ต'));
    }

    #[test]
    fn empty_and_all_marks() {
        assert_eq!(last_base_consonant("", &thai()), None);
        assert_eq!(last_base_consonant("ิีิ", &thai()), None);
    }

    #[test]
    fn strip_last_char_is_char_aware() {
        assert_eq!(strip_last_char("กิต"), "กิ");
        assert_eq!(strip_last_char("ต"), "");
        assert_eq!(strip_last_char(""), "");
        assert_eq!(last_char("กิต"), Some('ต'));
        assert_eq!(last_char(""), None);
    }

    proptest! {
        #[test]
        fn all_mark_text_has_no_base(s in "[ิี]{0,20}") {
            prop_assert_eq!(last_base_consonant(&s, &thai()), None);
        }

        #[test]
        fn result_is_rightmost_non_mark(s in "[กตาิี]{0,20}") {
            let marks = thai();
            match last_base_consonant(&s, &marks) {
                None => prop_assert!(s.chars().all(|c| marks.is_diacritic(c))),
                Some(found) => {
                    prop_assert!(!marks.is_diacritic(found));
                    let idx = s.char_indices().rev().find(|&(_, c)| !marks.is_diacritic(c)).map(|(i, _)| i);
                    let idx = idx.unwrap();
                    prop_assert_eq!(s[idx..].chars().next(), Some(found));
                    prop_assert!(s[idx..].chars().skip(1).all(|c| marks.is_diacritic(c)));
                }
            }
        }
    }
}
