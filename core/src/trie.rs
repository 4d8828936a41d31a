//! Prefix trie for bounded word completion.

use std::collections::HashMap;

/// A character trie over the lexicon that answers "the first N words, in
/// lexicon order, starting with this prefix" without scanning the lexicon.
///
/// Every node stores the ranks of the first `capacity` words whose path runs
/// through it. An index is only built through `build`, which inserts words in
/// rank order, so each node's list is already sorted and no ranking happens
/// at query time.
///
/// # Example
/// ```
/// use libabugida_core::trie::PrefixIndex;
///
/// let index = PrefixIndex::build(["apple", "application", "apt"], 2);
///
/// assert_eq!(index.ranks_for("ap"), &[0, 1]);
/// assert_eq!(index.ranks_for("apt"), &[2]);
/// assert!(index.ranks_for("b").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    root: IndexNode,
    capacity: usize,
    last_rank: Option<u32>,
}

#[derive(Debug, Clone, Default)]
struct IndexNode {
    children: HashMap<char, Box<IndexNode>>,
    /// Ranks of the first `capacity` words passing through this node.
    ranks: Vec<u32>,
}

impl IndexNode {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            ranks: Vec::new(),
        }
    }
}

impl PrefixIndex {
    fn new(capacity: usize) -> Self {
        Self {
            root: IndexNode::new(),
            capacity,
            last_rank: None,
        }
    }

    /// Build an index over `words`, using their position as rank.
    pub fn build<'a, I>(words: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index = Self::new(capacity);
        for (rank, word) in words.into_iter().enumerate() {
            index.insert(word, rank as u32);
        }
        index
    }

    /// Number of ranks kept per prefix.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Ranks must be strictly increasing across calls. The root is never
    /// filled: an empty prefix matches nothing.
    fn insert(&mut self, word: &str, rank: u32) {
        debug_assert!(
            self.last_rank.map_or(true, |last| rank > last),
            "ranks must be inserted in increasing order"
        );
        self.last_rank = Some(rank);

        let capacity = self.capacity;
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(IndexNode::new()));
            if node.ranks.len() < capacity {
                node.ranks.push(rank);
            }
        }
    }

    /// Ranks of the first `capacity` words starting with `prefix`, in
    /// increasing order. Empty for an empty prefix or no match.
    pub fn ranks_for(&self, prefix: &str) -> &[u32] {
        if prefix.is_empty() {
            return &[];
        }
        let mut node = &self.root;
        for ch in prefix.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_ranks_kept() {
        let index = PrefixIndex::build(["ab", "abc", "abd", "abe", "b"], 2);
        assert_eq!(index.ranks_for("a"), &[0, 1]);
        assert_eq!(index.ranks_for("abd"), &[2]);
        assert_eq!(index.ranks_for("b"), &[4]);
    }

    #[test]
    fn test_node_ranks_follow_word_order() {
        // Later words never displace earlier ones, whatever their spelling.
        let index = PrefixIndex::build(["zb", "za", "ab", "zc"], 2);
        assert_eq!(index.ranks_for("z"), &[0, 1]);
        assert_eq!(index.ranks_for("a"), &[2]);
    }

    #[test]
    fn test_empty_prefix_matches_nothing() {
        let index = PrefixIndex::build(["a", "b"], 5);
        assert!(index.ranks_for("").is_empty());
    }

    #[test]
    fn test_prefix_longer_than_word() {
        let index = PrefixIndex::build(["ab"], 5);
        assert!(index.ranks_for("abc").is_empty());
    }

    #[test]
    fn test_duplicate_words_keep_both_ranks() {
        let index = PrefixIndex::build(["ab", "ab"], 5);
        assert_eq!(index.ranks_for("ab"), &[0, 1]);
    }

    #[test]
    fn test_zero_capacity() {
        let index = PrefixIndex::build(["ab"], 0);
        assert!(index.ranks_for("a").is_empty());
    }

    #[test]
    fn test_unicode_sinhala() {
        let index = PrefixIndex::build(["කතාව", "කරන්න", "ගම"], 5);
        assert_eq!(index.ranks_for("ක"), &[0, 1]);
        assert_eq!(index.ranks_for("කත"), &[0]);
        assert_eq!(index.ranks_for("ග"), &[2]);
    }
}
