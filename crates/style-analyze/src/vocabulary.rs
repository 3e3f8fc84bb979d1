//! Ordered, deduplicated word → occurrence-count index.

use std::collections::BTreeMap;

/// Vocabulary of qualifying words, kept in ascending byte order.
///
/// Backed by a [`BTreeMap`], so insertion and lookup are `O(log n)` even on
/// already-sorted input, and in-order traversal is `O(n)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyIndex {
    entries: BTreeMap<String, usize>,
}

impl VocabularyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` with count 1, or bump its count if already present.
    ///
    /// Returns `true` when the word was not in the index before this call.
    pub fn insert_or_increment(&mut self, word: &str) -> bool {
        if let Some(count) = self.entries.get_mut(word) {
            *count += 1;
            return false;
        }
        self.entries.insert(word.to_owned(), 1);
        true
    }

    /// `(word, count)` pairs in ascending lexicographic order.
    ///
    /// Each call starts a fresh traversal.
    pub fn in_order(&self) -> impl ExactSizeIterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Words only, in ascending order.
    pub fn words(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Occurrence count of `word`, or 0 if it was never indexed.
    pub fn count(&self, word: &str) -> usize {
        self.entries.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold `other` into this index, summing counts of shared words.
    ///
    /// Returns how many words were new to this index.
    pub fn merge(&mut self, other: VocabularyIndex) -> usize {
        let mut added = 0;
        for (word, count) in other.entries {
            let slot = self.entries.entry(word).or_insert_with(|| {
                added += 1;
                0
            });
            *slot += count;
        }
        added
    }
}
