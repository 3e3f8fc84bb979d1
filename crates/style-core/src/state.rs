//! Aggregate counters produced by one analysis pass.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AnalysisState
// ---------------------------------------------------------------------------

/// Running totals maintained by the statistics accumulator.
///
/// Once a pass is finalized this value is handed out by value and never
/// mutated again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisState {
    /// Every word seen, regardless of length.
    pub total_words: usize,
    /// Occurrences of qualifying words (every occurrence, not distinct).
    pub qualifying_words: usize,
    /// Sum of the lengths of every qualifying occurrence.
    pub qualifying_length_sum: usize,
    /// Distinct qualifying words; equals the vocabulary size.
    pub unique_qualifying_words: usize,
    /// Sentence boundaries seen, including the synthetic trailing one.
    pub sentences: usize,
    /// Sum over sentences of the words each one contained.
    pub sentence_length_sum: usize,
}

impl AnalysisState {
    /// Distinct words reported on the "unique words" line.
    ///
    /// Only qualifying words are indexed, so this is the same counter as
    /// [`AnalysisState::unique_words_more_than_three_letters`].
    pub fn unique_words(&self) -> usize {
        self.unique_qualifying_words
    }

    pub fn unique_words_more_than_three_letters(&self) -> usize {
        self.unique_qualifying_words
    }

    /// Qualifying length sum divided by the distinct qualifying count;
    /// `0.0` when nothing qualified.
    ///
    /// The denominator is distinct words, not occurrences, so repeated long
    /// words push this above the per-occurrence mean.
    pub fn average_word_length(&self) -> f64 {
        ratio(self.qualifying_length_sum, self.unique_qualifying_words)
    }

    /// Words per sentence; `0.0` when no sentence was seen.
    pub fn average_sentence_length(&self) -> f64 {
        ratio(self.sentence_length_sum, self.sentences)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
