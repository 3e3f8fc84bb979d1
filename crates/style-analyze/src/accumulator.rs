//! Statistics accumulator fed by tokenizer events.

use style_core::{AnalysisConfig, AnalysisState, TextEvent};

use crate::vocabulary::VocabularyIndex;

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// The finished product of one pass: frozen totals plus the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub state: AnalysisState,
    pub vocabulary: VocabularyIndex,
}

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Running totals for a single pass.
///
/// [`Accumulator::finalize`] consumes the accumulator, so no event can be
/// recorded after the result has been handed out.
#[derive(Debug)]
pub struct Accumulator {
    config: AnalysisConfig,
    state: AnalysisState,
    vocabulary: VocabularyIndex,
}

impl Accumulator {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            config: config.clone(),
            state: AnalysisState::default(),
            vocabulary: VocabularyIndex::new(),
        }
    }

    /// Record one word. Only words longer than the configured minimum are
    /// indexed and contribute to the length sum.
    pub fn on_word(&mut self, word: &str) {
        self.state.total_words += 1;

        if !self.config.qualifies(word.len()) {
            return;
        }
        self.state.qualifying_words += 1;
        self.state.qualifying_length_sum += word.len();
        if self.vocabulary.insert_or_increment(word) {
            self.state.unique_qualifying_words += 1;
        }
    }

    /// Record a sentence boundary that closed `words_in_sentence` words.
    pub fn on_sentence_end(&mut self, words_in_sentence: usize) {
        self.state.sentences += 1;
        self.state.sentence_length_sum += words_in_sentence;
    }

    pub fn on_event(&mut self, event: TextEvent) {
        match event {
            TextEvent::Word(word) => self.on_word(&word),
            TextEvent::SentenceEnd { words } => self.on_sentence_end(words),
        }
    }

    /// Fold in the finished result of a later, independently analysed chunk.
    ///
    /// Chunks must be absorbed in input order.
    pub fn absorb(&mut self, partial: Analysis) {
        let Analysis { state, vocabulary } = partial;
        self.state.total_words += state.total_words;
        self.state.qualifying_words += state.qualifying_words;
        self.state.qualifying_length_sum += state.qualifying_length_sum;
        self.state.sentences += state.sentences;
        self.state.sentence_length_sum += state.sentence_length_sum;
        self.state.unique_qualifying_words += self.vocabulary.merge(vocabulary);
    }

    pub fn finalize(self) -> Analysis {
        debug_assert_eq!(self.state.unique_qualifying_words, self.vocabulary.len());
        debug_assert!(self.state.total_words >= self.state.qualifying_words);
        Analysis {
            state: self.state,
            vocabulary: self.vocabulary,
        }
    }
}

impl Extend<TextEvent> for Accumulator {
    fn extend<T: IntoIterator<Item = TextEvent>>(&mut self, events: T) {
        for event in events {
            self.on_event(event);
        }
    }
}
