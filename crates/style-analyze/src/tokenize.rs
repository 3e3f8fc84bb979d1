//! Streaming word + sentence-boundary tokenizer.
//!
//! Tokenization rules:
//! - A word is a maximal run of ASCII letters and digits, lowercased.
//! - Every other byte separates words and is otherwise discarded.
//! - `.`, `!` and `?` additionally close the current sentence, after the
//!   word they terminate has been emitted.
//! - If input ends with words after the last boundary, a synthetic boundary
//!   closes that trailing sentence.
//!
//! Example:
//!   "Hi, Bob. Go!" →
//!   [hi][bob][end:2][go][end:1]

use std::iter::FusedIterator;
use std::mem;

use style_core::TextEvent;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Lazy tokenizer over any byte source.
///
/// Emits at most two events per input byte and holds at most one in reserve,
/// so memory use is bounded by the longest word.
pub struct Tokenizer<I> {
    bytes: I,
    buffer: String,
    words_in_sentence: usize,
    pending: Option<TextEvent>,
    finished: bool,
}

impl<I: Iterator<Item = u8>> Tokenizer<I> {
    pub fn new<T>(bytes: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            bytes: bytes.into_iter(),
            buffer: String::new(),
            words_in_sentence: 0,
            pending: None,
            finished: false,
        }
    }

    /// Emit the buffered word, if any, counting it toward the open sentence.
    fn flush_word(&mut self) -> Option<TextEvent> {
        if self.buffer.is_empty() {
            return None;
        }
        self.words_in_sentence += 1;
        Some(TextEvent::Word(mem::take(&mut self.buffer)))
    }

    fn close_sentence(&mut self) -> TextEvent {
        TextEvent::SentenceEnd {
            words: mem::replace(&mut self.words_in_sentence, 0),
        }
    }

    /// Return `first`, parking `second` for the next call.
    fn emit(&mut self, first: Option<TextEvent>, second: Option<TextEvent>) -> Option<TextEvent> {
        match first {
            Some(event) => {
                self.pending = second;
                Some(event)
            }
            None => second,
        }
    }
}

impl<I: Iterator<Item = u8>> Iterator for Tokenizer<I> {
    type Item = TextEvent;

    fn next(&mut self) -> Option<TextEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }
        if self.finished {
            return None;
        }

        while let Some(byte) = self.bytes.next() {
            if byte.is_ascii_alphanumeric() {
                self.buffer.push(char::from(byte.to_ascii_lowercase()));
                continue;
            }

            let word = self.flush_word();
            let boundary = is_terminal(byte).then(|| self.close_sentence());
            if word.is_some() || boundary.is_some() {
                return self.emit(word, boundary);
            }
        }

        self.finished = true;
        let word = self.flush_word();
        let trailing = (self.words_in_sentence > 0).then(|| self.close_sentence());
        self.emit(word, trailing)
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for Tokenizer<I> {}

/// Tokenize `text` eagerly into a vector of [`TextEvent`]s.
pub fn tokenize(text: &str) -> Vec<TextEvent> {
    Tokenizer::new(text.bytes()).collect()
}

/// Return `true` if `byte` closes a sentence.
pub fn is_terminal(byte: u8) -> bool {
    matches!(byte, b'.' | b'!' | b'?')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn word(w: &str) -> TextEvent {
        TextEvent::Word(w.to_string())
    }

    fn end(words: usize) -> TextEvent {
        TextEvent::SentenceEnd { words }
    }

    #[test]
    fn words_and_boundaries_in_order() {
        assert_eq!(
            tokenize("Hi, Bob. Go!"),
            vec![word("hi"), word("bob"), end(2), word("go"), end(1)]
        );
    }

    #[test]
    fn uppercase_is_folded() {
        assert_eq!(tokenize("ELEPHANT"), vec![word("elephant"), end(1)]);
    }

    #[test]
    fn digits_are_part_of_words() {
        assert_eq!(tokenize("route66 ok"), vec![word("route66"), word("ok"), end(2)]);
    }

    #[test]
    fn trailing_words_get_synthetic_boundary() {
        assert_eq!(tokenize("hello world"), vec![word("hello"), word("world"), end(2)]);
    }

    #[test]
    fn no_synthetic_boundary_after_terminal() {
        assert_eq!(tokenize("done.  \n"), vec![word("done"), end(1)]);
    }

    #[test]
    fn repeated_terminals_count_empty_sentences() {
        assert_eq!(tokenize("Wait..."), vec![word("wait"), end(1), end(0), end(0)]);
    }

    #[test]
    fn punctuation_only_input() {
        assert_eq!(tokenize("?!"), vec![end(0), end(0)]);
        assert!(tokenize(" , ; - ").is_empty());
    }

    #[test]
    fn empty_string_returns_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn apostrophes_and_hyphens_split_words() {
        assert_eq!(
            tokenize("don't well-known"),
            vec![word("don"), word("t"), word("well"), word("known"), end(4)]
        );
    }

    #[test]
    fn non_ascii_bytes_are_separators() {
        // "é" is two bytes, neither of which is ASCII alphanumeric.
        assert_eq!(tokenize("café bar"), vec![word("caf"), word("bar"), end(2)]);
    }

    #[test]
    fn tokenizer_is_lazy_and_fused() {
        let mut t = Tokenizer::new(b"one. two".iter().copied());
        assert_eq!(t.next(), Some(word("one")));
        assert_eq!(t.next(), Some(end(1)));
        assert_eq!(t.next(), Some(word("two")));
        assert_eq!(t.next(), Some(end(1)));
        assert_eq!(t.next(), None);
        assert_eq!(t.next(), None);
    }

    #[test]
    fn mixed_case_words_fold_to_one_form() {
        assert_eq!(
            tokenize("Giraffe GIRAFFE giRaffe"),
            vec![word("giraffe"), word("giraffe"), word("giraffe"), end(3)]
        );
    }
}
