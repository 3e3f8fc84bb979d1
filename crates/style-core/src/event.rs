use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TextEvent
// ---------------------------------------------------------------------------

/// One unit of output from the tokenizer.
///
/// A `Word` carries the already-normalized (ASCII lowercase, alphanumeric
/// only) text. A `SentenceEnd` closes the current sentence and records how
/// many words were seen since the previous boundary or the start of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEvent {
    Word(String),
    SentenceEnd { words: usize },
}
