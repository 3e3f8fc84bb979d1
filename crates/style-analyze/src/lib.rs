pub mod accumulator;
pub mod tokenize;
pub mod vocabulary;
pub mod worker;

pub use accumulator::{Accumulator, Analysis};
pub use tokenize::{tokenize, Tokenizer};
pub use vocabulary::VocabularyIndex;
pub use worker::{open_input, AnalyzeEngine};
