//! Analysis engine: drives the tokenizer into the accumulator.
//!
//! [`AnalyzeEngine`] is the primary entry point. Readers are consumed as a
//! single sequential stream. In-memory buffers can alternatively be split at
//! sentence boundaries and analysed chunk by chunk in parallel with rayon;
//! chunk results are merged back in input order, so both paths produce the
//! same [`Analysis`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use style_core::{AnalysisConfig, Result, StyleError};

use crate::accumulator::{Accumulator, Analysis};
use crate::tokenize::{is_terminal, Tokenizer};

// ---------------------------------------------------------------------------
// AnalyzeEngine
// ---------------------------------------------------------------------------

/// Deterministic single-pass text analyzer.
pub struct AnalyzeEngine {
    config: AnalysisConfig,
}

impl AnalyzeEngine {
    /// Create a new engine, rejecting an invalid configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyse an in-memory string sequentially.
    pub fn analyze_str(&self, text: &str) -> Analysis {
        self.analyze_bytes(text.as_bytes())
    }

    /// Analyse an in-memory byte buffer sequentially.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Analysis {
        let mut acc = Accumulator::new(&self.config);
        acc.extend(Tokenizer::new(bytes.iter().copied()));
        acc.finalize()
    }

    /// Stream `reader` to exhaustion through the tokenizer.
    ///
    /// A read error aborts the pass; nothing partial is returned.
    #[tracing::instrument(skip_all)]
    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<Analysis> {
        let mut acc = Accumulator::new(&self.config);
        let mut read_error = None;
        {
            let bytes = BufReader::new(reader).bytes().map_while(|b| match b {
                Ok(byte) => Some(byte),
                Err(e) => {
                    read_error = Some(e);
                    None
                }
            });
            acc.extend(Tokenizer::new(bytes));
        }
        if let Some(e) = read_error {
            return Err(StyleError::Io(e));
        }

        let analysis = acc.finalize();
        debug!(
            words = analysis.state.total_words,
            sentences = analysis.state.sentences,
            unique = analysis.state.unique_qualifying_words,
            "analysis pass complete"
        );
        Ok(analysis)
    }

    /// Analyse an in-memory buffer in parallel chunks.
    ///
    /// # Steps
    /// 1. Split the buffer right after terminal punctuation so no word or
    ///    sentence crosses a chunk edge.
    /// 2. Tokenize and accumulate each chunk on the rayon pool.
    /// 3. Restore chunk order and merge serially into one accumulator.
    #[tracing::instrument(skip_all, fields(bytes = bytes.len()))]
    pub fn analyze_parallel(&self, bytes: &[u8]) -> Analysis {
        let chunks = split_chunks(bytes, self.config.parallel_chunk_bytes);
        debug!(chunks = chunks.len(), "split input");

        let mut partials: Vec<(usize, Analysis)> = chunks
            .par_iter()
            .enumerate()
            .map(|(idx, chunk)| (idx, self.analyze_bytes(chunk)))
            .collect();
        partials.sort_by_key(|(i, _)| *i);

        let mut acc = Accumulator::new(&self.config);
        for (_, partial) in partials {
            acc.absorb(partial);
        }
        acc.finalize()
    }
}

impl Default for AnalyzeEngine {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }
}

/// Open the text file at `path` for [`AnalyzeEngine::analyze_reader`].
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| StyleError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Split `bytes` into chunks of at least `target` bytes (except the last),
/// each ending immediately after a terminal punctuation byte.
///
/// Input with no terminal punctuation past the target stays in one chunk.
pub fn split_chunks(bytes: &[u8], target: usize) -> Vec<&[u8]> {
    let target = target.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < bytes.len() {
        let search_from = (start + target).min(bytes.len());
        let end = match bytes[search_from..].iter().position(|b| is_terminal(*b)) {
            Some(offset) => search_from + offset + 1,
            None => bytes.len(),
        };
        chunks.push(&bytes[start..end]);
        start = end;
    }

    chunks
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::*;

    const ANIMALS: &str = "Elephant elephant giraffe. Elephant zebra giraffe!";

    fn long_text() -> String {
        let sentences = [
            "The quick brown fox jumps over the lazy sleeping dog.",
            "Rivers carry sediment toward distant estuaries!",
            "Would anyone really notice another paragraph?",
            "Numbers like 2024 and route66 count as words",
        ];
        (0..200)
            .map(|i| sentences[i % sentences.len()])
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn analyze_str_matches_example() {
        let a = AnalyzeEngine::default().analyze_str(ANIMALS);
        assert_eq!(a.state.total_words, 6);
        assert_eq!(a.state.unique_qualifying_words, 3);
        assert_eq!(a.vocabulary.count("elephant"), 3);
    }

    #[test]
    fn reader_and_buffer_agree() {
        let engine = AnalyzeEngine::default();
        let text = long_text();
        let streamed = engine.analyze_reader(text.as_bytes()).expect("read");
        assert_eq!(streamed, engine.analyze_str(&text));
    }

    #[test]
    fn parallel_matches_sequential() {
        let engine = AnalyzeEngine::new(AnalysisConfig {
            parallel_chunk_bytes: 64,
            ..Default::default()
        })
        .expect("valid config");
        let text = long_text();
        assert!(split_chunks(text.as_bytes(), 64).len() > 1);
        assert_eq!(engine.analyze_parallel(text.as_bytes()), engine.analyze_str(&text));
    }

    #[test]
    fn parallel_on_empty_input() {
        let a = AnalyzeEngine::default().analyze_parallel(b"");
        assert_eq!(a, Analysis::default());
    }

    #[test]
    fn split_chunks_cut_after_terminals() {
        let text = b"one two. three four! five six? seven";
        let chunks = split_chunks(text, 4);
        assert_eq!(chunks.concat(), text.to_vec());
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(is_terminal(*chunk.last().unwrap()));
        }
        assert_eq!(*chunks.last().unwrap(), &b" seven"[..]);
    }

    #[test]
    fn split_chunks_without_terminals_is_single() {
        let chunks = split_chunks(b"no punctuation at all", 3);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn open_input_then_stream_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(ANIMALS.as_bytes()).expect("write");
        let input = open_input(file.path()).expect("open");
        let a = AnalyzeEngine::default().analyze_reader(input).expect("analyze");
        assert_eq!(a.state.sentences, 2);
    }

    #[test]
    fn open_input_missing_file_is_input_unavailable() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.txt");
        let err = open_input(&missing).unwrap_err();
        assert!(matches!(err, StyleError::InputUnavailable { .. }));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk gone"))
        }
    }

    #[test]
    fn read_error_is_propagated() {
        let err = AnalyzeEngine::default().analyze_reader(FailingReader).unwrap_err();
        assert!(matches!(err, StyleError::Io(_)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = AnalyzeEngine::new(AnalysisConfig {
            parallel_chunk_bytes: 0,
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
