use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleError};

// ---------------------------------------------------------------------------
// AnalysisConfig
// ---------------------------------------------------------------------------

/// Runtime configuration for an analysis pass and its report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// A word qualifies for the index when its length is strictly greater
    /// than this.
    /// Default: 3.
    pub min_word_len_exclusive: usize,
    /// Average sentence length (in words) above which a warning is emitted.
    /// Default: 10.0.
    pub sentence_length_warning: f64,
    /// Average word length (in characters) above which a warning is emitted.
    /// Default: 5.0.
    pub word_length_warning: f64,
    /// A word is overused when its count exceeds this percentage of the
    /// distinct qualifying word count.
    /// Default: 5.0.
    pub overuse_percent: f64,
    /// Target chunk size in bytes for parallel in-memory analysis.
    /// Default: 64 KiB.
    pub parallel_chunk_bytes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_word_len_exclusive: 3,
            sentence_length_warning: 10.0,
            word_length_warning: 5.0,
            overuse_percent: 5.0,
            parallel_chunk_bytes: 64 * 1024,
        }
    }
}

impl AnalysisConfig {
    /// Reject thresholds that would make the report meaningless.
    pub fn validate(&self) -> Result<()> {
        check_threshold("sentence_length_warning", self.sentence_length_warning)?;
        check_threshold("word_length_warning", self.word_length_warning)?;
        check_threshold("overuse_percent", self.overuse_percent)?;
        if self.parallel_chunk_bytes == 0 {
            return Err(StyleError::InvalidConfig(
                "parallel_chunk_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a word of `len` bytes is indexed.
    pub fn qualifies(&self, len: usize) -> bool {
        len > self.min_word_len_exclusive
    }

    /// Count an entry must strictly exceed to be reported as overused.
    pub fn overuse_threshold(&self, unique_qualifying_words: usize) -> f64 {
        self.overuse_percent / 100.0 * unique_qualifying_words as f64
    }
}

fn check_threshold(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(StyleError::InvalidConfig(format!(
            "{name} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}
