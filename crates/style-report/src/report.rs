//! Style report types — averages, warnings and the word index derived from
//! a finished [`Analysis`].

use std::fmt;

use serde::{Deserialize, Serialize};

use style_analyze::Analysis;
use style_core::{AnalysisConfig, Result};

// ---------------------------------------------------------------------------
// StyleWarning
// ---------------------------------------------------------------------------

/// One heuristic style warning.
///
/// Thresholds are carried on the warning so the rendered message always
/// names the limit that was actually applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StyleWarning {
    /// Average sentence length exceeded `threshold` words.
    LongSentences { threshold: f64 },
    /// Average word length exceeded `threshold` characters.
    LongWords { threshold: f64 },
    /// `word` occurred more often than `percent` of the distinct word count.
    OverusedWord { word: String, percent: f64 },
}

impl fmt::Display for StyleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleWarning::LongSentences { threshold } => write!(
                f,
                "WARNING: The average sentence length is greater than {threshold} words."
            ),
            StyleWarning::LongWords { threshold } => write!(
                f,
                "WARNING: The average word length is greater than {threshold} characters."
            ),
            StyleWarning::OverusedWord { word, percent } => write!(
                f,
                "WARNING: The word '{word}' is used more than {percent}% of the time."
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// ReportStats
// ---------------------------------------------------------------------------

/// Figures shown in the statistical summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total_words: usize,
    pub unique_words: usize,
    pub unique_words_more_than_three_letters: usize,
    /// Characters per distinct qualifying word; `0.0` when there are none.
    pub average_word_length: f64,
    /// Words per sentence; `0.0` when there are no sentences.
    pub average_sentence_length: f64,
}

// ---------------------------------------------------------------------------
// StyleReport
// ---------------------------------------------------------------------------

/// Everything the plain-text report shows, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleReport {
    pub file_name: String,
    pub stats: ReportStats,
    pub warnings: Vec<StyleWarning>,
    /// Indexed words in ascending order.
    pub index: Vec<String>,
}

impl StyleReport {
    /// Derive averages, warnings and the index listing from `analysis`.
    ///
    /// Warnings are checked independently: sentence length first, then word
    /// length, then one overuse check per index entry in alphabetical order.
    #[tracing::instrument(skip(analysis, config))]
    pub fn build(file_name: &str, analysis: &Analysis, config: &AnalysisConfig) -> StyleReport {
        let state = &analysis.state;
        let average_word_length = state.average_word_length();
        let average_sentence_length = state.average_sentence_length();

        let mut warnings = Vec::new();
        if average_sentence_length > config.sentence_length_warning {
            warnings.push(StyleWarning::LongSentences {
                threshold: config.sentence_length_warning,
            });
        }
        if average_word_length > config.word_length_warning {
            warnings.push(StyleWarning::LongWords {
                threshold: config.word_length_warning,
            });
        }

        let overuse_threshold = config.overuse_threshold(state.unique_qualifying_words);
        warnings.extend(
            analysis
                .vocabulary
                .in_order()
                .filter(|(_, count)| *count as f64 > overuse_threshold)
                .map(|(word, _)| StyleWarning::OverusedWord {
                    word: word.to_string(),
                    percent: config.overuse_percent,
                }),
        );

        tracing::debug!(warnings = warnings.len(), "report derived");

        StyleReport {
            file_name: file_name.to_string(),
            stats: ReportStats {
                total_words: state.total_words,
                unique_words: state.unique_words(),
                unique_words_more_than_three_letters: state.unique_words_more_than_three_letters(),
                average_word_length,
                average_sentence_length,
            },
            warnings,
            index: analysis.vocabulary.words().map(str::to_string).collect(),
        }
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
