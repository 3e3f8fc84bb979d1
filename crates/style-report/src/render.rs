//! Plain-text rendering of a [`StyleReport`].
//!
//! Layout:
//!
//! ```text
//! FILE NAME: <name>
//!
//! STATISTICAL SUMMARY
//! TOTAL NUMBER OF WORDS: <int>
//! ...
//!
//! STYLE WARNINGS
//! <warnings>
//!
//! INDEX OF UNIQUE WORDS
//! <words>
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::report::StyleReport;

/// Significant digits used for averages.
const PRECISION: usize = 6;

impl fmt::Display for StyleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.stats;
        writeln!(f, "FILE NAME: {}", self.file_name)?;
        writeln!(f)?;

        writeln!(f, "STATISTICAL SUMMARY")?;
        writeln!(f, "TOTAL NUMBER OF WORDS: {}", stats.total_words)?;
        writeln!(f, "TOTAL NUMBER OF UNIQUE WORDS: {}", stats.unique_words)?;
        writeln!(
            f,
            "TOTAL NUMBER OF UNIQUE WORDS OF MORE THAN THREE LETTERS: {}",
            stats.unique_words_more_than_three_letters
        )?;
        writeln!(
            f,
            "AVERAGE WORD LENGTH: {} characters",
            format_general(stats.average_word_length)
        )?;
        writeln!(
            f,
            "AVERAGE SENTENCE LENGTH: {} words",
            format_general(stats.average_sentence_length)
        )?;

        writeln!(f)?;
        writeln!(f, "STYLE WARNINGS")?;
        for warning in &self.warnings {
            writeln!(f, "{warning}")?;
        }

        writeln!(f)?;
        writeln!(f, "INDEX OF UNIQUE WORDS")?;
        for word in &self.index {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Render `report` to a string.
pub fn render_text(report: &StyleReport) -> String {
    report.to_string()
}

/// Render `report` into `out`.
pub fn write_text<W: Write>(report: &StyleReport, mut out: W) -> io::Result<()> {
    write!(out, "{report}")?;
    out.flush()
}

/// Format `value` in general notation with six significant digits, trailing
/// zeros trimmed: `3`, `14.3333`, `0.5`, `1e+06`.
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Round to the target precision first; rounding can bump the exponent.
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use style_analyze::AnalyzeEngine;
    use style_core::AnalysisConfig;

    use super::*;

    fn render(text: &str) -> String {
        let analysis = AnalyzeEngine::default().analyze_str(text);
        render_text(&StyleReport::build("animals.txt", &analysis, &AnalysisConfig::default()))
    }

    #[test]
    fn full_report_layout() {
        let expected = "\
FILE NAME: animals.txt

STATISTICAL SUMMARY
TOTAL NUMBER OF WORDS: 6
TOTAL NUMBER OF UNIQUE WORDS: 3
TOTAL NUMBER OF UNIQUE WORDS OF MORE THAN THREE LETTERS: 3
AVERAGE WORD LENGTH: 14.3333 characters
AVERAGE SENTENCE LENGTH: 3 words

STYLE WARNINGS
WARNING: The average word length is greater than 5 characters.
WARNING: The word 'elephant' is used more than 5% of the time.
WARNING: The word 'giraffe' is used more than 5% of the time.
WARNING: The word 'zebra' is used more than 5% of the time.

INDEX OF UNIQUE WORDS
elephant
giraffe
zebra
";
        assert_eq!(render("Elephant elephant giraffe. Elephant zebra giraffe!"), expected);
    }

    #[test]
    fn empty_report_uses_zero_averages() {
        let out = render("");
        assert!(out.contains("AVERAGE WORD LENGTH: 0 characters\n"));
        assert!(out.contains("AVERAGE SENTENCE LENGTH: 0 words\n"));
        assert!(out.ends_with("STYLE WARNINGS\n\nINDEX OF UNIQUE WORDS\n"));
    }

    #[test]
    fn write_text_matches_render_text() {
        let analysis = AnalyzeEngine::default().analyze_str("hello world");
        let report = StyleReport::build("x.txt", &analysis, &AnalysisConfig::default());
        let mut buf = Vec::new();
        write_text(&report, &mut buf).expect("write to vec");
        assert_eq!(String::from_utf8(buf).unwrap(), render_text(&report));
    }

    #[test]
    fn general_format_trims_and_rounds() {
        assert_eq!(format_general(3.0), "3");
        assert_eq!(format_general(43.0 / 3.0), "14.3333");
        assert_eq!(format_general(0.5), "0.5");
        assert_eq!(format_general(6.666666666), "6.66667");
        assert_eq!(format_general(123456.0), "123456");
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(0.0), "0");
    }
}
