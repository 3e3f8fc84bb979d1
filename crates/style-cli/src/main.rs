use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{warn, Level};

use style_analyze::{open_input, AnalyzeEngine};
use style_core::{AnalysisConfig, Result, StyleError};
use style_report::{write_text, StyleReport};

/// Report written next to the working directory on every run.
const OUTPUT_FILE: &str = "analysis_result.txt";

#[derive(Parser, Debug)]
#[command(
    name = "style-analyzer",
    version,
    about = "Word, sentence and style statistics for a text file"
)]
struct Cli {
    /// Text file to analyze; prompted for on stdin when omitted
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(error = %format!("{e:#}"), "run failed");
            println!("{}", user_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let input = match cli.file {
        Some(path) => path,
        None => prompt_for_path(io::stdin().lock(), io::stdout().lock())?,
    };

    let engine = AnalyzeEngine::new(AnalysisConfig::default())?;
    generate_report(&engine, &input, Path::new(OUTPUT_FILE))?;
    println!("Check your results in the analysis file");
    Ok(())
}

/// Ask for the input path and read the first whitespace-delimited token.
fn prompt_for_path<R: BufRead, W: Write>(mut input: R, mut output: W) -> anyhow::Result<PathBuf> {
    writeln!(output, "Please enter the name of the file with the text to analyze: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("reading file name from stdin")?;
    match line.split_whitespace().next() {
        Some(name) => Ok(PathBuf::from(name)),
        None => bail!("no file name given"),
    }
}

/// Analyze `input` and write the rendered report to `output`.
///
/// The input is opened before the output is created, so an unreadable input
/// never leaves an empty report behind.
fn generate_report(engine: &AnalyzeEngine, input: &Path, output: &Path) -> Result<StyleReport> {
    let source = open_input(input)?;
    let sink = File::create(output).map_err(|source| StyleError::OutputUnwritable {
        path: output.to_path_buf(),
        source,
    })?;

    let analysis = engine.analyze_reader(source)?;
    let report = StyleReport::build(&input.display().to_string(), &analysis, engine.config());
    write_text(&report, BufWriter::new(sink))?;
    Ok(report)
}

/// Console line shown for a failed run.
fn user_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<StyleError>() {
        Some(StyleError::InputUnavailable { .. }) => "Error: Unable to open file.".to_string(),
        Some(StyleError::OutputUnwritable { .. }) => {
            "Error: Unable to create output file.".to_string()
        }
        _ => format!("Error: {err:#}"),
    }
}
