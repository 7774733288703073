//! `freqsum`: summarize a passage from a file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use freqsum::pipeline::validation::ValidationReport;
use freqsum::{PassageStats, Summarizer, SummarizeError, Summary, SummaryConfig, SummarySpec};

#[derive(Parser, Debug)]
#[command(name = "freqsum", version, about = "Extractive word-frequency summarizer")]
struct Cli {
    /// Passage to summarize. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Number of summary sentences.
    #[arg(short = 'k', long = "sentences")]
    sentences: Option<usize>,

    /// Stopword language (code or name).
    #[arg(long)]
    language: Option<String>,

    /// JSON summary spec.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Also print sentence and word counts.
    #[arg(long)]
    stats: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: &'a Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<PassageStats>,
}

fn setup_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().with_target(true).init();
    } else {
        builder.init();
    }
}

/// Read the spec, apply command-line overrides and validate the result.
fn load_config(cli: &Cli) -> Result<SummaryConfig> {
    let mut spec = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SummarySpec::from_json(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => SummarySpec::default(),
    };
    if let Some(language) = &cli.language {
        spec.language = language.clone();
    }
    if let Some(k) = cli.sentences {
        spec.sentences = k;
    }

    let (cfg, report) = spec.resolve()?;
    for warning in report.warnings() {
        tracing::warn!(%warning, "config warning");
    }
    Ok(cfg)
}

fn read_passage(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = load_config(cli)?;
    freqsum::init(&cfg.language)?;
    let summarizer = Summarizer::from_config(&cfg)?;

    let passage = read_passage(cli.file.as_ref())?;
    let summary = summarizer.summarize_guarded(&passage, cfg.num_sentences)?;
    let stats = if cli.stats {
        Some(summarizer.stats(&passage)?)
    } else {
        None
    };

    if cli.json {
        let out = JsonOutput {
            summary: &summary,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    if let Some(stats) = stats {
        println!("Sentences: {}  Words: {}", stats.sentences, stats.words);
        println!();
    }
    println!("{}", summary.to_numbered_list());
    Ok(())
}

/// Message for the user and exit code: 2 for input or config problems, 1
/// otherwise.
fn report(err: &anyhow::Error) -> (String, u8) {
    if let Some(err) = err.downcast_ref::<SummarizeError>() {
        let mut message = err.to_string();
        if let Some(hint) = err.hint() {
            message.push_str(&format!("\nhint: {hint}"));
        }
        let code = if err.is_validation() { 2 } else { 1 };
        return (message, code);
    }
    if let Some(report) = err.downcast_ref::<ValidationReport>() {
        return (report.to_string(), 2);
    }
    (format!("Error: {err:#}"), 1)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.json_logs);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (message, code) = report(&err);
            eprintln!("{message}");
            ExitCode::from(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freqsum::ErrorCode;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("freqsum").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_input_errors_exit_2() {
        let (message, code) = report(&anyhow::Error::new(SummarizeError::EmptyPassage));
        assert_eq!(code, 2);
        assert_eq!(message, "Please enter some text to summarize.");
    }

    #[test]
    fn test_resource_error_exits_1_with_hint() {
        let err = SummarizeError::ResourceUnavailable {
            resource: "tokenizer".into(),
            language: "en".into(),
        };
        let (message, code) = report(&anyhow::Error::new(err));
        assert_eq!(code, 1);
        assert!(message.starts_with("Language resource missing: tokenizer (en)."));
        assert!(message.ends_with("hint: Please restart the application or call `init` again"));
    }

    #[test]
    fn test_rejected_config_exits_2() {
        let spec = SummarySpec::from_json(r#"{ "v": 1, "sentences": 0 }"#).unwrap();
        let err = anyhow::Error::new(spec.into_config().unwrap_err());
        let (message, code) = report(&err);
        assert_eq!(code, 2);
        assert!(message.starts_with("[INVALID_VALUE] /sentences"));
    }

    #[test]
    fn test_other_errors_exit_1() {
        let err = anyhow::anyhow!("disk on fire").context("failed to read stdin");
        let (message, code) = report(&err);
        assert_eq!(code, 1);
        assert_eq!(message, "Error: failed to read stdin: disk on fire");
    }

    #[test]
    fn test_language_flag_is_validated_like_config() {
        let err = load_config(&cli(&["--language", "klingon"])).unwrap_err();
        let report_err = err.downcast_ref::<ValidationReport>().unwrap();
        let codes: Vec<ErrorCode> = report_err.errors().map(|e| e.code).collect();
        assert_eq!(codes, vec![ErrorCode::UnsupportedLanguage]);
        assert_eq!(report(&err).1, 2);
    }

    #[test]
    fn test_flags_override_config_defaults() {
        let cfg = load_config(&cli(&["-k", "4", "--language", "german"])).unwrap();
        assert_eq!(cfg.num_sentences, 4);
        assert_eq!(cfg.language, "german");

        let err = load_config(&cli(&["-k", "0"])).unwrap_err();
        assert!(err.downcast_ref::<ValidationReport>().is_some());
    }
}
