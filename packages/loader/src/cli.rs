//! Command-line interface for the book loader.

use std::path::{Path, PathBuf};

use bookloader_summarizer::{Summarizer, TextRank};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::book::BookLoader;
use crate::config::{load_config, DEFAULT_CONFIG_FILE, TEXT_WRAP_WIDTH};
use crate::error::{BookError, Result};

/// BookLoader - Extract and summarize chapters of a word-processor document.
#[derive(Parser)]
#[command(name = "bookloader")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format of the `chapters` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per chapter with its length and heading
    #[default]
    Text,
    /// Chapters as a JSON array of paragraph arrays
    Json,
    /// Chapters as a YAML sequence of paragraph sequences
    Yaml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the chapters of the configured document.
    Chapters {
        /// Configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the text of a range of chapters.
    Read {
        /// Configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Index of the first chapter (0 is the front matter)
        #[arg(short, long)]
        first: usize,

        /// Index of the last chapter, inclusive (default: the last chapter)
        #[arg(short, long)]
        last: Option<usize>,

        /// Wrap width of the printed text
        #[arg(short, long, default_value_t = TEXT_WRAP_WIDTH)]
        width: usize,
    },

    /// Summarize each chapter of a range.
    Summarize {
        /// Configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Index of the first chapter (0 is the front matter)
        #[arg(short, long)]
        first: usize,

        /// Index of the last chapter, inclusive (default: the last chapter)
        #[arg(short, long)]
        last: Option<usize>,

        /// Number of sentences per summary
        #[arg(short, long, default_value_t = 3)]
        sentences: usize,

        /// Ignore sentences with fewer words than this
        #[arg(long, default_value_t = 0)]
        min_words: usize,

        /// Minimum similarity for two sentences to be linked
        #[arg(long)]
        threshold: Option<f64>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chapters { config, format } => chapters_command(&config, format),
        Commands::Read {
            config,
            first,
            last,
            width,
        } => read_command(&config, first, last, width),
        Commands::Summarize {
            config,
            first,
            last,
            sentences,
            min_words,
            threshold,
        } => summarize_command(&config, first, last, sentences, min_words, threshold),
    }
}

/// Load the configured book behind a spinner.
fn load_book(config_path: &Path) -> Result<BookLoader> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Loading {}...", config_path.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let book = load_config(config_path).and_then(|config| {
        pb.set_message(format!("Reading {}...", config.doc_path.display()));
        BookLoader::from_config(&config)
    });

    pb.finish_and_clear();
    book
}

/// Chapter texts of `first..=last`, or from `first` to the end.
fn chapter_texts(book: &BookLoader, first: usize, last: Option<usize>) -> Result<Vec<String>> {
    match last {
        Some(last) => book.read_chapters(first, last),
        None => book.read_chapters_from(first),
    }
}

/// Reject an inverted range before any file is touched.
fn check_range(first: usize, last: Option<usize>) -> Result<()> {
    match last {
        Some(last) if last < first => Err(BookError::InvalidRange { first, last }),
        _ => Ok(()),
    }
}

/// Execute the chapters command.
fn chapters_command(config_path: &Path, format: OutputFormat) -> Result<()> {
    let book = load_book(config_path)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(book.chapters()).map_err(BookError::Json)?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml_ng::to_string(book.chapters())?);
        }
        OutputFormat::Text => {
            for (index, chapter) in book.chapters().iter().enumerate() {
                println!(
                    "{:>4}  {:>6} paragraphs  {}",
                    style(index).cyan(),
                    chapter.len(),
                    chapter.heading().unwrap_or_default()
                );
            }
            println!();
            println!(
                "{} {}",
                style("Chapters:").green().bold(),
                book.chapters().len().saturating_sub(1)
            );
        }
    }

    Ok(())
}

/// Execute the read command.
fn read_command(config_path: &Path, first: usize, last: Option<usize>, width: usize) -> Result<()> {
    check_range(first, last)?;
    let book = load_book(config_path)?;

    for (index, text) in (first..).zip(chapter_texts(&book, first, last)?) {
        println!("{}", style(format!("Chapter {index}")).bold());
        for paragraph in text.lines() {
            println!("{}", textwrap::fill(paragraph, width));
        }
        println!();
    }

    Ok(())
}

/// Execute the summarize command.
fn summarize_command(
    config_path: &Path,
    first: usize,
    last: Option<usize>,
    sentences: usize,
    min_words: usize,
    threshold: Option<f64>,
) -> Result<()> {
    check_range(first, last)?;
    let book = load_book(config_path)?;

    let mut summarizer = TextRank::default();
    if let Some(threshold) = threshold {
        summarizer = summarizer.with_similarity_threshold(threshold);
    }
    let long_enough = |sentence: &str| sentence.split_whitespace().count() >= min_words;

    for (index, text) in (first..).zip(chapter_texts(&book, first, last)?) {
        let summary = summarizer.summarize(&text, sentences, &long_enough);
        tracing::debug!(chapter = index, lines = summary.lines().count(), "Summarized chapter");

        println!("{}", style(format!("Chapter {index}")).bold());
        for sentence in summary.lines() {
            println!("{}", textwrap::fill(sentence, TEXT_WRAP_WIDTH));
        }
        println!();
    }

    Ok(())
}
