use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use diffkit::areas::engine::DiffEngine;
use diffkit::artifacts::core::OutputWriter;
use diffkit::artifacts::core::config::{
    DEFAULT_EXACT_LCS_MAX_TOKENS, DEFAULT_MAX_WORD_DIFF_CHARS, DiffConfig,
};
use diffkit::commands::porcelain::split::{DEFAULT_SPLIT_WIDTH, SplitOptions};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "diffkit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Inspect unified diffs side by side",
    long_about = "Reads `git diff` output from a file or stdin and renders it as a file \
    summary or as aligned old/new rows with word-level highlighting.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_WORD_DIFF_CHARS,
        help = "Lines longer than this many characters are highlighted as a whole"
    )]
    max_word_chars: usize,
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_EXACT_LCS_MAX_TOKENS,
        help = "Token count up to which word matching is exact"
    )]
    exact_lcs_tokens: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "files",
        about = "List the files in a diff",
        long_about = "This command prints one line per file with its status, path, \
        added and removed line counts, and number of hunks."
    )]
    Files {
        #[arg(index = 1, help = "Diff file to read (stdin when omitted)")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "split",
        about = "Show a diff side by side",
        long_about = "This command prints old and new lines next to each other, pairing \
        deletions with additions and highlighting the words that changed."
    )]
    Split {
        #[arg(index = 1, help = "Diff file to read (stdin when omitted)")]
        path: Option<PathBuf>,
        #[arg(short, long, default_value_t = DEFAULT_SPLIT_WIDTH, help = "Width of the old column")]
        width: usize,
    },
    #[command(
        name = "words",
        about = "Word diff of two strings",
        long_about = "This command compares two strings word by word and marks removed \
        spans as [-..-] and added spans as {+..+}."
    )]
    Words {
        #[arg(index = 1)]
        old: String,
        #[arg(index = 2)]
        new: String,
    },
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read diff from {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read diff from stdin")?;
            Ok(raw)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = DiffConfig::default()
        .with_max_word_diff_chars(cli.max_word_chars)
        .with_exact_lcs_max_tokens(cli.exact_lcs_tokens);
    let engine = DiffEngine::new(config);
    let mut writer = OutputWriter::detect();

    match &cli.command {
        Commands::Files { path } => {
            let diff = engine.parse(&read_input(path.as_ref())?);
            engine.files(&diff, &mut writer)?
        }
        Commands::Split { path, width } => {
            let diff = engine.parse(&read_input(path.as_ref())?);
            engine.split(&diff, &SplitOptions { width: *width }, &mut writer)?
        }
        Commands::Words { old, new } => engine.words(old, new, &mut writer)?,
    }

    writer.finish()
}
