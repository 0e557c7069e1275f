use std::{path::PathBuf, process, time::Instant};

use clap::{Parser, ValueEnum};
use minic_lexer::{display_error, LexerConfig, MatchPolicy, Tokenizer};
use tracing_subscriber::EnvFilter;

/// Tokenize a source file of the small C-like language.
#[derive(Parser)]
#[command(name = "minic-lexer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to tokenize.
    #[arg(long, default_value = "program.c")]
    input: PathBuf,

    /// Report file listing every token.
    #[arg(long, default_value = "lexemes_tokens.txt")]
    output: PathBuf,

    /// Tokenize without writing a report.
    #[arg(long)]
    no_report: bool,

    /// Number of source lines scanned at a time.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    block_lines: u32,

    /// How to choose between rules matching at the same position.
    #[arg(long, value_enum, default_value_t = Policy::First)]
    policy: Policy,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// First rule in table order wins.
    First,
    /// Longest match wins, table order breaks ties.
    Longest,
}

impl From<Policy> for MatchPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::First => MatchPolicy::FirstMatch,
            Policy::Longest => MatchPolicy::LongestMatch,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = LexerConfig::new(cli.block_lines as usize, cli.policy.into());
    let mut tokenizer = Tokenizer::with_config(config);

    let start = Instant::now();
    let output = if cli.no_report { None } else { Some(cli.output.as_path()) };

    match tokenizer.get_tokens(&cli.input, output) {
        Ok(tokens) => {
            if cli.no_report {
                let keywords = tokens.iter().filter(|token| token.kind.is_keyword()).count();
                println!("{} tokens ({} keywords)", tokens.len(), keywords);
            }
            tracing::debug!(elapsed = ?start.elapsed(), policy = %config.policy, "tokenized");
        }
        Err(error) => {
            display_error(&error, &cli.input);
            process::exit(1);
        }
    }
}
