use std::path::Path;

use tracing::debug;

use crate::{
    buffer::ChunkReader,
    config::LexerConfig,
    errors::errors::Error,
    report::{create_report, report::SUCCESS_MESSAGE},
};

use super::{
    lexer::{scan, MatchPolicy},
    rules::RuleTable,
    tokens::Token,
};

/// Streaming tokenizer that owns its token stream.
///
/// Tokens accumulate across `scan_block` and `get_tokens` calls until
/// `reset` is called, so one instance used on two files returns the tokens of
/// both from the second call.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    rules: RuleTable,
    policy: MatchPolicy,
    block_lines: usize,
    tokens: Vec<Token>,
    line_number: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer::with_config(LexerConfig::default())
    }

    pub fn with_config(config: LexerConfig) -> Self {
        Tokenizer {
            rules: RuleTable::default(),
            policy: config.policy,
            block_lines: config.block_lines.max(1),
            tokens: vec![],
            line_number: 1,
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Line the next block starts on.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn reset(&mut self) {
        self.tokens.clear();
        self.line_number = 1;
    }

    /// Scans one block, appends its tokens to the stream and returns them.
    ///
    /// A failing block leaves the stream and line counter untouched.
    pub fn scan_block(&mut self, text: &str) -> Result<Vec<Token>, Error> {
        let scanned = scan(text, &self.rules, self.policy, self.line_number)?;

        debug!(
            first_line = self.line_number,
            next_line = scanned.next_line,
            tokens = scanned.tokens.len(),
            "scanned block"
        );

        self.line_number = scanned.next_line;
        self.tokens.extend_from_slice(&scanned.tokens);
        Ok(scanned.tokens)
    }

    /// Tokenizes `input` block by block and optionally writes a report to
    /// `output`, echoing it to stdout.
    ///
    /// Returns the whole accumulated stream. If a block or the report fails,
    /// everything this call added is discarded before the error is returned.
    pub fn get_tokens(&mut self, input: &Path, output: Option<&Path>) -> Result<Vec<Token>, Error> {
        let checkpoint = (self.tokens.len(), self.line_number);

        if let Err(error) = self.scan_and_report(input, output) {
            self.tokens.truncate(checkpoint.0);
            self.line_number = checkpoint.1;
            return Err(error);
        }

        Ok(self.tokens.clone())
    }

    fn scan_and_report(&mut self, input: &Path, output: Option<&Path>) -> Result<(), Error> {
        let diagnostics = self.scan_file(input)?;

        if let Some(output) = output {
            create_report(output, diagnostics.as_slice())?;
            println!("{}", SUCCESS_MESSAGE);
        }

        Ok(())
    }

    fn scan_file(&mut self, input: &Path) -> Result<Vec<String>, Error> {
        let mut diagnostics = vec![];

        for block in ChunkReader::stream_with(input, self.block_lines)? {
            let tokens = self.scan_block(&block?)?;
            diagnostics.extend(diagnostics_of(&tokens));
        }

        debug!(path = %input.display(), tokens = self.tokens.len(), "scanned file");
        Ok(diagnostics)
    }
}

/// The report line of every token, in order.
pub fn diagnostics_of(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(Token::diagnostic).collect()
}

/// Tokenizes a file with a fresh tokenizer and the default configuration.
pub fn tokenize_file(path: impl AsRef<Path>) -> Result<Vec<Token>, Error> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.get_tokens(path.as_ref(), None)?;
    Ok(tokenizer.into_tokens())
}
