//! Lexer configuration.

use crate::lexer::lexer::MatchPolicy;

/// Number of source lines handed to the scanner at a time.
pub const DEFAULT_BLOCK_LINES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    pub block_lines: usize,
    pub policy: MatchPolicy,
}

impl LexerConfig {
    pub fn new(block_lines: usize, policy: MatchPolicy) -> Self {
        LexerConfig {
            block_lines: block_lines.max(1),
            policy,
        }
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            block_lines: DEFAULT_BLOCK_LINES,
            policy: MatchPolicy::default(),
        }
    }
}
