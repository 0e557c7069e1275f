use std::fmt::Display;

use tracing::{trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    rules::{RegexPattern, RuleTable},
    tokens::{Token, TokenKind},
};

/// How the scanner picks a rule when several match at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// The first rule in table order that matches wins, like a regex
    /// alternation. `intx` lexes as `INT` followed by `ID("x")`.
    #[default]
    FirstMatch,
    /// The longest match wins; table order breaks ties. `intx` is one `ID`.
    LongestMatch,
}

impl Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPolicy::LongestMatch => write!(f, "longest"),
            MatchPolicy::FirstMatch => write!(f, "first"),
        }
    }
}

/// Scan state for one block of text.
///
/// Offsets are byte offsets into the block, so columns are relative to the
/// block. Blocks always start on a line boundary, which keeps them equal to
/// whole-file columns.
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line_start: usize,
    line_number: usize,
}

impl Lexer {
    pub fn new(source: String, first_line: usize) -> Lexer {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line_start: 0,
            line_number: first_line,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Records a line break ending at the current position.
    pub fn start_line(&mut self) {
        self.line_start = self.pos;
        self.line_number += 1;
    }

    pub fn emit(&mut self, kind: TokenKind, len: usize) {
        let lexeme = String::from(self.peek(len));
        let token = MK_TOKEN!(kind, lexeme, self.line_number, self.column());
        trace!(%token, "emit");

        self.tokens.push(token);
        self.advance_n(len);
    }

    /// The next `len` bytes of the source.
    pub fn peek(&self, len: usize) -> &str {
        &self.source[self.pos..self.pos + len]
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn column(&self) -> usize {
        self.pos - self.line_start
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn select<'r>(&self, rules: &'r RuleTable, policy: MatchPolicy) -> Option<(&'r RegexPattern, usize)> {
        let remainder = self.remainder();
        let mut best: Option<(&RegexPattern, usize)> = None;

        for pattern in rules.iter() {
            let Some(len) = pattern.match_len(remainder) else {
                continue;
            };

            match policy {
                MatchPolicy::FirstMatch => return Some((pattern, len)),
                MatchPolicy::LongestMatch => {
                    match best {
                        Some((_, best_len)) if best_len >= len => {}
                        _ => best = Some((pattern, len)),
                    }
                }
            }
        }

        best
    }
}

/// Result of scanning one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanned {
    pub tokens: Vec<Token>,
    /// Line number the next block starts on.
    pub next_line: usize,
}

/// Scans `source` starting on line `first_line`.
///
/// Fails on the first character no rule accepts; nothing scanned before it is
/// returned.
pub fn scan(source: &str, rules: &RuleTable, policy: MatchPolicy, first_line: usize) -> Result<Scanned, Error> {
    let mut lex = Lexer::new(String::from(source), first_line);

    while !lex.at_eof() {
        let Some((pattern, len)) = lex.select(rules, policy) else {
            let character = lex.at().map(String::from).unwrap_or_default();
            let line = lex.line_number();
            warn!(%character, line, "no rule matches");
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter { character, line },
                Position::new(line, lex.column()),
            ));
        };

        if let Err(error) = (pattern.handler())(&mut lex, len) {
            warn!(rule = pattern.name(), %error, "scan aborted");
            return Err(error);
        }
    }

    Ok(Scanned {
        tokens: lex.tokens,
        next_line: lex.line_number,
    })
}

/// Tokenizes a complete text with the default rules, starting on line 1.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    scan(source, &RuleTable::default(), MatchPolicy::default(), 1).map(|scanned| scanned.tokens)
}
