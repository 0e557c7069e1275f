//! Property-based tests for the lexer.
//!
//! 1. **Lexemes reconstruct the source** once whitespace and newlines are removed
//! 2. **Every fragment lexes to its kind** under longest match when fragments
//!    are separated by blanks
//! 3. **Lines are non-decreasing** across the token stream
//! 4. **Chunking is transparent** for any block size
//! 5. **Scanning never panics** on arbitrary input

use std::io::Write;

use proptest::prelude::*;

use super::{
    lexer::{scan, tokenize, MatchPolicy},
    rules::RuleTable,
    tokenizer::Tokenizer,
    tokens::TokenKind,
};
use crate::config::LexerConfig;

const FRAGMENTS: &[(&str, TokenKind)] = &[
    ("main", TokenKind::Main),
    ("int", TokenKind::Int),
    ("float", TokenKind::Float),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("read", TokenKind::Read),
    ("print", TokenKind::Print),
    ("(", TokenKind::LBracket),
    (")", TokenKind::RBracket),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    (",", TokenKind::Comma),
    (";", TokenKind::PComma),
    ("==", TokenKind::Eq),
    ("!=", TokenKind::Ne),
    ("<=", TokenKind::Le),
    (">=", TokenKind::Ge),
    ("||", TokenKind::Or),
    ("&&", TokenKind::And),
    ("=", TokenKind::Attr),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Mult),
    ("/", TokenKind::Div),
    ("x", TokenKind::Id),
    ("total_2", TokenKind::Id),
    ("intx", TokenKind::Id),
    ("printer", TokenKind::Id),
    ("3.14", TokenKind::FloatConst),
    ("0.5", TokenKind::FloatConst),
    ("42", TokenKind::IntegerConst),
    ("7", TokenKind::IntegerConst),
];

const SEPARATORS: &[&str] = &[" ", "\t", "\n", "  ", " \n\t"];

fn fragment() -> impl Strategy<Value = (&'static str, TokenKind)> {
    prop::sample::select(FRAGMENTS)
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SEPARATORS)
}

/// Source text built from fragments joined by separators, with the expected kinds.
fn program() -> impl Strategy<Value = (String, Vec<TokenKind>)> {
    prop::collection::vec((fragment(), separator()), 0..60).prop_map(|parts| {
        let mut source = String::new();
        let mut kinds = vec![];
        for ((text, kind), sep) in parts {
            source.push_str(text);
            source.push_str(sep);
            kinds.push(kind);
        }
        (source, kinds)
    })
}

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn lexemes_reconstruct_source((source, _) in program()) {
        let tokens = tokenize(&source).unwrap();
        let joined: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        let stripped: String = source.chars().filter(|c| !matches!(c, ' ' | '\t' | '\n')).collect();
        prop_assert_eq!(joined, stripped);
    }

    #[test]
    fn fragments_lex_to_their_kind((source, kinds) in program()) {
        let tokens = scan(&source, &RuleTable::default(), MatchPolicy::LongestMatch, 1).unwrap().tokens;
        let got: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        prop_assert_eq!(got, kinds);
    }

    #[test]
    fn lines_are_non_decreasing((source, _) in program()) {
        let tokens = tokenize(&source).unwrap();
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
        let newlines = source.matches('\n').count();
        if let Some(last) = tokens.last() {
            prop_assert!(last.line <= newlines + 1);
        }
    }

    #[test]
    fn chunking_is_transparent((source, _) in program(), block_lines in 1usize..12) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(source.as_bytes()).unwrap();
        file.flush().unwrap();

        for policy in [MatchPolicy::FirstMatch, MatchPolicy::LongestMatch] {
            let mut tokenizer = Tokenizer::with_config(LexerConfig::new(block_lines, policy));
            let streamed = tokenizer.get_tokens(file.path(), None).unwrap();

            let whole = scan(&source, &RuleTable::default(), policy, 1).unwrap().tokens;
            prop_assert_eq!(streamed, whole);
        }
    }

    #[test]
    fn scanning_never_panics(input in "\\PC{0,200}") {
        for policy in [MatchPolicy::LongestMatch, MatchPolicy::FirstMatch] {
            let _ = scan(&input, &RuleTable::default(), policy, 1);
        }
    }
}
