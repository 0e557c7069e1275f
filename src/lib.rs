#![allow(clippy::module_inception)]

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::errors::errors::{Error, ErrorTip};

pub mod buffer;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

extern crate regex;

pub use config::LexerConfig;
pub use lexer::lexer::{scan, tokenize, MatchPolicy};
pub use lexer::tokenizer::{tokenize_file, Tokenizer};
pub use lexer::tokens::{Token, TokenKind};

/// A location in the source: 1-based line, 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    /// Used for errors that do not point into the source.
    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }

    pub fn is_null(&self) -> bool {
        self.line == 0
    }
}

/// Returns the text of the 1-based `line` of `file` without its newline.
pub fn get_line_at(file: &Path, line: usize) -> Option<String> {
    let content = fs::read_to_string(file).ok()?;

    content
        .split_inclusive('\n')
        .nth(line.checked_sub(1)?)
        .map(|text| text.trim_end_matches(['\n', '\r']).to_string())
}


/// Renders `error` on stderr, with a caret under the offending column when
/// the error points into `file`.
pub fn display_error(error: &Error, file: &Path) {
    let _ = write_error(&mut io::stderr().lock(), error, file);
}

pub fn write_error<W: Write>(out: &mut W, error: &Error, file: &Path) -> io::Result<()> {
    /*
        Error: LexicalError ('@' unexpected on line 20)
        -> program.c
           |
        20 | x = @;
           | ----^
    */

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error)?;
    } else {
        writeln!(
            out,
            "Error: {} ({}): {}",
            error.get_error_name(),
            error,
            error.get_tip()
        )?;
    }

    let position = error.get_position();
    if position.is_null() {
        return Ok(());
    }

    let Some(line_text) = get_line_at(file, position.line) else {
        return Ok(());
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    writeln!(out, "-> {}", file.as_os_str().to_string_lossy())?;
    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    let arrows = position.column.saturating_sub(removed_whitespace) + 1;

    writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
