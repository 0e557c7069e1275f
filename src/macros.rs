//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the rule table and scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a handler that emits a token of one kind
//!
//! These macros reduce boilerplate in the rule table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched source text
/// * `$line` - 1-based line number
/// * `$column` - 0-based column within the line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerConst, "42".to_string(), 1, 4);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr, $column:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
            column: $column,
        }
    };
}

/// Creates a default rule handler for patterns that map to a single kind.
///
/// The generated handler emits a token of `$kind` for the `len` bytes matched
/// at the lexer's current position and advances past them.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("PLUS", r"\+", MK_DEFAULT_HANDLER!(TokenKind::Plus))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut $crate::lexer::lexer::Lexer,
         len: usize|
         -> Result<(), $crate::errors::errors::Error> {
            lexer.emit($kind, len);
            Ok(())
        }
    };
}
