use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER,
};

use super::{lexer::Lexer, tokens::TokenKind};

pub type RegexHandler = fn(&mut Lexer, usize) -> Result<(), Error>;

/// One entry of the rule table: a pattern anchored at the scan position and
/// the handler run with the length of its match.
#[derive(Clone)]
pub struct RegexPattern {
    name: &'static str,
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    pub fn new(name: &'static str, pattern: &str, handler: RegexHandler) -> Result<Self, regex::Error> {
        Ok(RegexPattern {
            name,
            regex: Regex::new(&format!(r"\A(?:{})", pattern))?,
            handler,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn handler(&self) -> RegexHandler {
        self.handler
    }

    /// Length of the match starting at the beginning of `remainder`, if any.
    pub fn match_len(&self, remainder: &str) -> Option<usize> {
        self.regex.find(remainder).map(|m| m.end()).filter(|len| *len > 0)
    }
}

impl std::fmt::Debug for RegexPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexPattern")
            .field("name", &self.name)
            .field("regex", &self.regex.as_str())
            .finish()
    }
}

/// Ordered rules; earlier entries win ties.
#[derive(Clone, Debug)]
pub struct RuleTable {
    patterns: Vec<RegexPattern>,
}

impl RuleTable {
    pub fn new(patterns: Vec<RegexPattern>) -> Self {
        RuleTable { patterns }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegexPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(RegexPattern::name).collect()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

lazy_static! {
    static ref DEFAULT_RULES: RuleTable = RuleTable::new(vec![
        RegexPattern::new("MAIN", "main", MK_DEFAULT_HANDLER!(TokenKind::Main)).unwrap(),
        RegexPattern::new("INT", "int", MK_DEFAULT_HANDLER!(TokenKind::Int)).unwrap(),
        RegexPattern::new("FLOAT", "float", MK_DEFAULT_HANDLER!(TokenKind::Float)).unwrap(),
        RegexPattern::new("IF", "if", MK_DEFAULT_HANDLER!(TokenKind::If)).unwrap(),
        RegexPattern::new("ELSE", "else", MK_DEFAULT_HANDLER!(TokenKind::Else)).unwrap(),
        RegexPattern::new("WHILE", "while", MK_DEFAULT_HANDLER!(TokenKind::While)).unwrap(),
        RegexPattern::new("FOR", "for", MK_DEFAULT_HANDLER!(TokenKind::For)).unwrap(),
        RegexPattern::new("READ", "read", MK_DEFAULT_HANDLER!(TokenKind::Read)).unwrap(),
        RegexPattern::new("PRINT", "print", MK_DEFAULT_HANDLER!(TokenKind::Print)).unwrap(),
        RegexPattern::new("LBRACKET", r"\(", MK_DEFAULT_HANDLER!(TokenKind::LBracket)).unwrap(),
        RegexPattern::new("RBRACKET", r"\)", MK_DEFAULT_HANDLER!(TokenKind::RBracket)).unwrap(),
        RegexPattern::new("LBRACE", r"\{", MK_DEFAULT_HANDLER!(TokenKind::LBrace)).unwrap(),
        RegexPattern::new("RBRACE", r"\}", MK_DEFAULT_HANDLER!(TokenKind::RBrace)).unwrap(),
        RegexPattern::new("COMMA", ",", MK_DEFAULT_HANDLER!(TokenKind::Comma)).unwrap(),
        RegexPattern::new("PCOMMA", ";", MK_DEFAULT_HANDLER!(TokenKind::PComma)).unwrap(),
        RegexPattern::new("EQ", "==", MK_DEFAULT_HANDLER!(TokenKind::Eq)).unwrap(),
        RegexPattern::new("NE", "!=", MK_DEFAULT_HANDLER!(TokenKind::Ne)).unwrap(),
        RegexPattern::new("LE", "<=", MK_DEFAULT_HANDLER!(TokenKind::Le)).unwrap(),
        RegexPattern::new("GE", ">=", MK_DEFAULT_HANDLER!(TokenKind::Ge)).unwrap(),
        RegexPattern::new("OR", r"\|\|", MK_DEFAULT_HANDLER!(TokenKind::Or)).unwrap(),
        RegexPattern::new("AND", "&&", MK_DEFAULT_HANDLER!(TokenKind::And)).unwrap(),
        RegexPattern::new("ATTR", "=", MK_DEFAULT_HANDLER!(TokenKind::Attr)).unwrap(),
        RegexPattern::new("LT", "<", MK_DEFAULT_HANDLER!(TokenKind::Lt)).unwrap(),
        RegexPattern::new("GT", ">", MK_DEFAULT_HANDLER!(TokenKind::Gt)).unwrap(),
        RegexPattern::new("PLUS", r"\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)).unwrap(),
        RegexPattern::new("MINUS", "-", MK_DEFAULT_HANDLER!(TokenKind::Minus)).unwrap(),
        RegexPattern::new("MULT", r"\*", MK_DEFAULT_HANDLER!(TokenKind::Mult)).unwrap(),
        RegexPattern::new("DIV", "/", MK_DEFAULT_HANDLER!(TokenKind::Div)).unwrap(),
        RegexPattern::new("ID", "[a-zA-Z][a-zA-Z0-9_]*", MK_DEFAULT_HANDLER!(TokenKind::Id)).unwrap(),
        RegexPattern::new("FLOAT_CONST", r"[0-9]+\.[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::FloatConst)).unwrap(),
        RegexPattern::new("INTEGER_CONST", "[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::IntegerConst)).unwrap(),
        RegexPattern::new("NEWLINE", r"\n", newline_handler).unwrap(),
        RegexPattern::new("SKIP", r"[ \t]+", skip_handler).unwrap(),
        RegexPattern::new("MISMATCH", ".", mismatch_handler).unwrap(),
    ]);
}

fn newline_handler(lexer: &mut Lexer, len: usize) -> Result<(), Error> {
    lexer.advance_n(len);
    lexer.start_line();
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Result<(), Error> {
    lexer.advance_n(len);
    Ok(())
}

pub(crate) fn mismatch_handler(lexer: &mut Lexer, len: usize) -> Result<(), Error> {
    let line = lexer.line_number();
    Err(Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: lexer.peek(len).to_string(),
            line,
        },
        Position::new(line, lexer.column()),
    ))
}
