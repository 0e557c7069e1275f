use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    Main,
    Int,
    Float,
    If,
    Else,
    While,
    For,
    Read,
    Print,

    LBracket, // (
    RBracket, // )
    LBrace,   // {
    RBrace,   // }
    Comma,
    PComma, // ;

    Eq, // ==
    Ne, // !=
    Le, // <=
    Ge, // >=
    Or,
    And,
    Attr, // =
    Lt,
    Gt,

    Plus,
    Minus,
    Mult,
    Div,

    Id,
    FloatConst,
    IntegerConst,
}

impl TokenKind {
    /// Name used in diagnostic lines and rule tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Main => "MAIN",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Read => "READ",
            TokenKind::Print => "PRINT",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::PComma => "PCOMMA",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NE",
            TokenKind::Le => "LE",
            TokenKind::Ge => "GE",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::Attr => "ATTR",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::Id => "ID",
            TokenKind::FloatConst => "FLOAT_CONST",
            TokenKind::IntegerConst => "INTEGER_CONST",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Main
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Read
                | TokenKind::Print
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

/// Renders the diagnostic line written to reports and echoed to stdout.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token = {}, Lexeme = '{}', Row = {}, Column = {}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

impl Token {
    pub fn diagnostic(&self) -> String {
        self.to_string()
    }
}
