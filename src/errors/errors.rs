use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn source_unreadable(path: impl Display, reason: impl Display) -> Self {
        Error::new(
            ErrorImpl::SourceUnreadable {
                path: path.to_string(),
                reason: reason.to_string(),
            },
            Position::null(),
        )
    }

    pub fn report_unwritable(path: impl Display, reason: impl Display) -> Self {
        Error::new(
            ErrorImpl::ReportUnwritable {
                path: path.to_string(),
                reason: reason.to_string(),
            },
            Position::null(),
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "LexicalError",
            ErrorImpl::SourceUnreadable { .. } => "IOError",
            ErrorImpl::ReportUnwritable { .. } => "IOError",
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnrecognisedCharacter { .. })
    }

    pub fn is_io(&self) -> bool {
        !self.is_lexical()
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character, .. } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the language, remove it",
                character.escape_debug()
            )),
            ErrorImpl::SourceUnreadable { path, .. } => {
                ErrorTip::Suggestion(format!("Check that `{}` exists and is readable", path))
            }
            ErrorImpl::ReportUnwritable { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("'{character}' unexpected on line {line}")]
    UnrecognisedCharacter { character: String, line: usize },
    #[error("cannot read source {path:?}: {reason}")]
    SourceUnreadable { path: String, reason: String },
    #[error("cannot write report {path:?}: {reason}")]
    ReportUnwritable { path: String, reason: String },
}
