//! Error types and error handling for the lexer.
//!
//! This module defines the error type shared by every stage:
//!
//! - `LexicalError`: a character no rule accepts
//! - `IOError`: the source cannot be read or the report cannot be written
//! - Error tips and the position used to point at the offending character

pub mod errors;
