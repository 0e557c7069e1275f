//! Lexical analysis module.
//!
//! This module contains the tokenizer that turns source text of the small
//! C-like language into a flat stream of tokens. It handles:
//!
//! - The ordered rule table of the fixed lexicon
//! - Rule selection by longest match or by table order
//! - Line and column tracking across blocks of a streamed file
//! - Aborting on characters outside the lexicon

pub mod lexer;
pub mod rules;
pub mod tokenizer;
pub mod tokens;


#[cfg(test)]
mod property_tests;
