//! Token report output.
//!
//! A report is a plain text file: a two line banner with the generation date,
//! then one `Token = ..., Lexeme = ..., Row = ..., Column = ...` line per token.

pub mod report;

pub use report::{create_report, generation_banner, write_report};

#[cfg(test)]
mod tests;
