//! Chunked source reading.
//!
//! Source files are handed to the tokenizer a few lines at a time so only one
//! block of text is held in memory while scanning.

pub mod buffer;

pub use buffer::ChunkReader;
