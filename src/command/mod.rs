//! Interactive command-line parsing.
pub mod tokenizer;

pub use tokenizer::tokenize;
