//! Library crate root re-exporting the profile store, tokenizer and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod command;
pub mod config;
pub mod profile;
pub mod store;
