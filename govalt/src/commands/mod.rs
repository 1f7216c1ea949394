//! Command modules for the govalt CLI.
//!
//! Each subcommand lives in its own file and implements [`traits::Command`].

pub mod traits;
pub mod common;

pub mod check;
pub mod lex;

pub use check::{CheckArgs, CheckCommand};
pub use lex::{LexArgs, LexCommand};
