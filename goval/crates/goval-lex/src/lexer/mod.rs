//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier, keyword and accessor lexing
//! - `number` - Decimal and hexadecimal literal lexing
//! - `string` - Quoted string and bracketed parameter lexing
//! - `operator` - Operator and punctuation lexing

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
pub use identifier::keyword_from_ident;
