//! goval-lex - Lexical Analyzer for govaluate-style Expressions
//!
//! This crate turns expression text such as `[response time] >= 0x1F &&
//! user.Name =~ 'adm.*'` into a stream of positioned tokens for syntax
//! highlighting, validation and parsing.
//!
//! # Overview
//!
//! Scanning is total: every input, however malformed, lexes to a token
//! sequence ending in one end-of-input token. Problems such as an
//! unterminated string are reported as diagnostics through an optional
//! [`goval_util::Emitter`] and never stop the scan.
//!
//! # Example Usage
//!
//! ```
//! use goval_lex::{Lexer, TokenKind};
//! use goval_util::Handler;
//!
//! let source = "foo.Bar >= 10 && [my var] in list";
//! let mut handler = Handler::new();
//! let mut lexer = Lexer::new(source).with_emitter(&mut handler);
//!
//! // Get tokens one at a time
//! let first = lexer.next_token();
//! assert_eq!(first.kind, TokenKind::Accessor);
//! assert_eq!(first.text, "foo.Bar");
//!
//! // Or iterate through the rest
//! for token in &mut lexer {
//!     println!("{:?}", token);
//! }
//! ```
//!
//! For a one-shot scan with settings, see [`tokenize`].
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes
//! - [`settings`] - Scan settings and [`tokenize`]
//!
//! # Token Categories
//!
//! ## Literals
//!
//! - **Numeric**: `42`, `.5`, `0x1F`
//! - **String**: `"text"`, `'text'`, and bracketed parameters `[my var]`
//! - **Boolean**: `true`, `false`
//!
//! ## Identifiers
//!
//! - **Variable**: `foo`, `größe`
//! - **Function**: any name registered with [`Lexer::with_functions`]
//! - **Accessor**: `user.Name` (fields after the first must be exported)
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`, `**`, `++`, `--`
//! - **Bitwise**: `&`, `|`, `^`, `~`, `<<`, `>>`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`, `=~`, `!~`
//! - **Logical**: `&&`, `||`, `!`
//! - **Ternary**: `?`, `:`, `??`
//!
//! ## Separators and Delimiters
//!
//! - **Separator**: `,`, `in`, `IN`
//! - **Grouping**: `()`, `{}`, `]`
//! - **Other**: `;`
//!
//! ## Special
//!
//! - **EOF**: End of input marker
//! - **Unknown**: A single unrecognized character

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod settings;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{keyword_from_ident, Lexer};
pub use settings::{tokenize, LexSettings, Lexed};
pub use token::{
    BinaryOp, Delimiter, LiteralKind, Operator, OperatorClass, PrefixOp, Separator, Token,
    TokenKind,
};
pub use unicode::{is_digit, is_hex_digit, is_ident_continue, is_letter, is_whitespace};
