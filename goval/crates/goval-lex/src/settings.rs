//! Scan settings and the one-shot [`tokenize`] entry point.

use goval_util::{Diagnostic, Handler};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::token::Token;
use crate::Lexer;

/// Settings for a scan session.
///
/// Deserializes from a `[lexer]` style table; missing keys take their
/// defaults.
///
/// # Example
///
/// ```
/// use goval_lex::LexSettings;
///
/// let settings = LexSettings::default().with_function("strlen");
/// assert!(settings.validate);
/// assert!(settings.functions.contains("strlen"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexSettings {
    /// Report lexical diagnostics. When false they are dropped.
    pub validate: bool,

    /// Identifiers that lex as function names.
    pub functions: FxHashSet<String>,
}

impl LexSettings {
    /// Adds a recognized function name.
    pub fn with_function(mut self, name: impl Into<String>) -> Self {
        self.functions.insert(name.into());
        self
    }

    /// Sets whether diagnostics are reported.
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for LexSettings {
    fn default() -> Self {
        Self {
            validate: true,
            functions: FxHashSet::default(),
        }
    }
}

/// Result of [`tokenize`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexed<'src> {
    /// All tokens in source order, ending with exactly one end-of-input token.
    pub tokens: Vec<Token<'src>>,

    /// Diagnostics in the order they were reported.
    pub diagnostics: Vec<Diagnostic>,
}

impl Lexed<'_> {
    /// Returns true if no diagnostics were reported.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Collects every token up to and including end-of-input.
fn drain<'src>(mut lexer: Lexer<'src, '_, '_>) -> Vec<Token<'src>> {
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_eof() {
            return tokens;
        }
    }
}

/// Scans a whole source in one session.
///
/// # Example
///
/// ```
/// use goval_lex::{tokenize, LexSettings};
///
/// let lexed = tokenize("[response time] >= 0x", &LexSettings::default());
/// assert_eq!(lexed.tokens.len(), 4);
/// assert_eq!(lexed.diagnostics[0].message, "hexadecimal digit expected");
/// ```
pub fn tokenize<'src>(source: &'src str, settings: &LexSettings) -> Lexed<'src> {
    let mut handler = Handler::new();
    let lexer = Lexer::new(source).with_functions(&settings.functions);
    let tokens = if settings.validate {
        drain(lexer.with_emitter(&mut handler))
    } else {
        drain(lexer)
    };

    let diagnostics = handler.take_diagnostics();
    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "tokenized expression"
    );
    Lexed { tokens, diagnostics }
}
