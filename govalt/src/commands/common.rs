//! Common types and utilities for govalt commands.
//!
//! This module provides the argument groups shared by `lex` and `check`,
//! source loading, and the merge of CLI flags over configured settings.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use goval_lex::{LexSettings, Token};
use goval_util::{Diagnostic, SourceFile};
use serde::{Deserialize, Serialize};

use crate::error::{GovaltError, Result};

/// Display name used for expressions passed on the command line.
pub const INLINE_SOURCE_NAME: &str = "<expr>";

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

// ============================================================================
// Shared Arguments
// ============================================================================

/// Where the expression comes from. Exactly one must be given.
#[derive(Args, Debug, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Expression to scan
    pub expression: Option<String>,

    /// Read the expression from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl SourceArgs {
    /// Load the expression into a [`SourceFile`].
    pub fn load(&self) -> Result<SourceFile> {
        match (&self.expression, &self.file) {
            (Some(expression), None) => Ok(SourceFile::new(INLINE_SOURCE_NAME, expression.as_str())),
            (None, Some(path)) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    GovaltError::FileOperation(format!("{}: {}", path.display(), e))
                })?;
                Ok(SourceFile::new(path.display().to_string(), content))
            },
            _ => Err(GovaltError::Validation(
                "pass either an expression or --file, not both".to_string(),
            )),
        }
    }
}

/// Lexer options that override the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct LexOptions {
    /// Treat NAME as a function (repeatable)
    #[arg(short = 'F', long = "function", value_name = "NAME")]
    pub functions: Vec<String>,

    /// Skip lexical validation
    #[arg(long)]
    pub no_validate: bool,

    /// Output format (default: from config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl LexOptions {
    /// Merge these options over the configured settings.
    pub fn apply(&self, mut settings: LexSettings) -> Result<LexSettings> {
        for name in &self.functions {
            let name = name.trim();
            if name.is_empty() {
                return Err(GovaltError::Validation("empty function name".to_string()));
            }
            settings.functions.insert(name.to_string());
        }
        if self.no_validate {
            settings.validate = false;
        }
        Ok(settings)
    }
}

// ============================================================================
// Located Reports
// ============================================================================

/// A token with its 1-based line and column.
#[derive(Debug, Serialize)]
pub struct LocatedToken<'a> {
    /// The token.
    #[serde(flatten)]
    pub token: Token<'a>,
    /// Line of the first character.
    pub line: usize,
    /// Column of the first character, in characters.
    pub column: usize,
}

impl<'a> LocatedToken<'a> {
    /// Locate `token` in `file`.
    pub fn new(file: &SourceFile, token: Token<'a>) -> Self {
        let (line, column) = file.offset_to_line_col(token.offset);
        Self {
            token,
            line,
            column,
        }
    }
}

/// A diagnostic with its 1-based line and column.
#[derive(Debug, Serialize)]
pub struct LocatedDiagnostic<'a> {
    /// The diagnostic.
    #[serde(flatten)]
    pub diagnostic: &'a Diagnostic,
    /// Line where the span starts.
    pub line: usize,
    /// Column where the span starts, in characters.
    pub column: usize,
    /// Source text covered by the span.
    pub text: &'a str,
}

/// Locate every diagnostic in `file`.
///
/// Fails if a diagnostic span does not fit the file.
pub fn locate_diagnostics<'a>(
    file: &'a SourceFile,
    diagnostics: &'a [Diagnostic],
) -> Result<Vec<LocatedDiagnostic<'a>>> {
    diagnostics
        .iter()
        .map(|diagnostic| {
            let (line, column) = file.offset_to_line_col(diagnostic.span.start);
            Ok(LocatedDiagnostic {
                diagnostic,
                line,
                column,
                text: file.extract(diagnostic.span)?,
            })
        })
        .collect()
}

/// Render diagnostics as text with source snippets.
pub fn render_diagnostics(file: &SourceFile, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| diagnostic.render(file))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_inline_expression() {
        let args = SourceArgs {
            expression: Some("a > 1".to_string()),
            file: None,
        };
        let file = args.load().unwrap();
        assert_eq!(file.name(), INLINE_SOURCE_NAME);
        assert_eq!(file.content(), "a > 1");
    }

    #[test]
    fn test_load_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "foo.Bar == 'x'").unwrap();
        let args = SourceArgs {
            expression: None,
            file: Some(tmp.path().to_path_buf()),
        };
        let file = args.load().unwrap();
        assert_eq!(file.content(), "foo.Bar == 'x'");
    }

    #[test]
    fn test_load_missing_file() {
        let args = SourceArgs {
            expression: None,
            file: Some(PathBuf::from("/nonexistent/rule.expr")),
        };
        assert!(matches!(args.load(), Err(GovaltError::FileOperation(_))));
    }

    #[test]
    fn test_apply_overrides() {
        let options = LexOptions {
            functions: vec!["max".to_string(), " min ".to_string()],
            no_validate: true,
            format: None,
        };
        let settings = options.apply(LexSettings::default().with_function("now")).unwrap();
        assert!(!settings.validate);
        assert_eq!(settings.functions.len(), 3);
        assert!(settings.functions.contains("min"));
    }

    #[test]
    fn test_apply_rejects_empty_function() {
        let options = LexOptions {
            functions: vec!["  ".to_string()],
            ..LexOptions::default()
        };
        assert!(matches!(
            options.apply(LexSettings::default()),
            Err(GovaltError::Validation(_))
        ));
    }

    #[test]
    fn test_locate_diagnostics() {
        let file = SourceFile::new(INLINE_SOURCE_NAME, "a &&\n  'x");
        let diagnostics = vec![Diagnostic::error("unclosed string literal", goval_util::Span::new(7, 9))];
        let located = locate_diagnostics(&file, &diagnostics).unwrap();
        assert_eq!((located[0].line, located[0].column), (2, 3));
        assert_eq!(located[0].text, "'x");

        let json = serde_json::to_value(&located[0]).unwrap();
        assert_eq!(json["message"], "unclosed string literal");
        assert_eq!(json["line"], 2);
        assert_eq!(json["text"], "'x");
    }

    #[test]
    fn test_locate_diagnostic_outside_file() {
        let file = SourceFile::new(INLINE_SOURCE_NAME, "a");
        let diagnostics = vec![Diagnostic::error("stale", goval_util::Span::new(0, 5))];
        assert!(matches!(
            locate_diagnostics(&file, &diagnostics),
            Err(GovaltError::Source(_))
        ));
    }
}
