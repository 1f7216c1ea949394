//! Lex command implementation.
//!
//! Prints the token stream of an expression, one token per line or as JSON.
//! Diagnostics go to stderr and do not affect the exit status.

use clap::Args;
use goval_lex::{tokenize, LexSettings};
use goval_util::SourceFile;
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{
    locate_diagnostics, render_diagnostics, LexOptions, LocatedDiagnostic, LocatedToken,
    OutputFormat, SourceArgs,
};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Args, Debug, Clone)]
pub struct LexArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub options: LexOptions,
}

/// JSON shape of a lex report.
#[derive(Serialize)]
struct LexReport<'a> {
    source: &'a str,
    tokens: Vec<LocatedToken<'a>>,
    diagnostics: Vec<LocatedDiagnostic<'a>>,
}

/// Lex command handler.
pub struct LexCommand {
    file: SourceFile,
    settings: LexSettings,
    format: OutputFormat,
}

impl LexCommand {
    /// Render the token listing for stdout and the diagnostics for stderr.
    pub fn render(&self) -> Result<(String, String)> {
        let lexed = tokenize(self.file.content(), &self.settings);
        debug!(
            tokens = lexed.tokens.len(),
            diagnostics = lexed.diagnostics.len(),
            "scanned {}",
            self.file.name()
        );

        match self.format {
            OutputFormat::Text => {
                let mut out = String::new();
                for token in &lexed.tokens {
                    let located = LocatedToken::new(&self.file, *token);
                    let position = format!("{}:{}", located.line, located.column);
                    let line = format!("{:<8}{:<12}{}", position, token.kind.as_str(), token.text);
                    out.push_str(line.trim_end());
                    out.push('\n');
                }
                Ok((out, render_diagnostics(&self.file, &lexed.diagnostics)))
            },
            OutputFormat::Json => {
                let report = LexReport {
                    source: self.file.name(),
                    tokens: lexed
                        .tokens
                        .iter()
                        .map(|token| LocatedToken::new(&self.file, *token))
                        .collect(),
                    diagnostics: locate_diagnostics(&self.file, &lexed.diagnostics)?,
                };
                let mut out = serde_json::to_string_pretty(&report)?;
                out.push('\n');
                Ok((out, String::new()))
            },
        }
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = ();

    fn new(args: LexArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            file: args.source.load()?,
            settings: args.options.apply(config.lexer.clone())?,
            format: args.options.format.unwrap_or(config.output.format),
        })
    }

    fn execute(&self) -> Result<()> {
        let (out, err) = self.render()?;
        print!("{}", out);
        if !err.is_empty() {
            eprint!("{}", err);
        }
        Ok(())
    }

    fn name() -> &'static str {
        "lex"
    }
}
