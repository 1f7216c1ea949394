//! Check command implementation.
//!
//! Validates an expression and exits non-zero when the scanner reports
//! any diagnostic.

use clap::Args;
use goval_lex::{tokenize, LexSettings};
use goval_util::SourceFile;
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{
    locate_diagnostics, render_diagnostics, LexOptions, LocatedDiagnostic, OutputFormat,
    SourceArgs,
};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{GovaltError, Result};

/// Arguments for the check command.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub options: LexOptions,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    source: &'a str,
    diagnostics: Vec<LocatedDiagnostic<'a>>,
}

/// Check command handler.
pub struct CheckCommand {
    file: SourceFile,
    settings: LexSettings,
    format: OutputFormat,
}

impl CheckCommand {
    /// Render the report and return it with the number of problems found.
    pub fn render(&self) -> Result<(String, usize)> {
        let lexed = tokenize(self.file.content(), &self.settings);
        let count = lexed.diagnostics.len();
        debug!(problems = count, "checked {}", self.file.name());

        let out = match self.format {
            OutputFormat::Text if lexed.is_clean() => format!("{}: ok\n", self.file.name()),
            OutputFormat::Text => render_diagnostics(&self.file, &lexed.diagnostics),
            OutputFormat::Json => {
                let report = CheckReport {
                    source: self.file.name(),
                    diagnostics: locate_diagnostics(&self.file, &lexed.diagnostics)?,
                };
                let mut out = serde_json::to_string_pretty(&report)?;
                out.push('\n');
                out
            },
        };
        Ok((out, count))
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = ();

    fn new(args: CheckArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            file: args.source.load()?,
            settings: args.options.apply(config.lexer.clone())?,
            format: args.options.format.unwrap_or(config.output.format),
        })
    }

    fn execute(&self) -> Result<()> {
        let (out, count) = self.render()?;
        print!("{}", out);
        if count > 0 {
            return Err(GovaltError::Diagnostics { count });
        }
        Ok(())
    }

    fn name() -> &'static str {
        "check"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(expression: &str, format: OutputFormat, no_validate: bool) -> CheckCommand {
        let args = CheckArgs {
            source: SourceArgs {
                expression: Some(expression.to_string()),
                file: None,
            },
            options: LexOptions {
                functions: Vec::new(),
                no_validate,
                format: Some(format),
            },
        };
        CheckCommand::new(args, &Config::default()).unwrap()
    }

    #[test]
    fn test_clean_expression() {
        let (out, count) = command("Order.Total >= 100 && region in ('eu')", OutputFormat::Text, false)
            .render()
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(out, "<expr>: ok\n");
    }

    #[test]
    fn test_dirty_expression() {
        let (out, count) = command("[open", OutputFormat::Text, false).render().unwrap();
        assert_eq!(count, 1);
        assert!(out.starts_with("error[E1003]"));
        assert!(out.contains("--> <expr>:1:1"));
    }

    #[test]
    fn test_execute_fails_on_diagnostics() {
        let err = command("'abc", OutputFormat::Text, false).execute().unwrap_err();
        assert!(matches!(err, GovaltError::Diagnostics { count: 1 }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_no_validate_skips_accessor_checks() {
        let (_, count) = command("foo.bar.", OutputFormat::Text, true).render().unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_json_report() {
        let (out, count) = command("x == 0x", OutputFormat::Json, false).render().unwrap();
        assert_eq!(count, 1);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["source"], "<expr>");
        assert_eq!(value["diagnostics"][0]["code"], "E1001");
        assert_eq!(value["diagnostics"][0]["column"], 6);
        assert_eq!(CheckCommand::name(), "check");
    }
}
